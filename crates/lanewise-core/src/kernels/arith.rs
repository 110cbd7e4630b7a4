//! Arithmetic kernels for numeric elements
//!
//! Division by zero is deliberately asymmetric: `div`, `modulo` and `invert`
//! follow the native semantics of `T` (infinity/NaN for floats, a panic for
//! integers) while `div_allow_zero` maps a zero divisor to zero.

use super::{fold2, map1, map2, map_scalars, Kernels};
use crate::element::{Number, Signed};
use crate::view::{Scalars, ScalarsMut, Vectors, VectorsMut};

/// Floored remainder: the result takes the sign of the divisor
#[inline(always)]
fn floored_rem<T: Number>(x: T, y: T) -> T {
    let r = x % y;
    if r != T::zero() && ((r < T::zero()) != (y < T::zero())) {
        r + y
    } else {
        r
    }
}

impl<T: Number, const LEN: usize, const N: usize> Kernels<T, LEN, N> {
    /// `out = a * b`
    #[inline]
    pub fn mul(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        map2(a, b, out, |x, y| x * y);
    }

    /// `out = a / b`, division by zero follows `T`'s native semantics
    #[inline]
    pub fn div(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        map2(a, b, out, |x, y| x / y);
    }

    /// Floored modulo, `out` has the sign of `b`
    #[inline]
    pub fn modulo(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        map2(a, b, out, floored_rem);
    }

    /// `out = a / b`, except lanes whose divisor is exactly zero produce zero
    #[inline]
    pub fn div_allow_zero(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        map2(a, b, out, |x, y| if y == T::zero() { T::zero() } else { x / y });
    }

    /// Multiply every dimension by the lane's scalar
    #[inline]
    pub fn scale(v: Vectors<'_, T, LEN, N>, s: Scalars<'_, T, N>, out: VectorsMut<'_, T, LEN, N>) {
        map_scalars(v, s, out, |x, k| x * k);
    }

    /// `out = 1 / v`, unguarded
    #[inline]
    pub fn invert(v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        map1(v, out, |x| T::one() / x);
    }

    /// `out = v + (w - v) * amount`
    #[inline]
    pub fn lerp(
        v: Vectors<'_, T, LEN, N>,
        w: Vectors<'_, T, LEN, N>,
        amount: Scalars<'_, T, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        for ((xs, ys), dst) in v.into_iter().zip(w).zip(out) {
            for (((o, &x), &y), &t) in dst.iter_mut().zip(xs).zip(ys).zip(amount) {
                *o = x + (y - x) * t;
            }
        }
    }

    /// Sum over dimensions of `a * b`
    #[inline]
    pub fn dots(a: Vectors<'_, T, LEN, N>, b: Vectors<'_, T, LEN, N>, out: ScalarsMut<'_, T, N>) {
        fold2(a, b, out, T::zero(), |acc, x, y| acc + x * y);
    }

    /// Sum over dimensions of `v * v`
    #[inline]
    pub fn lengths_sqrd(v: Vectors<'_, T, LEN, N>, out: ScalarsMut<'_, T, N>) {
        fold2(v, v, out, T::zero(), |acc, x, _| acc + x * x);
    }

    /// Squared Euclidean distance between `a` and `b`
    #[inline]
    pub fn distances_sqrd(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: ScalarsMut<'_, T, N>,
    ) {
        fold2(a, b, out, T::zero(), |acc, x, y| {
            let d = x - y;
            acc + d * d
        });
    }
}

impl<T: Signed, const LEN: usize, const N: usize> Kernels<T, LEN, N> {
    /// `out = -v`
    #[inline]
    pub fn negate(v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        map1(v, out, |x| -x);
    }

    /// `out = |v|`
    #[inline]
    pub fn abs(v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        map1(v, out, |x| num_traits::Signed::abs(&x));
    }
}
