//! Comparison kernels: equality masks and elementwise min/max/clamp
//!
//! Masks are `[bool; N]`, one flag per lane, AND-reduced across dimensions.

use super::{fold2, map2, Kernels};
use crate::element::{Element, Real};
use crate::view::{ScalarsMut, Vectors, VectorsMut};
use num_traits::Float;

#[inline(always)]
fn lane_min<T: PartialOrd>(x: T, y: T) -> T {
    if y < x {
        y
    } else {
        x
    }
}

#[inline(always)]
fn lane_max<T: PartialOrd>(x: T, y: T) -> T {
    if y > x {
        y
    } else {
        x
    }
}

/// Whether any lane of the mask is set
#[inline]
pub fn any<const N: usize>(mask: &[bool; N]) -> bool {
    mask.iter().any(|&m| m)
}

/// Whether every lane of the mask is set
#[inline]
pub fn all<const N: usize>(mask: &[bool; N]) -> bool {
    mask.iter().all(|&m| m)
}

impl<T: Element, const LEN: usize, const N: usize> Kernels<T, LEN, N> {
    /// Lanes where every dimension of `a` equals `b` exactly
    #[inline]
    pub fn eql(a: Vectors<'_, T, LEN, N>, b: Vectors<'_, T, LEN, N>, out: ScalarsMut<'_, bool, N>) {
        fold2(a, b, out, true, |acc, x, y| acc & (x == y));
    }

    /// Elementwise minimum
    #[inline]
    pub fn min(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        map2(a, b, out, lane_min);
    }

    /// Elementwise maximum
    #[inline]
    pub fn max(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        map2(a, b, out, lane_max);
    }

    /// `out = min(hi, max(lo, v))`
    #[inline]
    pub fn clamp(
        v: Vectors<'_, T, LEN, N>,
        lo: Vectors<'_, T, LEN, N>,
        hi: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        for (((xs, los), his), dst) in v.into_iter().zip(lo).zip(hi).zip(out) {
            for (((o, &x), &l), &h) in dst.iter_mut().zip(xs).zip(los).zip(his) {
                *o = lane_min(h, lane_max(l, x));
            }
        }
    }
}

impl<T: Real, const LEN: usize, const N: usize> Kernels<T, LEN, N> {
    /// Lanes where every dimension satisfies `|a - b| <= tolerance`
    ///
    /// Exactly equal values (including equal infinities) always match; NaN
    /// never does. `tolerance` must be non-negative.
    #[inline]
    pub fn approx_eq_abs(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        tolerance: T,
        out: ScalarsMut<'_, bool, N>,
    ) {
        debug_assert!(tolerance >= T::zero(), "absolute tolerance must be non-negative");
        fold2(a, b, out, true, |acc, x, y| {
            acc & (x == y || Float::abs(x - y) <= tolerance)
        });
    }

    /// Lanes where every dimension satisfies `|a - b| <= max(|a|, |b|) * tolerance`
    ///
    /// `tolerance` must be positive.
    #[inline]
    pub fn approx_eq_rel(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        tolerance: T,
        out: ScalarsMut<'_, bool, N>,
    ) {
        debug_assert!(tolerance > T::zero(), "relative tolerance must be positive");
        fold2(a, b, out, true, |acc, x, y| {
            let scale = Float::max(Float::abs(x), Float::abs(y));
            acc & (x == y || Float::abs(x - y) <= scale * tolerance)
        });
    }
}
