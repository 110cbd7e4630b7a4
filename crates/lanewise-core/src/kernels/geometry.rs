//! Geometric kernels for floating point elements

use super::{map1, Kernels};
use crate::element::Real;
use crate::view::{Scalars, ScalarsMut, Vectors, VectorsMut};
use num_traits::Float;

#[inline(always)]
fn sqrt_in_place<T: Real, const N: usize>(lanes: &mut [T; N]) {
    for x in lanes.iter_mut() {
        *x = Float::sqrt(*x);
    }
}

impl<T: Real, const LEN: usize, const N: usize> Kernels<T, LEN, N> {
    /// Euclidean length, `sqrt(lengths_sqrd(v))`
    #[inline]
    pub fn lengths(v: Vectors<'_, T, LEN, N>, out: ScalarsMut<'_, T, N>) {
        Self::lengths_sqrd(v, out);
        sqrt_in_place(out);
    }

    /// Unit vectors; a zero-length vector maps to the zero vector
    #[inline]
    pub fn normalize(v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        let mut len = [T::zero(); N];
        Self::lengths(v, &mut len);
        for (src, dst) in v.into_iter().zip(out) {
            for ((o, &x), &l) in dst.iter_mut().zip(src).zip(&len) {
                *o = if l == T::zero() { T::zero() } else { x / l };
            }
        }
    }

    /// Euclidean distance between `a` and `b`
    #[inline]
    pub fn distances(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: ScalarsMut<'_, T, N>,
    ) {
        Self::distances_sqrd(a, b, out);
        sqrt_in_place(out);
    }

    /// Step `pos` towards `target` by at most `max_dist`
    ///
    /// A lane snaps exactly onto the target when it is already there, or when
    /// `max_dist` is non-negative and the target is within reach. Otherwise it
    /// moves `max_dist` along the direction to the target, which for a
    /// negative `max_dist` means moving away.
    #[inline]
    pub fn move_towards(
        pos: Vectors<'_, T, LEN, N>,
        target: Vectors<'_, T, LEN, N>,
        max_dist: Scalars<'_, T, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        let mut dist = [T::zero(); N];
        Self::distances(target, pos, &mut dist);

        let snap: [bool; N] = std::array::from_fn(|i| {
            dist[i] == T::zero() || (max_dist[i] >= T::zero() && dist[i] <= max_dist[i])
        });

        for ((ps, ts), dst) in pos.into_iter().zip(target).zip(out) {
            for (i, o) in dst.iter_mut().enumerate() {
                *o = if snap[i] {
                    ts[i]
                } else {
                    ps[i] + (ts[i] - ps[i]) / dist[i] * max_dist[i]
                };
            }
        }
    }

    /// Elementwise sine
    #[inline]
    pub fn sin(v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        map1(v, out, <T as Float>::sin);
    }

    /// Elementwise cosine
    #[inline]
    pub fn cos(v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        map1(v, out, <T as Float>::cos);
    }
}
