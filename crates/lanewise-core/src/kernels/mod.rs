//! Kernel set: lane-wise vector operations over one batch
//!
//! `Kernels<T, LEN, N>` is a zero-sized type that groups every batched
//! operation for `LEN`-dimensional vectors of element `T`, `N` lanes at a time.
//! Each operation is an associated function taking [`Vectors`] inputs and
//! writing into [`VectorsMut`]/[`ScalarsMut`] outputs.
//!
//! # Organization
//!
//! - `mod.rs`: operations valid for every [`Element`] (add, sub, copy, access)
//! - `arith`: [`Number`]/[`Signed`] arithmetic and dot products
//! - `compare`: equality, approximate equality, min/max/clamp
//! - `geometry`: [`Real`] lengths, normalization, distances, move-towards
//! - `cross`: cross products, which exist only for `LEN` 2 and 3
//!
//! Operations are bounded on the weakest element tier that gives them a
//! meaning, so `Kernels<u32, 3, N>::normalize` or `Kernels<f32, 4, N>::cross`
//! are compile errors rather than runtime failures.
//!
//! [`Number`]: crate::element::Number
//! [`Signed`]: crate::element::Signed
//! [`Real`]: crate::element::Real

mod arith;
mod compare;
mod cross;
mod geometry;

pub use compare::{all, any};

use crate::adapter::{cast_dims, swizzle_dims, CastElement, Dim};
use crate::element::Element;
use crate::view::{Scalars, ScalarsMut, Vectors, VectorsMut};
use std::marker::PhantomData;

/// Batched operations on `LEN`-dimensional vectors of `T`, `N` lanes per call
#[derive(Clone, Copy, Debug, Default)]
pub struct Kernels<T, const LEN: usize, const N: usize> {
    _element: PhantomData<T>,
}

impl<T, const LEN: usize, const N: usize> Kernels<T, LEN, N> {
    /// Number of vectors processed per call
    pub const VECTORS_PER_OP: usize = N;

    /// Number of dimensions per vector
    pub const DIMENSIONS: usize = LEN;
}

// =============================================================================
// Lane loops shared by every kernel module
// =============================================================================

#[inline(always)]
pub(crate) fn map1<T: Copy, U, const LEN: usize, const N: usize>(
    v: Vectors<'_, T, LEN, N>,
    out: VectorsMut<'_, U, LEN, N>,
    f: impl Fn(T) -> U,
) {
    for (src, dst) in v.into_iter().zip(out) {
        for (o, &x) in dst.iter_mut().zip(src) {
            *o = f(x);
        }
    }
}

#[inline(always)]
pub(crate) fn map2<T: Copy, const LEN: usize, const N: usize>(
    a: Vectors<'_, T, LEN, N>,
    b: Vectors<'_, T, LEN, N>,
    out: VectorsMut<'_, T, LEN, N>,
    f: impl Fn(T, T) -> T,
) {
    for ((xs, ys), dst) in a.into_iter().zip(b).zip(out) {
        for ((o, &x), &y) in dst.iter_mut().zip(xs).zip(ys) {
            *o = f(x, y);
        }
    }
}

/// Every dimension combined with the same per-lane scalar
#[inline(always)]
pub(crate) fn map_scalars<T: Copy, const LEN: usize, const N: usize>(
    v: Vectors<'_, T, LEN, N>,
    s: Scalars<'_, T, N>,
    out: VectorsMut<'_, T, LEN, N>,
    f: impl Fn(T, T) -> T,
) {
    for (src, dst) in v.into_iter().zip(out) {
        for ((o, &x), &k) in dst.iter_mut().zip(src).zip(s) {
            *o = f(x, k);
        }
    }
}

/// Reduce across dimensions into one scalar per lane
#[inline(always)]
pub(crate) fn fold2<T: Copy, R: Copy, const LEN: usize, const N: usize>(
    a: Vectors<'_, T, LEN, N>,
    b: Vectors<'_, T, LEN, N>,
    out: ScalarsMut<'_, R, N>,
    init: R,
    f: impl Fn(R, T, T) -> R,
) {
    *out = [init; N];
    for (xs, ys) in a.into_iter().zip(b) {
        for ((acc, &x), &y) in out.iter_mut().zip(xs).zip(ys) {
            *acc = f(*acc, x, y);
        }
    }
}

// =============================================================================
// Operations valid for every element type
// =============================================================================

impl<T: Element, const LEN: usize, const N: usize> Kernels<T, LEN, N> {
    /// `out = a + b`
    #[inline]
    pub fn add(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        map2(a, b, out, T::elem_add);
    }

    /// `out = a - b`
    #[inline]
    pub fn sub(
        a: Vectors<'_, T, LEN, N>,
        b: Vectors<'_, T, LEN, N>,
        out: VectorsMut<'_, T, LEN, N>,
    ) {
        map2(a, b, out, T::elem_sub);
    }

    /// Copy every dimension of `v` into `out`
    #[inline]
    pub fn copy(v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, T, LEN, N>) {
        for (src, dst) in v.into_iter().zip(out) {
            *dst = *src;
        }
    }

    /// Set every lane of every dimension to `value`
    #[inline]
    pub fn splat(value: T, out: VectorsMut<'_, T, LEN, N>) {
        for dst in out {
            *dst = [value; N];
        }
    }

    /// Set every lane of one dimension to `value`
    #[inline]
    pub fn splat_scalars(value: T, out: ScalarsMut<'_, T, N>) {
        *out = [value; N];
    }

    /// One dimension's lane batch
    ///
    /// # Panics
    /// If `dim >= LEN`.
    #[inline]
    pub fn extract_dim<'a>(v: Vectors<'a, T, LEN, N>, dim: Dim) -> Scalars<'a, T, N> {
        v[dim.index()]
    }

    /// All dimension values of one lane
    ///
    /// # Panics
    /// If `lane >= N`.
    #[inline]
    pub fn extract_elem(v: Vectors<'_, T, LEN, N>, lane: usize) -> [T; LEN] {
        v.map(|dim| dim[lane])
    }

    /// Convert every lane of every dimension to `U`
    #[inline]
    pub fn cast<U: Element>(v: Vectors<'_, T, LEN, N>, out: VectorsMut<'_, U, LEN, N>)
    where
        T: CastElement<U>,
    {
        cast_dims(v, out);
    }

    /// `out[i] = v[selectors[i]]` for an output of any dimension count
    ///
    /// # Panics
    /// If a selector is not below `LEN`.
    #[inline]
    pub fn swizzle<const OUT: usize>(
        v: Vectors<'_, T, LEN, N>,
        selectors: [Dim; OUT],
        out: VectorsMut<'_, T, OUT, N>,
    ) {
        swizzle_dims(v, selectors, out);
    }
}
