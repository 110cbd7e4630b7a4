//! Batch views over caller-owned struct-of-arrays storage
//!
//! A batch of one dimension is `N` consecutive scalars; a batch of vectors is
//! `LEN` such windows, one per dimension, each independently addressable.
//! Views only reinterpret existing memory at an offset. They never allocate
//! and never own.
//!
//! Inputs are shared borrows and outputs exclusive borrows. The borrow checker
//! therefore guarantees that an output never overlaps an input or another
//! output dimension, which is what lets chained kernels keep intermediates in
//! registers.
//!
//! Out-of-range offsets are caller bugs: `as_in`/`as_out` panic in every build
//! and never clamp. `try_as_in`/`try_as_out` report them as errors instead.

use crate::element::Element;
use crate::error::{Error, Result};

/// One dimension's lane batch, read-only
pub type Scalars<'a, T, const N: usize> = &'a [T; N];

/// One dimension's lane batch, writable
pub type ScalarsMut<'a, T, const N: usize> = &'a mut [T; N];

/// `LEN` read-only lane batches, one per dimension
pub type Vectors<'a, T, const LEN: usize, const N: usize> = [&'a [T; N]; LEN];

/// `LEN` writable lane batches, one per dimension
pub type VectorsMut<'a, T, const LEN: usize, const N: usize> = [&'a mut [T; N]; LEN];

/// Read-only window of `N` elements starting at `offset`
///
/// # Panics
/// If `offset + N > slice.len()`.
#[inline]
#[track_caller]
pub fn as_in<T, const N: usize>(slice: &[T], offset: usize) -> &[T; N] {
    let len = slice.len();
    match slice.get(offset..).and_then(|rest| rest.first_chunk::<N>()) {
        Some(batch) => batch,
        None => panic!("{}", Error::out_of_bounds(offset, N, len)),
    }
}

/// Writable window of `N` elements starting at `offset`
///
/// # Panics
/// If `offset + N > slice.len()`.
#[inline]
#[track_caller]
pub fn as_out<T, const N: usize>(slice: &mut [T], offset: usize) -> &mut [T; N] {
    let len = slice.len();
    match slice.get_mut(offset..).and_then(|rest| rest.first_chunk_mut::<N>()) {
        Some(batch) => batch,
        None => panic!("{}", Error::out_of_bounds(offset, N, len)),
    }
}

/// Checked variant of [`as_in`]
pub fn try_as_in<T, const N: usize>(slice: &[T], offset: usize) -> Result<&[T; N]> {
    let len = slice.len();
    slice
        .get(offset..)
        .and_then(|rest| rest.first_chunk::<N>())
        .ok_or_else(|| Error::out_of_bounds(offset, N, len))
}

/// Checked variant of [`as_out`]
pub fn try_as_out<T, const N: usize>(slice: &mut [T], offset: usize) -> Result<&mut [T; N]> {
    let len = slice.len();
    slice
        .get_mut(offset..)
        .and_then(|rest| rest.first_chunk_mut::<N>())
        .ok_or_else(|| Error::out_of_bounds(offset, N, len))
}

/// Read-only vector batch from one column per dimension
#[inline]
#[track_caller]
pub fn vectors_in<'a, T, const LEN: usize, const N: usize>(
    columns: [&'a [T]; LEN],
    offset: usize,
) -> Vectors<'a, T, LEN, N> {
    columns.map(|column| as_in(column, offset))
}

/// Writable vector batch from one column per dimension
#[inline]
#[track_caller]
pub fn vectors_out<'a, T, const LEN: usize, const N: usize>(
    columns: [&'a mut [T]; LEN],
    offset: usize,
) -> VectorsMut<'a, T, LEN, N> {
    columns.map(|column| as_out(column, offset))
}

/// Owned working set for one batch: `LEN` lane batches of `N` elements
///
/// This is the only buffer type the core creates itself, and it always lives
/// on the stack or inside a caller-owned value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Slicable<T, const LEN: usize, const N: usize> {
    dims: [[T; N]; LEN],
}

// Safety: transparent over a nested array of `T`, so no padding and every bit
// pattern valid for `T` is valid for the whole buffer.
unsafe impl<T: bytemuck::Pod, const LEN: usize, const N: usize> bytemuck::Zeroable
    for Slicable<T, LEN, N>
{
}
unsafe impl<T: bytemuck::Pod, const LEN: usize, const N: usize> bytemuck::Pod
    for Slicable<T, LEN, N>
{
}

impl<T: Copy, const LEN: usize, const N: usize> Slicable<T, LEN, N> {
    /// Every lane of every dimension set to `value`
    #[inline]
    pub fn splat(value: T) -> Self {
        Self {
            dims: [[value; N]; LEN],
        }
    }

    /// Build from a function of `(dimension, lane)`
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            dims: std::array::from_fn(|d| std::array::from_fn(|lane| f(d, lane))),
        }
    }

    /// Wrap per-dimension lane batches
    #[inline]
    pub fn from_dims(dims: [[T; N]; LEN]) -> Self {
        Self { dims }
    }

    /// Unwrap into per-dimension lane batches
    #[inline]
    pub fn into_dims(self) -> [[T; N]; LEN] {
        self.dims
    }

    /// Read-only view of all dimensions
    #[inline]
    pub fn view(&self) -> Vectors<'_, T, LEN, N> {
        self.dims.each_ref()
    }

    /// Writable view of all dimensions
    #[inline]
    pub fn view_mut(&mut self) -> VectorsMut<'_, T, LEN, N> {
        self.dims.each_mut()
    }

    /// One dimension's lane batch
    #[inline]
    pub fn dim(&self, d: usize) -> &[T; N] {
        &self.dims[d]
    }

    /// One dimension's lane batch, writable
    #[inline]
    pub fn dim_mut(&mut self, d: usize) -> &mut [T; N] {
        &mut self.dims[d]
    }

    /// All dimensions of one lane
    #[inline]
    pub fn lane(&self, lane: usize) -> [T; LEN] {
        std::array::from_fn(|d| self.dims[d][lane])
    }
}

impl<T: Element, const LEN: usize, const N: usize> Slicable<T, LEN, N> {
    /// Buffer filled with the element's additive identity
    #[inline]
    pub fn zeroed() -> Self {
        Self::splat(T::ZERO)
    }
}

impl<T: Element, const LEN: usize, const N: usize> Default for Slicable<T, LEN, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: bytemuck::Pod, const LEN: usize, const N: usize> Slicable<T, LEN, N> {
    /// Raw bytes of the buffer, dimension-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl<T, const LEN: usize, const N: usize> From<[[T; N]; LEN]> for Slicable<T, LEN, N> {
    fn from(dims: [[T; N]; LEN]) -> Self {
        Self { dims }
    }
}
