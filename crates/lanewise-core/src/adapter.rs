//! Element casts and dimension swizzles
//!
//! Casting changes the element type of every lane while keeping the shape.
//! Swizzling keeps the element type and builds a new set of dimensions from
//! selected input dimensions, in any order, repeats allowed.

use crate::element::{ptr_addr, ptr_from_addr, Element};
use crate::error::{Error, Result};
use crate::kernels::map1;
use crate::view::{Slicable, Vectors, VectorsMut};
use num_traits::AsPrimitive;
use std::ptr::NonNull;

/// Lane-level conversion from `Self` to `U`
///
/// Numeric pairs convert like `as`: floats truncate towards zero and saturate
/// at the target's bounds, integers wrap. Nullable pointers convert to and
/// from their address, null being `0`.
pub trait CastElement<U>: Copy {
    /// Convert one lane
    fn cast_elem(self) -> U;
}

macro_rules! impl_cast_numeric {
    (@from $from:ty; $($to:ty),*) => {
        $(
            impl CastElement<$to> for $from {
                #[inline(always)]
                fn cast_elem(self) -> $to {
                    AsPrimitive::<$to>::as_(self)
                }
            }
        )*
    };
    ($($from:ty),*) => {
        $(
            impl_cast_numeric!(@from $from;
                f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
        )*
    };
}

impl_cast_numeric!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_cast_address {
    ($($int:ty),*) => {
        $(
            impl<P: 'static> CastElement<$int> for Option<NonNull<P>> {
                #[inline(always)]
                fn cast_elem(self) -> $int {
                    ptr_addr(self) as $int
                }
            }

            impl<P: 'static> CastElement<Option<NonNull<P>>> for $int {
                #[inline(always)]
                fn cast_elem(self) -> Option<NonNull<P>> {
                    ptr_from_addr(self as usize)
                }
            }
        )*
    };
}

impl_cast_address!(usize, isize, u64);

impl<P: 'static, Q: 'static> CastElement<Option<NonNull<Q>>> for Option<NonNull<P>> {
    #[inline(always)]
    fn cast_elem(self) -> Option<NonNull<Q>> {
        self.map(NonNull::cast)
    }
}

/// Index of one dimension of a vector
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dim(usize);

impl Dim {
    pub const X: Dim = Dim(0);
    pub const Y: Dim = Dim(1);
    pub const Z: Dim = Dim(2);
    pub const W: Dim = Dim(3);

    #[inline]
    pub const fn new(index: usize) -> Self {
        Dim(index)
    }

    /// Selector validated against a dimension count
    pub fn checked(index: usize, len: usize) -> Result<Self> {
        if index < len {
            Ok(Dim(index))
        } else {
            Err(Error::InvalidParameter(format!(
                "dimension {index} out of range for {len}-dimensional vectors"
            )))
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Dim {
    fn from(index: usize) -> Self {
        Dim(index)
    }
}

/// Convert every lane of `v` into `out`
#[inline]
pub fn cast_dims<T, U, const LEN: usize, const N: usize>(
    v: Vectors<'_, T, LEN, N>,
    out: VectorsMut<'_, U, LEN, N>,
) where
    T: CastElement<U>,
{
    map1(v, out, T::cast_elem);
}

/// `out[i] = v[selectors[i]]`
///
/// # Panics
/// If a selector is not below `LEN`.
#[inline]
#[track_caller]
pub fn swizzle_dims<T: Copy, const LEN: usize, const OUT: usize, const N: usize>(
    v: Vectors<'_, T, LEN, N>,
    selectors: [Dim; OUT],
    out: VectorsMut<'_, T, OUT, N>,
) {
    for (sel, dst) in selectors.into_iter().zip(out) {
        assert!(
            sel.index() < LEN,
            "swizzle selector {} out of range for {} dimensions",
            sel.index(),
            LEN
        );
        *dst = *v[sel.index()];
    }
}

impl<T: Element, const LEN: usize, const N: usize> Slicable<T, LEN, N> {
    /// New buffer with every lane converted to `U`
    pub fn cast<U: Element>(&self) -> Slicable<U, LEN, N>
    where
        T: CastElement<U>,
    {
        let mut out = Slicable::zeroed();
        cast_dims(self.view(), out.view_mut());
        out
    }

    /// New buffer built from the selected dimensions
    ///
    /// # Panics
    /// If a selector is not below `LEN`.
    #[track_caller]
    pub fn swizzle<const OUT: usize>(&self, selectors: [Dim; OUT]) -> Slicable<T, OUT, N> {
        let mut out = Slicable::zeroed();
        swizzle_dims(self.view(), selectors, out.view_mut());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_to_int_truncates_and_saturates() {
        let v = Slicable::<f32, 1, 4>::from_dims([[2.9, -2.9, 300.7, f32::NAN]]);
        let out: Slicable<u8, 1, 4> = v.cast();
        assert_eq!(out.dim(0), &[2, 0, 255, 0]);

        let signed: Slicable<i32, 1, 4> = v.cast();
        assert_eq!(signed.dim(0), &[2, -2, 300, 0]);
    }

    #[test]
    fn test_integer_round_trip_through_float() {
        let v = Slicable::<i32, 2, 4>::from_fn(|d, lane| (d as i32 - 1) * 1_000_003 * lane as i32);
        let wide: Slicable<f64, 2, 4> = v.cast();
        let back: Slicable<i32, 2, 4> = wide.cast();
        assert_eq!(back, v);
    }

    #[test]
    fn test_integer_narrowing_wraps() {
        let v = Slicable::<i32, 1, 2>::from_dims([[257, -1]]);
        let out: Slicable<u8, 1, 2> = v.cast();
        assert_eq!(out.dim(0), &[1, 255]);
    }

    #[test]
    fn test_pointer_address_round_trip() {
        let mut values = [0u32; 2];
        let ptrs: [Option<NonNull<u32>>; 2] = [NonNull::new(&mut values[1] as *mut u32), None];
        let mut addrs = [0usize; 2];
        cast_dims([&ptrs], [&mut addrs]);
        assert_eq!(addrs[0], &values[1] as *const u32 as usize);
        assert_eq!(addrs[1], 0);

        let mut back: [Option<NonNull<u32>>; 2] = [None; 2];
        cast_dims([&addrs], [&mut back]);
        assert_eq!(back, ptrs);

        let mut bytes: [Option<NonNull<u8>>; 2] = [None; 2];
        cast_dims([&ptrs], [&mut bytes]);
        assert_eq!(bytes[0].map(|p| p.as_ptr() as usize), Some(addrs[0]));
        assert_eq!(bytes[1], None);
    }

    #[test]
    fn test_swizzle_identity_and_duplicates() {
        let v = Slicable::<i16, 3, 4>::from_fn(|d, lane| (d * 10 + lane) as i16);
        assert_eq!(v.swizzle([Dim::X, Dim::Y, Dim::Z]), v);

        let out = v.swizzle([Dim::Z, Dim::X, Dim::X, Dim::Y]);
        assert_eq!(out.dim(0), v.dim(2));
        assert_eq!(out.dim(1), v.dim(0));
        assert_eq!(out.dim(2), v.dim(0));
        assert_eq!(out.dim(3), v.dim(1));

        let flat = v.swizzle([Dim::new(1)]);
        assert_eq!(flat.lane(3), [13]);
    }

    #[test]
    #[should_panic(expected = "swizzle selector 3 out of range")]
    fn test_swizzle_rejects_out_of_range_selector() {
        let v = Slicable::<f32, 3, 4>::zeroed();
        let _ = v.swizzle([Dim::X, Dim::W]);
    }

    #[test]
    fn test_checked_dim() {
        assert_eq!(Dim::checked(2, 3), Ok(Dim::Z));
        assert!(matches!(Dim::checked(3, 3), Err(Error::InvalidParameter(_))));
        assert_eq!(Dim::from(3), Dim::W);
        assert_eq!(Dim::W.index(), 3);
    }
}
