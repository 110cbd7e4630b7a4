//! Element type hierarchy for lane-wise kernels
//!
//! This module defines which scalar types may occupy a lane and which
//! operations each kind of scalar supports.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: Traits only describe capabilities, all
//!   computation lives in the kernel set
//! - **Tiered**: `Element` < `Number` < `Signed` < `Real`, each kernel asks for
//!   the weakest tier it needs, so misuse is a compile error
//! - **Pointers as lanes**: nullable pointers behave like opaque addresses for
//!   add/sub/compare, plain `NonNull` is rejected because it has no zero

use bytemuck::Pod;
use num_traits::{Float, Num};
use std::fmt::Debug;
use std::ptr::NonNull;

/// Broad classification of an element type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// IEEE-754 floating point
    Float,
    /// Two's complement signed integer
    SignedInt,
    /// Unsigned integer
    UnsignedInt,
    /// Nullable pointer, treated as an address
    Pointer,
}

impl ElementKind {
    /// Short lowercase name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Float => "float",
            ElementKind::SignedInt => "signed int",
            ElementKind::UnsignedInt => "unsigned int",
            ElementKind::Pointer => "pointer",
        }
    }
}

/// Base trait for anything that can occupy a lane
pub trait Element: Copy + PartialEq + PartialOrd + Debug + 'static {
    /// Classification of this element type
    const KIND: ElementKind;

    /// Additive identity (`0`, `0.0` or null)
    const ZERO: Self;

    /// Lane addition. Pointers add addresses with wrapping.
    fn elem_add(self, rhs: Self) -> Self;

    /// Lane subtraction. Pointers subtract addresses with wrapping.
    fn elem_sub(self, rhs: Self) -> Self;
}

/// Numeric elements: floats and integers
///
/// Adds multiplication, division and remainder on top of `Element`. Integer
/// overflow and division by zero follow Rust's native semantics.
pub trait Number: Element + Num + Pod {}

impl<T: Element + Num + Pod> Number for T {}

/// Numbers with a sign: floats and signed integers
pub trait Signed: Number + num_traits::Signed {}

impl<T: Number + num_traits::Signed> Signed for T {}

/// Floating point numbers
pub trait Real: Signed + Float {}

impl<T: Signed + Float> Real for T {}

// =============================================================================
// Element implementations for concrete types
// =============================================================================

macro_rules! impl_numeric_element {
    ($kind:ident, $zero:expr; $($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const KIND: ElementKind = ElementKind::$kind;
                const ZERO: Self = $zero;

                #[inline(always)]
                fn elem_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn elem_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )*
    };
}

impl_numeric_element!(Float, 0.0; f32, f64);
impl_numeric_element!(SignedInt, 0; i8, i16, i32, i64, isize);
impl_numeric_element!(UnsignedInt, 0; u8, u16, u32, u64, usize);

/// Address of a nullable pointer, null being `0`
#[inline(always)]
pub(crate) fn ptr_addr<P>(ptr: Option<NonNull<P>>) -> usize {
    ptr.map_or(0, |p| p.as_ptr() as usize)
}

/// Nullable pointer from a raw address
#[inline(always)]
pub(crate) fn ptr_from_addr<P>(addr: usize) -> Option<NonNull<P>> {
    NonNull::new(addr as *mut P)
}

impl<P: 'static> Element for Option<NonNull<P>> {
    const KIND: ElementKind = ElementKind::Pointer;
    const ZERO: Self = None;

    #[inline(always)]
    fn elem_add(self, rhs: Self) -> Self {
        match self {
            Some(p) => NonNull::new(p.as_ptr().wrapping_byte_add(ptr_addr(rhs))),
            None => rhs,
        }
    }

    #[inline(always)]
    fn elem_sub(self, rhs: Self) -> Self {
        match self {
            Some(p) => NonNull::new(p.as_ptr().wrapping_byte_sub(ptr_addr(rhs))),
            None => ptr_from_addr(ptr_addr(rhs).wrapping_neg()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of<T: Element>() -> ElementKind {
        T::KIND
    }

    #[test]
    fn test_element_kinds() {
        assert_eq!(kind_of::<f32>(), ElementKind::Float);
        assert_eq!(kind_of::<f64>(), ElementKind::Float);
        assert_eq!(kind_of::<i16>(), ElementKind::SignedInt);
        assert_eq!(kind_of::<usize>(), ElementKind::UnsignedInt);
        assert_eq!(kind_of::<Option<NonNull<u8>>>(), ElementKind::Pointer);
        assert_eq!(ElementKind::Pointer.name(), "pointer");
    }

    #[test]
    fn test_zero_is_additive_identity() {
        assert_eq!(3.5f32.elem_add(f32::ZERO), 3.5);
        assert_eq!(7i32.elem_sub(i32::ZERO), 7);
        assert_eq!(u8::ZERO, 0);

        let mut value = 5u64;
        let p = NonNull::new(&mut value as *mut u64);
        assert_eq!(p.elem_add(None), p);
        assert_eq!(None.elem_add(p), p);
        assert_eq!(p.elem_sub(None), p);
    }

    #[test]
    fn test_pointer_tagging_round_trip() {
        let mut value = 0u64;
        let base = NonNull::new(&mut value as *mut u64);
        let tag: Option<NonNull<u64>> = ptr_from_addr(1);

        let tagged = base.elem_add(tag);
        assert_eq!(ptr_addr(tagged), ptr_addr(base) + 1);
        assert_eq!(tagged.elem_sub(tag), base);
        assert!(tagged > base);
    }

    #[test]
    fn test_pointer_difference_to_null() {
        let mut value = 0u32;
        let p = NonNull::new(&mut value as *mut u32);
        assert_eq!(p.elem_sub(p), None);
    }

    #[test]
    fn test_numeric_tiers() {
        fn needs_real<T: Real>(x: T) -> T {
            Float::sqrt(x)
        }
        fn needs_signed<T: Signed>(x: T) -> T {
            -x
        }
        fn needs_number<T: Number>(x: T, y: T) -> T {
            x * y
        }

        assert_eq!(needs_real(16.0f64), 4.0);
        assert_eq!(needs_signed(3i8), -3);
        assert_eq!(needs_signed(2.5f32), -2.5);
        assert_eq!(needs_number(6u16, 7), 42);
    }
}
