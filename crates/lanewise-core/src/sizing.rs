//! Batch sizing: how many lanes make up one kernel call
//!
//! The default batch is the larger of one SIMD register and one cache line
//! worth of elements. Everything here is a `const fn`, so the result can be
//! used directly as a const generic argument:
//!
//! ```rust
//! use lanewise_core::{batch_size, Kernels};
//!
//! type Vec3f = Kernels<f32, 3, { batch_size::<f32>() }>;
//! assert!(Vec3f::VECTORS_PER_OP >= 16);
//! ```

use crate::element::Element;
use std::mem::size_of;

/// Cache line size assumed when sizing batches
#[cfg(not(feature = "cache-line-128"))]
pub const CACHE_LINE_BYTES: usize = 64;

/// Cache line size assumed when sizing batches
#[cfg(feature = "cache-line-128")]
pub const CACHE_LINE_BYTES: usize = 128;

/// Width in bytes of the widest vector register enabled for this target
///
/// Returns `0` when the target has no SIMD registers enabled at compile time.
pub const fn simd_register_bytes() -> usize {
    if cfg!(target_feature = "avx512f") {
        64
    } else if cfg!(any(target_feature = "avx2", target_feature = "avx")) {
        32
    } else if cfg!(any(
        target_feature = "sse2",
        target_feature = "neon",
        target_feature = "simd128"
    )) {
        16
    } else {
        0
    }
}

/// Get the name of the SIMD instruction set batches are sized for
pub const fn simd_backend_name() -> &'static str {
    if cfg!(target_feature = "avx512f") {
        "avx512"
    } else if cfg!(any(target_feature = "avx2", target_feature = "avx")) {
        "avx2"
    } else if cfg!(target_feature = "sse2") {
        "sse2"
    } else if cfg!(target_feature = "neon") {
        "neon"
    } else if cfg!(target_feature = "simd128") {
        "simd128"
    } else {
        "scalar"
    }
}

/// Number of `T` lanes in one SIMD register, at least 1
pub const fn preferred_simd_width<T: Element>() -> usize {
    let lanes = simd_register_bytes() / size_of::<T>();
    if lanes == 0 {
        1
    } else {
        lanes
    }
}

/// Default number of vectors processed per kernel call for element `T`
///
/// `max(preferred_simd_width::<T>(), CACHE_LINE_BYTES / size_of::<T>())`,
/// never less than 1.
pub const fn batch_size<T: Element>() -> usize {
    let simd = preferred_simd_width::<T>();
    let line = CACHE_LINE_BYTES / size_of::<T>();
    let lanes = if simd > line { simd } else { line };
    assert!(lanes >= 1, "batch size must be at least one lane");
    lanes
}

/// Bytes occupied by one `LEN`-dimensional batch of `N` lanes
pub const fn byte_budget<T: Element, const LEN: usize, const N: usize>() -> usize {
    size_of::<T>() * LEN * N
}

/// Whether `lanes` elements of `T` fill a whole number of cache lines
pub const fn is_cache_line_multiple<T: Element>(lanes: usize) -> bool {
    (lanes * size_of::<T>()) % CACHE_LINE_BYTES == 0
}
