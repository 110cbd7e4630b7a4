//! Core traits, views and kernels for batched vector arithmetic
//!
//! This crate computes geometric operations over many small fixed-dimension
//! vectors stored struct-of-arrays: each dimension lives in its own column and
//! a batch of `N` lanes is processed per call.
//!
//! # Architecture Overview
//!
//! 1. **Sizing** - Compile-time batch size derived from SIMD width and cache line
//! 2. **Views** - Fixed-size windows over caller-owned columns
//! 3. **Kernels** - Lane-wise operations on one batch, bounded by element tier
//! 4. **Accumulator** - Chains kernels through a double-buffered working set
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: Element type, dimension count and batch size
//!   are all const/type parameters
//! - **No Hidden Allocations**: The core never heap-allocates
//! - **Borrow-checked aliasing**: Inputs are `&`, outputs `&mut`
//!
//! # Example
//!
//! ```rust
//! use lanewise_core::{as_in, as_out, batch_size, Kernels};
//!
//! const N: usize = batch_size::<f32>();
//! type K = Kernels<f32, 3, N>;
//!
//! let xs = vec![1.0f32; 4 * N];
//! let ys = vec![2.0f32; 4 * N];
//! let zs = vec![2.0f32; 4 * N];
//! let mut lengths = vec![0.0f32; 4 * N];
//!
//! for offset in (0..xs.len()).step_by(N) {
//!     let v = [as_in(&xs, offset), as_in(&ys, offset), as_in(&zs, offset)];
//!     K::lengths(v, as_out(&mut lengths, offset));
//! }
//!
//! assert!(lengths.iter().all(|&l| l == 3.0));
//! ```

pub mod accumulator;
pub mod adapter;
pub mod config;
pub mod element;
pub mod error;
pub mod kernels;
pub mod sizing;
pub mod view;

pub use error::{Error, Result};

pub use accumulator::{Accumulator, Op, OpKind, ReduceOp};
pub use adapter::{cast_dims, swizzle_dims, CastElement, Dim};
pub use config::BatchConfig;
pub use element::{Element, ElementKind, Number, Real, Signed};
pub use kernels::{all, any, Kernels};
pub use sizing::{
    batch_size, byte_budget, is_cache_line_multiple, preferred_simd_width, simd_backend_name,
    simd_register_bytes, CACHE_LINE_BYTES,
};
pub use view::{
    as_in, as_out, try_as_in, try_as_out, vectors_in, vectors_out, Scalars, ScalarsMut, Slicable,
    Vectors, VectorsMut,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Kernel sets at the derived batch size for the common shapes
pub type Vec2f32 = Kernels<f32, 2, { batch_size::<f32>() }>;
pub type Vec3f32 = Kernels<f32, 3, { batch_size::<f32>() }>;
pub type Vec4f32 = Kernels<f32, 4, { batch_size::<f32>() }>;
pub type Vec2f64 = Kernels<f64, 2, { batch_size::<f64>() }>;
pub type Vec3f64 = Kernels<f64, 3, { batch_size::<f64>() }>;
pub type Vec4f64 = Kernels<f64, 4, { batch_size::<f64>() }>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        as_in, as_out, batch_size, vectors_in, vectors_out, Accumulator, BatchConfig, Dim,
        Element, Kernels, Number, Op, Real, ReduceOp, Result, Scalars, ScalarsMut, Signed,
        Slicable, Vectors, VectorsMut,
    };

    pub use crate::error::Error;
}
