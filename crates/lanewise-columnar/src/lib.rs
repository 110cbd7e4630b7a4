//! Columnar storage integration for lanewise kernels
//!
//! This crate connects named struct-of-arrays columns to the batch views of
//! `lanewise-core` through a single capability trait, [`ColumnarStore`].
//!
//! # Example
//!
//! ```rust
//! use lanewise_columnar::{
//!     batch_offsets, from_collection, from_collection_mut, ColumnarStore, Columns,
//! };
//! use lanewise_core::Kernels;
//!
//! type K = Kernels<f32, 2, 4>;
//!
//! let mut store = Columns::new()
//!     .with_column("x", vec![3.0f32; 8])?
//!     .with_column("y", vec![4.0f32; 8])?
//!     .with_column("len", vec![0.0f32; 8])?;
//!
//! for offset in batch_offsets(store.len(), 4) {
//!     let v: [[f32; 4]; 2] =
//!         from_collection::<_, _, 2, 4>(&store, ["x", "y"], offset)?.map(|d| *d);
//!     let [len] = from_collection_mut(&mut store, ["len"], offset)?;
//!     K::lengths([&v[0], &v[1]], len);
//! }
//!
//! assert!(store.column("len").map_or(false, |c| c.iter().all(|&l| l == 5.0)));
//! # Ok::<(), lanewise_core::Error>(())
//! ```

mod adapter;
mod columns;
mod traits;

pub use adapter::{batch_offsets, from_collection, from_collection_mut, remainder};
pub use columns::Columns;
pub use traits::ColumnarStore;

// Re-export commonly used types from the core
pub use lanewise_core::{Error, Result};
