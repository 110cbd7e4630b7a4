//! Batched struct-of-arrays vector kernels
//!
//! Facade over the lanewise workspace:
//!
//! - [`lanewise_core`]: batch sizing, views, kernels and the chaining accumulator
//! - [`lanewise_columnar`]: named column stores and batch windows over them
//!
//! # Example
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! type K = Kernels<f64, 3, 4>;
//!
//! let mut store = Columns::new()
//!     .with_column("x", vec![1.0; 8])?
//!     .with_column("y", vec![2.0; 8])?
//!     .with_column("z", vec![2.0; 8])?;
//!
//! for offset in batch_offsets(store.len(), 4) {
//!     let v: Slicable<f64, 3, 4> =
//!         Slicable::from_dims(from_collection(&store, ["x", "y", "z"], offset)?.map(|d| *d));
//!     let out = from_collection_mut(&mut store, ["x", "y", "z"], offset)?;
//!     K::normalize(v.view(), out);
//! }
//!
//! assert_eq!(store.column("y").map(|c| c[5]), Some(2.0 / 3.0));
//! # Ok::<(), lanewise::Error>(())
//! ```

pub use lanewise_columnar;
pub use lanewise_core;

pub use lanewise_core::{Error, Result, VERSION};

/// Prelude module for convenient imports
pub mod prelude {
    pub use lanewise_core::prelude::*;

    pub use lanewise_columnar::{
        batch_offsets, from_collection, from_collection_mut, remainder, ColumnarStore, Columns,
    };
}
