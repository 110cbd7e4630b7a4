//! Batch configuration
//!
//! Kernel instantiations fix their lane count at compile time. `BatchConfig`
//! is the runtime side of that decision: it records whether the caller wants
//! the hardware-derived batch size or an explicit override, and checks that a
//! given instantiation agrees with it.
//!
//! An override exists so that different dimensionalities can share one
//! physical buffer size, e.g. a 2-D batch of 8 lanes and a 4-D batch of 4
//! lanes over the same 64 bytes.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::sizing::{batch_size, is_cache_line_multiple, CACHE_LINE_BYTES};

/// How many vectors one kernel call processes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchConfig {
    /// Explicit lane count, `None` derives it from the element type
    pub vectors_per_op: Option<usize>,
}

impl BatchConfig {
    /// Configuration that derives the batch size from the element type
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the batch size independent of hardware
    pub fn with_vectors_per_op(mut self, lanes: usize) -> Self {
        self.vectors_per_op = Some(lanes);
        self
    }

    /// Resolve the number of lanes for element type `T`
    ///
    /// # Errors
    /// `Error::InvalidConfig` if the override is zero.
    pub fn resolve<T: Element>(&self) -> Result<usize> {
        match self.vectors_per_op {
            None => {
                let lanes = batch_size::<T>();
                log::debug!(
                    "derived batch size {lanes} for {} elements of {} bytes",
                    T::KIND.name(),
                    std::mem::size_of::<T>()
                );
                Ok(lanes)
            }
            Some(0) => Err(Error::InvalidConfig(
                "vectors_per_op must be positive".to_string(),
            )),
            Some(lanes) => {
                if !is_cache_line_multiple::<T>(lanes) {
                    log::warn!(
                        "batch of {lanes} x {} bytes does not fill whole {CACHE_LINE_BYTES}-byte cache lines",
                        std::mem::size_of::<T>()
                    );
                }
                Ok(lanes)
            }
        }
    }

    /// Check that a kernel instantiated with `N` lanes matches this configuration
    pub fn check<T: Element, const N: usize>(&self) -> Result<()> {
        let configured = self.resolve::<T>()?;
        if configured != N {
            return Err(Error::BatchSizeMismatch {
                configured,
                instantiated: N,
            });
        }
        Ok(())
    }
}
