//! Batch windows over named columns
//!
//! Turns a [`ColumnarStore`] plus a list of column names into the view types
//! the kernels consume. Only whole batches are produced; rows past the last
//! whole batch are left to the caller.

use crate::traits::ColumnarStore;
use lanewise_core::view::{vectors_in, vectors_out};
use lanewise_core::{Error, Result, Vectors, VectorsMut};
use std::iter::StepBy;
use std::ops::Range;

fn check_window(offset: usize, batch: usize, len: usize) -> Result<()> {
    match offset.checked_add(batch) {
        Some(end) if end <= len => Ok(()),
        _ => Err(Error::out_of_bounds(offset, batch, len)),
    }
}

/// Read-only batch of `N` lanes from the named columns, in the order given
///
/// # Errors
/// `Error::MissingColumn` if a name is absent, `Error::OutOfBounds` if
/// `offset + N` exceeds a column's length.
pub fn from_collection<'a, T, S, const LEN: usize, const N: usize>(
    store: &'a S,
    names: [&str; LEN],
    offset: usize,
) -> Result<Vectors<'a, T, LEN, N>>
where
    S: ColumnarStore<T> + ?Sized,
{
    let mut columns: [&'a [T]; LEN] = [&[][..]; LEN];
    for (slot, name) in columns.iter_mut().zip(names) {
        *slot = store.column(name).ok_or_else(|| Error::missing_column(name))?;
        check_window(offset, N, slot.len())?;
    }
    Ok(vectors_in(columns, offset))
}

/// Writable batch of `N` lanes from distinct named columns
///
/// # Errors
/// As [`from_collection`], plus `Error::AliasedColumn` if a name repeats.
pub fn from_collection_mut<'a, T, S, const LEN: usize, const N: usize>(
    store: &'a mut S,
    names: [&str; LEN],
    offset: usize,
) -> Result<VectorsMut<'a, T, LEN, N>>
where
    S: ColumnarStore<T> + ?Sized,
{
    let columns = store.columns_mut(names)?;
    for column in &columns {
        check_window(offset, N, column.len())?;
    }
    Ok(vectors_out(columns, offset))
}

/// Offsets of every whole batch of `batch` lanes in `len` rows
///
/// # Panics
/// If `batch` is zero.
pub fn batch_offsets(len: usize, batch: usize) -> StepBy<Range<usize>> {
    assert!(batch > 0, "batch size must be positive");
    (0..len - len % batch).step_by(batch)
}

/// Rows after the last whole batch
///
/// # Panics
/// If `batch` is zero.
pub fn remainder(len: usize, batch: usize) -> Range<usize> {
    assert!(batch > 0, "batch size must be positive");
    len - len % batch..len
}
