//! Columnar store capability

use lanewise_core::Result;

/// A collection of named, equally long columns of `T`
///
/// This is all the batch adapter needs from a store, so any struct-of-arrays
/// container can expose its columns to the kernels without copying.
pub trait ColumnarStore<T> {
    /// Number of rows, shared by every column
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read access to one column
    fn column(&self, name: &str) -> Option<&[T]>;

    /// Write access to several distinct columns at once
    ///
    /// # Errors
    /// `Error::MissingColumn` if a name is absent, `Error::AliasedColumn` if a
    /// name is repeated.
    fn columns_mut<const LEN: usize>(&mut self, names: [&str; LEN]) -> Result<[&mut [T]; LEN]>;
}
