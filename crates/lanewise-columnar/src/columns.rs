//! Owned columnar store

use crate::traits::ColumnarStore;
use lanewise_core::{Error, Result};

/// Ordered set of named `Vec<T>` columns with one shared length
#[derive(Clone, Debug, PartialEq)]
pub struct Columns<T> {
    columns: Vec<(String, Vec<T>)>,
}

impl<T> Default for Columns<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<T> Columns<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push_column`](Self::push_column)
    pub fn with_column(mut self, name: impl Into<String>, data: Vec<T>) -> Result<Self> {
        self.push_column(name, data)?;
        Ok(self)
    }

    /// Append a column
    ///
    /// # Errors
    /// `Error::ColumnLength` if `data` differs in length from the existing
    /// columns, `Error::InvalidParameter` if the name is taken.
    pub fn push_column(&mut self, name: impl Into<String>, data: Vec<T>) -> Result<()> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(Error::InvalidParameter(format!("column {name} already exists")));
        }
        if let Some((_, first)) = self.columns.first() {
            if first.len() != data.len() {
                return Err(Error::column_length(&name, first.len(), data.len()));
            }
        }
        log::debug!("adding column {} with {} rows", name, data.len());
        self.columns.push((name, data));
        Ok(())
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, data)| data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|(n, _)| n == name)
    }
}

impl<T: Clone> Columns<T> {
    /// Append one value to every column, in column order
    ///
    /// # Errors
    /// `Error::InvalidParameter` if `row` does not have one value per column.
    pub fn push_row(&mut self, row: &[T]) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::InvalidParameter(format!(
                "row has {} values for {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        for ((_, data), value) in self.columns.iter_mut().zip(row) {
            data.push(value.clone());
        }
        Ok(())
    }
}

impl<T> ColumnarStore<T> for Columns<T> {
    fn len(&self) -> usize {
        Columns::len(self)
    }

    fn column(&self, name: &str) -> Option<&[T]> {
        self.position(name).map(|i| self.columns[i].1.as_slice())
    }

    fn columns_mut<const LEN: usize>(&mut self, names: [&str; LEN]) -> Result<[&mut [T]; LEN]> {
        let mut indices = [0usize; LEN];
        for (k, name) in names.iter().enumerate() {
            if names[..k].contains(name) {
                return Err(Error::AliasedColumn(name.to_string()));
            }
            indices[k] = self.position(name).ok_or_else(|| Error::missing_column(name))?;
        }

        // Every index is present and distinct, so each slot is filled exactly once
        let mut slots: [Option<&mut [T]>; LEN] = std::array::from_fn(|_| None);
        for (i, (_, data)) in self.columns.iter_mut().enumerate() {
            if let Some(k) = indices.iter().position(|&j| j == i) {
                slots[k] = Some(data.as_mut_slice());
            }
        }
        Ok(slots.map(Option::unwrap_or_default))
    }
}
