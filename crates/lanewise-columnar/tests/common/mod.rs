//! Common test utilities for lanewise-columnar tests

#![allow(dead_code)]

use lanewise_columnar::Columns;

/// Store with `x`, `y`, `z` columns of `len` rows following a simple pattern
pub fn create_test_store(len: usize) -> Columns<f64> {
    let mut store = Columns::new();
    for (d, name) in ["x", "y", "z"].into_iter().enumerate() {
        let data = (0..len)
            .map(|i| (i as f64 - len as f64 / 3.0) * (d as f64 + 0.5))
            .collect();
        store.push_column(name, data).unwrap();
    }
    store
}

/// Append empty output columns with the store's length
pub fn add_output_columns(store: &mut Columns<f64>, names: &[&str]) {
    let len = store.len();
    for name in names {
        store.push_column(*name, vec![0.0; len]).unwrap();
    }
}
