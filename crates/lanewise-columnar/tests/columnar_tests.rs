//! End-to-end kernel runs over a columnar store

mod common;

use approx::assert_relative_eq;
use common::{add_output_columns, create_test_store};
use lanewise_columnar::{
    batch_offsets, from_collection, from_collection_mut, remainder, ColumnarStore, Columns, Error,
};
use lanewise_core::{Accumulator, Kernels, Op, Slicable};
use proptest::prelude::*;

const N: usize = 4;
type K = Kernels<f64, 3, N>;

#[test]
fn test_normalize_whole_store_with_scalar_remainder() {
    let mut store = create_test_store(11);
    add_output_columns(&mut store, &["nx", "ny", "nz"]);

    for offset in batch_offsets(store.len(), N) {
        // Copy the inputs so the store can be borrowed mutably for the outputs
        let v = from_collection(&store, ["x", "y", "z"], offset).unwrap();
        let input: Slicable<f64, 3, N> = Slicable::from_dims(v.map(|d| *d));
        let out = from_collection_mut(&mut store, ["nx", "ny", "nz"], offset).unwrap();
        K::normalize(input.view(), out);
    }

    for i in remainder(store.len(), N) {
        let v = ["x", "y", "z"].map(|name| store.column(name).unwrap()[i]);
        let len = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        let [nx, ny, nz] = store.columns_mut(["nx", "ny", "nz"]).unwrap();
        nx[i] = v[0] / len;
        ny[i] = v[1] / len;
        nz[i] = v[2] / len;
    }

    for i in 0..store.len() {
        let n = ["nx", "ny", "nz"].map(|name| store.column(name).unwrap()[i]);
        let v = ["x", "y", "z"].map(|name| store.column(name).unwrap()[i]);
        let len = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert_relative_eq!(n.iter().map(|x| x * x).sum::<f64>().sqrt(), 1.0, epsilon = 1e-12);
        for d in 0..3 {
            assert_relative_eq!(n[d] * len, v[d], epsilon = 1e-9);
        }
    }
}

#[test]
fn test_accumulator_reads_columns_in_place() {
    let store = create_test_store(8);
    let mut out = Columns::new();
    for name in ["sx", "sy", "sz"] {
        out.push_column(name, vec![0.0; 8]).unwrap();
    }

    for offset in batch_offsets(store.len(), N) {
        let v = from_collection(&store, ["x", "y", "z"], offset).unwrap();
        let swapped = from_collection(&store, ["z", "y", "x"], offset).unwrap();
        let dst = from_collection_mut(&mut out, ["sx", "sy", "sz"], offset).unwrap();
        Accumulator::begin(Op::Binary(K::add, swapped), v)
            .cont(Op::Unary(K::negate))
            .end(Op::Binary(K::max, v), dst);
    }

    let xs = store.column("x").unwrap();
    let zs = store.column("z").unwrap();
    let sx = out.column("sx").unwrap();
    for i in 0..8 {
        assert_eq!(sx[i], (-(xs[i] + zs[i])).max(xs[i]));
    }
}

#[test]
fn test_errors_surface_from_store() {
    let mut store = create_test_store(6);

    assert_eq!(
        from_collection::<_, _, 3, 4>(&store, ["x", "y", "w"], 0).err(),
        Some(Error::MissingColumn("w".to_string()))
    );
    assert!(matches!(
        from_collection::<_, _, 3, 4>(&store, ["x", "y", "z"], 4),
        Err(Error::OutOfBounds { offset: 4, batch: 4, len: 6 })
    ));
    assert!(matches!(
        from_collection_mut::<_, _, 2, 4>(&mut store, ["x", "x"], 0),
        Err(Error::AliasedColumn(_))
    ));
    assert!(matches!(
        store.push_column("w", vec![0.0; 5]),
        Err(Error::ColumnLength { expected: 6, actual: 5, .. })
    ));
}

proptest! {
    // Property: whole batches plus the remainder cover every row exactly once
    #[test]
    fn prop_batches_partition_rows(len in 0usize..500, batch in 1usize..40) {
        let mut seen = vec![0u8; len];
        for offset in batch_offsets(len, batch) {
            for row in offset..offset + batch {
                seen[row] += 1;
            }
        }
        for row in remainder(len, batch) {
            seen[row] += 1;
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
        prop_assert!(remainder(len, batch).len() < batch);
    }

    // Property: every whole-batch window is accepted, the next one is not
    #[test]
    fn prop_windows_fit_store(len in 0usize..64) {
        let store = create_test_store(len);
        for offset in batch_offsets(len, N) {
            prop_assert!(from_collection::<_, _, 3, N>(&store, ["x", "y", "z"], offset).is_ok());
        }
        let past = len - len % N;
        prop_assert!(from_collection::<_, _, 3, N>(&store, ["x", "y", "z"], past + 1).is_err());
    }
}
