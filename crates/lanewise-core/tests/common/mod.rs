//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use lanewise_core::Slicable;
use proptest::prelude::*;

pub const EPSILON: f64 = 1e-10;

/// Column lengths around common batch sizes, including ragged remainders
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        3,   // Below any batch
        4,   // 16-byte register of f32
        7,   // One short of a f64 cache line
        8,   // f64 cache line
        15,  // One short of a f32 cache line
        16,  // f32 cache line
        17,  // One over
        63,  // Almost a u8 cache line
        64,  // u8 cache line
        100, // Round number
    ]
}

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        f64::NAN,
        1.0,
        -1.0,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        std::f64::consts::PI,
    ]
}

/// `LEN` struct-of-arrays columns with a deterministic, dimension-dependent pattern
pub fn generate_columns<const LEN: usize>(len: usize) -> [Vec<f64>; LEN] {
    std::array::from_fn(|d| {
        (0..len)
            .map(|i| (i as f64 + 0.1) * (d as f64 + 1.0) - len as f64 / 2.0)
            .collect()
    })
}

/// Array-of-structs copy of the same vectors
pub fn to_aos<const LEN: usize>(columns: &[Vec<f64>; LEN]) -> Vec<[f64; LEN]> {
    let len = columns.first().map_or(0, Vec::len);
    (0..len)
        .map(|i| std::array::from_fn(|d| columns[d][i]))
        .collect()
}

/// Scalar reference for one vector's Euclidean length
pub fn aos_length<const LEN: usize>(v: [f64; LEN]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Strategy for a batch whose elements come from `element`
pub fn slicable<T, S, const LEN: usize, const N: usize>(
    element: S,
) -> impl Strategy<Value = Slicable<T, LEN, N>>
where
    T: Copy + std::fmt::Debug,
    S: Strategy<Value = T>,
{
    prop::collection::vec(element, LEN * N)
        .prop_map(|flat| Slicable::from_fn(|d, lane| flat[d * N + lane]))
}

/// Assert two batches are equal within tolerance, lane by lane
pub fn assert_batches_close<const LEN: usize, const N: usize>(
    actual: &Slicable<f64, LEN, N>,
    expected: &Slicable<f64, LEN, N>,
    epsilon: f64,
) {
    for d in 0..LEN {
        for lane in 0..N {
            assert_relative_eq!(
                actual.dim(d)[lane],
                expected.dim(d)[lane],
                epsilon = epsilon,
                max_relative = epsilon
            );
        }
    }
}
