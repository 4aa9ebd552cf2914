//! Benchmark profiles and utilities for the holdall adaptive array.
//!
//! Provides pre-built array fixtures shared by the criterion benchmarks:
//!
//! - [`dense_array`]: every slot occupied
//! - [`sparse_array`]: occupied slots spread out with empty runs between

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use holdall_array::AdaptiveArray;
use holdall_core::CloneOps;

/// Build an array with slots `0..n` all occupied.
pub fn dense_array(n: usize) -> AdaptiveArray<CloneOps<u64>> {
    let mut arr = AdaptiveArray::new(CloneOps::new());
    for i in 0..n {
        arr.set(i, &(i as u64)).expect("dense fill within default ceiling");
    }
    arr
}

/// Build an array with every `stride`-th slot in `0..n` occupied.
///
/// The final slot count is still `n` (the last write lands at `n - 1`
/// when `stride` divides `n - 1`, otherwise at the last multiple below
/// `n`), so dump and iteration walk long empty runs.
pub fn sparse_array(n: usize, stride: usize) -> AdaptiveArray<CloneOps<u64>> {
    let mut arr = AdaptiveArray::new(CloneOps::new());
    for i in (0..n).step_by(stride) {
        arr.set(i, &(i as u64)).expect("sparse fill within default ceiling");
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_array_fully_occupied() {
        let arr = dense_array(100);
        assert_eq!(arr.len(), 100);
        assert_eq!(arr.occupied_count(), 100);
    }

    #[test]
    fn sparse_array_has_empty_runs() {
        let arr = sparse_array(100, 10);
        assert_eq!(arr.len(), 91);
        assert_eq!(arr.occupied_count(), 10);
    }
}
