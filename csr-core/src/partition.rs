//! Row partition boundary arithmetic
//!
//! Boundaries are `n + 1` row indices; partition `i` covers rows
//! `[b[i], b[i + 1])`.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// How rows are split into partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartitionStrategy {
    /// `chunk = (rows + n) / n`, `b[i] = chunk * i`, last boundary forced to `rows`
    ///
    /// Matches the boundaries produced by existing hardware partitioners.
    /// When `chunk * (n - 1)` exceeds `rows` the result is not monotonic
    /// (for 3 rows in 3 partitions: `[0, 2, 4, 3]`) and such boundaries are
    /// rejected when used to partition.
    #[default]
    Compatible,
    /// `rows / n` rows per partition, the remainder spread one row each over
    /// the first partitions. Always monotonic.
    Balanced,
}

/// Compute boundary `i` of `num_partitions` for a matrix with `rows` rows
///
/// `i` ranges over `0..=num_partitions`. Allocation-free building block for
/// [`row_partition_boundaries`]. Never overflows; out-of-range products
/// saturate and are rejected when the boundaries are validated.
pub const fn boundary(
    rows: usize,
    num_partitions: usize,
    i: usize,
    strategy: PartitionStrategy,
) -> usize {
    if rows == 0 {
        return 0;
    }
    if i >= num_partitions {
        return rows;
    }
    match strategy {
        PartitionStrategy::Compatible => {
            // (rows + n) / n without the intermediate sum
            let chunk = rows / num_partitions + 1;
            chunk.saturating_mul(i)
        }
        PartitionStrategy::Balanced => {
            let chunk = rows / num_partitions;
            let remainder = rows % num_partitions;
            chunk * i + if i < remainder { i } else { remainder }
        }
    }
}

/// Compute `num_partitions + 1` row boundaries for a matrix with `rows` rows
///
/// A zero-row matrix yields all-zero boundaries. The partition count must be
/// at least 1, and `rows + num_partitions` must fit a `usize`.
#[cfg(feature = "alloc")]
pub fn row_partition_boundaries(
    rows: usize,
    num_partitions: usize,
    strategy: PartitionStrategy,
) -> crate::Result<Vec<usize>> {
    if num_partitions == 0 || rows.checked_add(num_partitions).is_none() {
        return Err(crate::CsrError::InvalidPartitionCount);
    }
    Ok((0..=num_partitions)
        .map(|i| boundary(rows, num_partitions, i, strategy))
        .collect())
}
