//! Read-only CSR matrix interface
//!
//! Implemented by owned matrices and by borrowed row-partition views alike.
//! Index pointers of a view keep the offsets of the matrix it was sliced
//! from; every provided method here rebases them against `ind_ptrs()[0]`, so
//! callers never need to know which kind of matrix they hold.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

use super::element::{IndexType, ValueType};
use crate::SparseMatrixMetadata;

/// Core CSR matrix trait
pub trait SparseMatrix {
    /// Row pointer and column index type
    type Index: IndexType;
    /// Stored value type
    type Value: ValueType;

    /// Shape and encoding record
    fn metadata(&self) -> &SparseMatrixMetadata;

    /// Row pointers, `rows + 1` entries
    fn ind_ptrs(&self) -> &[Self::Index];

    /// Column indices, `nz` entries
    fn inds(&self) -> &[Self::Index];

    /// Values, aligned 1:1 with [`inds`](SparseMatrix::inds)
    fn nz_data(&self) -> &[Self::Value];

    /// Display label
    fn name(&self) -> &str;

    /// Number of rows
    fn rows(&self) -> usize {
        self.metadata().rows as usize
    }

    /// Number of columns
    fn cols(&self) -> usize {
        self.metadata().cols as usize
    }

    /// Number of stored entries
    fn nnz(&self) -> usize {
        self.metadata().nz as usize
    }

    /// First row within the matrix this one was partitioned from, 0 for a root
    fn starting_row(&self) -> usize {
        self.metadata().starting_row as usize
    }

    /// First column within the matrix this one was partitioned from
    fn starting_col(&self) -> usize {
        self.metadata().starting_col as usize
    }

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Check if the matrix has as many rows as columns
    fn is_square(&self) -> bool {
        self.metadata().is_square()
    }

    /// Offset of the first stored entry within the shared arrays
    fn base_offset(&self) -> usize {
        self.ind_ptrs().first().map_or(0, |p| p.index())
    }

    /// Range of `inds`/`nz_data` positions holding row `row`
    ///
    /// Returns `None` if `row` is out of bounds.
    fn row_range(&self, row: usize) -> Option<core::ops::Range<usize>> {
        if row >= self.rows() {
            return None;
        }
        let ptrs = self.ind_ptrs();
        let base = self.base_offset();
        Some(ptrs[row].index() - base..ptrs[row + 1].index() - base)
    }

    /// Column indices and values stored in row `row`
    fn row(&self, row: usize) -> Option<(&[Self::Index], &[Self::Value])> {
        let range = self.row_range(row)?;
        Some((&self.inds()[range.clone()], &self.nz_data()[range]))
    }

    /// Number of entries stored in row `row`
    fn row_nnz(&self, row: usize) -> Option<usize> {
        self.row_range(row).map(|r| r.len())
    }

    /// Get an element at the specified position
    ///
    /// Returns `None` if the entry is not stored or the position is out of
    /// bounds. Rows are scanned linearly since column order within a row is
    /// not guaranteed.
    fn get(&self, row: usize, col: usize) -> Option<Self::Value> {
        if col >= self.cols() {
            return None;
        }
        let (cols, values) = self.row(row)?;
        cols.iter()
            .position(|c| c.index() == col)
            .map(|i| values[i])
    }

    /// Check every CSR invariant
    fn validate(&self) -> crate::Result<()> {
        crate::validation::validate_csr(
            self.metadata(),
            self.ind_ptrs(),
            self.inds(),
            self.nz_data(),
        )
    }
}

/// Extension trait for operations that allocate (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// One human-readable line naming the matrix and its shape
    fn summary(&self) -> String {
        alloc::format!(
            "{}: {} rows x {} cols, {} nonzeros",
            self.name(),
            self.rows(),
            self.cols(),
            self.nnz()
        )
    }

    /// Row partition boundaries using the compatibility formula
    ///
    /// See [`PartitionStrategy::Compatible`](crate::PartitionStrategy::Compatible).
    fn row_partition_boundaries(&self, num_partitions: usize) -> crate::Result<Vec<usize>> {
        crate::partition::row_partition_boundaries(
            self.rows(),
            num_partitions,
            crate::PartitionStrategy::Compatible,
        )
    }

    /// Row partition boundaries using `strategy`
    fn row_partition_boundaries_with(
        &self,
        num_partitions: usize,
        strategy: crate::PartitionStrategy,
    ) -> crate::Result<Vec<usize>> {
        crate::partition::row_partition_boundaries(self.rows(), num_partitions, strategy)
    }

    /// Copy row `row` out as `(col, value)` pairs
    fn row_entries(&self, row: usize) -> Vec<(usize, Self::Value)> {
        self.row(row)
            .map(|(cols, values)| {
                cols.iter()
                    .zip(values)
                    .map(|(c, v)| (c.index(), *v))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(feature = "alloc")]
impl<M: SparseMatrix + ?Sized> MatrixOperations for M {}
