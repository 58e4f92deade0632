//! Borrowed row-partition views
//!
//! A [`CsrView`] owns freshly derived metadata and a name but borrows its
//! three arrays from the matrix it was sliced out of. The borrow ties the
//! view's lifetime to that matrix, so a view can neither outlive its parent
//! nor coexist with a mutable borrow of it:
//!
//! ```compile_fail
//! use csr::{CsrMatrix, RowPartition, SparseMatrix};
//!
//! let mut parent = CsrMatrix::<u32, f32>::dense(4).unwrap();
//! let parts = parent.partition_by_rows(&[0, 2, 4]).unwrap();
//! parent.nz_data_mut()[0] = 10.0;
//! assert_eq!(parts[0].nz_data()[0], 10.0);
//! ```
//!
//! ```compile_fail
//! use csr::{CsrMatrix, CsrView, RowPartition};
//!
//! let parts: Vec<CsrView<'static, u32, f32>> = {
//!     let parent = CsrMatrix::<u32, f32>::dense(4).unwrap();
//!     parent.partition_by_rows(&[0, 2, 4]).unwrap()
//! };
//! ```
//!
//! Index pointers of a view are not rebased: they keep the parent's offsets
//! into the shared arrays, and `inds`/`nz_data` start at the parent offset
//! `ind_ptrs()[0]`. [`SparseMatrix`] accessors account for this.
//! [`CsrView::to_owned_matrix`] makes an independent, rebased copy.

use csr_core::validation::validate_boundaries;
use csr_core::{
    IndexType, PartitionStrategy, Result, SparseMatrix, SparseMatrixMetadata, ValueType,
};
use tracing::{debug, instrument};

use crate::matrix::CsrMatrix;

/// A row-contiguous slice of a CSR matrix that borrows the matrix's arrays
#[derive(Debug, Clone, PartialEq)]
pub struct CsrView<'a, I, V> {
    metadata: SparseMatrixMetadata,
    ind_ptrs: &'a [I],
    inds: &'a [I],
    nz_data: &'a [V],
    name: String,
}

impl<'a, I: IndexType, V: ValueType> CsrView<'a, I, V> {
    pub(crate) fn from_parts(
        metadata: SparseMatrixMetadata,
        ind_ptrs: &'a [I],
        inds: &'a [I],
        nz_data: &'a [V],
        name: String,
    ) -> Self {
        Self {
            metadata,
            ind_ptrs,
            inds,
            nz_data,
            name,
        }
    }

    /// Replace the `"<parent>-p<i>"` label given at partition time
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Copy the view into an independent matrix
    ///
    /// Index pointers are rebased to start at zero. The metadata is kept, so
    /// the copy still records its starting row within the partitioned
    /// matrix.
    pub fn to_owned_matrix(&self) -> CsrMatrix<I, V> {
        let ind_ptrs = match self.ind_ptrs.first() {
            Some(&base) => self.ind_ptrs.iter().map(|&p| p - base).collect(),
            None => Vec::new(),
        };

        CsrMatrix {
            metadata: self.metadata,
            ind_ptrs,
            inds: self.inds.to_vec(),
            nz_data: self.nz_data.to_vec(),
            name: self.name.clone(),
            synthetic_values: false,
        }
    }
}

impl<I: IndexType, V: ValueType> SparseMatrix for CsrView<'_, I, V> {
    type Index = I;
    type Value = V;

    fn metadata(&self) -> &SparseMatrixMetadata {
        &self.metadata
    }

    fn ind_ptrs(&self) -> &[I] {
        self.ind_ptrs
    }

    fn inds(&self) -> &[I] {
        self.inds
    }

    fn nz_data(&self) -> &[V] {
        self.nz_data
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Splitting a matrix into row-contiguous views
pub trait RowPartition: SparseMatrix {
    /// Slice the matrix at `boundaries` into zero-copy views
    ///
    /// View `i` covers rows `[boundaries[i], boundaries[i + 1])`, is named
    /// `"<name>-p<i>"` and starts at row `boundaries[i]`, column 0. Offsets
    /// recorded in this matrix's own metadata are not carried into the views. Boundaries must start at 0, end at `rows()` and never
    /// decrease; otherwise nothing is returned. Repeated boundaries yield
    /// empty views.
    fn partition_by_rows(
        &self,
        boundaries: &[usize],
    ) -> Result<Vec<CsrView<'_, Self::Index, Self::Value>>>;

    /// Compute boundaries with `strategy` and partition at them
    fn partition_rows(
        &self,
        num_partitions: usize,
        strategy: PartitionStrategy,
    ) -> Result<Vec<CsrView<'_, Self::Index, Self::Value>>> {
        let boundaries = csr_core::partition::row_partition_boundaries(
            self.rows(),
            num_partitions,
            strategy,
        )?;
        self.partition_by_rows(&boundaries)
    }
}

impl<M: SparseMatrix> RowPartition for M {
    #[instrument(level = "debug", skip_all, fields(matrix = self.name(), partitions = boundaries.len().saturating_sub(1)))]
    fn partition_by_rows(
        &self,
        boundaries: &[usize],
    ) -> Result<Vec<CsrView<'_, M::Index, M::Value>>> {
        validate_boundaries(boundaries, self.rows())?;

        let ptrs = self.ind_ptrs();
        let base = self.base_offset();
        let views: Vec<_> = boundaries
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let (first, last) = (w[0], w[1]);
                let start = ptrs[first].index() - base;
                let end = ptrs[last].index() - base;
                let metadata = self.metadata().row_slice(
                    first as u32,
                    (last - first) as u32,
                    (end - start) as u32,
                );
                CsrView::from_parts(
                    metadata,
                    &ptrs[first..=last],
                    &self.inds()[start..end],
                    &self.nz_data()[start..end],
                    format!("{}-p{i}", self.name()),
                )
            })
            .collect();

        debug!(
            rows = self.rows(),
            nnz = self.nnz(),
            views = views.len(),
            "partitioned matrix by rows"
        );
        Ok(views)
    }
}
