//! Owned CSR matrices
//!
//! A [`CsrMatrix`] owns its metadata and all three arrays; dropping it
//! releases them. Row-partition views borrow from it, see [`crate::view`].

use csr_core::validation::validate_root_csr;
use csr_core::{
    CsrError, IndexType, Result, SparseMatrix, SparseMatrixMetadata, ValueType,
};

use crate::view::CsrView;

/// Name given to matrices built from raw parts
pub const DEFAULT_NAME: &str = "<unnamed>";

/// A sparse matrix in compressed sparse row form that owns its storage
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<I, V> {
    pub(crate) metadata: SparseMatrixMetadata,
    pub(crate) ind_ptrs: Vec<I>,
    pub(crate) inds: Vec<I>,
    pub(crate) nz_data: Vec<V>,
    pub(crate) name: String,
    pub(crate) synthetic_values: bool,
}

/// Convert a dimension into the 32-bit metadata field and the index type
fn checked_dim<I: IndexType>(value: usize) -> Result<u32> {
    I::from_usize(value).ok_or(CsrError::IndexOverflow)?;
    u32::try_from(value).map_err(|_| CsrError::IndexOverflow)
}

fn index_vec<I: IndexType>(values: impl Iterator<Item = usize>) -> Result<Vec<I>> {
    values
        .map(I::from_usize)
        .collect::<Option<Vec<I>>>()
        .ok_or(CsrError::IndexOverflow)
}

impl<I: IndexType, V: ValueType> CsrMatrix<I, V> {
    /// Build a matrix from its arrays, checking every CSR invariant
    ///
    /// `ind_ptrs` must start at zero. The matrix is named [`DEFAULT_NAME`]
    /// until renamed.
    pub fn try_new(
        rows: usize,
        cols: usize,
        ind_ptrs: Vec<I>,
        inds: Vec<I>,
        nz_data: Vec<V>,
    ) -> Result<Self> {
        let rows = u32::try_from(rows).map_err(|_| CsrError::IndexOverflow)?;
        let cols = u32::try_from(cols).map_err(|_| CsrError::IndexOverflow)?;
        let nz = u32::try_from(inds.len()).map_err(|_| CsrError::IndexOverflow)?;
        let metadata = SparseMatrixMetadata::for_types::<I, V>(rows, cols, nz);
        validate_root_csr(&metadata, &ind_ptrs, &inds, &nz_data)?;

        Ok(Self {
            metadata,
            ind_ptrs,
            inds,
            nz_data,
            name: DEFAULT_NAME.to_string(),
            synthetic_values: false,
        })
    }

    /// The `dim x dim` identity matrix, named `"eye"`
    ///
    /// Diagonal entries hold the literal one of `V`; callers working over a
    /// semiring with a different multiplicative identity must rewrite them.
    pub fn identity(dim: usize) -> Result<Self> {
        let dim32 = checked_dim::<I>(dim)?;

        Ok(Self {
            metadata: SparseMatrixMetadata::for_types::<I, V>(dim32, dim32, dim32),
            ind_ptrs: index_vec(0..=dim)?,
            inds: index_vec(0..dim)?,
            nz_data: vec![V::one(); dim],
            name: "eye".to_string(),
            synthetic_values: false,
        })
    }

    /// The fully dense `dim x dim` matrix, named `"dense"`
    ///
    /// Entries are numbered row-major from 1, so row `r` holds
    /// `r * dim + 1 ..= r * dim + dim`. Meant as a structural fixture.
    pub fn dense(dim: usize) -> Result<Self> {
        let dim32 = checked_dim::<I>(dim)?;
        let nz = dim.checked_mul(dim).ok_or(CsrError::IndexOverflow)?;
        let nz32 = checked_dim::<I>(nz)?;

        Ok(Self {
            metadata: SparseMatrixMetadata::for_types::<I, V>(dim32, dim32, nz32),
            ind_ptrs: index_vec((0..=dim).map(|r| r * dim))?,
            inds: index_vec((0..nz).map(|k| k % dim))?,
            nz_data: (1..=nz).map(V::from_usize).collect(),
            name: "dense".to_string(),
            synthetic_values: false,
        })
    }

    /// Rename the matrix, consuming and returning it
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Rename the matrix in place
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// True when `nz_data` holds generated placeholders instead of stored values
    pub fn values_synthetic(&self) -> bool {
        self.synthetic_values
    }

    /// Mutable access to the stored values
    ///
    /// The sparsity structure is fixed after construction; only values may
    /// change. Views cannot exist while this borrow is live.
    pub fn nz_data_mut(&mut self) -> &mut [V] {
        &mut self.nz_data
    }

    /// Borrow the whole matrix as a view
    pub fn view(&self) -> CsrView<'_, I, V> {
        CsrView::from_parts(
            self.metadata,
            &self.ind_ptrs,
            &self.inds,
            &self.nz_data,
            self.name.clone(),
        )
    }

    /// Decompose into `(metadata, ind_ptrs, inds, nz_data)`
    pub fn into_parts(self) -> (SparseMatrixMetadata, Vec<I>, Vec<I>, Vec<V>) {
        (self.metadata, self.ind_ptrs, self.inds, self.nz_data)
    }
}

impl<I: IndexType, V: ValueType> SparseMatrix for CsrMatrix<I, V> {
    type Index = I;
    type Value = V;

    fn metadata(&self) -> &SparseMatrixMetadata {
        &self.metadata
    }

    fn ind_ptrs(&self) -> &[I] {
        &self.ind_ptrs
    }

    fn inds(&self) -> &[I] {
        &self.inds
    }

    fn nz_data(&self) -> &[V] {
        &self.nz_data
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csr_core::{MatrixOperations, StructureError};

    #[test]
    fn test_identity() {
        for n in 1..8 {
            let eye = CsrMatrix::<u32, f64>::identity(n).unwrap();
            assert_eq!(eye.validate(), Ok(()));
            assert!(eye.is_square());
            assert_eq!(eye.nnz(), n);
            assert_eq!(eye.name(), "eye");
            for r in 0..n {
                assert_eq!(eye.row_entries(r), vec![(r, 1.0)]);
            }
        }
    }

    #[test]
    fn test_identity_metadata() {
        let eye = CsrMatrix::<u64, f32>::identity(4).unwrap();
        let md = eye.metadata();
        assert_eq!((md.rows, md.cols, md.nz), (4, 4, 4));
        assert_eq!((md.starting_row, md.starting_col), (0, 0));
        assert_eq!((md.bytes_per_ind, md.bytes_per_val), (8, 4));
        assert_eq!(eye.ind_ptrs(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dense() {
        for n in 1..6 {
            let dense = CsrMatrix::<u32, u64>::dense(n).unwrap();
            assert_eq!(dense.validate(), Ok(()));
            assert_eq!(dense.nnz(), n * n);
            assert_eq!(dense.name(), "dense");
            for r in 0..n {
                let expected: Vec<(usize, u64)> =
                    (0..n).map(|c| (c, (r * n + c + 1) as u64)).collect();
                assert_eq!(dense.row_entries(r), expected);
            }
        }
    }

    #[test]
    fn test_dense_worked_example() {
        let dense = CsrMatrix::<u32, f32>::dense(3).unwrap();
        assert_eq!(dense.ind_ptrs(), &[0, 3, 6, 9]);
        assert_eq!(dense.inds(), &[0, 1, 2, 0, 1, 2, 0, 1, 2]);
        assert_eq!(
            dense.nz_data(),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }

    #[test]
    fn test_empty_fixtures() {
        let eye = CsrMatrix::<u32, f32>::identity(0).unwrap();
        assert_eq!(eye.dimensions(), (0, 0));
        assert_eq!(eye.ind_ptrs(), &[0]);
        assert_eq!(eye.validate(), Ok(()));

        let dense = CsrMatrix::<u32, f32>::dense(0).unwrap();
        assert_eq!(dense.nnz(), 0);
        assert_eq!(dense.validate(), Ok(()));
    }

    #[test]
    fn test_index_overflow() {
        // 256 * 256 entries do not fit u16 pointers
        assert_eq!(
            CsrMatrix::<u16, f32>::dense(256).unwrap_err(),
            CsrError::IndexOverflow
        );
        assert!(CsrMatrix::<u16, f32>::dense(255).is_ok());
        assert_eq!(
            CsrMatrix::<u16, f32>::identity(70_000).unwrap_err(),
            CsrError::IndexOverflow
        );
    }

    #[test]
    fn test_try_new() {
        let m = CsrMatrix::<u32, f32>::try_new(
            2,
            4,
            vec![0, 1, 3],
            vec![3, 0, 2],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        assert_eq!(m.name(), DEFAULT_NAME);
        assert!(!m.is_square());
        assert_eq!(m.get(0, 3), Some(1.0));
        assert_eq!(m.get(1, 2), Some(3.0));
        assert_eq!(m.get(1, 1), None);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 9), None);
        assert_eq!(m.row_nnz(1), Some(2));

        let err = CsrMatrix::<u32, f32>::try_new(2, 2, vec![0, 1, 3], vec![0, 5, 1], vec![1.0; 3])
            .unwrap_err();
        assert_eq!(err, CsrError::InvalidStructure(StructureError::ColumnOutOfRange));

        let err = CsrMatrix::<u32, f32>::try_new(1, 2, vec![1, 2], vec![0], vec![1.0])
            .unwrap_err();
        assert_eq!(err, CsrError::InvalidStructure(StructureError::IndPtrOutOfRange));
    }

    #[test]
    fn test_whole_view_and_parts() {
        let eye = CsrMatrix::<u32, f32>::identity(3).unwrap();
        let view = eye.view();
        assert_eq!(view.name(), "eye");
        assert_eq!(view.metadata(), eye.metadata());
        assert!(std::ptr::eq(view.nz_data(), eye.nz_data()));
        assert_eq!(view.to_owned_matrix(), eye);

        let (metadata, ind_ptrs, inds, nz_data) = eye.into_parts();
        assert_eq!((metadata.rows, metadata.nz), (3, 3));
        assert_eq!(ind_ptrs, vec![0, 1, 2, 3]);
        assert_eq!(inds, vec![0, 1, 2]);
        assert_eq!(nz_data, vec![1.0; 3]);
    }

    #[test]
    fn test_names_and_summary() {
        let mut m = CsrMatrix::<u32, f64>::dense(2).unwrap().with_name("fixture");
        assert_eq!(m.summary(), "fixture: 2 rows x 2 cols, 4 nonzeros");
        m.set_name("renamed");
        assert_eq!(m.name(), "renamed");
        assert!(!m.values_synthetic());
    }
}
