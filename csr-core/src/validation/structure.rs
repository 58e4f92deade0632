//! CSR invariant checks
//!
//! Index pointers are checked relative to their first entry so the same
//! checks hold for root matrices (first entry 0) and for row-partition views,
//! whose pointers keep the offsets of the matrix they were sliced from.

use crate::traits::IndexType;
use crate::{CsrError, Result, SparseMatrixMetadata, StructureError};

/// Validate the arrays of a matrix or view against its metadata
pub fn validate_csr<I: IndexType, V>(
    metadata: &SparseMatrixMetadata,
    ind_ptrs: &[I],
    inds: &[I],
    nz_data: &[V],
) -> Result<()> {
    let rows = metadata.rows as usize;
    let cols = metadata.cols as usize;
    let nz = metadata.nz as usize;

    if ind_ptrs.len() != rows + 1 {
        return Err(StructureError::IndPtrLength.into());
    }
    if inds.len() != nz || nz_data.len() != nz {
        return Err(StructureError::ArrayLength.into());
    }

    let base = ind_ptrs[0]
        .try_index()
        .ok_or(StructureError::IndPtrOutOfRange)?;
    let mut prev = base;
    for ptr in &ind_ptrs[1..] {
        let ptr = ptr.try_index().ok_or(StructureError::IndPtrOutOfRange)?;
        if ptr < prev {
            return Err(StructureError::NonMonotonicIndPtr.into());
        }
        prev = ptr;
    }
    if prev - base != nz {
        return Err(StructureError::NnzMismatch.into());
    }

    for ind in inds {
        match ind.try_index() {
            Some(col) if col < cols => {}
            _ => return Err(StructureError::ColumnOutOfRange.into()),
        }
    }

    Ok(())
}

/// Validate a root matrix, whose index pointers must start at zero
pub fn validate_root_csr<I: IndexType, V>(
    metadata: &SparseMatrixMetadata,
    ind_ptrs: &[I],
    inds: &[I],
    nz_data: &[V],
) -> Result<()> {
    validate_csr(metadata, ind_ptrs, inds, nz_data)?;
    if ind_ptrs[0].try_index() != Some(0) {
        return Err(StructureError::IndPtrOutOfRange.into());
    }
    Ok(())
}

/// Validate row partition boundaries for a matrix with `rows` rows
///
/// Boundaries must hold at least two entries, start at 0, end at `rows`
/// and never decrease. Repeated entries (empty partitions) are allowed.
pub fn validate_boundaries(boundaries: &[usize], rows: usize) -> Result<()> {
    match (boundaries.first(), boundaries.last()) {
        (Some(&0), Some(&last)) if boundaries.len() >= 2 && last == rows => {}
        _ => return Err(CsrError::InvalidBoundaries),
    }
    if boundaries.windows(2).any(|w| w[0] > w[1]) {
        return Err(CsrError::InvalidBoundaries);
    }
    Ok(())
}
