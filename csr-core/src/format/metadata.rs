//! Fixed-layout metadata record for CSR matrices
//!
//! The record is the only data shape stores and consumers must agree on:
//! seven unsigned 32-bit fields, laid out as a `#[repr(C)]` struct. Its byte
//! image is the plain native-endian dump of those fields.

use bytemuck::{Pod, Zeroable};

use crate::traits::{IndexType, ValueType};
use crate::{CsrError, Component, Result};

/// Shape and encoding of a CSR matrix or row-partitioned view
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SparseMatrixMetadata {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
    /// Number of explicitly stored entries
    pub nz: u32,
    /// Row of the top-left corner within the matrix this was sliced from
    pub starting_row: u32,
    /// Column of the top-left corner within the matrix this was sliced from
    pub starting_col: u32,
    /// Width in bytes of a stored index
    pub bytes_per_ind: u32,
    /// Width in bytes of a stored value
    pub bytes_per_val: u32,
}

impl SparseMatrixMetadata {
    /// Size of the record in bytes
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Metadata for a root matrix stored with index type `I` and value type `V`
    pub const fn for_types<I: IndexType, V: ValueType>(rows: u32, cols: u32, nz: u32) -> Self {
        Self {
            rows,
            cols,
            nz,
            starting_row: 0,
            starting_col: 0,
            bytes_per_ind: I::WIDTH,
            bytes_per_val: V::WIDTH,
        }
    }

    /// Parse the record from a store buffer
    ///
    /// The buffer must hold exactly [`Self::SIZE`] bytes; no alignment is
    /// required.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bytemuck::try_pod_read_unaligned(bytes)
            .map_err(|_| CsrError::MalformedComponent(Component::Meta))
    }

    /// Byte image of the record
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Metadata of a row slice `[first_row, first_row + rows)` holding `nz` entries
    ///
    /// The starting row is `first_row` within `self` and the starting column
    /// is 0; the offsets stored in `self` are not accumulated. Columns are not
    /// partitioned, so the column count carries over.
    pub const fn row_slice(&self, first_row: u32, rows: u32, nz: u32) -> Self {
        Self {
            rows,
            cols: self.cols,
            nz,
            starting_row: first_row,
            starting_col: 0,
            bytes_per_ind: self.bytes_per_ind,
            bytes_per_val: self.bytes_per_val,
        }
    }

    /// Check the stored index width against `I`
    pub const fn check_index_width<I: IndexType>(&self) -> Result<()> {
        if self.bytes_per_ind != I::WIDTH {
            return Err(CsrError::IndexWidthMismatch {
                stored: self.bytes_per_ind,
                expected: I::WIDTH,
            });
        }
        Ok(())
    }

    /// Check the stored value width against `V`
    pub const fn check_value_width<V: ValueType>(&self) -> Result<()> {
        if self.bytes_per_val != V::WIDTH {
            return Err(CsrError::ValueWidthMismatch {
                stored: self.bytes_per_val,
                expected: V::WIDTH,
            });
        }
        Ok(())
    }

    /// True when rows equal columns
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}
