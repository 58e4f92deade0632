//! Error types for CSR operations

use crate::format::Component;

/// Which CSR invariant a structurally invalid matrix violates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureError {
    /// `ind_ptrs` does not hold `rows + 1` entries
    IndPtrLength,
    /// `inds` and `nz_data` do not both hold `nz` entries
    ArrayLength,
    /// `ind_ptrs` decreases somewhere
    NonMonotonicIndPtr,
    /// An index pointer falls outside the stored entries
    IndPtrOutOfRange,
    /// `ind_ptrs[rows] - ind_ptrs[0]` disagrees with `nz`
    NnzMismatch,
    /// A stored column index is not below `cols`
    ColumnOutOfRange,
}

impl core::fmt::Display for StructureError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            StructureError::IndPtrLength => "index pointer array must hold rows + 1 entries",
            StructureError::ArrayLength => "column index and value arrays must hold nz entries",
            StructureError::NonMonotonicIndPtr => "index pointers are not non-decreasing",
            StructureError::IndPtrOutOfRange => "index pointer outside the stored entries",
            StructureError::NnzMismatch => "index pointer span does not match nz",
            StructureError::ColumnOutOfRange => "column index out of range",
        };
        write!(f, "{msg}")
    }
}

/// Broad classification of a [`CsrError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A component is missing, undecodable or structurally invalid
    Format,
    /// Stored element widths disagree with the chosen numeric types
    TypeMismatch,
    /// Invalid row partitioning request
    Partition,
    /// A count or index does not fit the chosen index type
    Capacity,
}

/// Errors that can occur during CSR operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrError {
    /// The store has no buffer for a required component
    MissingComponent(Component),
    /// The store returned a buffer that cannot be decoded as the component
    MalformedComponent(Component),
    /// The loaded arrays violate a CSR invariant
    InvalidStructure(StructureError),
    /// Stored index width differs from the chosen index type
    IndexWidthMismatch { stored: u32, expected: u32 },
    /// Stored value width differs from the chosen value type
    ValueWidthMismatch { stored: u32, expected: u32 },
    /// Partition count must be at least one
    InvalidPartitionCount,
    /// Boundaries must run from 0 to `rows` without decreasing
    InvalidBoundaries,
    /// A dimension or offset does not fit the index type
    IndexOverflow,
}

impl CsrError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CsrError::MissingComponent(_)
            | CsrError::MalformedComponent(_)
            | CsrError::InvalidStructure(_) => ErrorCategory::Format,
            CsrError::IndexWidthMismatch { .. } | CsrError::ValueWidthMismatch { .. } => {
                ErrorCategory::TypeMismatch
            }
            CsrError::InvalidPartitionCount | CsrError::InvalidBoundaries => {
                ErrorCategory::Partition
            }
            CsrError::IndexOverflow => ErrorCategory::Capacity,
        }
    }

    /// True for the load-time format failures
    pub const fn is_format_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Format)
    }

    /// True for the load-time element width failures
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self.category(), ErrorCategory::TypeMismatch)
    }
}

impl core::fmt::Display for CsrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CsrError::MissingComponent(c) => write!(f, "could not load component '{c}'"),
            CsrError::MalformedComponent(c) => write!(f, "malformed component '{c}'"),
            CsrError::InvalidStructure(e) => write!(f, "invalid CSR structure: {e}"),
            CsrError::IndexWidthMismatch { stored, expected } => write!(
                f,
                "bytes per index mismatch: stored {stored}, expected {expected}"
            ),
            CsrError::ValueWidthMismatch { stored, expected } => write!(
                f,
                "bytes per value mismatch: stored {stored}, expected {expected} \
                 (consider synthetic values)"
            ),
            CsrError::InvalidPartitionCount => write!(f, "partition count must be at least 1"),
            CsrError::InvalidBoundaries => write!(f, "invalid row partition boundaries"),
            CsrError::IndexOverflow => write!(f, "value does not fit the index type"),
        }
    }
}

impl core::error::Error for CsrError {}

impl From<StructureError> for CsrError {
    fn from(e: StructureError) -> Self {
        CsrError::InvalidStructure(e)
    }
}

/// Result type for CSR operations
pub type Result<T> = core::result::Result<T, CsrError>;
