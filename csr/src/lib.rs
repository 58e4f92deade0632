//! CSR - Compressed Sparse Row matrices with zero-copy row partitions
//!
//! This library loads sparse matrices from pluggable component stores into
//! owned CSR form and slices them into row-contiguous views that share the
//! parent's storage.
//!
//! ## Architecture
//!
//! CSR follows a clean interface/implementation separation:
//!
//! - **csr-core**: Metadata record, element traits, matrix and store
//!   interfaces, invariant checks and partition arithmetic (no I/O)
//! - **csr**: Owned matrices, borrowed views, loading, and store backends
//!
//! ## Quick Start
//!
//! ```rust
//! use csr::{CsrMatrix, MemoryStore, PartitionStrategy, RowPartition, SparseMatrix};
//!
//! fn example() -> csr::Result<()> {
//!     let mut store = MemoryStore::new();
//!     store.insert_matrix(&CsrMatrix::<u32, f64>::dense(6)?);
//!
//!     // Load by name; index and value widths are checked against the store
//!     let matrix = CsrMatrix::<u32, f64>::load_from_store(&store, "dense")?;
//!
//!     // Split into three views borrowing the matrix's arrays
//!     let parts = matrix.partition_rows(3, PartitionStrategy::Balanced)?;
//!     assert_eq!(parts[1].name(), "dense-p1");
//!     assert_eq!(parts[1].starting_row(), 2);
//!     assert_eq!(parts[1].get(0, 0), Some(13.0));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Zero-copy partitions**: Views borrow from their parent; the borrow
//!   checker keeps the parent alive and unmodified while views exist
//! - **Typed loads**: Stored index and value widths must match the requested
//!   element types
//! - **Memory-mapped stores**: Component files are mapped read-only
//!   (`mmap` feature)
//! - **Serde support**: Metadata and options serialize with serde (`serde`
//!   feature)

// Re-export core abstractions and format definitions
pub use csr_core::{
    // Core traits
    ComponentStore, IndexType, MatrixOperations, SparseMatrix, ValueType,
    // Format definitions
    Component, SparseMatrixMetadata,
    // Partitioning
    PartitionStrategy,
    // Error handling
    CsrError, ErrorCategory, Result, StructureError,
};

// Implementation modules
pub mod load;
pub mod matrix;
pub mod store;
pub mod view;

// Public exports
pub use load::{decode_array, LoadOptions};
pub use matrix::CsrMatrix;
pub use store::MemoryStore;
pub use view::{CsrView, RowPartition};

#[cfg(feature = "mmap")]
pub use store::{DirectoryStore, MappedComponent};
