//! Abstract interfaces for CSR matrices
//!
//! This module defines all trait abstractions used across the workspace.
//! Traits are pure interfaces - concrete matrices and stores live in `csr`.

pub mod element;
pub mod matrix;
pub mod store;

pub use element::{IndexType, ValueType};
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::SparseMatrix;
pub use store::ComponentStore;
