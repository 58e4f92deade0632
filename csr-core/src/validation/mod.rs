//! Validation utilities for CSR matrices
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod structure;

pub use bounds::{validate_array_bounds, validate_element_count};
pub use structure::{validate_boundaries, validate_csr, validate_root_csr};
