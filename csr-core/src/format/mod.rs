//! Data shapes exchanged with component stores
//!
//! This module contains the metadata record and the component tags. No I/O
//! and no store-specific byte layout beyond the metadata record itself.

pub mod component;
pub mod metadata;

pub use component::{Component, UnknownComponent};
pub use metadata::SparseMatrixMetadata;
