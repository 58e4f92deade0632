#![no_std]

//! CSR Core - Compressed Sparse Row matrix definitions
//!
//! This crate provides the metadata record, element traits, matrix and store
//! interfaces, invariant checks and partition arithmetic shared by every CSR
//! matrix implementation. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod format;
pub mod partition;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use partition::PartitionStrategy;
pub use traits::*;
