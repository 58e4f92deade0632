//! Component store implementations
//!
//! - [`MemoryStore`]: components held in memory, keyed by matrix name
//! - [`DirectoryStore`]: read-only memory-mapped files, one per component

mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "mmap")]
mod directory;
#[cfg(feature = "mmap")]
pub use directory::{DirectoryStore, MappedComponent};
