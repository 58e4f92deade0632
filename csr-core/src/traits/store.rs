//! Component store interface
//!
//! A store resolves a matrix name plus a [`Component`] tag to a raw byte
//! buffer. How the bytes are kept (memory, files, network) is entirely the
//! store's business; the CSR layer only decodes the returned bytes as arrays
//! of the element types it was instantiated with.

use crate::Component;

/// Trait for backends that can supply stored matrix components
pub trait ComponentStore {
    /// Buffer handed back by [`fetch`](ComponentStore::fetch)
    type Buffer<'a>: AsRef<[u8]>
    where
        Self: 'a;

    /// Fetch the raw bytes of `component` for the matrix `matrix`
    ///
    /// Returns `None` if the store holds no such component. Absence is the
    /// only failure a store reports; undecodable buffers are detected by the
    /// caller.
    fn fetch<'a>(&'a self, matrix: &str, component: Component) -> Option<Self::Buffer<'a>>;

    /// Check whether `component` exists for `matrix`
    fn contains(&self, matrix: &str, component: Component) -> bool {
        self.fetch(matrix, component).is_some()
    }
}
