//! In-memory component store

use bytemuck::Pod;
use csr_core::{Component, ComponentStore, SparseMatrix};
use hashbrown::HashMap;

type Slots = [Option<Vec<u8>>; 4];

/// Component buffers held in memory, one slot per component per matrix
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    matrices: HashMap<String, Slots>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes for `component` of `matrix`, returning the bytes replaced
    pub fn insert(
        &mut self,
        matrix: impl Into<String>,
        component: Component,
        bytes: Vec<u8>,
    ) -> Option<Vec<u8>> {
        let slots = self.matrices.entry(matrix.into()).or_default();
        slots[component.to_u8() as usize].replace(bytes)
    }

    /// Store a typed array as its native-endian byte image
    pub fn insert_array<T: Pod>(
        &mut self,
        matrix: impl Into<String>,
        component: Component,
        values: &[T],
    ) -> Option<Vec<u8>> {
        self.insert(matrix, component, bytemuck::cast_slice(values).to_vec())
    }

    /// Store all four components of `matrix` under its name
    ///
    /// Index pointers of a view are rebased to zero so the stored matrix
    /// loads as a root matrix. Its metadata, including the starting row, is
    /// stored unchanged.
    pub fn insert_matrix<M: SparseMatrix + ?Sized>(&mut self, matrix: &M) {
        let name = matrix.name();
        let ptrs = matrix.ind_ptrs();
        let rebased: Vec<M::Index> = match ptrs.first() {
            Some(&base) => ptrs.iter().map(|&p| p - base).collect(),
            None => Vec::new(),
        };

        self.insert(name, Component::Meta, matrix.metadata().as_bytes().to_vec());
        self.insert_array(name, Component::IndPtr, &rebased);
        self.insert_array(name, Component::Inds, matrix.inds());
        self.insert_array(name, Component::NzData, matrix.nz_data());
    }

    /// Remove one component, dropping the matrix entry once it is empty
    pub fn remove(&mut self, matrix: &str, component: Component) -> Option<Vec<u8>> {
        let slots = self.matrices.get_mut(matrix)?;
        let removed = slots[component.to_u8() as usize].take();
        if slots.iter().all(Option::is_none) {
            self.matrices.remove(matrix);
        }
        removed
    }

    /// Remove every component of `matrix`, returning whether it was present
    pub fn remove_matrix(&mut self, matrix: &str) -> bool {
        self.matrices.remove(matrix).is_some()
    }

    /// Number of matrices with at least one stored component
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Names of the stored matrices, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matrices.keys().map(String::as_str)
    }
}

impl ComponentStore for MemoryStore {
    type Buffer<'a> = &'a [u8]
    where
        Self: 'a;

    fn fetch<'a>(&'a self, matrix: &str, component: Component) -> Option<&'a [u8]> {
        self.matrices.get(matrix)?[component.to_u8() as usize].as_deref()
    }
}
