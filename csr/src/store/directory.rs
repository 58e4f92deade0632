//! Read-only store over a directory of component files
//!
//! Matrix `m` is stored as `<root>/m/meta.bin`, `<root>/m/indptr.bin`,
//! `<root>/m/inds.bin` and `<root>/m/nzdata.bin`. Each file holds the raw
//! native-endian bytes of one component and is memory mapped on fetch.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csr_core::{Component, ComponentStore};
use memmap2::{Mmap, MmapOptions};
use tracing::{trace, warn};

/// Extension of component files
pub const COMPONENT_EXTENSION: &str = "bin";

/// A fetched component file
///
/// Zero-length files are never mapped.
#[derive(Debug)]
pub enum MappedComponent {
    Mapped(Mmap),
    Empty,
}

impl AsRef<[u8]> for MappedComponent {
    fn as_ref(&self) -> &[u8] {
        match self {
            MappedComponent::Mapped(mmap) => &mmap[..],
            MappedComponent::Empty => &[],
        }
    }
}

/// Component store backed by one directory per matrix
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

fn is_plain_name(matrix: &str) -> bool {
    !matrix.is_empty()
        && matrix != "."
        && matrix != ".."
        && !matrix.contains(['/', '\\', '\0'])
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `component` of `matrix`
    ///
    /// Returns `None` for names that are not a single path component.
    pub fn component_path(&self, matrix: &str, component: Component) -> Option<PathBuf> {
        if !is_plain_name(matrix) {
            return None;
        }
        let mut path = self.root.join(matrix);
        path.push(component.as_str());
        path.set_extension(COMPONENT_EXTENSION);
        Some(path)
    }

    fn map(path: &Path) -> std::io::Result<MappedComponent> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(MappedComponent::Empty);
        }
        // SAFETY: The mapping is read-only and owned by the returned buffer.
        // Store files must not be truncated or rewritten while a fetched
        // buffer is alive; loads copy the bytes out before returning.
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Ok(MappedComponent::Mapped(mmap))
    }
}

impl ComponentStore for DirectoryStore {
    type Buffer<'a> = MappedComponent
    where
        Self: 'a;

    fn fetch<'a>(&'a self, matrix: &str, component: Component) -> Option<MappedComponent> {
        let Some(path) = self.component_path(matrix, component) else {
            warn!(matrix, "rejected matrix name that is not a plain file name");
            return None;
        };

        match Self::map(&path) {
            Ok(buffer) => {
                trace!(path = %path.display(), bytes = buffer.as_ref().len(), "mapped component");
                Some(buffer)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to map component");
                None
            }
        }
    }
}
