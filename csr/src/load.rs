//! Loading matrices from a component store
//!
//! Stored arrays are native-endian packed dumps of the element type. They are
//! decoded into owned, properly aligned vectors, so the resulting matrix does
//! not borrow from the store.

use bytemuck::Pod;
use csr_core::validation::{validate_array_bounds, validate_element_count, validate_root_csr};
use csr_core::{
    Component, ComponentStore, CsrError, IndexType, Result, SparseMatrixMetadata, ValueType,
};
use tracing::{debug, instrument, warn};

use crate::matrix::CsrMatrix;

/// Options controlling [`CsrMatrix::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadOptions {
    /// Fill values with `1, 2, ..., nz` instead of reading stored values
    ///
    /// Stored value width is then ignored, which allows loading only the
    /// sparsity structure of a matrix whose values have a different type.
    pub synthetic_values: bool,
}

impl LoadOptions {
    pub fn with_synthetic_values(mut self, synthetic_values: bool) -> Self {
        self.synthetic_values = synthetic_values;
        self
    }
}

/// Decode a component buffer into a vector of `T`
///
/// The buffer length must be a whole number of elements; alignment is not
/// required.
pub fn decode_array<T: Pod>(bytes: &[u8], component: Component) -> Result<Vec<T>> {
    validate_array_bounds::<T>(bytes.len(), component)?;
    Ok(bytemuck::pod_collect_to_vec(bytes))
}

fn fetch_array<S, T>(store: &S, name: &str, component: Component, expected: usize) -> Result<Vec<T>>
where
    S: ComponentStore + ?Sized,
    T: Pod,
{
    let buffer = store
        .fetch(name, component)
        .ok_or(CsrError::MissingComponent(component))?;
    let values = decode_array(buffer.as_ref(), component)?;
    validate_element_count(values.len(), expected, component)?;
    Ok(values)
}

impl<I: IndexType, V: ValueType> CsrMatrix<I, V> {
    /// Load the matrix `name` from `store`
    ///
    /// The stored index width must match `I`, and unless
    /// [`LoadOptions::synthetic_values`] is set, the stored value width must
    /// match `V`. Every CSR invariant is checked before the matrix is
    /// returned.
    ///
    /// With synthetic values the metadata records the width of `V`, since the
    /// values held are of that type.
    #[instrument(level = "debug", skip(store, options), fields(synthetic = options.synthetic_values))]
    pub fn load<S>(store: &S, name: &str, options: LoadOptions) -> Result<Self>
    where
        S: ComponentStore + ?Sized,
    {
        let meta = store
            .fetch(name, Component::Meta)
            .ok_or(CsrError::MissingComponent(Component::Meta))?;
        let mut metadata = SparseMatrixMetadata::from_bytes(meta.as_ref())?;
        drop(meta);

        metadata.check_index_width::<I>()?;
        if !options.synthetic_values {
            metadata.check_value_width::<V>()?;
        }

        let rows = metadata.rows as usize;
        let nz = metadata.nz as usize;
        let ind_ptrs: Vec<I> = fetch_array(store, name, Component::IndPtr, rows + 1)?;
        let inds: Vec<I> = fetch_array(store, name, Component::Inds, nz)?;

        let nz_data = if options.synthetic_values {
            warn!(
                matrix = name,
                stored_width = metadata.bytes_per_val,
                "replacing stored values with synthetic 1..=nz"
            );
            metadata.bytes_per_val = V::WIDTH;
            (1..=nz).map(V::from_usize).collect()
        } else {
            fetch_array(store, name, Component::NzData, nz)?
        };

        validate_root_csr(&metadata, &ind_ptrs, &inds, &nz_data)?;
        debug!(
            rows = metadata.rows,
            cols = metadata.cols,
            nz = metadata.nz,
            "loaded matrix"
        );

        Ok(Self {
            metadata,
            ind_ptrs,
            inds,
            nz_data,
            name: name.to_string(),
            synthetic_values: options.synthetic_values,
        })
    }

    /// Load the matrix `name` from `store` with default options
    pub fn load_from_store<S>(store: &S, name: &str) -> Result<Self>
    where
        S: ComponentStore + ?Sized,
    {
        Self::load(store, name, LoadOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::RowPartition;
    use csr_core::{ErrorCategory, MatrixOperations, SparseMatrix, StructureError};

    /// 3x4 matrix
    ///   [0 1 0 2]
    ///   [0 0 0 0]
    ///   [3 0 4 0]
    fn store_with_sample() -> MemoryStore {
        let mut store = MemoryStore::new();
        let md = SparseMatrixMetadata::for_types::<u32, f64>(3, 4, 4);
        store.insert("sample", Component::Meta, md.as_bytes().to_vec());
        store.insert_array("sample", Component::IndPtr, &[0u32, 2, 2, 4]);
        store.insert_array("sample", Component::Inds, &[1u32, 3, 0, 2]);
        store.insert_array("sample", Component::NzData, &[1.0f64, 2.0, 3.0, 4.0]);
        store
    }

    #[test]
    fn test_load() {
        let store = store_with_sample();
        let m = CsrMatrix::<u32, f64>::load_from_store(&store, "sample").unwrap();
        assert_eq!(m.name(), "sample");
        assert_eq!(m.dimensions(), (3, 4));
        assert_eq!(m.nnz(), 4);
        assert!(!m.values_synthetic());
        assert_eq!(m.row_entries(0), vec![(1, 1.0), (3, 2.0)]);
        assert_eq!(m.row_nnz(1), Some(0));
        assert_eq!(m.get(2, 2), Some(4.0));
        assert_eq!(m.validate(), Ok(()));
    }

    #[test]
    fn test_load_round_trips_stored_matrix() {
        let dense = CsrMatrix::<u64, i32>::dense(4).unwrap();
        let mut store = MemoryStore::new();
        store.insert_matrix(&dense);

        let loaded = CsrMatrix::<u64, i32>::load_from_store(&store, "dense").unwrap();
        assert_eq!(loaded, dense);
    }

    #[test]
    fn test_partition_ignores_stored_offsets() {
        let dense = CsrMatrix::<u32, f32>::dense(3).unwrap();
        for (row, col) in [(5, 7), (u32::MAX, u32::MAX)] {
            let md = SparseMatrixMetadata {
                starting_row: row,
                starting_col: col,
                ..*dense.metadata()
            };
            let mut store = MemoryStore::new();
            store.insert_matrix(&dense);
            store.insert("dense", Component::Meta, md.as_bytes().to_vec());

            let loaded = CsrMatrix::<u32, f32>::load_from_store(&store, "dense").unwrap();
            assert_eq!((loaded.starting_row(), loaded.starting_col()), (row as usize, col as usize));

            let parts = loaded.partition_by_rows(&[0, 1, 3]).unwrap();
            assert_eq!((parts[0].starting_row(), parts[0].starting_col()), (0, 0));
            assert_eq!((parts[1].starting_row(), parts[1].starting_col()), (1, 0));
            assert_eq!(parts[1].get(1, 2), Some(9.0));
        }
    }

    #[test]
    fn test_index_width_mismatch() {
        let store = store_with_sample();
        for options in [LoadOptions::default(), LoadOptions::default().with_synthetic_values(true)] {
            let err = CsrMatrix::<u64, f64>::load(&store, "sample", options).unwrap_err();
            assert_eq!(err, CsrError::IndexWidthMismatch { stored: 4, expected: 8 });
            assert_eq!(err.category(), ErrorCategory::TypeMismatch);
        }
    }

    #[test]
    fn test_value_width_mismatch() {
        let store = store_with_sample();
        let err = CsrMatrix::<u32, f32>::load_from_store(&store, "sample").unwrap_err();
        assert_eq!(err, CsrError::ValueWidthMismatch { stored: 8, expected: 4 });
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_synthetic_values() {
        let mut store = store_with_sample();
        // Stored values are never consulted
        store.remove("sample", Component::NzData);

        let options = LoadOptions::default().with_synthetic_values(true);
        let m = CsrMatrix::<u32, f32>::load(&store, "sample", options).unwrap();
        assert!(m.values_synthetic());
        assert_eq!(m.nz_data(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.metadata().bytes_per_val, 4);
        assert_eq!(m.inds(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_missing_components() {
        let err = CsrMatrix::<u32, f64>::load_from_store(&MemoryStore::new(), "sample");
        assert_eq!(err.unwrap_err(), CsrError::MissingComponent(Component::Meta));

        for component in [Component::IndPtr, Component::Inds, Component::NzData] {
            let mut store = store_with_sample();
            store.remove("sample", component);
            let err = CsrMatrix::<u32, f64>::load_from_store(&store, "sample").unwrap_err();
            assert_eq!(err, CsrError::MissingComponent(component));
            assert!(err.is_format_error());
            assert_eq!(err.to_string(), format!("could not load component '{component}'"));
        }
    }

    #[test]
    fn test_malformed_components() {
        let mut store = store_with_sample();
        store.insert("sample", Component::Meta, vec![0; 27]);
        let err = CsrMatrix::<u32, f64>::load_from_store(&store, "sample").unwrap_err();
        assert_eq!(err, CsrError::MalformedComponent(Component::Meta));

        let mut store = store_with_sample();
        store.insert("sample", Component::Inds, vec![0; 15]);
        let err = CsrMatrix::<u32, f64>::load_from_store(&store, "sample").unwrap_err();
        assert_eq!(err, CsrError::MalformedComponent(Component::Inds));

        // Whole elements, but not as many as the metadata promises
        let mut store = store_with_sample();
        store.insert_array("sample", Component::NzData, &[1.0f64, 2.0, 3.0]);
        let err = CsrMatrix::<u32, f64>::load_from_store(&store, "sample").unwrap_err();
        assert_eq!(err, CsrError::MalformedComponent(Component::NzData));
    }

    #[test]
    fn test_structure_violations() {
        let mut store = store_with_sample();
        store.insert_array("sample", Component::IndPtr, &[0u32, 3, 2, 4]);
        let err = CsrMatrix::<u32, f64>::load_from_store(&store, "sample").unwrap_err();
        assert_eq!(err, CsrError::InvalidStructure(StructureError::NonMonotonicIndPtr));

        let mut store = store_with_sample();
        store.insert_array("sample", Component::Inds, &[1u32, 4, 0, 2]);
        let err = CsrMatrix::<u32, f64>::load_from_store(&store, "sample").unwrap_err();
        assert_eq!(err, CsrError::InvalidStructure(StructureError::ColumnOutOfRange));

        let mut store = store_with_sample();
        store.insert_array("sample", Component::IndPtr, &[1u32, 2, 2, 4]);
        let err = CsrMatrix::<u32, f64>::load_from_store(&store, "sample").unwrap_err();
        assert!(matches!(err, CsrError::InvalidStructure(_)));
    }

    #[test]
    fn test_decode_array_unaligned() {
        let values = [7u64, 9, 11];
        let bytes: &[u8] = bytemuck::cast_slice(&values);
        let mut shifted = vec![0u8; bytes.len() + 1];
        shifted[1..].copy_from_slice(bytes);
        assert_eq!(decode_array::<u64>(&shifted[1..], Component::Inds), Ok(values.to_vec()));
        assert_eq!(
            decode_array::<u64>(&shifted, Component::Inds),
            Err(CsrError::MalformedComponent(Component::Inds))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_options_serde() {
        let options = LoadOptions::default().with_synthetic_values(true);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"synthetic_values":true}"#);
        let back: LoadOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
