//! Load matrices from a directory of memory-mapped component files
//!
//! Writes a small matrix into a scratch directory as
//! `<root>/<name>/{meta,indptr,inds,nzdata}.bin`, then loads it back with
//! stored and with synthetic values.

use std::fs;

use csr::{
    Component, CsrMatrix, DirectoryStore, LoadOptions, MatrixOperations, RowPartition,
    SparseMatrix,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn write_component(store: &DirectoryStore, name: &str, component: Component, bytes: &[u8]) {
    if let Some(path) = store.component_path(name, component) {
        fs::write(path, bytes).expect("write component file");
    }
}

fn write_matrix<M: SparseMatrix>(store: &DirectoryStore, matrix: &M) {
    let name = matrix.name();
    fs::create_dir_all(store.root().join(name)).expect("create matrix directory");
    write_component(store, name, Component::Meta, matrix.metadata().as_bytes());
    write_component(store, name, Component::IndPtr, bytemuck::cast_slice(matrix.ind_ptrs()));
    write_component(store, name, Component::Inds, bytemuck::cast_slice(matrix.inds()));
    write_component(store, name, Component::NzData, bytemuck::cast_slice(matrix.nz_data()));
}

fn main() -> csr::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let root = std::env::temp_dir().join("csr-load-directory-demo");
    let store = DirectoryStore::new(&root);
    println!("Writing components under '{}'", root.display());

    // 4x5 matrix
    //   [1 0 0 2 0]
    //   [0 0 0 0 0]
    //   [0 3 4 0 5]
    //   [6 0 0 0 0]
    let matrix = CsrMatrix::<u32, f64>::try_new(
        4,
        5,
        vec![0, 2, 2, 5, 6],
        vec![0, 3, 1, 2, 4, 0],
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    )?
    .with_name("sample");
    write_matrix(&store, &matrix);

    let loaded = CsrMatrix::<u32, f64>::load_from_store(&store, "sample")?;
    println!("{}", loaded.summary());
    for row in 0..loaded.rows() {
        println!("   row {row}: {:?}", loaded.row_entries(row));
    }

    // Same structure, values replaced by 1..=nz and read as integers
    let options = LoadOptions::default().with_synthetic_values(true);
    let pattern = CsrMatrix::<u32, u16>::load(&store, "sample", options)?;
    println!(
        "synthetic values: {:?} (synthetic = {})",
        pattern.nz_data(),
        pattern.values_synthetic()
    );

    // A stored f64 matrix cannot be loaded as f32
    if let Err(err) = CsrMatrix::<u32, f32>::load_from_store(&store, "sample") {
        println!("loading as f32 fails: {err} ({:?})", err.category());
    }

    for view in loaded.partition_by_rows(&[0, 2, 4])? {
        println!("   {}", view.summary());
    }

    if root.exists() {
        let _ = fs::remove_dir_all(&root);
    }
    Ok(())
}
