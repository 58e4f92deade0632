//! Partition a matrix by rows and process the views on worker threads
//!
//! Run with `RUST_LOG=debug` to see the load and partition events.

use csr::{
    CsrMatrix, MatrixOperations, MemoryStore, PartitionStrategy, RowPartition, SparseMatrix,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> csr::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = MemoryStore::new();
    store.insert_matrix(&CsrMatrix::<u32, f64>::dense(8)?);
    store.insert_matrix(&CsrMatrix::<u32, f64>::identity(8)?);

    let dense = CsrMatrix::<u32, f64>::load_from_store(&store, "dense")?;
    println!("{}", dense.summary());

    // The compatibility formula is not always monotonic
    let compatible = dense.row_partition_boundaries(3)?;
    println!("compatible boundaries for 3 partitions: {compatible:?}");
    match dense.partition_by_rows(&compatible) {
        Ok(views) => println!("   usable, {} views", views.len()),
        Err(err) => println!("   rejected: {err}"),
    }

    let balanced = dense.row_partition_boundaries_with(3, PartitionStrategy::Balanced)?;
    println!("balanced boundaries for 3 partitions: {balanced:?}");
    let views = dense.partition_by_rows(&balanced)?;

    // Views borrow the loaded matrix, so scoped threads can share it
    let sums: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = views
            .iter()
            .map(|view| scope.spawn(move || view.nz_data().iter().sum::<f64>()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or(f64::NAN))
            .collect()
    });

    for (view, sum) in views.iter().zip(&sums) {
        println!(
            "   {} (rows {}..{}): sum {sum}",
            view.summary(),
            view.starting_row(),
            view.starting_row() + view.rows()
        );
    }

    let eye = CsrMatrix::<u32, f64>::load_from_store(&store, "eye")?;
    let halves = eye.partition_rows(2, PartitionStrategy::Balanced)?;
    let second = halves[1].to_owned_matrix();
    println!(
        "{} copied out, first pointer {:?}, entry (0, 4) = {:?}",
        second.name(),
        second.ind_ptrs().first(),
        second.get(0, 4)
    );

    Ok(())
}
