use estancia_core::indices::index_specs;
use estancia_core::sink::CollectionSink;
use tracing::{error, info};

/// Apply the declared index set after the load.
///
/// Each failure is logged and skipped; loaded data is never rolled back.
/// Returns the number of indexes created.
pub async fn build_indexes(sink: &dyn CollectionSink) -> usize {
    let mut built = 0;
    for spec in index_specs() {
        match sink.ensure_index(&spec).await {
            Ok(()) => built += 1,
            Err(e) => error!(
                "Failed to create index on `{}` ({:?}): {}",
                spec.collection, spec.keys, e
            ),
        }
    }
    info!("Created {} indexes", built);
    built
}
