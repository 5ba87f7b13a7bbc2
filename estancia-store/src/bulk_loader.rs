use estancia_core::sink::CollectionSink;
use serde_json::Value;
use tracing::{error, info, warn};

pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Batched full-replace writer over a `CollectionSink`.
///
/// Every load drops the target collection first, then writes contiguous
/// batches. A failed batch is logged and skipped; the run never retries
/// and never aborts on partial failure.
pub struct BulkLoader<'a> {
    sink: &'a dyn CollectionSink,
    batch_size: usize,
}

impl<'a> BulkLoader<'a> {
    pub fn new(sink: &'a dyn CollectionSink, batch_size: usize) -> Self {
        Self {
            sink,
            batch_size: batch_size.max(1),
        }
    }

    /// Replace the collection contents with `documents`.
    ///
    /// Returns the number of documents actually inserted.
    pub async fn load(&self, collection: &str, documents: &[Value]) -> u64 {
        if documents.is_empty() {
            warn!("No documents to load into `{}`", collection);
            return 0;
        }

        if let Err(e) = self.sink.reset_collection(collection).await {
            error!("Failed to reset collection `{}`: {}", collection, e);
            return 0;
        }
        info!("Collection `{}` reset", collection);

        let mut inserted = 0u64;
        for batch in documents.chunks(self.batch_size) {
            match self.sink.insert_batch(collection, batch).await {
                Ok(count) => inserted += count,
                Err(e) => error!("Failed to insert batch into `{}`: {}", collection, e),
            }
        }

        info!("Inserted {} documents into `{}`", inserted, collection);
        inserted
    }
}
