use async_trait::async_trait;
use serde_json::Value;

pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Kind of a single index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKey {
    Ascending,
    Geo2dSphere,
}

/// Declarative description of one index on one collection.
#[derive(Debug, Clone)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub keys: Vec<(&'static str, IndexKey)>,
    pub unique: bool,
}

/// Write seam over the document store.
///
/// The pipeline only ever talks to the store through this trait, so the
/// load path is exercisable against an in-memory implementation.
#[async_trait]
pub trait CollectionSink: Send + Sync {
    /// Remove every existing document in the collection.
    async fn reset_collection(&self, collection: &str) -> Result<(), SinkError>;

    /// Insert one batch unordered; returns the number of documents written.
    async fn insert_batch(&self, collection: &str, batch: &[Value]) -> Result<u64, SinkError>;

    /// Apply one index declaration.
    async fn ensure_index(&self, spec: &IndexSpec) -> Result<(), SinkError>;
}
