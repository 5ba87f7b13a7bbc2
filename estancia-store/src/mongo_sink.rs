use async_trait::async_trait;
use estancia_core::sink::{CollectionSink, IndexKey, IndexSpec, SinkError};
use mongodb::bson::{self, Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use serde_json::Value;

use crate::database::DbClient;

#[async_trait]
impl CollectionSink for DbClient {
    async fn reset_collection(&self, collection: &str) -> Result<(), SinkError> {
        self.db.collection::<Document>(collection).drop().await?;
        Ok(())
    }

    async fn insert_batch(&self, collection: &str, batch: &[Value]) -> Result<u64, SinkError> {
        let mut docs = Vec::with_capacity(batch.len());
        for value in batch {
            docs.push(bson::to_document(value)?);
        }

        // Unordered: one bad document does not block the rest of the batch
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_many(docs)
            .ordered(false)
            .await?;

        Ok(result.inserted_ids.len() as u64)
    }

    async fn ensure_index(&self, spec: &IndexSpec) -> Result<(), SinkError> {
        let mut keys = Document::new();
        for (field, key) in &spec.keys {
            let value = match key {
                IndexKey::Ascending => Bson::Int32(1),
                IndexKey::Geo2dSphere => Bson::String("2dsphere".to_string()),
            };
            keys.insert(field.to_string(), value);
        }

        let options = IndexOptions::builder().unique(spec.unique).build();
        let model = IndexModel::builder().keys(keys).options(options).build();

        self.db
            .collection::<Document>(spec.collection)
            .create_index(model)
            .await?;
        Ok(())
    }
}
