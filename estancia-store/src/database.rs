use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("MongoDB connection failed: {0}")]
    Connect(#[source] mongodb::error::Error),
    #[error("MongoDB ping failed: {0}")]
    Ping(#[source] mongodb::error::Error),
}

/// Handle to the target database, shared sequentially by every write.
#[derive(Clone)]
pub struct DbClient {
    pub db: Database,
}

impl DbClient {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(StoreError::Connect)?;
        let db = client.database(database);

        // Verify the connection before any stage runs
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::Ping)?;
        info!("Connected to MongoDB database `{}`", database);

        Ok(Self { db })
    }
}
