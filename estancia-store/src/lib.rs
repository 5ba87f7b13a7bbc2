pub mod app_config;
pub mod bulk_loader;
pub mod database;
pub mod indices;
pub mod mongo_sink;

pub use bulk_loader::BulkLoader;
pub use database::{DbClient, StoreError};
