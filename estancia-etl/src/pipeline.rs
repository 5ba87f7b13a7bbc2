use std::path::Path;

use chrono::Utc;
use estancia_core::sink::CollectionSink;
use estancia_core::{
    hotel, hotel_from_row, room, room_from_row, HotelDocument, RoomDocument, ServiceCatalog,
    ServiceKind,
};
use estancia_store::BulkLoader;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::ingest;

/// Per-stage counts for one pipeline run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub room_services_loaded: u64,
    pub hotel_services_loaded: u64,
    pub hotels_read: usize,
    pub hotels_loaded: u64,
    pub rooms_read: usize,
    pub rooms_loaded: u64,
    pub indexes_built: usize,
}

/// Run every stage of the load in order.
///
/// Stages are strictly sequential: catalogs, catalog collections, hotels,
/// rooms, indexes. A failed stage is logged and the run continues with the
/// next one; only the store connection (established by the caller) is
/// fatal.
pub async fn run(sink: &dyn CollectionSink, data_dir: &Path, batch_size: usize) -> RunSummary {
    let mut summary = RunSummary::default();
    let processed_at = Utc::now();
    let loader = BulkLoader::new(sink, batch_size);

    info!("Loading service catalogs");
    let room_services = catalog_or_empty(data_dir, ServiceKind::Room);
    let hotel_services = catalog_or_empty(data_dir, ServiceKind::Hotel);

    summary.room_services_loaded = loader
        .load(
            ServiceKind::Room.collection(),
            &to_values(&room_services.entries()),
        )
        .await;
    summary.hotel_services_loaded = loader
        .load(
            ServiceKind::Hotel.collection(),
            &to_values(&hotel_services.entries()),
        )
        .await;

    info!("Processing hotel data");
    let hotel_rows = match ingest::read_hotel_rows(&data_dir.join(ingest::HOTELS_FILE)) {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to read hotel data: {:#}", e);
            Vec::new()
        }
    };
    summary.hotels_read = hotel_rows.len();

    let bar = progress(hotel_rows.len() as u64, "hotels");
    let hotels: Vec<HotelDocument> = hotel_rows
        .iter()
        .filter_map(|row| {
            bar.inc(1);
            hotel_from_row(row, &hotel_services, processed_at)
        })
        .collect();
    bar.finish_and_clear();
    info!(
        "Transformed {} of {} hotel rows",
        hotels.len(),
        hotel_rows.len()
    );
    summary.hotels_loaded = loader.load(hotel::COLLECTION, &to_values(&hotels)).await;

    info!("Processing room data");
    let room_rows = match ingest::read_room_rows(&data_dir.join(ingest::ROOMS_FILE)) {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to read room data: {:#}", e);
            Vec::new()
        }
    };
    summary.rooms_read = room_rows.len();

    let bar = progress(room_rows.len() as u64, "rooms");
    let rooms: Vec<RoomDocument> = room_rows
        .iter()
        .map(|row| {
            bar.inc(1);
            room_from_row(row, &room_services, processed_at)
        })
        .collect();
    bar.finish_and_clear();
    summary.rooms_loaded = loader.load(room::COLLECTION, &to_values(&rooms)).await;

    info!("Creating indexes");
    summary.indexes_built = estancia_store::indices::build_indexes(sink).await;

    summary
}

fn catalog_or_empty(data_dir: &Path, kind: ServiceKind) -> ServiceCatalog {
    let file = match kind {
        ServiceKind::Room => ingest::ROOM_SERVICES_FILE,
        ServiceKind::Hotel => ingest::HOTEL_SERVICES_FILE,
    };
    let path = data_dir.join(file);
    match ingest::read_catalog(&path, kind) {
        Ok(catalog) => {
            info!("Loaded {} services from {}", catalog.len(), path.display());
            catalog
        }
        Err(e) => {
            error!("Failed to load service catalog {}: {:#}", path.display(), e);
            ServiceCatalog::new(kind)
        }
    }
}

fn to_values<T: Serialize>(items: &[T]) -> Vec<Value> {
    items
        .iter()
        .filter_map(|item| match serde_json::to_value(item) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Failed to serialize document: {}", e);
                None
            }
        })
        .collect()
}

fn progress(len: u64, label: &str) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar.set_message(label.to_string());
    bar
}
