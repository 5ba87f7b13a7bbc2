use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ServiceCatalog;
use crate::normalize::{clean_text, parse_date_range, parse_facility_list, DateRange};

/// Target collection for room documents.
pub const COLLECTION: &str = "habitaciones";

/// Pattern of the `start_date` / `end_date` columns.
pub const DATE_PATTERN: &str = "%Y-%m-%d";

/// One raw row of `precios_habitaciones.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomRow {
    pub id: i64,
    pub id_hotel: i64,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub capacity: Option<f64>,
    pub room_size: Option<f64>,
    pub price: Option<f64>,
    pub facilities: Option<String>,
}

/// One room/price entry as stored in the `habitaciones` collection.
#[derive(Debug, Clone, Serialize)]
pub struct RoomDocument {
    pub id: i64,
    pub hotel_id: i64,
    pub title: Option<String>,
    pub date_range: DateRange,
    pub capacity: i64,
    pub size: Option<i64>,
    pub price: i64,
    pub facility_ids: Vec<i64>,
    pub facility_names: Vec<String>,
    pub processed_at: DateTime<Utc>,
}

/// Map one source row to exactly one room document.
///
/// Unlike hotels there is no existence gate: malformed dates degrade the
/// range to empty and numeric fields fail open to their defaults.
pub fn room_from_row(
    row: &RoomRow,
    services: &ServiceCatalog,
    processed_at: DateTime<Utc>,
) -> RoomDocument {
    let facilities = parse_facility_list(row.facilities.as_deref());
    let facility_names = services.resolve_names(&facilities.ids);

    RoomDocument {
        id: row.id,
        hotel_id: row.id_hotel,
        title: clean_text(row.title.as_deref()),
        date_range: parse_date_range(
            row.start_date.as_deref(),
            row.end_date.as_deref(),
            DATE_PATTERN,
        ),
        capacity: row.capacity.map(|c| c as i64).unwrap_or(0),
        size: row.room_size.filter(|s| *s > 0.0).map(|s| s as i64),
        price: row.price.map(|p| p as i64).unwrap_or(0),
        facility_ids: facilities.ids,
        facility_names,
        processed_at,
    }
}
