use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ServiceCatalog;
use crate::normalize::{clean_text, parse_facility_list};

/// Target collection for hotel documents.
pub const COLLECTION: &str = "hoteles";

/// One raw row of `hoteles.csv`, column names as in the source file.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelRow {
    pub id_hotel: i64,
    pub hotel_name: Option<String>,
    pub stars: Option<f64>,
    pub price: Option<f64>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub vote_booking: Option<f64>,
    #[serde(rename = "type")]
    pub hotel_type: Option<f64>,
    pub description: Option<String>,
    pub id_country: i64,
    pub checkin_min: Option<String>,
    pub checkin_max: Option<String>,
    pub checkout_min: Option<String>,
    pub checkout_max: Option<String>,
    pub facilities: Option<String>,
}

/// GeoJSON point, longitude first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub point_type: &'static str,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            point_type: "Point",
            coordinates: [lon, lat],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeWindow {
    pub min: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub checkin: TimeWindow,
    pub checkout: TimeWindow,
}

/// One hotel as stored in the `hoteles` collection.
#[derive(Debug, Clone, Serialize)]
pub struct HotelDocument {
    pub id: i64,
    pub name: String,
    pub stars: i32,
    pub base_price: Option<f64>,
    pub address: Option<String>,
    pub location: GeoPoint,
    pub rating: Option<f64>,
    #[serde(rename = "type")]
    pub hotel_type: i32,
    pub description: Option<String>,
    pub country_id: i64,
    pub schedule: Schedule,
    pub facility_ids: Vec<i64>,
    pub facility_names: Vec<String>,
    pub processed_at: DateTime<Utc>,
}

/// Map one source row to zero or one hotel document.
///
/// Rows missing name, latitude, or longitude are dropped. Every other
/// field fails open to its default.
pub fn hotel_from_row(
    row: &HotelRow,
    services: &ServiceCatalog,
    processed_at: DateTime<Utc>,
) -> Option<HotelDocument> {
    let name = clean_text(row.hotel_name.as_deref())?;
    let lat = row.lat?;
    let lon = row.lon?;

    let facilities = parse_facility_list(row.facilities.as_deref());
    let facility_names = services.resolve_names(&facilities.ids);

    Some(HotelDocument {
        id: row.id_hotel,
        name,
        stars: row.stars.map(|s| s as i32).unwrap_or(0),
        base_price: row.price,
        address: clean_text(row.address.as_deref()),
        location: GeoPoint::new(lon, lat),
        rating: row.vote_booking,
        hotel_type: row.hotel_type.map(|t| t as i32).unwrap_or(0),
        description: clean_text(row.description.as_deref()),
        country_id: row.id_country,
        schedule: Schedule {
            checkin: TimeWindow {
                min: clean_text(row.checkin_min.as_deref()),
                max: clean_text(row.checkin_max.as_deref()),
            },
            checkout: TimeWindow {
                min: clean_text(row.checkout_min.as_deref()),
                max: clean_text(row.checkout_max.as_deref()),
            },
        },
        facility_ids: facilities.ids,
        facility_names,
        processed_at,
    })
}
