use std::path::Path;

use anyhow::Context;
use estancia_core::{HotelRow, RoomRow, ServiceCatalog, ServiceKind};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

pub const ROOM_SERVICES_FILE: &str = "servicios_habitacion.csv";
pub const HOTEL_SERVICES_FILE: &str = "servicios_hotel.csv";
pub const HOTELS_FILE: &str = "hoteles.csv";
pub const ROOMS_FILE: &str = "precios_habitaciones.csv";

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: i64,
    name: String,
}

/// Read one `id,name` reference table into a catalog.
///
/// Rows that fail to deserialize are logged and skipped; duplicate ids
/// keep the last row.
pub fn read_catalog(path: &Path, kind: ServiceKind) -> anyhow::Result<ServiceCatalog> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut catalog = ServiceCatalog::new(kind);
    for (i, record) in reader.deserialize::<CatalogRow>().enumerate() {
        match record {
            Ok(row) => catalog.insert(row.id, &row.name),
            // i + 2: 1-based with the header line counted
            Err(e) => warn!("Skipping row {} of {}: {}", i + 2, path.display(), e),
        }
    }
    Ok(catalog)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => warn!("Skipping row {} of {}: {}", i + 2, path.display(), e),
        }
    }
    Ok(rows)
}

pub fn read_hotel_rows(path: &Path) -> anyhow::Result<Vec<HotelRow>> {
    read_rows(path)
}

pub fn read_room_rows(path: &Path) -> anyhow::Result<Vec<RoomRow>> {
    read_rows(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_catalog_skips_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HOTEL_SERVICES_FILE);
        fs::write(&path, "id,name\n1,Pool\nnot-a-number,Spa\n2, Parking \n").unwrap();

        let catalog = read_catalog(&path, ServiceKind::Hotel).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2), Some("Parking"));
    }

    #[test]
    fn test_read_catalog_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_catalog(&dir.path().join("absent.csv"), ServiceKind::Room).is_err());
    }

    #[test]
    fn test_read_hotel_rows_empty_fields_become_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HOTELS_FILE);
        fs::write(
            &path,
            "id_hotel,hotel_name,stars,price,address,lat,lon,vote_booking,type,description,id_country,checkin_min,checkin_max,checkout_min,checkout_max,facilities\n\
             1,Hotel Mar,4,,Calle Sol 2,36.7,-4.4,8.1,2,,34,14:00,22:00,08:00,11:00,\"[1,2]\"\n\
             2,,3,50.0,,36.8,-4.5,,1,,34,,,,,[]\n",
        )
        .unwrap();

        let rows = read_hotel_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].price, None);
        assert_eq!(rows[0].facilities.as_deref(), Some("[1,2]"));
        assert_eq!(rows[1].hotel_name, None);
        assert_eq!(rows[1].checkin_min, None);
    }

    #[test]
    fn test_read_room_rows_skips_unparseable_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ROOMS_FILE);
        fs::write(
            &path,
            "id,id_hotel,title,start_date,end_date,capacity,room_size,price,facilities\n\
             10,1,Doble,2024-06-01,2024-06-15,2,24,120,[4]\n\
             oops,1,Rota,2024-06-01,2024-06-15,2,24,120,[4]\n",
        )
        .unwrap();

        let rows = read_room_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 10);
    }
}
