use crate::catalog::ServiceKind;
use crate::sink::{IndexKey, IndexSpec};
use crate::{hotel, room};

/// Every index the query layer expects, across all four collections.
pub fn index_specs() -> Vec<IndexSpec> {
    use IndexKey::{Ascending, Geo2dSphere};

    vec![
        IndexSpec {
            collection: hotel::COLLECTION,
            keys: vec![("id", Ascending)],
            unique: true,
        },
        IndexSpec {
            collection: hotel::COLLECTION,
            keys: vec![("location", Geo2dSphere)],
            unique: false,
        },
        IndexSpec {
            collection: hotel::COLLECTION,
            keys: vec![("stars", Ascending)],
            unique: false,
        },
        IndexSpec {
            collection: hotel::COLLECTION,
            keys: vec![("base_price", Ascending)],
            unique: false,
        },
        IndexSpec {
            collection: hotel::COLLECTION,
            keys: vec![("country_id", Ascending)],
            unique: false,
        },
        IndexSpec {
            collection: room::COLLECTION,
            keys: vec![("id", Ascending)],
            unique: true,
        },
        IndexSpec {
            collection: room::COLLECTION,
            keys: vec![("hotel_id", Ascending)],
            unique: false,
        },
        IndexSpec {
            collection: room::COLLECTION,
            keys: vec![("price", Ascending)],
            unique: false,
        },
        IndexSpec {
            collection: room::COLLECTION,
            keys: vec![("capacity", Ascending)],
            unique: false,
        },
        IndexSpec {
            collection: room::COLLECTION,
            keys: vec![("date_range.start", Ascending), ("date_range.end", Ascending)],
            unique: false,
        },
        IndexSpec {
            collection: ServiceKind::Room.collection(),
            keys: vec![("id", Ascending)],
            unique: true,
        },
        IndexSpec {
            collection: ServiceKind::Hotel.collection(),
            keys: vec![("id", Ascending)],
            unique: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_indexes_are_the_id_indexes() {
        let specs = index_specs();
        assert_eq!(specs.len(), 12);

        let unique: Vec<_> = specs
            .iter()
            .filter(|s| s.unique)
            .map(|s| (s.collection, s.keys[0].0))
            .collect();
        assert_eq!(
            unique,
            vec![
                ("hoteles", "id"),
                ("habitaciones", "id"),
                ("servicios_habitacion", "id"),
                ("servicios_hotel", "id"),
            ]
        );
    }

    #[test]
    fn test_geo_index_on_hotel_location() {
        let specs = index_specs();
        let geo: Vec<_> = specs
            .iter()
            .filter(|s| s.keys.iter().any(|(_, k)| *k == IndexKey::Geo2dSphere))
            .collect();
        assert_eq!(geo.len(), 1);
        assert_eq!(geo[0].collection, "hoteles");
        assert_eq!(geo[0].keys[0].0, "location");
    }

    #[test]
    fn test_date_range_index_is_compound() {
        let specs = index_specs();
        let compound = specs.iter().find(|s| s.keys.len() == 2).unwrap();
        assert_eq!(compound.collection, "habitaciones");
        assert_eq!(compound.keys[0].0, "date_range.start");
        assert_eq!(compound.keys[1].0, "date_range.end");
    }
}
