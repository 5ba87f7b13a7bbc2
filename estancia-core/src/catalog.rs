use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::clean_text;

/// Which reference table a service entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Room,
    Hotel,
}

impl ServiceKind {
    /// Target collection for this reference table.
    pub fn collection(&self) -> &'static str {
        match self {
            ServiceKind::Room => "servicios_habitacion",
            ServiceKind::Hotel => "servicios_hotel",
        }
    }
}

/// One row of a service reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: i64,
    pub name: String,
    pub kind: ServiceKind,
}

/// Lookup table mapping a service code to its human-readable name.
///
/// Duplicate ids: last row wins. Built once per run and passed by value to
/// the transformers.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    kind: ServiceKind,
    names: BTreeMap<i64, String>,
}

impl ServiceCatalog {
    pub fn new(kind: ServiceKind) -> Self {
        Self {
            kind,
            names: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    pub fn insert(&mut self, id: i64, name: &str) {
        let cleaned = clean_text(Some(name)).unwrap_or_default();
        self.names.insert(id, cleaned);
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a facility id list to names, in id-list order.
    ///
    /// Ids absent from the catalog produce no entry, so the result may be
    /// shorter than the input.
    pub fn resolve_names(&self, ids: &[i64]) -> Vec<String> {
        ids.iter()
            .filter_map(|id| self.names.get(id).cloned())
            .collect()
    }

    /// The catalog as loadable documents, ordered by id.
    pub fn entries(&self) -> Vec<ServiceEntry> {
        self.names
            .iter()
            .map(|(id, name)| ServiceEntry {
                id: *id,
                name: name.clone(),
                kind: self.kind,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_row_wins() {
        let mut catalog = ServiceCatalog::new(ServiceKind::Hotel);
        catalog.insert(1, "Pool");
        catalog.insert(1, "Heated pool");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1), Some("Heated pool"));
    }

    #[test]
    fn test_insert_trims_names() {
        let mut catalog = ServiceCatalog::new(ServiceKind::Room);
        catalog.insert(7, "  Minibar ");
        assert_eq!(catalog.get(7), Some("Minibar"));
    }

    #[test]
    fn test_resolve_drops_unknown_ids() {
        let mut catalog = ServiceCatalog::new(ServiceKind::Hotel);
        catalog.insert(1, "Pool");
        catalog.insert(3, "Spa");
        assert_eq!(catalog.resolve_names(&[1, 2, 3]), vec!["Pool", "Spa"]);
    }

    #[test]
    fn test_entries_sorted_with_kind() {
        let mut catalog = ServiceCatalog::new(ServiceKind::Room);
        catalog.insert(5, "Safe");
        catalog.insert(2, "Wifi");
        let entries = catalog.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 2);
        assert_eq!(entries[1].id, 5);
        assert_eq!(entries[0].kind, ServiceKind::Room);
    }

    #[test]
    fn test_kind_collections() {
        assert_eq!(ServiceKind::Room.collection(), "servicios_habitacion");
        assert_eq!(ServiceKind::Hotel.collection(), "servicios_hotel");
    }
}
