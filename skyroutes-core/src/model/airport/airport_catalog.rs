use super::{AirportId, AirportRecord, CatalogError};
use indexmap::IndexMap;
use std::collections::HashMap;

/// the full set of known airports for a session, indexed by id and by
/// lowercase-normalized name. built once from ingested records and
/// read-only afterward.
pub struct AirportCatalog {
    airports: IndexMap<AirportId, AirportRecord>,
    names: HashMap<String, AirportId>,
}

impl AirportCatalog {
    /// validates and indexes the provided records. fails on the first
    /// record with out-of-range coordinates or an id already present.
    pub fn build(
        records: impl IntoIterator<Item = AirportRecord>,
    ) -> Result<AirportCatalog, CatalogError> {
        let mut airports: IndexMap<AirportId, AirportRecord> = IndexMap::new();
        let mut names: HashMap<String, AirportId> = HashMap::new();
        for record in records {
            record.validate()?;
            if airports.contains_key(&record.id) {
                return Err(CatalogError::DuplicateAirportId(record.id));
            }
            // first record wins when two airports share a display name
            names
                .entry(record.name.to_lowercase())
                .or_insert(record.id);
            airports.insert(record.id, record);
        }
        log::debug!("built airport catalog with {} records", airports.len());
        Ok(AirportCatalog { airports, names })
    }

    pub fn get_by_id(&self, id: &AirportId) -> Result<&AirportRecord, CatalogError> {
        self.airports
            .get(id)
            .ok_or(CatalogError::AirportIdNotFound(*id))
    }

    /// case-insensitive exact match on the full airport name. partial and
    /// fuzzy matching belong to the search UI, not the catalog.
    pub fn get_by_name(&self, name: &str) -> Result<&AirportRecord, CatalogError> {
        let id = self
            .names
            .get(&name.trim().to_lowercase())
            .ok_or_else(|| CatalogError::AirportNameNotFound(name.to_string()))?;
        self.get_by_id(id)
    }

    /// records in ingestion order.
    pub fn iter(&self) -> impl Iterator<Item = &AirportRecord> {
        self.airports.values()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}
