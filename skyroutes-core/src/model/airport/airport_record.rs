use super::{AirportId, CatalogError};
use geo::Point;
use serde::{Deserialize, Serialize};

/// a row in the airports input file. field names match the ingestion
/// header `id,name,city,iata,icao,lat,lng`. immutable once built into a
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirportRecord {
    pub id: AirportId,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub icao: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl AirportRecord {
    /// builds a record with no optional metadata fields set.
    pub fn new(id: AirportId, name: &str, lat: f64, lng: f64) -> AirportRecord {
        AirportRecord {
            id,
            name: name.to_string(),
            city: None,
            iata: None,
            icao: None,
            lat,
            lng,
        }
    }

    /// the record location as a degree-valued point, x = longitude,
    /// y = latitude.
    pub fn coordinate(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }

    /// confirms both coordinates are finite and within valid degree
    /// ranges. records failing this check are rejected at catalog build,
    /// never silently coerced.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(CatalogError::InvalidLatitude {
                id: self.id,
                lat: self.lat,
            });
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(CatalogError::InvalidLongitude {
                id: self.id,
                lng: self.lng,
            });
        }
        Ok(())
    }
}
