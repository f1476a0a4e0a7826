use super::AirportId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("airport {id} has invalid latitude {lat}; expected a finite value in [-90.0, 90.0]")]
    InvalidLatitude { id: AirportId, lat: f64 },
    #[error("airport {id} has invalid longitude {lng}; expected a finite value in [-180.0, 180.0]")]
    InvalidLongitude { id: AirportId, lng: f64 },
    #[error("duplicate airport id {0} in catalog input")]
    DuplicateAirportId(AirportId),
    #[error("no airport with id {0}")]
    AirportIdNotFound(AirportId),
    #[error("no airport named '{0}'")]
    AirportNameNotFound(String),
}
