use crate::model::airport::AirportId;
use crate::model::network::NetworkError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("airport {0} is not a node in the route graph")]
    UnknownAirport(AirportId),
    #[error("no path exists between airports {0} and {1}")]
    NoPathExists(AirportId, AirportId),
    #[error(transparent)]
    Network(#[from] NetworkError),
}
