use crate::model::airport::AirportId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("route graph requires at least 2 distinct airports, found {0}")]
    InsufficientPoints(usize),
    #[error("airport {0} is not a node in the route graph")]
    AirportNotInGraph(AirportId),
}
