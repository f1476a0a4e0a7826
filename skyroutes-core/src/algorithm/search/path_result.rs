use crate::model::airport::AirportId;
use crate::model::unit::Distance;
use serde::Serialize;

/// the outcome of a shortest-path search: the airport ids visited from
/// source to destination inclusive, and the summed great-circle distance
/// along the route in kilometers. transient, recomputed per request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathResult {
    pub route: Vec<AirportId>,
    pub total_distance: Distance,
}

impl PathResult {
    pub fn source(&self) -> Option<&AirportId> {
        self.route.first()
    }

    pub fn destination(&self) -> Option<&AirportId> {
        self.route.last()
    }

    pub fn n_legs(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}
