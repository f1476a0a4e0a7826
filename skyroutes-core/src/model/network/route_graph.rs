use super::NetworkError;
use crate::model::airport::{AirportId, AirportRecord};
use crate::model::unit::Distance;
use crate::util::geo::haversine::haversine_kilometers;
use indexmap::IndexMap;
use itertools::Itertools;

/// the complete weighted graph over a selection of airports: one node per
/// distinct airport id, one undirected edge per unordered pair, weighted
/// by great-circle distance. derived and ephemeral, rebuilt for each path
/// request. adjacency maps are insertion-ordered so traversal is
/// deterministic.
pub struct RouteGraph {
    adjacency: IndexMap<AirportId, IndexMap<AirportId, Distance>>,
}

impl RouteGraph {
    /// builds the graph from an ordered sequence of airports, typically a
    /// selection log snapshot. repeated ids collapse to a single node,
    /// first occurrence wins. O(n²) distance computations for n distinct
    /// points.
    pub fn new(points: &[AirportRecord]) -> Result<RouteGraph, NetworkError> {
        let mut distinct: IndexMap<AirportId, &AirportRecord> = IndexMap::new();
        for record in points.iter() {
            distinct.entry(record.id).or_insert(record);
        }
        if distinct.len() < 2 {
            return Err(NetworkError::InsufficientPoints(distinct.len()));
        }

        let mut adjacency: IndexMap<AirportId, IndexMap<AirportId, Distance>> = distinct
            .keys()
            .map(|id| (*id, IndexMap::new()))
            .collect();
        for (a, b) in distinct.values().tuple_combinations() {
            let weight = haversine_kilometers(&a.coordinate(), &b.coordinate());
            if let Some(neighbors) = adjacency.get_mut(&a.id) {
                neighbors.insert(b.id, weight);
            }
            if let Some(neighbors) = adjacency.get_mut(&b.id) {
                neighbors.insert(a.id, weight);
            }
        }

        log::debug!(
            "built route graph with {} nodes from {} selections",
            adjacency.len(),
            points.len()
        );
        Ok(RouteGraph { adjacency })
    }

    /// all edges incident to the given airport, keyed by the opposite
    /// endpoint.
    pub fn neighbors(
        &self,
        id: &AirportId,
    ) -> Result<&IndexMap<AirportId, Distance>, NetworkError> {
        self.adjacency
            .get(id)
            .ok_or(NetworkError::AirportNotInGraph(*id))
    }

    pub fn contains(&self, id: &AirportId) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn airport_ids(&self) -> impl Iterator<Item = &AirportId> {
        self.adjacency.keys()
    }

    pub fn n_airports(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_weight(&self, a: &AirportId, b: &AirportId) -> Result<Distance, NetworkError> {
        self.neighbors(a)?
            .get(b)
            .copied()
            .ok_or(NetworkError::AirportNotInGraph(*b))
    }
}
