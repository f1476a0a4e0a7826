use super::{PathResult, SearchError};
use crate::model::airport::AirportId;
use crate::model::network::RouteGraph;
use crate::model::unit::Distance;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// runs Dijkstra's algorithm over a route graph from `source` to
/// `destination`. edge weights are great-circle distances and therefore
/// non-negative, so no re-expansion of settled nodes is needed.
///
/// the frontier priority pairs each tentative distance with the airport
/// id, so ties extract the smallest id first and results are
/// deterministic. stateless: each call is a pure function of
/// (graph, source, destination).
///
/// # Arguments
/// * `graph` - complete weighted graph over the selected airports
/// * `source` - airport id to start from
/// * `destination` - airport id to reach
///
/// # Results
/// The ordered route from source to destination with its total distance.
/// An error if either endpoint is not a graph node, or (defensively; a
/// complete graph is always connected) if the destination was never
/// reached.
pub fn run(
    graph: &RouteGraph,
    source: &AirportId,
    destination: &AirportId,
) -> Result<PathResult, SearchError> {
    if !graph.contains(source) {
        return Err(SearchError::UnknownAirport(*source));
    }
    if !graph.contains(destination) {
        return Err(SearchError::UnknownAirport(*destination));
    }
    if source == destination {
        return Ok(PathResult {
            route: vec![*source],
            total_distance: Distance::ZERO,
        });
    }

    let mut distances: HashMap<AirportId, Distance> = graph
        .airport_ids()
        .map(|id| (*id, Distance::INFINITY))
        .collect();
    let mut predecessors: HashMap<AirportId, AirportId> = HashMap::new();
    let mut visited: HashSet<AirportId> = HashSet::new();
    let mut frontier: PriorityQueue<AirportId, Reverse<(Distance, AirportId)>> =
        PriorityQueue::new();

    distances.insert(*source, Distance::ZERO);
    frontier.push(*source, Reverse((Distance::ZERO, *source)));

    while let Some((current, Reverse((current_distance, _)))) = frontier.pop() {
        if !visited.insert(current) {
            continue;
        }
        if current == *destination {
            break;
        }
        for (neighbor, weight) in graph.neighbors(&current)? {
            if visited.contains(neighbor) {
                continue;
            }
            let tentative = current_distance + *weight;
            let best = distances
                .get(neighbor)
                .copied()
                .unwrap_or(Distance::INFINITY);
            if tentative < best {
                distances.insert(*neighbor, tentative);
                predecessors.insert(*neighbor, current);
                frontier.push(*neighbor, Reverse((tentative, *neighbor)));
            }
        }
    }

    let total_distance = distances
        .get(destination)
        .copied()
        .unwrap_or(Distance::INFINITY);
    if total_distance.is_infinite() {
        return Err(SearchError::NoPathExists(*source, *destination));
    }

    // walk the predecessor chain backward from the destination, then
    // reverse into source-to-destination order
    let mut route = vec![*destination];
    let mut cursor = *destination;
    while let Some(previous) = predecessors.get(&cursor) {
        route.push(*previous);
        cursor = *previous;
    }
    route.reverse();

    log::debug!(
        "shortest path {} -> {} visits {} airports over {} km",
        source,
        destination,
        route.len(),
        total_distance
    );
    Ok(PathResult {
        route,
        total_distance,
    })
}
