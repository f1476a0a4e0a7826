use super::RouteAppError;
use crate::ingestion::read_airports_csv;
use itertools::Itertools;
use skyroutes_core::algorithm::search::{dijkstra, PathResult};
use skyroutes_core::model::airport::{
    AirportCatalog, AirportId, AirportRecord, SelectionLog,
};
use skyroutes_core::model::network::RouteGraph;
use skyroutes_core::model::unit::Distance;
use skyroutes_core::util::geo::haversine::haversine_kilometers;
use std::path::Path;

/// a user session: the loaded airport catalog plus the ordered log of
/// airports selected so far. the seam the rendering/UI collaborator calls
/// into; every result is a plain data value with no rendering side
/// effects.
pub struct RouteApp {
    catalog: AirportCatalog,
    selections: SelectionLog,
}

impl RouteApp {
    pub fn new(catalog: AirportCatalog) -> RouteApp {
        RouteApp {
            catalog,
            selections: SelectionLog::new(),
        }
    }

    /// ingests a headered airports CSV file and builds the session
    /// catalog.
    pub fn from_csv(path: &Path) -> Result<RouteApp, RouteAppError> {
        let records = read_airports_csv(path)?;
        let catalog = AirportCatalog::build(records)?;
        Ok(RouteApp::new(catalog))
    }

    pub fn catalog(&self) -> &AirportCatalog {
        &self.catalog
    }

    pub fn selections(&self) -> &SelectionLog {
        &self.selections
    }

    /// looks the airport up by name (case-insensitive exact match) and
    /// appends it to the selection log, returning a copy of the record
    /// for marker display.
    pub fn select_by_name(&mut self, name: &str) -> Result<AirportRecord, RouteAppError> {
        let record = self.catalog.get_by_name(name)?.clone();
        log::info!("selected airport {} ({})", record.name, record.id);
        self.selections.append(record.clone());
        Ok(record)
    }

    pub fn select_by_id(&mut self, id: &AirportId) -> Result<AirportRecord, RouteAppError> {
        let record = self.catalog.get_by_id(id)?.clone();
        log::info!("selected airport {} ({})", record.name, record.id);
        self.selections.append(record.clone());
        Ok(record)
    }

    /// computes the shortest path between two selected airports over the
    /// complete graph induced by the current selection log. operates on a
    /// snapshot of the log taken here, so appends made while a
    /// computation is in flight never affect its result.
    pub fn shortest_path(
        &self,
        source: &AirportId,
        destination: &AirportId,
    ) -> Result<PathResult, RouteAppError> {
        let snapshot = self.selections.snapshot();
        let graph = RouteGraph::new(&snapshot)?;
        let result = dijkstra::run(&graph, source, destination)?;
        Ok(result)
    }

    /// the endpoints the original globe UI displays: the first selection
    /// as source and the second distinct selection as destination.
    pub fn default_endpoints(&self) -> Result<(AirportId, AirportId), RouteAppError> {
        let snapshot = self.selections.snapshot();
        let source = snapshot
            .first()
            .map(|r| r.id)
            .ok_or(RouteAppError::NotEnoughSelections(0))?;
        let destination = snapshot
            .iter()
            .map(|r| r.id)
            .find(|id| *id != source)
            .ok_or_else(|| {
                let distinct = snapshot.iter().map(|r| r.id).unique().count();
                RouteAppError::NotEnoughSelections(distinct)
            })?;
        Ok((source, destination))
    }

    /// shortest path between the default endpoints. later selections
    /// still participate in the graph, so they can serve as intermediate
    /// hops.
    pub fn default_route(&self) -> Result<PathResult, RouteAppError> {
        let (source, destination) = self.default_endpoints()?;
        self.shortest_path(&source, &destination)
    }

    /// the direct great-circle distance between two cataloged airports,
    /// for point-to-point display. independent of the selection log.
    pub fn distance_between(
        &self,
        a: &AirportId,
        b: &AirportId,
    ) -> Result<Distance, RouteAppError> {
        let a = self.catalog.get_by_id(a)?;
        let b = self.catalog.get_by_id(b)?;
        Ok(haversine_kilometers(&a.coordinate(), &b.coordinate()))
    }
}
