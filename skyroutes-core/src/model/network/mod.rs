mod network_error;
mod route_graph;

pub use network_error::NetworkError;
pub use route_graph::RouteGraph;
