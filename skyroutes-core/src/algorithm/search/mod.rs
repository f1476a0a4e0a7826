pub mod dijkstra;
mod path_result;
mod search_error;

pub use path_result::PathResult;
pub use search_error::SearchError;
