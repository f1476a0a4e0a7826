use crate::ingestion::IngestionError;
use skyroutes_core::algorithm::search::SearchError;
use skyroutes_core::model::airport::CatalogError;
use skyroutes_core::model::network::NetworkError;

#[derive(thiserror::Error, Debug)]
pub enum RouteAppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
    #[error("a route request requires at least 2 distinct selected airports, found {0}")]
    NotEnoughSelections(usize),
    #[error("failed serializing route output: {0}")]
    OutputSerialization(#[from] serde_json::Error),
}
