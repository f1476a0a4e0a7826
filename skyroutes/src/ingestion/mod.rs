mod airport_reader;
mod ingestion_error;

pub use airport_reader::read_airports_csv;
pub use ingestion_error::IngestionError;
