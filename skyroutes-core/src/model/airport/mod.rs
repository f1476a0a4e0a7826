mod airport_catalog;
mod airport_id;
mod airport_record;
mod catalog_error;
mod selection_log;

pub use airport_catalog::AirportCatalog;
pub use airport_id::AirportId;
pub use airport_record::AirportRecord;
pub use catalog_error::CatalogError;
pub use selection_log::SelectionLog;
