//! Application layer for the skyroutes routing engine: CSV ingestion of
//! airport records, a session type tying the catalog and selection log to
//! the shortest-path search, and a JSON output boundary for the
//! rendering/UI collaborator.
pub mod app;
pub mod ingestion;
