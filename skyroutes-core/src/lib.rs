//! Core routing engine for skyroutes: an in-memory airport catalog, a
//! session selection log, great-circle distance computation, and a
//! shortest-path search over the complete graph induced by the selected
//! airports. All inputs are supplied in memory by the calling layer and
//! all operations are synchronous, pure computations.
pub mod algorithm;
pub mod model;
pub mod util;
