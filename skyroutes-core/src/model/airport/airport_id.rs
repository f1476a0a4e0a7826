use serde::{Deserialize, Serialize};

/// identifies an airport record in the catalog and a node in the route
/// graph.
#[derive(
    Copy,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Default,
    derive_more::Display,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct AirportId(pub u64);
