mod distance;

pub use distance::Distance;
