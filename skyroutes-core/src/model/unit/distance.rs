use derive_more::{Add, AddAssign, Sum};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a great-circle distance in kilometers. wraps an ordered float so
/// distances can be used directly as priorities in a frontier queue and
/// compared with a total order.
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
    Add,
    AddAssign,
    Sum,
)]
pub struct Distance(OrderedFloat<f64>);

impl Distance {
    pub const ZERO: Distance = Distance(OrderedFloat(0.0));
    pub const INFINITY: Distance = Distance(OrderedFloat(f64::INFINITY));

    pub fn new(kilometers: f64) -> Distance {
        Distance(OrderedFloat(kilometers))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }
}

impl From<f64> for Distance {
    fn from(kilometers: f64) -> Distance {
        Distance::new(kilometers)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_total() {
        let mut distances = vec![
            Distance::INFINITY,
            Distance::new(42.0),
            Distance::ZERO,
            Distance::new(7.5),
        ];
        distances.sort();
        assert_eq!(
            distances,
            vec![
                Distance::ZERO,
                Distance::new(7.5),
                Distance::new(42.0),
                Distance::INFINITY,
            ]
        );
    }

    #[test]
    fn test_add_and_sum() {
        let total: Distance = vec![Distance::new(1.5), Distance::new(2.5)].into_iter().sum();
        assert_eq!(total, Distance::new(4.0));
        assert_eq!(Distance::new(1.0) + Distance::new(2.0), Distance::new(3.0));
    }

    #[test]
    fn test_infinity_compares_greater() {
        assert!(Distance::new(1.0e12) < Distance::INFINITY);
    }
}
