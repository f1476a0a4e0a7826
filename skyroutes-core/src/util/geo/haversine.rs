use crate::model::unit::Distance;
use geo::Point;

/// mean earth radius used for great-circle arithmetic, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// computes the great-circle distance between two coordinates using the
/// haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// points are degree-valued with x = longitude, y = latitude. symmetric in
/// its arguments and zero (within floating-point tolerance) when both
/// points coincide. assumes coordinates were validated upstream; there are
/// no error conditions here.
pub fn haversine_kilometers(origin: &Point<f64>, destination: &Point<f64>) -> Distance {
    let lat1 = origin.y().to_radians();
    let lat2 = destination.y().to_radians();
    let delta_lat = (destination.y() - origin.y()).to_radians();
    let delta_lon = (destination.x() - origin.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Distance::new(EARTH_RADIUS_KM * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_quarter_great_circle() {
        let equator_origin = Point::new(0.0, 0.0);
        let equator_quarter = Point::new(90.0, 0.0);
        let distance = haversine_kilometers(&equator_origin, &equator_quarter);
        // pi / 2 * 6371
        assert_abs_diff_eq!(distance.as_f64(), 10007.543398, epsilon = 1e-3);
    }

    #[test]
    fn test_symmetric() {
        let golden = Point::new(-122.4783, 37.8199);
        let liberty = Point::new(-74.0445, 40.6892);
        let forward = haversine_kilometers(&golden, &liberty);
        let backward = haversine_kilometers(&liberty, &golden);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_identical_points_are_zero() {
        let point = Point::new(151.1772, -33.9461);
        let distance = haversine_kilometers(&point, &point);
        assert_abs_diff_eq!(distance.as_f64(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let point = Point::new(0.0, 0.0);
        let antipode = Point::new(180.0, 0.0);
        let distance = haversine_kilometers(&point, &antipode);
        assert_abs_diff_eq!(
            distance.as_f64(),
            std::f64::consts::PI * EARTH_RADIUS_KM,
            epsilon = 1e-3
        );
    }
}
