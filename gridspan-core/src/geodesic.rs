//! Geodesic distance between facility locations.
//!
//! Distances use the haversine great-circle formula over a fixed spherical
//! Earth radius. The radius is deliberately the conventional 6371 km used
//! by the survey data this engine consumes, not the GRS80 mean radius the
//! `geo` crate defaults to.

use geo::Coord;
use geo::line_measures::{Distance, HaversineMeasure};

/// Spherical Earth radius, in kilometres, used for all distance
/// calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two WGS84 coordinates.
///
/// Symmetric in its arguments and zero for identical coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridspan_core::geodesic_distance_km;
///
/// let a = Coord { x: 74.0, y: 18.5 };
/// assert_eq!(geodesic_distance_km(a, a), 0.0);
/// ```
#[must_use]
pub fn geodesic_distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_KM).distance(geo::Point::from(a), geo::Point::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = coord(74.0, 18.5);
        let b = coord(74.1, 18.6);
        let forward = geodesic_distance_km(a, b);
        let reverse = geodesic_distance_km(b, a);
        assert!((forward - reverse).abs() < 1e-12);
    }

    #[rstest]
    fn identical_coordinates_are_zero_distance() {
        let a = coord(-0.1276, 51.5072);
        assert_eq!(geodesic_distance_km(a, a), 0.0);
    }

    #[rstest]
    fn one_hundredth_degree_of_latitude_is_about_1_1_km() {
        let a = coord(74.0, 18.5);
        let b = coord(74.0, 18.51);
        let distance = geodesic_distance_km(a, b);
        // One degree of latitude spans R * pi / 180 km on a sphere.
        assert!((distance - 1.111_95).abs() < 1e-3, "got {distance}");
    }
}
