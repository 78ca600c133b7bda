//! Bounding boxes enclosing a circular search area.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Spherical Earth radius used for box projection, in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Bearing from the center to the north-east corner.
const NORTH_EAST_BEARING_DEG: f64 = 45.0;

/// Bearing from the center to the south-west corner.
const SOUTH_WEST_BEARING_DEG: f64 = 225.0;

/// Rectangular latitude/longitude region.
///
/// When `west > east` the box crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// The whole globe.
    pub const WORLD: Self = Self {
        north: 90.0,
        south: -90.0,
        west: -180.0,
        east: 180.0,
    };

    /// Whether the point falls inside the box (edges inclusive).
    pub fn contains(&self, point: GeoPoint) -> bool {
        if point.lat < self.south || point.lat > self.north {
            return false;
        }

        if self.west <= self.east {
            point.lon >= self.west && point.lon <= self.east
        } else {
            point.lon >= self.west || point.lon <= self.east
        }
    }
}

/// Formats as `north,south,west,east`, the order the live feed expects.
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6},{:.6},{:.6},{:.6}",
            self.north, self.south, self.west, self.east
        )
    }
}

/// Derive the square box enclosing a circle of `radius_m` around `center`.
///
/// The box's half side equals the radius; its corners are projected along
/// the diagonal (bearings 45° and 225°) on a spherical Earth. Radii whose
/// half diagonal reaches a quarter of the globe return [`BoundingBox::WORLD`].
///
/// # Example
///
/// ```
/// use flighttower::geo::{bounds_around, GeoPoint};
///
/// let warsaw = GeoPoint::new(52.2297, 21.0122);
/// let bounds = bounds_around(warsaw, 50_000.0);
///
/// assert!(bounds.contains(warsaw));
/// assert!(bounds.north > warsaw.lat && bounds.south < warsaw.lat);
/// ```
pub fn bounds_around(center: GeoPoint, radius_m: f64) -> BoundingBox {
    let half_side_km = radius_m.abs() / 1000.0;
    let half_diagonal_km = (2.0 * half_side_km * half_side_km).sqrt();
    let angular_distance = half_diagonal_km / EARTH_RADIUS_KM;

    if angular_distance >= FRAC_PI_2 {
        return BoundingBox::WORLD;
    }

    let south_west = project(center, SOUTH_WEST_BEARING_DEG, angular_distance);
    let north_east = project(center, NORTH_EAST_BEARING_DEG, angular_distance);

    BoundingBox {
        north: north_east.lat,
        south: south_west.lat,
        west: south_west.lon,
        east: north_east.lon,
    }
}

/// Project a position along a bearing by an angular distance (radians).
fn project(start: GeoPoint, bearing_deg: f64, angular_distance: f64) -> GeoPoint {
    let lat1_rad = start.lat.to_radians();
    let lon1_rad = start.lon.to_radians();
    let bearing_rad = bearing_deg.to_radians();

    let sin_lat1 = lat1_rad.sin();
    let cos_lat1 = lat1_rad.cos();
    let sin_d = angular_distance.sin();
    let cos_d = angular_distance.cos();

    let lat2_rad = (sin_lat1 * cos_d + cos_lat1 * sin_d * bearing_rad.cos()).asin();
    let lon2_rad =
        lon1_rad + (bearing_rad.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * lat2_rad.sin());

    let mut lon2 = lon2_rad.to_degrees();

    // Normalize longitude to -180..180
    if lon2 > 180.0 {
        lon2 -= 360.0;
    } else if lon2 < -180.0 {
        lon2 += 360.0;
    }

    GeoPoint::new(lat2_rad.to_degrees(), lon2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::distance_km;

    const WARSAW: GeoPoint = GeoPoint::new(52.2297, 21.0122);

    #[test]
    fn test_box_contains_points_inside_radius() {
        let bounds = bounds_around(WARSAW, 50_000.0);

        for bearing in [0.0, 90.0, 180.0, 270.0] {
            let edge = project(WARSAW, bearing, 45.0 / EARTH_RADIUS_KM);
            assert!(bounds.contains(edge), "bearing {} outside {}", bearing, bounds);
        }
    }

    #[test]
    fn test_box_half_side_matches_radius() {
        let bounds = bounds_around(WARSAW, 50_000.0);
        let north_edge = GeoPoint::new(bounds.north, WARSAW.lon);
        let dist = distance_km(WARSAW, north_edge);

        // Diagonal projection lands slightly past the half side on a sphere
        assert!(dist > 49.0 && dist < 52.0, "got {}", dist);
    }

    #[test]
    fn test_box_ordering() {
        let bounds = bounds_around(WARSAW, 100_000.0);
        assert!(bounds.north > bounds.south);
        assert!(bounds.east > bounds.west);
    }

    #[test]
    fn test_huge_radius_is_world() {
        assert_eq!(bounds_around(GeoPoint::new(0.0, 0.0), 20_000_000.0), BoundingBox::WORLD);
    }

    #[test]
    fn test_antimeridian_crossing() {
        let fiji = GeoPoint::new(-17.7, 179.9);
        let bounds = bounds_around(fiji, 50_000.0);

        assert!(bounds.west > bounds.east, "expected wrap, got {}", bounds);
        assert!(bounds.contains(fiji));
        assert!(bounds.contains(GeoPoint::new(-17.7, -179.9)));
        assert!(!bounds.contains(GeoPoint::new(-17.7, 0.0)));
    }

    #[test]
    fn test_display_order() {
        let bounds = BoundingBox {
            north: 52.5,
            south: 51.9,
            west: 20.4,
            east: 21.6,
        };
        assert_eq!(bounds.to_string(), "52.500000,51.900000,20.400000,21.600000");
    }

    #[test]
    fn test_world_contains_everything() {
        assert!(BoundingBox::WORLD.contains(GeoPoint::new(89.0, -179.0)));
        assert!(BoundingBox::WORLD.contains(GeoPoint::new(-89.0, 179.0)));
    }
}
