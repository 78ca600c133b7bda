//! Great-circle distance on the WGS-84 ellipsoid.

use super::GeoPoint;

/// WGS-84 semi-major axis in meters.
const WGS84_A: f64 = 6_378_137.0;

/// WGS-84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// WGS-84 semi-minor axis in meters.
const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);

/// IUGG mean Earth radius in kilometers.
const MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;

/// Iteration cap for the Vincenty inverse solution.
const MAX_ITERATIONS: usize = 200;

/// Convergence threshold on lambda (radians), roughly 0.06 mm.
const CONVERGENCE: f64 = 1e-12;

/// Calculate the geodesic distance between two points in kilometers.
///
/// Solves the inverse problem on the WGS-84 ellipsoid (Vincenty), which
/// agrees with standard geodesic libraries to well under a meter. The
/// iteration can fail to converge for nearly antipodal points; those fall
/// back to the spherical [`haversine_km`].
///
/// Out-of-range coordinates are not validated.
///
/// # Example
///
/// ```
/// use flighttower::geo::{distance_km, GeoPoint};
///
/// // One degree of latitude at the equator
/// let dist = distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
/// assert!((dist - 110.574).abs() < 0.01);
/// ```
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    vincenty_km(from, to).unwrap_or_else(|| haversine_km(from, to))
}

/// Calculate the spherical great-circle distance in kilometers.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    MEAN_EARTH_RADIUS_KM * c
}

fn vincenty_km(from: GeoPoint, to: GeoPoint) -> Option<f64> {
    let l = (to.lon - from.lon).to_radians();
    let u1 = ((1.0 - WGS84_F) * from.lat.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * to.lat.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();

        // Coincident points
        if sin_sigma == 0.0 {
            return Some(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // Equatorial line: cos_sq_alpha = 0
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };

        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - lambda_prev).abs() < CONVERGENCE {
            let u_sq = cos_sq_alpha * (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

            return Some(WGS84_B * big_a * (sigma - delta_sigma) / 1000.0);
        }
    }

    None
}
