//! Transverse mercator projection.
//!
//! Forward and inverse mappings use Krüger's series expanded to fourth
//! order in the ellipsoid's third flattening, which keeps round trips
//! well below a millimeter anywhere inside a UTM zone.
//!
//! # References
//!
//! 1. [Karney, Transverse Mercator with an accuracy of a few nanometers](https://arxiv.org/abs/1002.1417)
//! 1. [UTM on Wikipedia](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)

use crate::{Hemisphere, UtmError, Zone};
use geo::geometry::Coord;

/// WGS84 semi-major axis (meters).
const WGS84_A: f64 = 6_378_137.0;

/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// UTM central meridian scale factor.
const K0: f64 = 0.9996;

const FALSE_EASTING: f64 = 500_000.0;

const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Maps geographic coordinates into a zone's planar frame and back.
///
/// Geographic coordinates are `x: lon, y: lat` degrees, planar
/// coordinates are `x: easting, y: northing` meters.
pub trait Projection {
    fn forward(&self, zone: Zone, geographic: Coord<f64>) -> Result<Coord<f64>, UtmError>;

    fn inverse(&self, zone: Zone, planar: Coord<f64>) -> Result<Coord<f64>, UtmError>;
}

/// Ellipsoidal transverse mercator on WGS84 with UTM parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransverseMercator {
    /// `k0` times the rectifying radius.
    k0_a: f64,

    /// First eccentricity.
    e: f64,

    /// Forward series coefficients.
    alpha: [f64; 4],

    /// Inverse series coefficients.
    beta: [f64; 4],

    /// Conformal to geodetic latitude coefficients.
    delta: [f64; 4],
}

impl Default for TransverseMercator {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl TransverseMercator {
    pub fn wgs84() -> Self {
        Self::new(WGS84_A, WGS84_F)
    }

    /// Returns a UTM projection for the ellipsoid with semi-major axis
    /// `a` (meters) and flattening `f`.
    #[allow(clippy::many_single_char_names)]
    pub fn new(a: f64, f: f64) -> Self {
        let n = f / (2.0 - f);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;

        let rectifying_radius = a / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);
        let e = (f * (2.0 - f)).sqrt();

        let alpha = [
            n / 2.0 - 2.0 / 3.0 * n2 + 5.0 / 16.0 * n3 + 41.0 / 180.0 * n4,
            13.0 / 48.0 * n2 - 3.0 / 5.0 * n3 + 557.0 / 1440.0 * n4,
            61.0 / 240.0 * n3 - 103.0 / 140.0 * n4,
            49561.0 / 161_280.0 * n4,
        ];
        let beta = [
            n / 2.0 - 2.0 / 3.0 * n2 + 37.0 / 96.0 * n3 - 1.0 / 360.0 * n4,
            1.0 / 48.0 * n2 + 1.0 / 15.0 * n3 - 437.0 / 1440.0 * n4,
            17.0 / 480.0 * n3 - 37.0 / 840.0 * n4,
            4397.0 / 161_280.0 * n4,
        ];
        let delta = [
            2.0 * n - 2.0 / 3.0 * n2 - 2.0 * n3 + 116.0 / 45.0 * n4,
            7.0 / 3.0 * n2 - 8.0 / 5.0 * n3 - 227.0 / 45.0 * n4,
            56.0 / 15.0 * n3 - 136.0 / 35.0 * n4,
            4279.0 / 630.0 * n4,
        ];

        Self {
            k0_a: K0 * rectifying_radius,
            e,
            alpha,
            beta,
            delta,
        }
    }
}

fn false_northing(zone: Zone) -> f64 {
    match zone.hemisphere() {
        Hemisphere::North => 0.0,
        Hemisphere::South => FALSE_NORTHING_SOUTH,
    }
}

impl Projection for TransverseMercator {
    fn forward(&self, zone: Zone, geographic: Coord<f64>) -> Result<Coord<f64>, UtmError> {
        let e = self.e;
        let phi = geographic.y.to_radians();
        let lambda = (geographic.x - zone.central_meridian()).to_radians();

        let sin_phi = phi.sin();
        let t = (sin_phi.atanh() - e * (e * sin_phi).atanh()).sinh();
        let xi_p = t.atan2(lambda.cos());
        let eta_p = (lambda.sin() / (1.0 + t * t).sqrt()).atanh();

        let (mut xi, mut eta) = (xi_p, eta_p);
        for (j, alpha) in (1..=4_u8).map(f64::from).zip(self.alpha) {
            let (sin, cos) = (2.0 * j * xi_p).sin_cos();
            xi += alpha * sin * (2.0 * j * eta_p).cosh();
            eta += alpha * cos * (2.0 * j * eta_p).sinh();
        }

        let planar = Coord {
            x: FALSE_EASTING + self.k0_a * eta,
            y: false_northing(zone) + self.k0_a * xi,
        };

        if planar.x.is_finite() && planar.y.is_finite() {
            Ok(planar)
        } else {
            Err(UtmError::Projection {
                zone,
                x: geographic.x,
                y: geographic.y,
            })
        }
    }

    fn inverse(&self, zone: Zone, planar: Coord<f64>) -> Result<Coord<f64>, UtmError> {
        let xi = (planar.y - false_northing(zone)) / self.k0_a;
        let eta = (planar.x - FALSE_EASTING) / self.k0_a;

        let (mut xi_p, mut eta_p) = (xi, eta);
        for (j, beta) in (1..=4_u8).map(f64::from).zip(self.beta) {
            let (sin, cos) = (2.0 * j * xi).sin_cos();
            xi_p -= beta * sin * (2.0 * j * eta).cosh();
            eta_p -= beta * cos * (2.0 * j * eta).sinh();
        }

        let chi = (xi_p.sin() / eta_p.cosh()).asin();
        let mut phi = chi;
        for (j, delta) in (1..=4_u8).map(f64::from).zip(self.delta) {
            phi += delta * (2.0 * j * chi).sin();
        }
        let lambda = eta_p.sinh().atan2(xi_p.cos());

        let geographic = Coord {
            x: zone.central_meridian() + lambda.to_degrees(),
            y: phi.to_degrees(),
        };

        if geographic.x.is_finite() && geographic.y.is_finite() {
            Ok(geographic)
        } else {
            Err(UtmError::Projection {
                zone,
                x: planar.x,
                y: planar.y,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Projection, TransverseMercator};
    use crate::{Hemisphere, Zone};
    use approx::assert_abs_diff_eq;
    use geo::coord;

    fn zone(number: u8, hemisphere: Hemisphere) -> Zone {
        Zone::new(number, hemisphere).unwrap()
    }

    #[test]
    fn test_central_meridian_on_equator() {
        let tm = TransverseMercator::wgs84();
        let planar = tm
            .forward(zone(31, Hemisphere::North), coord!(x: 3.0, y: 0.0))
            .unwrap();
        assert_abs_diff_eq!(planar.x, 500_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(planar.y, 0.0, epsilon = 1e-6);

        let planar = tm
            .forward(zone(31, Hemisphere::South), coord!(x: 3.0, y: 0.0))
            .unwrap();
        assert_abs_diff_eq!(planar.y, 10_000_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_known_points() {
        let tm = TransverseMercator::wgs84();

        // Meridian arc length to 45°N scaled by k0.
        let planar = tm
            .forward(zone(33, Hemisphere::North), coord!(x: 15.0, y: 45.0))
            .unwrap();
        assert_abs_diff_eq!(planar.x, 500_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(planar.y, 4_982_950.400, epsilon = 0.01);

        // Mt Washington, NH.
        let planar = tm
            .forward(
                zone(19, Hemisphere::North),
                coord!(x: -71.303_25, y: 44.270_5),
            )
            .unwrap();
        assert_abs_diff_eq!(planar.x, 316_178.679, epsilon = 0.01);
        assert_abs_diff_eq!(planar.y, 4_904_497.206, epsilon = 0.01);
    }

    #[test]
    fn test_east_of_meridian_is_east() {
        let tm = TransverseMercator::wgs84();
        let z = zone(33, Hemisphere::North);
        let west = tm.forward(z, coord!(x: 14.0, y: 50.0)).unwrap();
        let east = tm.forward(z, coord!(x: 16.0, y: 50.0)).unwrap();
        assert!(west.x < 500_000.0);
        assert!(east.x > 500_000.0);
        assert_abs_diff_eq!(west.y, east.y, epsilon = 1e-6);
        assert_abs_diff_eq!(500_000.0 - west.x, east.x - 500_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let tm = TransverseMercator::wgs84();
        for (number, hemisphere, lon, lat) in [
            (1, Hemisphere::North, -177.0, 10.0),
            (19, Hemisphere::North, -71.303_25, 44.270_5),
            (33, Hemisphere::North, 13.0, 45.0),
            (33, Hemisphere::North, 17.9, 83.5),
            (56, Hemisphere::South, 151.2, -33.9),
            (60, Hemisphere::South, 179.9, -79.5),
            (32, Hemisphere::North, 5.32, 60.39),
        ] {
            let z = zone(number, hemisphere);
            let geographic = coord!(x: lon, y: lat);
            let planar = tm.forward(z, geographic).unwrap();
            let back = tm.inverse(z, planar).unwrap();
            assert_abs_diff_eq!(back.x, lon, epsilon = 1e-9);
            assert_abs_diff_eq!(back.y, lat, epsilon = 1e-9);
            let again = tm.forward(z, back).unwrap();
            assert_abs_diff_eq!(again.x, planar.x, epsilon = 1e-4);
            assert_abs_diff_eq!(again.y, planar.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_non_finite_is_an_error() {
        let tm = TransverseMercator::wgs84();
        let z = zone(33, Hemisphere::North);
        assert!(tm.forward(z, coord!(x: f64::NAN, y: 45.0)).is_err());
        assert!(tm.inverse(z, coord!(x: 500_000.0, y: f64::INFINITY)).is_err());
    }
}
