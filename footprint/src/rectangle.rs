use crate::{heading::headings, FootprintError};
use geo::geometry::Coord;

/// Physical size of a footprint in planar meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Extent along the track (the rectangle's long axis).
    pub along_m: f64,

    /// Extent across the track.
    pub across_m: f64,
}

impl Default for Dimensions {
    /// ICESat-2 ATL08 land segment: 100 m along by 13 m across.
    fn default() -> Self {
        Self {
            along_m: 100.0,
            across_m: 13.0,
        }
    }
}

impl Dimensions {
    pub fn new(along_m: f64, across_m: f64) -> Result<Self, FootprintError> {
        let dims = Self { along_m, across_m };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> Result<(), FootprintError> {
        let valid = |m: f64| m.is_finite() && m > 0.0;
        if valid(self.along_m) && valid(self.across_m) {
            Ok(())
        } else {
            Err(FootprintError::InvalidDimensions {
                along: self.along_m,
                across: self.across_m,
            })
        }
    }
}

/// A footprint rectangle in planar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarFootprint {
    /// Heading (radians) the rectangle was rotated by.
    pub heading: f64,

    /// Upper-left, upper-right, lower-right, and lower-left corners.
    pub corners: [Coord<f64>; 4],
}

/// Rotates `coord` clockwise by `theta` radians about `center`.
pub fn rotate(coord: Coord<f64>, center: Coord<f64>, theta: f64) -> Coord<f64> {
    let (sin, cos) = theta.sin_cos();
    let dx = coord.x - center.x;
    let dy = coord.y - center.y;
    Coord {
        x: center.x + cos * dx + sin * dy,
        y: center.y - sin * dx + cos * dy,
    }
}

/// Returns the corners of a `dims` sized rectangle centered on
/// `center` with its long axis pointing along `theta`.
pub fn rectangle(center: Coord<f64>, dims: Dimensions, theta: f64) -> [Coord<f64>; 4] {
    let half_across = dims.across_m / 2.0;
    let half_along = dims.along_m / 2.0;
    [
        (-half_across, half_along),
        (half_across, half_along),
        (half_across, -half_along),
        (-half_across, -half_along),
    ]
    .map(|(dx, dy)| {
        let corner = Coord {
            x: center.x + dx,
            y: center.y + dy,
        };
        rotate(corner, center, theta)
    })
}

/// Builds one rectangle per planar sample, oriented along the
/// track's local heading.
pub fn build_footprints(
    points: &[Coord<f64>],
    dims: Dimensions,
) -> Result<Vec<PlanarFootprint>, FootprintError> {
    dims.validate()?;
    let headings = headings(points)?;
    Ok(points
        .iter()
        .zip(headings.local)
        .map(|(&center, heading)| PlanarFootprint {
            heading,
            corners: rectangle(center, dims, heading),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::coord;
    use std::f64::consts::FRAC_PI_2;

    fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
        (a.x - b.x).hypot(a.y - b.y)
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(
            Dimensions::default(),
            Dimensions {
                along_m: 100.0,
                across_m: 13.0
            }
        );
        assert!(Dimensions::new(17.0, 17.0).is_ok());
        assert!(Dimensions::new(0.0, 13.0).is_err());
        assert!(Dimensions::new(100.0, -1.0).is_err());
        assert!(Dimensions::new(f64::NAN, 13.0).is_err());
        assert!(Dimensions::new(100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_axis_aligned_rectangle() {
        let center = coord!(x: 10.0, y: 20.0);
        let corners = rectangle(center, Dimensions::default(), 0.0);
        assert_eq!(
            corners,
            [
                coord!(x: 3.5, y: 70.0),
                coord!(x: 16.5, y: 70.0),
                coord!(x: 16.5, y: -30.0),
                coord!(x: 3.5, y: -30.0),
            ]
        );
    }

    #[test]
    fn test_eastbound_rectangle() {
        let center = coord!(x: 0.0, y: 0.0);
        let [ul, ur, lr, ll] = rectangle(center, Dimensions::default(), FRAC_PI_2);
        // The long axis now points east, "upper" edge leading.
        assert_relative_eq!(ul.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(ul.y, 6.5, epsilon = 1e-9);
        assert_relative_eq!(ur.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(ur.y, -6.5, epsilon = 1e-9);
        assert_relative_eq!(lr.x, -50.0, epsilon = 1e-9);
        assert_relative_eq!(lr.y, -6.5, epsilon = 1e-9);
        assert_relative_eq!(ll.x, -50.0, epsilon = 1e-9);
        assert_relative_eq!(ll.y, 6.5, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_preserves_size() {
        let dims = Dimensions::default();
        let center = coord!(x: 654_321.0, y: 4_987_654.0);
        for step in -20..=20 {
            let theta = f64::from(step) * 0.075;
            let corners = rectangle(center, dims, theta);
            for (i, expected) in [dims.across_m, dims.along_m, dims.across_m, dims.along_m]
                .into_iter()
                .enumerate()
            {
                let side = distance(corners[i], corners[(i + 1) % 4]);
                assert_relative_eq!(side, expected, epsilon = 1e-6);
            }
            // Diagonals bisect each other at the center.
            assert_relative_eq!((corners[0].x + corners[2].x) / 2.0, center.x, epsilon = 1e-6);
            assert_relative_eq!((corners[0].y + corners[2].y) / 2.0, center.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_build_footprints() {
        let theta: f64 = 0.3;
        let (sin, cos) = theta.sin_cos();
        let mut points: Vec<_> = (0..9)
            .map(|i| {
                let d = 100.0 * f64::from(i);
                coord!(x: 500_000.0 + d * sin, y: 5_000_000.0 + d * cos)
            })
            .collect();
        // Perturb sample 4; its neighbors 3 and 5 now see a skewed
        // heading and fall back to the track heading.
        points[4].x += 40.0 * cos;
        points[4].y -= 40.0 * sin;

        let footprints = build_footprints(&points, Dimensions::default()).unwrap();
        assert_eq!(footprints.len(), points.len());
        for (footprint, center) in footprints.iter().zip(&points) {
            assert_relative_eq!(footprint.heading, theta, epsilon = 1e-9);
            let [ul, ur, ..] = footprint.corners;
            let top_mid = coord!(x: (ul.x + ur.x) / 2.0, y: (ul.y + ur.y) / 2.0);
            let orientation = (top_mid.x - center.x).atan2(top_mid.y - center.y);
            assert_relative_eq!(orientation, theta, epsilon = 1e-9);
            assert_relative_eq!(distance(top_mid, *center), 50.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_build_footprints_errors() {
        let point = coord!(x: 500_000.0, y: 5_000_000.0);
        let other = coord!(x: 500_000.0, y: 5_000_100.0);
        assert_eq!(
            build_footprints(&[], Dimensions::default()),
            Err(FootprintError::EmptyInput)
        );
        assert_eq!(
            build_footprints(&[point], Dimensions::default()),
            Err(FootprintError::DegenerateTrack(1))
        );
        assert_eq!(
            build_footprints(&[point, point, point], Dimensions::default()),
            Err(FootprintError::DegenerateTrack(3))
        );
        assert!(matches!(
            build_footprints(
                &[point, other],
                Dimensions {
                    along_m: 0.0,
                    across_m: 13.0
                }
            ),
            Err(FootprintError::InvalidDimensions { .. })
        ));
    }
}
