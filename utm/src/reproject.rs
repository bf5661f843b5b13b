use crate::{Projection, UtmError, Zone};
use geo::geometry::Coord;
use log::trace;

/// A geographic sample projected into a UTM zone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedPoint {
    /// Easting (x) and northing (y) in meters.
    pub coord: Coord<f64>,

    /// Zone `coord` is relative to.
    pub zone: Zone,
}

impl ProjectedPoint {
    pub fn new(coord: Coord<f64>, zone: Zone) -> Self {
        Self { coord, zone }
    }
}

/// Projects every sample into `zone`, preserving order.
pub fn to_planar<P: Projection>(
    projection: &P,
    samples: &[Coord<f64>],
    zone: Zone,
) -> Result<Vec<ProjectedPoint>, UtmError> {
    trace!("to_planar; samples: {}, zone: {}", samples.len(), zone);
    samples
        .iter()
        .map(|&sample| projection.forward(zone, sample))
        .map(|coord| coord.map(|coord| ProjectedPoint::new(coord, zone)))
        .collect()
}

/// Returns `points` to geographic (`x: lon, y: lat`) coordinates,
/// preserving order.
///
/// Fails if any point was not projected into `zone`.
pub fn to_geographic<P: Projection>(
    projection: &P,
    points: &[ProjectedPoint],
    zone: Zone,
) -> Result<Vec<Coord<f64>>, UtmError> {
    trace!("to_geographic; points: {}, zone: {}", points.len(), zone);
    points
        .iter()
        .map(|point| {
            if point.zone == zone {
                projection.inverse(zone, point.coord)
            } else {
                Err(UtmError::ZoneMismatch {
                    expected: zone,
                    found: point.zone,
                })
            }
        })
        .collect()
}
