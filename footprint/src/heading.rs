//! Track heading estimation.
//!
//! Headings are measured from the planar y (northing) axis, positive
//! towards +x (easting), and always lie in `[-π/2, π/2]`.

use crate::FootprintError;
use geo::geometry::Coord;
use log::debug;

/// Largest deviation (radians) a sample's local heading may have
/// from the whole-track heading before it is replaced by it.
pub const MAX_HEADING_DEVIATION: f64 = 0.1;

/// Neighbor lookup for a track of `len` samples.
///
/// Interior samples see the sample before and after them, the first
/// and last samples stand in for their own missing neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    len: usize,
}

impl Neighbors {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns `(forward, backward)` neighbor indices of sample `idx`,
    /// or `None` if `idx` is out of bounds.
    pub fn get(&self, idx: usize) -> Option<(usize, usize)> {
        if idx < self.len {
            Some((idx.saturating_sub(1), (idx + 1).min(self.len - 1)))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len).filter_map(|idx| self.get(idx))
    }
}

/// Heading of the segment between `a` and `b`.
///
/// The result is the same for either ordering of `a` and `b`, and is
/// NaN when they coincide.
pub fn heading(a: Coord<f64>, b: Coord<f64>) -> f64 {
    ((a.x - b.x) / (a.y - b.y)).atan()
}

/// Per sample headings of a planar track.
#[derive(Debug, Clone, PartialEq)]
pub struct Headings {
    /// Heading from the first to the last sample.
    pub reference: f64,

    /// Local heading of each sample after clamping.
    pub local: Vec<f64>,

    /// How many local headings were replaced by `reference`.
    pub clamped: usize,
}

/// Returns the heading from the first to the last sample of `points`.
pub fn reference_heading(points: &[Coord<f64>]) -> Result<f64, FootprintError> {
    match points {
        [] => Err(FootprintError::EmptyInput),
        [_] => Err(FootprintError::DegenerateTrack(1)),
        [first, .., last] if first == last => Err(FootprintError::DegenerateTrack(points.len())),
        [first, .., last] => Ok(heading(*last, *first)),
    }
}

/// Estimates the heading at every sample of `points` from its
/// neighbors.
///
/// Local headings which are undefined, or stray more than
/// [`MAX_HEADING_DEVIATION`] from the whole-track heading, are
/// replaced by the whole-track heading.
pub fn headings(points: &[Coord<f64>]) -> Result<Headings, FootprintError> {
    let reference = reference_heading(points)?;

    let mut clamped = 0;
    let local = Neighbors::new(points.len())
        .iter()
        .map(|(fwd, bck)| {
            let local = heading(points[fwd], points[bck]);
            if local.is_nan() || (local - reference).abs() > MAX_HEADING_DEVIATION {
                clamped += 1;
                reference
            } else {
                local
            }
        })
        .collect();

    debug!(
        "headings; samples: {}, reference: {:.6}, clamped: {}",
        points.len(),
        reference,
        clamped
    );

    Ok(Headings {
        reference,
        local,
        clamped,
    })
}
