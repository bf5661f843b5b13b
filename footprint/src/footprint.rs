use crate::{
    rectangle::{build_footprints, Dimensions, PlanarFootprint},
    FootprintError,
};
use geo::geometry::{Coord, LineString, Polygon};
use log::debug;
use utm::{
    select_zone, to_geographic, to_planar, ProjectedPoint, Projection, TransverseMercator, Zone,
};

/// Ground footprint of a single sample.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    /// Position of the originating sample in the input.
    pub index: usize,

    /// Zone the footprint was constructed in.
    pub zone: Zone,

    /// Track heading (radians from grid north) the rectangle follows.
    pub heading: f64,

    /// Geographic (`x: lon, y: lat`) corners; upper-left,
    /// upper-right, lower-right, lower-left.
    pub corners: [Coord<f64>; 4],

    /// The same corners in `zone`'s planar frame (meters).
    pub planar: [Coord<f64>; 4],
}

impl Footprint {
    pub fn builder() -> FootprintBuilder {
        FootprintBuilder {
            dims: Dimensions::default(),
            zone: None,
        }
    }

    /// Closed geographic polygon of this footprint.
    pub fn polygon(&self) -> Polygon<f64> {
        Polygon::new(LineString::from(self.corners.to_vec()), vec![])
    }

    /// Closed planar polygon of this footprint.
    pub fn planar_polygon(&self) -> Polygon<f64> {
        Polygon::new(LineString::from(self.planar.to_vec()), vec![])
    }
}

pub struct FootprintBuilder {
    /// Footprint size (defaults to 100 m x 13 m).
    dims: Dimensions,

    /// Zone to construct footprints in (defaults to the track's most
    /// common zone).
    zone: Option<Zone>,
}

impl FootprintBuilder {
    /// Footprint extent along the track (meters, defaults to 100).
    #[must_use]
    pub fn along(mut self, meters: f64) -> Self {
        self.dims.along_m = meters;
        self
    }

    /// Footprint extent across the track (meters, defaults to 13).
    #[must_use]
    pub fn across(mut self, meters: f64) -> Self {
        self.dims.across_m = meters;
        self
    }

    #[must_use]
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dims = dims;
        self
    }

    /// Force all footprints into `zone` instead of selecting one from
    /// the samples.
    #[must_use]
    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Builds one footprint per sample in `samples` (`x: lon, y: lat`
    /// degrees, in track order).
    pub fn build<P: Projection>(
        &self,
        projection: &P,
        samples: &[Coord<f64>],
    ) -> Result<Vec<Footprint>, FootprintError> {
        self.dims.validate()?;

        let zone = match self.zone {
            Some(zone) => {
                if samples.is_empty() {
                    return Err(FootprintError::EmptyInput);
                }
                for (index, &sample) in samples.iter().enumerate() {
                    utm::validate(index, sample)?;
                }
                zone
            }
            None => select_zone(samples)?,
        };

        let (planar, project_runtime) = {
            let now = std::time::Instant::now();
            let planar: Vec<Coord<f64>> = to_planar(projection, samples, zone)?
                .into_iter()
                .map(|point| point.coord)
                .collect();
            (planar, now.elapsed())
        };

        let (rectangles, rectangle_runtime) = {
            let now = std::time::Instant::now();
            let rectangles = build_footprints(&planar, self.dims)?;
            (rectangles, now.elapsed())
        };

        let (geographic, unproject_runtime) = {
            let now = std::time::Instant::now();
            let corners: Vec<ProjectedPoint> = rectangles
                .iter()
                .flat_map(|rectangle| rectangle.corners)
                .map(|corner| ProjectedPoint::new(corner, zone))
                .collect();
            let geographic = to_geographic(projection, &corners, zone)?;
            (geographic, now.elapsed())
        };

        debug!(
            "footprints; len: {}, zone: {}, project_exec: {:?}, rectangle_exec: {:?}, unproject_exec: {:?}",
            samples.len(),
            zone,
            project_runtime,
            rectangle_runtime,
            unproject_runtime
        );

        Ok(rectangles
            .into_iter()
            .zip(geographic.chunks_exact(4))
            .enumerate()
            .map(|(index, (PlanarFootprint { heading, corners }, geographic))| Footprint {
                index,
                zone,
                heading,
                corners: [geographic[0], geographic[1], geographic[2], geographic[3]],
                planar: corners,
            })
            .collect())
    }
}

/// Builds `dims` sized footprints for `samples` using WGS84 UTM.
pub fn footprints(
    samples: &[Coord<f64>],
    dims: Dimensions,
) -> Result<Vec<Footprint>, FootprintError> {
    Footprint::builder()
        .dimensions(dims)
        .build(&TransverseMercator::wgs84(), samples)
}
