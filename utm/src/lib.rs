//! # UTM
//!
//! `utm` picks a single UTM zone for a set of geographic samples and
//! moves those samples between geographic (WGS84) coordinates and the
//! zone's metric planar frame.

mod error;
mod projection;
mod reproject;
mod zone;

pub use crate::{
    error::UtmError,
    projection::{Projection, TransverseMercator},
    reproject::{to_geographic, to_planar, ProjectedPoint},
    zone::{select_zone, validate, zone_number, Hemisphere, Zone},
};
pub use geo;
