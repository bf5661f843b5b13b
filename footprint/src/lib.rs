//! # Footprint
//!
//! `footprint` turns an ordered track of along-track lidar sample
//! centers into rectangular ground footprints, each one oriented
//! along the track's local heading.
//!
//! ```no_run
//! use footprint::{footprints, geo::coord, Dimensions};
//!
//! let track = [
//!     coord!(x: 13.0, y: 45.0000),
//!     coord!(x: 13.0, y: 45.0009),
//!     coord!(x: 13.0, y: 45.0018),
//! ];
//! let footprints = footprints(&track, Dimensions::default()).unwrap();
//! assert_eq!(footprints.len(), track.len());
//! ```

mod error;
mod footprint;
pub mod heading;
pub mod rectangle;

pub use {
    crate::{
        error::FootprintError,
        footprint::{footprints, Footprint, FootprintBuilder},
        rectangle::{build_footprints, Dimensions, PlanarFootprint},
    },
    geo, utm,
};
