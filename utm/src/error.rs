use crate::Zone;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtmError {
    #[error("no samples")]
    EmptyInput,

    #[error("sample {index} has invalid coordinate (lat: {lat}, lon: {lon})")]
    InvalidCoordinate { index: usize, lat: f64, lon: f64 },

    #[error("unsupported zone {0}")]
    UnsupportedZone(u16),

    #[error("point projected into {found} can not be reprojected from {expected}")]
    ZoneMismatch { expected: Zone, found: Zone },

    #[error("{zone} projection of ({x}, {y}) is not finite")]
    Projection { zone: Zone, x: f64, y: f64 },
}
