use thiserror::Error;
use utm::UtmError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FootprintError {
    #[error("no samples")]
    EmptyInput,

    #[error("heading is undefined for track of {0} sample(s)")]
    DegenerateTrack(usize),

    #[error("sample {index} has invalid coordinate (lat: {lat}, lon: {lon})")]
    InvalidCoordinate { index: usize, lat: f64, lon: f64 },

    #[error("invalid footprint dimensions (along: {along}, across: {across})")]
    InvalidDimensions { along: f64, across: f64 },

    #[error("{0}")]
    Projection(UtmError),
}

impl From<UtmError> for FootprintError {
    fn from(err: UtmError) -> Self {
        match err {
            UtmError::EmptyInput => Self::EmptyInput,
            UtmError::InvalidCoordinate { index, lat, lon } => {
                Self::InvalidCoordinate { index, lat, lon }
            }
            err => Self::Projection(err),
        }
    }
}
