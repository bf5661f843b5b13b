//! UTM zone selection.

use crate::UtmError;
use geo::geometry::Coord;
use log::debug;
use std::{collections::BTreeMap, fmt};

/// Base EPSG code of northern hemisphere WGS84 UTM zones.
const EPSG_NORTH: u16 = 32600;

/// Base EPSG code of southern hemisphere WGS84 UTM zones.
const EPSG_SOUTH: u16 = 32700;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// The equator itself belongs to the northern hemisphere.
    pub fn of(lat: f64) -> Self {
        if lat < 0.0 {
            Self::South
        } else {
            Self::North
        }
    }
}

/// A single WGS84 UTM zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    number: u8,
    hemisphere: Hemisphere,
}

impl Zone {
    pub fn new(number: u8, hemisphere: Hemisphere) -> Result<Self, UtmError> {
        if (1..=60).contains(&number) {
            Ok(Self { number, hemisphere })
        } else {
            Err(UtmError::UnsupportedZone(u16::from(number)))
        }
    }

    /// Parses a WGS84 UTM EPSG code (`326xx` or `327xx`).
    pub fn from_epsg(code: u16) -> Result<Self, UtmError> {
        let (base, hemisphere) = match code {
            32601..=32660 => (EPSG_NORTH, Hemisphere::North),
            32701..=32760 => (EPSG_SOUTH, Hemisphere::South),
            _ => return Err(UtmError::UnsupportedZone(code)),
        };
        // Range checked above, always fits in a u8.
        let number = u8::try_from(code - base).map_err(|_| UtmError::UnsupportedZone(code))?;
        Self::new(number, hemisphere)
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn epsg(&self) -> u16 {
        let base = match self.hemisphere {
            Hemisphere::North => EPSG_NORTH,
            Hemisphere::South => EPSG_SOUTH,
        };
        base + u16::from(self.number)
    }

    /// Longitude of the zone's central meridian (degrees).
    pub fn central_meridian(&self) -> f64 {
        f64::from(self.number) * 6.0 - 183.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hemisphere = match self.hemisphere {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        };
        write!(f, "UTM {}{} (EPSG:{})", self.number, hemisphere, self.epsg())
    }
}

/// Returns the UTM zone number containing (`lat`, `lon`), honoring
/// the irregular zones over southwest Norway and Svalbard.
///
/// Coordinates are assumed to be in range.
pub fn zone_number(lat: f64, lon: f64) -> u8 {
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }

    if (72.0..=84.0).contains(&lat) {
        match lon {
            lon if (0.0..9.0).contains(&lon) => return 31,
            lon if (9.0..21.0).contains(&lon) => return 33,
            lon if (21.0..33.0).contains(&lon) => return 35,
            lon if (33.0..42.0).contains(&lon) => return 37,
            _ => (),
        }
    }

    // lon == 180 falls on the western edge of a 61st zone.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let number = ((lon + 180.0) / 6.0).floor() as u8 + 1;
    number.min(60)
}

/// Checks that `coord` is a finite lat/lon inside the valid domain.
pub fn validate(index: usize, coord: Coord<f64>) -> Result<(), UtmError> {
    let Coord { x: lon, y: lat } = coord;
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(UtmError::InvalidCoordinate { index, lat, lon })
    }
}

/// Returns the single zone best representing an entire track.
///
/// Every sample votes for its own zone and the most frequent zone
/// wins; ties go to the lowest zone number. The hemisphere is chosen
/// the same way, ties going north.
///
/// `samples` are `x: lon, y: lat` degrees.
pub fn select_zone(samples: &[Coord<f64>]) -> Result<Zone, UtmError> {
    if samples.is_empty() {
        return Err(UtmError::EmptyInput);
    }

    let mut zone_votes: BTreeMap<u8, usize> = BTreeMap::new();
    let mut hemisphere_votes: BTreeMap<Hemisphere, usize> = BTreeMap::new();
    for (index, &coord) in samples.iter().enumerate() {
        validate(index, coord)?;
        *zone_votes.entry(zone_number(coord.y, coord.x)).or_default() += 1;
        *hemisphere_votes.entry(Hemisphere::of(coord.y)).or_default() += 1;
    }

    let number = mode(&zone_votes).ok_or(UtmError::EmptyInput)?;
    let hemisphere = mode(&hemisphere_votes).ok_or(UtmError::EmptyInput)?;
    let zone = Zone::new(number, hemisphere)?;

    debug!(
        "select_zone; samples: {}, candidates: {}, zone: {}",
        samples.len(),
        zone_votes.len(),
        zone
    );

    Ok(zone)
}

/// Most frequent key, the smallest key winning ties.
fn mode<K: Copy + Ord>(votes: &BTreeMap<K, usize>) -> Option<K> {
    votes
        .iter()
        .fold(None, |best: Option<(K, usize)>, (&key, &count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((key, count)),
        })
        .map(|(key, _)| key)
}
