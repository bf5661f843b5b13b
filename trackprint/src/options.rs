use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand, ValueEnum};
use footprint::geo::geometry::Coord;
use std::{path::PathBuf, str::FromStr};

/// Generate ground footprints for along-track lidar samples.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file with one "lat,lon" sample per line, in track order
    /// (defaults to stdin).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Footprint extent along the track, in meters.
    #[arg(long, default_value_t = 100.0)]
    pub along: f64,

    /// Footprint extent across the track, in meters.
    #[arg(long, default_value_t = 13.0)]
    pub across: f64,

    /// Build footprints in this UTM zone (EPSG code, e.g. 32633)
    /// instead of the track's most common zone.
    #[arg(short, long)]
    pub zone: Option<u16>,

    #[arg(short, long, value_enum, default_value_t = Format::Geojson)]
    pub format: Format,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// GeoJSON FeatureCollection.
    Geojson,

    /// Plain JSON records.
    Json,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write the samples themselves as points.
    Points,

    /// Write one footprint polygon per sample.
    Polygons,
}

/// A "lat,lon" pair, stored `x: lon, y: lat`.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct LatLon(pub Coord<f64>);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lon = f64::from_str(lon_str.trim())?;
        Ok(Self(Coord { y: lat, x: lon }))
    }
}
