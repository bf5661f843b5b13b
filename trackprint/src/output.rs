use crate::options::Format;
use anyhow::Result;
use footprint::{
    geo::geometry::{Coord, Point},
    Footprint,
};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue};
use serde::Serialize;
use std::io::Write;

/// Writes `samples` as points.
pub fn points<W: Write>(samples: &[Coord<f64>], format: Format, out: W) -> Result<()> {
    match format {
        Format::Geojson => {
            let features = samples
                .iter()
                .enumerate()
                .map(|(index, &coord)| {
                    let geometry = Geometry::new((&Point::from(coord)).into());
                    feature(geometry, [("index", JsonValue::from(index))])
                })
                .collect();
            write_json(out, &collection(features))
        }
        Format::Json => {
            #[derive(Serialize)]
            struct JsonEntry {
                index: usize,
                lat: f64,
                lon: f64,
            }
            let entries: Vec<JsonEntry> = samples
                .iter()
                .enumerate()
                .map(|(index, coord)| JsonEntry {
                    index,
                    lat: coord.y,
                    lon: coord.x,
                })
                .collect();
            write_json(out, &entries)
        }
    }
}

/// Writes one polygon per footprint.
pub fn polygons<W: Write>(footprints: &[Footprint], format: Format, out: W) -> Result<()> {
    match format {
        Format::Geojson => {
            let features = footprints
                .iter()
                .map(|footprint| {
                    let geometry = Geometry::new((&footprint.polygon()).into());
                    feature(
                        geometry,
                        [
                            ("index", JsonValue::from(footprint.index)),
                            ("heading", JsonValue::from(footprint.heading)),
                            ("zone", JsonValue::from(footprint.zone.epsg())),
                        ],
                    )
                })
                .collect();
            write_json(out, &collection(features))
        }
        Format::Json => write_json(out, &footprints),
    }
}

fn feature<const N: usize>(geometry: Geometry, properties: [(&str, JsonValue); N]) -> Feature {
    let properties: JsonObject = properties
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn collection(features: Vec<Feature>) -> GeoJson {
    GeoJson::from(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
