use crate::options::LatLon;
use anyhow::Result;
use footprint::geo::geometry::Coord;
use std::io::BufRead;

/// Reads "lat,lon" samples, one per line.
///
/// Blank lines and `#` comments are skipped, as is a single header
/// line if it precedes all samples.
pub fn read_samples<R: BufRead>(reader: R) -> Result<Vec<Coord<f64>>> {
    let mut samples = Vec::new();
    let mut header_allowed = true;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<LatLon>() {
            Ok(LatLon(coord)) => samples.push(coord),
            Err(_) if header_allowed => (),
            Err(err) => return Err(err.context(format!("line {}: {line:?}", idx + 1))),
        }
        header_allowed = false;
    }
    Ok(samples)
}
