mod input;
mod options;
mod output;

use anyhow::Error as AnyError;
use clap::Parser;
use footprint::{
    utm::{TransverseMercator, Zone},
    Footprint,
};
use log::info;
use options::{Cli, Command as CliCmd};
use std::{fs::File, io::BufReader};

fn main() -> Result<(), AnyError> {
    let Cli {
        input: input_path,
        along,
        across,
        zone,
        format,
        cmd,
    } = Cli::parse();

    env_logger::init();

    let samples = match &input_path {
        Some(path) => input::read_samples(BufReader::new(File::open(path)?))?,
        None => input::read_samples(std::io::stdin().lock())?,
    };
    info!("read {} samples", samples.len());

    let out = std::io::stdout().lock();
    match cmd {
        CliCmd::Points => {
            for (index, &sample) in samples.iter().enumerate() {
                footprint::utm::validate(index, sample)?;
            }
            output::points(&samples, format, out)?;
        }
        CliCmd::Polygons => {
            let mut builder = Footprint::builder().along(along).across(across);
            if let Some(code) = zone {
                builder = builder.zone(Zone::from_epsg(code)?);
            }
            let footprints = builder.build(&TransverseMercator::wgs84(), &samples)?;
            info!(
                "built {} footprints in {}",
                footprints.len(),
                footprints
                    .first()
                    .map_or_else(|| "no zone".to_string(), |footprint| footprint.zone.to_string())
            );
            output::polygons(&footprints, format, out)?;
        }
    };

    Ok(())
}
