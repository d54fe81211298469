use std::path::Path;

use anyhow::Result;
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use serde::Serialize;

use fieldgeo::entities::{FieldId, FieldSelection};
use fieldgeo::geometry::primitives::Point;
use fieldgeo_cli::commands;
use fieldgeo_cli::config::FieldGeoConfig;
use fieldgeo_cli::io;
use fieldgeo_cli::io::cli::{Cli, Command};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FieldGeoConfig::default()
        }
        Some(config_file) => io::read_json(config_file)?,
    };

    info!("[MAIN] Successfully parsed FieldGeoConfig: {config:?}");

    match args.command {
        Command::Locate {
            fields,
            lat,
            lng,
            all,
        } => {
            let fields = io::read_fields(&fields)?;
            let output = commands::locate(&fields, Point(lat, lng), all, &config);
            report(&output, args.output_file.as_deref())
        }
        Command::Select { fields, polygon } => {
            let fields = io::read_fields(&fields)?;
            let drawn = io::read_polygon(&polygon)?;
            let output = commands::select(&fields, &drawn);
            report(&output, args.output_file.as_deref())
        }
        Command::Area { fields } => {
            let fields = io::read_fields(&fields)?;
            report(&commands::area(&fields), args.output_file.as_deref())
        }
        Command::Render {
            fields,
            indices,
            selection,
            svg_file,
            demo,
        } => {
            let fields = io::read_fields(&fields)?;
            let indices = match indices {
                Some(path) => io::read_indices(&path)?,
                None => Default::default(),
            };
            let selection = match selection {
                Some(path) => io::read_json::<Vec<FieldId>>(&path)?
                    .into_iter()
                    .collect(),
                None => FieldSelection::new(),
            };
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };

            let (document, mut output) =
                commands::render(&fields, &indices, &selection, demo, &config, &mut rng);
            io::write_svg(&document, &svg_file)?;
            output.svg_file = svg_file.display().to_string();
            report(&output, args.output_file.as_deref())
        }
    }
}

fn report(output: &impl Serialize, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => io::write_json(output, path),
        None => {
            println!("{}", serde_json::to_string_pretty(output)?);
            Ok(())
        }
    }
}
