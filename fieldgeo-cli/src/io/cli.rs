use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    /// Where to write the JSON report, printed to stdout if omitted
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Finds the field(s) containing a point, or the nearest field if there is none
    Locate {
        #[arg(short, long, value_name = "FILE")]
        fields: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Report every containing field instead of the first one
        #[arg(long)]
        all: bool,
    },
    /// Selects the fields picked by a drawn polygon (`[[lat, lng], ...]`)
    Select {
        #[arg(short, long, value_name = "FILE")]
        fields: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        polygon: PathBuf,
    },
    /// Reports the area of every field
    Area {
        #[arg(short, long, value_name = "FILE")]
        fields: PathBuf,
    },
    /// Renders the vegetation index overlay of the fields to SVG
    Render {
        #[arg(short, long, value_name = "FILE")]
        fields: PathBuf,
        /// Per-field vegetation index, `{ "<field id>": index }`
        #[arg(short, long, value_name = "FILE")]
        indices: Option<PathBuf>,
        /// Ids of the fields to highlight, `[id, ...]`
        #[arg(short, long, value_name = "FILE")]
        selection: Option<PathBuf>,
        #[arg(long, value_name = "FILE")]
        svg_file: PathBuf,
        /// Scatter random demo polygons around the fields
        #[arg(long)]
        demo: bool,
    },
}
