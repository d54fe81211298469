use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use svg::Document;

use fieldgeo::entities::{Field, FieldId};
use fieldgeo::geometry::primitives::Polygon;
use fieldgeo::io::import;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse file: {}", path.display()))
}

/// Reads a field listing, a JSON array of field records. Records that cannot be imported are skipped.
pub fn read_fields(path: &Path) -> Result<Vec<Field>> {
    let records: Vec<serde_json::Value> = read_json(path)?;
    let fields = import::import_fields(&records);
    info!(
        "[IO] imported {}/{} field record(s) from {}",
        fields.len(),
        records.len(),
        path.display()
    );
    Ok(fields)
}

/// Reads a drawn polygon, `[[lat, lng], ...]`
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let ring: Vec<Vec<f64>> = read_json(path)?;
    import::import_polygon(&ring).with_context(|| format!("invalid polygon in {}", path.display()))
}

/// Reads per-field vegetation indices, `{ "<field id>": index }`
pub fn read_indices(path: &Path) -> Result<HashMap<FieldId, f64>> {
    read_json(path)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)?;

    info!("[IO] report written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        // logs go to stderr, reports may be printed to stdout
        .chain(std::io::stderr())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
