//! JSON files consumed and produced by the command line tool.
//!
//! A scenario file holds the two calculation inputs using the same camelCase
//! keys as stored calculations:
//!
//! ```json
//! {
//!   "name": "Office 2.14",
//!   "roomDimensions": { "length": 10, "width": 8, "height": 3, "workplaneHeight": 0.85 },
//!   "lightingRequirements": {
//!     "targetIlluminance": 500, "fluxPerLamp": 3600,
//!     "contaminationLevel": "normal", "maintenanceInterval": 2,
//!     "ceilingReflectance": 0.7, "wallReflectance": 0.5
//!   }
//! }
//! ```
//!
//! Missing sections fall back to the defaults.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::catalog::FixtureCatalog;
use crate::sim::lumen::{CalculationConfig, LightingOutput, LightingRequirements, RoomDimensions};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub room_dimensions: RoomDimensions,
    #[serde(default)]
    pub lighting_requirements: LightingRequirements,
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {what} file: {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T, what: &str) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write {what} file: {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

pub fn read_scenario(path: &Path) -> Result<Scenario> {
    read_json(path, "scenario")
}

pub fn write_scenario(path: &Path, scenario: &Scenario) -> Result<()> {
    write_json(path, scenario, "scenario")
}

/// Reads a calculation config. Keys absent from the file keep their defaults.
pub fn read_config(path: &Path) -> Result<CalculationConfig> {
    read_json(path, "config")
}

/// Reads a lamp catalog given as a JSON array of lamps.
pub fn read_catalog(path: &Path) -> Result<FixtureCatalog> {
    read_json(path, "catalog")
}

pub fn write_output(path: &Path, output: &LightingOutput) -> Result<()> {
    write_json(path, output, "output")
}
