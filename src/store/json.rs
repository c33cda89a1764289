//! Calculation store backed by a single JSON document.
//!
//! The file holds `{ "calculations": [...] }` and is rewritten on every
//! mutation. There is no locking: one process should own a file at a time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::UID;
use crate::sim::lumen::{LightingRequirements, LightingResults, RoomDimensions};

use super::{Calculation, CalculationStore, rename_in};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CalculationsFile {
    #[serde(default)]
    calculations: Vec<Calculation>,
}

pub struct JsonCalculationStore {
    path: PathBuf,
}

impl JsonCalculationStore {
    /// Opens the store at `path`, creating an empty document (and missing
    /// parent directories) if the file does not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            store.save(&[])?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Calculation>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open file: {}", self.path.display()))?;
        let doc: CalculationsFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| {
                format!("Failed to parse calculation store: {}", self.path.display())
            })?;
        Ok(doc.calculations)
    }

    /// Writes to a sibling temporary file first so a failed write never
    /// truncates the existing document.
    fn save(&self, calculations: &[Calculation]) -> Result<()> {
        #[derive(Serialize)]
        struct CalculationsRef<'a> {
            calculations: &'a [Calculation],
        }

        let tmp = self.path.with_extension("json.tmp");
        {
            let file = File::create(&tmp)
                .with_context(|| format!("Failed to create file: {}", tmp.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &CalculationsRef { calculations })
                .with_context(|| format!("Failed to write calculation store: {}", tmp.display()))?;
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path).with_context(|| {
            format!("Failed to replace calculation store: {}", self.path.display())
        })?;
        Ok(())
    }
}

impl CalculationStore for JsonCalculationStore {
    fn create(
        &mut self,
        user_id: &str,
        name: &str,
        room_dimensions: RoomDimensions,
        lighting_requirements: LightingRequirements,
        results: LightingResults,
    ) -> Result<Calculation> {
        let calc = Calculation::new(
            user_id,
            name,
            room_dimensions,
            lighting_requirements,
            results,
        )?;
        let mut calculations = self.load()?;
        calculations.push(calc.clone());
        self.save(&calculations)?;
        Ok(calc)
    }

    fn get(&self, id: &UID) -> Result<Option<Calculation>> {
        Ok(self.load()?.into_iter().find(|c| &c.id == id))
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Calculation>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect())
    }

    fn rename(&mut self, id: &UID, name: &str) -> Result<Calculation> {
        let mut calculations = self.load()?;
        let calc = rename_in(&mut calculations, id, name)?;
        self.save(&calculations)?;
        Ok(calc)
    }

    fn delete(&mut self, id: &UID) -> Result<bool> {
        let mut calculations = self.load()?;
        let before = calculations.len();
        calculations.retain(|c| &c.id != id);
        if calculations.len() == before {
            return Ok(false);
        }
        self.save(&calculations)?;
        Ok(true)
    }
}
