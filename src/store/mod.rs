//! Saved calculations.
//!
//! A [`Calculation`] is the durable record of one run: its name, the inputs
//! and the headline results. Lamp positions and the illuminance grid are not
//! stored since they are cheap to recompute from the inputs.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UID;
use crate::error::LightingError;
use crate::sim::lumen::{LightingRequirements, LightingResults, RoomDimensions};

pub mod json;
pub mod memory;

pub use json::JsonCalculationStore;
pub use memory::MemoryCalculationStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub id: UID,
    pub user_id: String,
    pub name: String,
    pub room_dimensions: RoomDimensions,
    pub lighting_requirements: LightingRequirements,
    pub results: LightingResults,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Calculation {
    pub fn new(
        user_id: &str,
        name: &str,
        room_dimensions: RoomDimensions,
        lighting_requirements: LightingRequirements,
        results: LightingResults,
    ) -> Result<Self> {
        let name = checked_name(name)?;
        let now = Utc::now();
        Ok(Self {
            id: UID::new(),
            user_id: user_id.to_string(),
            name,
            room_dimensions,
            lighting_requirements,
            results,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Persistence boundary for saved calculations.
pub trait CalculationStore {
    /// Stores a new calculation and returns the record.
    fn create(
        &mut self,
        user_id: &str,
        name: &str,
        room_dimensions: RoomDimensions,
        lighting_requirements: LightingRequirements,
        results: LightingResults,
    ) -> Result<Calculation>;

    fn get(&self, id: &UID) -> Result<Option<Calculation>>;

    /// All calculations of a user, oldest first.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Calculation>>;

    /// Renames a calculation and bumps its `updated_at`.
    fn rename(&mut self, id: &UID, name: &str) -> Result<Calculation>;

    /// Removes a calculation. Returns false when nothing was deleted.
    fn delete(&mut self, id: &UID) -> Result<bool>;
}

/// Trims a calculation name and rejects blank ones.
fn checked_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LightingError::InvalidArgument {
            field: "name",
            reason: "must not be blank".to_string(),
        }
        .into());
    }
    Ok(name.to_string())
}

/// Shared mutation logic of the store implementations.
fn rename_in(calculations: &mut [Calculation], id: &UID, name: &str) -> Result<Calculation> {
    let name = checked_name(name)?;
    let calc = calculations
        .iter_mut()
        .find(|c| &c.id == id)
        .ok_or_else(|| LightingError::NotFound(id.clone()))?;
    calc.name = name;
    calc.updated_at = Utc::now();
    Ok(calc.clone())
}
