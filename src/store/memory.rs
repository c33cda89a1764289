use anyhow::Result;

use crate::UID;
use crate::sim::lumen::{LightingRequirements, LightingResults, RoomDimensions};

use super::{Calculation, CalculationStore, rename_in};

/// Volatile store, mainly for tests and one-shot sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryCalculationStore {
    calculations: Vec<Calculation>,
}

impl MemoryCalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }
}

impl CalculationStore for MemoryCalculationStore {
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
        self.calculations.push(calc.clone());
        Ok(calc)
    }

    fn get(&self, id: &UID) -> Result<Option<Calculation>> {
        Ok(self.calculations.iter().find(|c| &c.id == id).cloned())
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Calculation>> {
        Ok(self
            .calculations
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    fn rename(&mut self, id: &UID, name: &str) -> Result<Calculation> {
        rename_in(&mut self.calculations, id, name)
    }

    fn delete(&mut self, id: &UID) -> Result<bool> {
        let before = self.calculations.len();
        self.calculations.retain(|c| &c.id != id);
        Ok(self.calculations.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::exercise_store;

    #[test]
    fn test_memory_store_contract() -> Result<()> {
        let mut store = MemoryCalculationStore::new();
        assert!(store.is_empty());
        exercise_store(&mut store)?;
        assert_eq!(store.len(), 2);
        Ok(())
    }
}
