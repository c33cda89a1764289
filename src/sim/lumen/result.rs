use serde::{Deserialize, Serialize};

use crate::Point;

use super::energy::EnergyMetrics;
use super::illuminance::{IlluminanceDistribution, IlluminanceGridPoint};
use super::layout::Layout;
use super::materials::BomItem;

/// Headline results of a lumen-method calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingResults {
    pub number_of_lamps: usize,
    pub room_cavity_ratio: f64,
    pub coefficient_of_utilization: f64,
    pub maintenance_factor: f64,
    pub layout: Layout,
    pub illuminance_distribution: IlluminanceDistribution,
    pub energy_metrics: EnergyMetrics,
    #[serde(default)]
    pub bill_of_materials: Vec<BomItem>,
}

/// Everything a calculation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingOutput {
    pub results: LightingResults,
    /// One entry per fixture.
    pub lamp_positions: Vec<Point>,
    /// Visualization samples over the floor plan.
    pub illuminance_grid: Vec<IlluminanceGridPoint>,
}

impl LightingOutput {
    /// Checks the structural invariants every run must satisfy.
    pub fn is_consistent(&self) -> bool {
        let r = &self.results;
        let d = &r.illuminance_distribution;
        r.number_of_lamps >= 1
            && r.layout.capacity() >= r.number_of_lamps
            && self.lamp_positions.len() == r.number_of_lamps
            && d.minimum <= d.average
            && d.average <= d.maximum
            && (d.uniformity - d.minimum / d.average).abs() < 1e-12
    }
}
