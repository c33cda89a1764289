//! Lumen-method lighting design.
//!
//! Pipeline: room cavity ratio -> coefficient of utilization -> maintenance
//! factor -> fixture count -> layout -> fixture positions -> illuminance
//! estimates -> energy metrics -> bill of materials. Every stage is a pure
//! function; [`calculation::compute_lighting`] validates the inputs and
//! wires the stages together.

pub mod calculation;
pub mod cavity;
pub mod config;
pub mod energy;
pub mod illuminance;
pub mod layout;
pub mod maintenance;
pub mod materials;
pub mod result;

pub use calculation::{compute_lighting, compute_lighting_with};
pub use config::{
    CalculationConfig, ContaminationLevel, FixtureRounding, LightingRequirements,
    MaintenanceInterval, RoomDimensions,
};
pub use energy::{EfficiencyRating, EnergyMetrics};
pub use illuminance::{IlluminanceDistribution, IlluminanceGridPoint};
pub use layout::Layout;
pub use materials::BomItem;
pub use result::{LightingOutput, LightingResults};
