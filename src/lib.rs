pub mod catalog;
pub mod error;
pub mod geom;
pub mod io;
pub mod sim;
pub mod store;
mod uid;

// Prelude
pub use catalog::{FixtureCatalog, FixtureSpec, LampType, RoomType};
pub use error::LightingError;
pub use geom::point::Point;
pub use sim::lumen::{
    CalculationConfig, ContaminationLevel, LightingOutput, LightingRequirements, LightingResults,
    MaintenanceInterval, RoomDimensions, compute_lighting, compute_lighting_with,
};
pub use store::{Calculation, CalculationStore, JsonCalculationStore, MemoryCalculationStore};
pub use uid::UID;
