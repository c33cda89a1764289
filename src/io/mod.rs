//! File I/O for calculation inputs and outputs.

pub mod scenario;

pub use scenario::{
    Scenario, read_catalog, read_config, read_scenario, write_output, write_scenario,
};
