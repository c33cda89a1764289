use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lumenplan::io::{Scenario, read_catalog, read_config, read_scenario, write_output};
use lumenplan::sim::lumen::illuminance::grid_summary;
use lumenplan::{
    CalculationConfig, CalculationStore, FixtureCatalog, JsonCalculationStore, LightingOutput,
    RoomType, compute_lighting_with,
};

/// Lumen-method lighting design for rectangular rooms.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Scenario JSON with roomDimensions and lightingRequirements. Defaults are used if omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Calculation config JSON. Keys absent from the file keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lamp catalog JSON (array of lamps). The built-in presets are used if omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Take the target illuminance from a room type preset (e.g. office, corridor).
    #[arg(long)]
    room_type: Option<String>,

    /// Write the full output (results, lamp positions, illuminance grid) to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the full output as JSON instead of the report.
    #[arg(long)]
    json: bool,

    /// Save the calculation into this JSON store.
    #[arg(long, requires = "user")]
    save: Option<PathBuf>,

    /// Owner of the saved calculation.
    #[arg(long)]
    user: Option<String>,

    /// Name of the saved calculation. Falls back to the scenario name.
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut scenario = match &args.input {
        Some(path) => read_scenario(path)?,
        None => Scenario::default(),
    };
    if let Some(room_type) = &args.room_type {
        let room_type: RoomType = room_type.parse()?;
        scenario.lighting_requirements.target_illuminance = room_type.recommended_lux();
    }
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => CalculationConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => read_catalog(path)?,
        None => FixtureCatalog::with_presets(),
    };

    let output = compute_lighting_with(
        &scenario.room_dimensions,
        &scenario.lighting_requirements,
        &config,
        &catalog,
    )
    .context("Lighting calculation failed")?;

    if let Some(path) = &args.output {
        write_output(path, &output)?;
    }

    if let Some(store_path) = &args.save {
        let user = args.user.as_deref().context("--save requires --user")?;
        let name = args
            .name
            .clone()
            .or_else(|| scenario.name.clone())
            .unwrap_or_else(|| "Untitled calculation".to_string());
        let mut store = JsonCalculationStore::open(store_path)?;
        let calc = store.create(
            user,
            &name,
            scenario.room_dimensions,
            scenario.lighting_requirements,
            output.results.clone(),
        )?;
        println!("Saved calculation {} ({})", calc.id, calc.name);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&scenario, &output);
    }
    Ok(())
}

fn print_report(scenario: &Scenario, output: &LightingOutput) {
    let room = &scenario.room_dimensions;
    let req = &scenario.lighting_requirements;
    let r = &output.results;

    if let Some(name) = &scenario.name {
        println!("{name}");
    }
    println!(
        "Room: {:.2} x {:.2} x {:.2} m, workplane {:.2} m",
        room.length, room.width, room.height, room.workplane_height
    );
    println!(
        "Target: {:.0} lx with {:.0} lm lamps ({}, {} y maintenance)",
        req.target_illuminance,
        req.flux_per_lamp,
        req.contamination_level.label(),
        req.maintenance_interval.years()
    );
    println!("{:-<50}", "");
    println!("  Room cavity ratio:  {:.2}", r.room_cavity_ratio);
    println!("  Utilization (CU):   {:.3}", r.coefficient_of_utilization);
    println!("  Maintenance (MF):   {:.2}", r.maintenance_factor);
    println!("  Lamps:              {}", r.number_of_lamps);
    println!(
        "  Layout:             {} rows x {} columns ({:.2} m x {:.2} m)",
        r.layout.rows, r.layout.columns, r.layout.length_spacing, r.layout.width_spacing
    );
    let d = &r.illuminance_distribution;
    println!(
        "  Illuminance:        avg {:.1} lx, min {:.1} lx, max {:.1} lx (U0 {:.2})",
        d.average, d.minimum, d.maximum, d.uniformity
    );
    if let Some((min, avg, max)) = grid_summary(&output.illuminance_grid) {
        println!(
            "  Point samples:      avg {:.1} lx, min {:.1} lx, max {:.1} lx",
            avg, min, max
        );
    }
    let e = &r.energy_metrics;
    println!(
        "  Power:              {:.2} W, {:.2} W/m2 ({})",
        e.total_power, e.power_density, e.efficiency_rating
    );
    println!("{:-<50}", "");
    println!("Bill of materials:");
    for item in &r.bill_of_materials {
        let description = item.description.as_deref().unwrap_or("");
        println!(
            "  {:20} {:>8} {:4} {}",
            item.name, item.quantity, item.unit, description
        );
    }
    println!();
    println!("Lamp positions:");
    for (i, p) in output.lamp_positions.iter().enumerate() {
        println!("  #{:<3} {:.2}", i + 1, p);
    }
}
