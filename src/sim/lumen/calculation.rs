use log::{debug, info, warn};

use crate::catalog::FixtureCatalog;
use crate::error::{LightingError, Result};

use super::cavity::{coefficient_of_utilization, room_cavity_ratio};
use super::config::{CalculationConfig, LightingRequirements, RoomDimensions};
use super::energy::{energy_metrics, watts_per_lamp};
use super::illuminance::{illuminance_distribution, illuminance_grid};
use super::layout::{fixture_count, lamp_positions, solve_layout};
use super::maintenance::maintenance_factor;
use super::materials::bill_of_materials;
use super::result::{LightingOutput, LightingResults};

/// Runs the lumen method with the default configuration and lamp catalog.
pub fn compute_lighting(
    room: &RoomDimensions,
    requirements: &LightingRequirements,
) -> Result<LightingOutput> {
    compute_lighting_with(
        room,
        requirements,
        &CalculationConfig::default(),
        &FixtureCatalog::with_presets(),
    )
}

/// Runs the lumen method.
///
/// All inputs are validated up front; on success every derived quantity is
/// finite. The computation is deterministic and holds no state, so repeated
/// calls with equal inputs return equal outputs.
pub fn compute_lighting_with(
    room: &RoomDimensions,
    requirements: &LightingRequirements,
    config: &CalculationConfig,
    catalog: &FixtureCatalog,
) -> Result<LightingOutput> {
    validate(room, requirements, config)?;

    let floor_area = room.floor_area();
    let rcr = room_cavity_ratio(room);
    let cu = coefficient_of_utilization(
        rcr,
        requirements.ceiling_reflectance,
        requirements.wall_reflectance,
    );
    let mf = maintenance_factor(
        requirements.contamination_level,
        requirements.maintenance_interval,
    );
    debug!("RCR = {rcr:.4}, CU = {cu:.4}, MF = {mf:.2}");

    let count = fixture_count(
        requirements.target_illuminance,
        floor_area,
        requirements.flux_per_lamp,
        cu,
        mf,
        config.rounding,
    );
    if count == 0 {
        return Err(LightingError::DegenerateLayout);
    }
    if count > config.max_fixtures {
        return Err(LightingError::TooManyFixtures {
            count,
            max: config.max_fixtures,
        });
    }

    let layout = solve_layout(count, room.length, room.width);
    debug!(
        "{count} fixtures in {} rows x {} columns",
        layout.rows, layout.columns
    );
    let positions = lamp_positions(&layout, room, count, config.mount_clearance);

    let distribution =
        illuminance_distribution(count, requirements.flux_per_lamp, cu, mf, floor_area);
    let grid = illuminance_grid(
        room,
        &positions,
        requirements.flux_per_lamp,
        cu,
        mf,
        config.grid_resolution,
    );

    let fixture = catalog.lookup_by_flux(requirements.flux_per_lamp);
    if fixture.is_none() {
        warn!(
            "no catalog lamp rated {} lm, assuming {} lm/W",
            requirements.flux_per_lamp, config.fallback_efficacy
        );
    }
    let watts = watts_per_lamp(requirements.flux_per_lamp, fixture, config.fallback_efficacy);
    let energy = energy_metrics(count, floor_area, watts);
    let materials = bill_of_materials(count, room, &layout, requirements.flux_per_lamp, fixture);

    info!(
        "{count} lamps for {} lx over {floor_area:.1} m2: {:.1} W ({})",
        requirements.target_illuminance, energy.total_power, energy.efficiency_rating
    );

    Ok(LightingOutput {
        results: LightingResults {
            number_of_lamps: count,
            room_cavity_ratio: rcr,
            coefficient_of_utilization: cu,
            maintenance_factor: mf,
            layout,
            illuminance_distribution: distribution,
            energy_metrics: energy,
            bill_of_materials: materials,
        },
        lamp_positions: positions,
        illuminance_grid: grid,
    })
}

fn validate(
    room: &RoomDimensions,
    requirements: &LightingRequirements,
    config: &CalculationConfig,
) -> Result<()> {
    room.validate()?;
    requirements.validate()?;
    config.validate()?;

    if !room.floor_area().is_finite() {
        return Err(LightingError::invalid("length", "floor area overflows"));
    }
    let mount_height = room.height - config.mount_clearance;
    if mount_height <= room.workplane_height {
        return Err(LightingError::invalid(
            "workplaneHeight",
            format!(
                "must be below the fixture mounting height ({mount_height} m), got {} m",
                room.workplane_height
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lumen::config::{ContaminationLevel, FixtureRounding, MaintenanceInterval};
    use crate::sim::lumen::energy::EfficiencyRating;
    use anyhow::Result;

    #[test]
    fn test_reference_scenario() -> Result<()> {
        let output =
            compute_lighting(&RoomDimensions::default(), &LightingRequirements::default())?;
        let r = &output.results;
        assert!((r.room_cavity_ratio - 2.41875).abs() < 1e-12);
        assert!((0.3..=0.85).contains(&r.coefficient_of_utilization));
        assert_eq!(r.maintenance_factor, 0.84);
        let expected =
            (500.0 * 80.0 / (3600.0 * r.coefficient_of_utilization * 0.84)).ceil() as usize;
        assert_eq!(r.number_of_lamps, expected);
        assert_eq!(r.number_of_lamps, 20);
        assert_eq!((r.layout.rows, r.layout.columns), (4, 5));
        assert_eq!(r.energy_metrics.efficiency_rating, EfficiencyRating::Good);
        assert_eq!(output.illuminance_grid.len(), 400);
        assert!(output.is_consistent());
        Ok(())
    }

    #[test]
    fn test_zero_flux_rejected() {
        let requirements = LightingRequirements {
            flux_per_lamp: 0.0,
            ..Default::default()
        };
        let err = compute_lighting(&RoomDimensions::default(), &requirements).unwrap_err();
        assert!(matches!(
            err,
            LightingError::InvalidArgument {
                field: "fluxPerLamp",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_area_rejected() {
        let room = RoomDimensions::new(0.0, 8.0, 3.0, 0.85);
        let err = compute_lighting(&room, &LightingRequirements::default()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_workplane_at_mount_height_rejected() {
        // Mount height 2.9 m; a workplane there would put samples on a lamp.
        let room = RoomDimensions::new(10.0, 8.0, 3.0, 2.9);
        let err = compute_lighting(&room, &LightingRequirements::default()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_underflowing_count_is_degenerate() {
        // Positive and finite, but the lumen quotient underflows to zero.
        let requirements = LightingRequirements {
            target_illuminance: 5e-324,
            ..Default::default()
        };
        let err = compute_lighting(&RoomDimensions::default(), &requirements).unwrap_err();
        assert!(matches!(err, LightingError::DegenerateLayout));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_too_many_fixtures() {
        let requirements = LightingRequirements {
            target_illuminance: 1.0e7,
            flux_per_lamp: 100.0,
            ..Default::default()
        };
        let err = compute_lighting(&RoomDimensions::default(), &requirements).unwrap_err();
        assert!(matches!(err, LightingError::TooManyFixtures { max: 10_000, .. }));
    }

    #[test]
    fn test_even_rounding_policy() -> Result<()> {
        let room = RoomDimensions::new(4.0, 3.0, 2.7, 0.8);
        let requirements = LightingRequirements {
            target_illuminance: 300.0,
            flux_per_lamp: 1100.0,
            contamination_level: ContaminationLevel::Clean,
            maintenance_interval: MaintenanceInterval::new(1)?,
            ..Default::default()
        };
        let catalog = FixtureCatalog::with_presets();
        let plain =
            compute_lighting_with(&room, &requirements, &CalculationConfig::new(), &catalog)?;
        let even_config = CalculationConfig {
            rounding: FixtureRounding::CeilEven,
            ..CalculationConfig::new()
        };
        let even = compute_lighting_with(&room, &requirements, &even_config, &catalog)?;
        let n = plain.results.number_of_lamps;
        assert_eq!(even.results.number_of_lamps, n + n % 2);
        assert_eq!(even.results.number_of_lamps % 2, 0);
        assert!(even.is_consistent());
        Ok(())
    }

    #[test]
    fn test_fallback_efficacy_without_catalog_match() -> Result<()> {
        let requirements = LightingRequirements {
            flux_per_lamp: 3000.0,
            ..Default::default()
        };
        let output = compute_lighting(&RoomDimensions::default(), &requirements)?;
        let r = &output.results;
        let expected_power = r.number_of_lamps as f64 * 30.0;
        assert!((r.energy_metrics.total_power - expected_power).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_custom_grid_resolution() -> Result<()> {
        let config = CalculationConfig {
            grid_resolution: 7,
            ..CalculationConfig::new()
        };
        let output = compute_lighting_with(
            &RoomDimensions::default(),
            &LightingRequirements::default(),
            &config,
            &FixtureCatalog::new(),
        )?;
        assert_eq!(output.illuminance_grid.len(), 49);
        Ok(())
    }
}
