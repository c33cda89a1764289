use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LightingError, Result};

/// Interior dimensions of a rectangular room, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDimensions {
    /// Extent along the x axis.
    pub length: f64,
    /// Extent along the y axis.
    pub width: f64,
    /// Floor to ceiling.
    pub height: f64,
    /// Height of the reference plane at which illuminance is evaluated.
    pub workplane_height: f64,
}

impl RoomDimensions {
    pub fn new(length: f64, width: f64, height: f64, workplane_height: f64) -> Self {
        Self {
            length,
            width,
            height,
            workplane_height,
        }
    }

    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }

    /// Height of the cavity between the workplane and the ceiling.
    pub fn cavity_height(&self) -> f64 {
        self.height - self.workplane_height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.length / self.width
    }

    /// Checks that every dimension is finite and positive and that the
    /// workplane lies below the ceiling.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("length", self.length)?;
        ensure_positive("width", self.width)?;
        ensure_positive("height", self.height)?;
        ensure_positive("workplaneHeight", self.workplane_height)?;
        if self.workplane_height >= self.height {
            return Err(LightingError::invalid(
                "workplaneHeight",
                format!(
                    "must be below the room height ({} m), got {} m",
                    self.height, self.workplane_height
                ),
            ));
        }
        Ok(())
    }
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self::new(10.0, 8.0, 3.0, 0.85)
    }
}

/// Dirt accumulation category of the room environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContaminationLevel {
    #[serde(rename = "very clean")]
    VeryClean,
    #[serde(rename = "clean")]
    Clean,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "dirty")]
    Dirty,
}

impl ContaminationLevel {
    pub const ALL: [ContaminationLevel; 4] = [
        ContaminationLevel::VeryClean,
        ContaminationLevel::Clean,
        ContaminationLevel::Normal,
        ContaminationLevel::Dirty,
    ];

    /// Canonical key, as used in stored records.
    pub fn key(&self) -> &'static str {
        match self {
            Self::VeryClean => "very clean",
            Self::Clean => "clean",
            Self::Normal => "normal",
            Self::Dirty => "dirty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryClean => "Very Clean",
            Self::Clean => "Clean",
            Self::Normal => "Normal",
            Self::Dirty => "Dirty",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::VeryClean => {
                "Environments with minimal dust or dirt (e.g., clean rooms, specialized labs)"
            }
            Self::Clean => {
                "Well-maintained environments with regular cleaning (e.g., offices, homes)"
            }
            Self::Normal => {
                "Standard environments with typical dust levels (e.g., classrooms, retail spaces)"
            }
            Self::Dirty => {
                "Environments with high dust levels (e.g., industrial spaces, workshops)"
            }
        }
    }

    /// Row index into the maintenance factor table.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::VeryClean => 0,
            Self::Clean => 1,
            Self::Normal => 2,
            Self::Dirty => 3,
        }
    }
}

impl FromStr for ContaminationLevel {
    type Err = LightingError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|level| level.key() == normalized)
            .ok_or_else(|| {
                LightingError::invalid(
                    "contaminationLevel",
                    format!("expected one of very clean, clean, normal, dirty; got {s:?}"),
                )
            })
    }
}

impl fmt::Display for ContaminationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Cleaning and relamping interval in whole years (1 to 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaintenanceInterval(u8);

impl MaintenanceInterval {
    pub const MIN_YEARS: u8 = 1;
    pub const MAX_YEARS: u8 = 6;

    pub fn new(years: u8) -> Result<Self> {
        if (Self::MIN_YEARS..=Self::MAX_YEARS).contains(&years) {
            Ok(Self(years))
        } else {
            Err(LightingError::invalid(
                "maintenanceInterval",
                format!(
                    "expected {}..={} years, got {years}",
                    Self::MIN_YEARS,
                    Self::MAX_YEARS
                ),
            ))
        }
    }

    pub fn years(&self) -> u8 {
        self.0
    }

    /// Column index into the maintenance factor table.
    pub(crate) fn index(&self) -> usize {
        (self.0 - Self::MIN_YEARS) as usize
    }
}

impl TryFrom<u8> for MaintenanceInterval {
    type Error = LightingError;

    fn try_from(years: u8) -> Result<Self> {
        Self::new(years)
    }
}

impl From<MaintenanceInterval> for u8 {
    fn from(interval: MaintenanceInterval) -> u8 {
        interval.0
    }
}

/// What the room must achieve and with which lamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingRequirements {
    /// Maintained illuminance on the workplane (lux).
    pub target_illuminance: f64,
    /// Luminous flux of a single lamp (lumens).
    pub flux_per_lamp: f64,
    pub contamination_level: ContaminationLevel,
    pub maintenance_interval: MaintenanceInterval,
    /// Ceiling reflectance in [0, 1].
    pub ceiling_reflectance: f64,
    /// Wall reflectance in [0, 1].
    pub wall_reflectance: f64,
}

impl LightingRequirements {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("targetIlluminance", self.target_illuminance)?;
        ensure_positive("fluxPerLamp", self.flux_per_lamp)?;
        ensure_fraction("ceilingReflectance", self.ceiling_reflectance)?;
        ensure_fraction("wallReflectance", self.wall_reflectance)?;
        Ok(())
    }
}

impl Default for LightingRequirements {
    fn default() -> Self {
        Self {
            target_illuminance: 500.0,
            flux_per_lamp: 3600.0,
            contamination_level: ContaminationLevel::Normal,
            maintenance_interval: MaintenanceInterval(2),
            ceiling_reflectance: 0.7,
            wall_reflectance: 0.5,
        }
    }
}

/// How the raw lumen-method quotient is turned into a fixture count.
///
/// Both policies round up so the target is never undershot. `CeilEven`
/// additionally rounds up to the next even count, which keeps two-row
/// layouts symmetric at the cost of an occasional extra fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureRounding {
    #[default]
    Ceil,
    CeilEven,
}

/// Tunable knobs of a calculation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculationConfig {
    /// Fixture count rounding policy.
    pub rounding: FixtureRounding,
    /// Samples per axis of the visualization illuminance grid.
    pub grid_resolution: usize,
    /// Distance between the ceiling and the mounted fixtures (m).
    pub mount_clearance: f64,
    /// Assumed lamp efficacy (lm/W) when the catalog has no matching lamp.
    pub fallback_efficacy: f64,
    /// Upper bound on the fixture count of a single run.
    pub max_fixtures: usize,
}

impl CalculationConfig {
    pub fn new() -> Self {
        Self {
            rounding: FixtureRounding::Ceil,
            grid_resolution: 20,
            mount_clearance: 0.1,
            fallback_efficacy: 100.0,
            max_fixtures: 10_000,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_resolution < 2 {
            return Err(LightingError::invalid(
                "gridResolution",
                format!("must be at least 2, got {}", self.grid_resolution),
            ));
        }
        ensure_positive("mountClearance", self.mount_clearance)?;
        ensure_positive("fallbackEfficacy", self.fallback_efficacy)?;
        if self.max_fixtures == 0 {
            return Err(LightingError::invalid("maxFixtures", "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(LightingError::invalid(
            field,
            format!("must be finite, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(LightingError::invalid(
            field,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(())
}

fn ensure_fraction(field: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(LightingError::invalid(
            field,
            format!("must be within [0, 1], got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults_are_valid() -> Result<()> {
        RoomDimensions::default().validate()?;
        LightingRequirements::default().validate()?;
        CalculationConfig::default().validate()?;
        let config = CalculationConfig::new();
        assert_eq!(config.grid_resolution, 20);
        assert_eq!(config.rounding, FixtureRounding::Ceil);
        Ok(())
    }

    #[test]
    fn test_room_derived_quantities() {
        let room = RoomDimensions::default();
        assert!((room.floor_area() - 80.0).abs() < 1e-12);
        assert!((room.perimeter() - 36.0).abs() < 1e-12);
        assert!((room.cavity_height() - 2.15).abs() < 1e-12);
        assert!((room.aspect_ratio() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_room_rejects_bad_dimensions() {
        let cases = [
            RoomDimensions::new(0.0, 8.0, 3.0, 0.85),
            RoomDimensions::new(10.0, -1.0, 3.0, 0.85),
            RoomDimensions::new(10.0, 8.0, f64::NAN, 0.85),
            RoomDimensions::new(10.0, 8.0, 3.0, 0.0),
            RoomDimensions::new(10.0, 8.0, 3.0, 3.0),
            RoomDimensions::new(f64::INFINITY, 8.0, 3.0, 0.85),
        ];
        for room in cases {
            let err = room.validate().unwrap_err();
            assert!(err.is_invalid_argument(), "{room:?} -> {err}");
        }
    }

    #[test]
    fn test_requirements_reject_out_of_range() {
        let mut req = LightingRequirements::default();
        req.ceiling_reflectance = 1.2;
        assert!(req.validate().is_err());

        let mut req = LightingRequirements::default();
        req.wall_reflectance = f64::NAN;
        assert!(req.validate().is_err());

        let mut req = LightingRequirements::default();
        req.flux_per_lamp = 0.0;
        assert!(req.validate().is_err());

        let mut req = LightingRequirements::default();
        req.target_illuminance = -10.0;
        assert!(req.validate().is_err());

        let mut req = LightingRequirements::default();
        req.ceiling_reflectance = 0.0;
        req.wall_reflectance = 1.0;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_contamination_parsing() -> Result<()> {
        assert_eq!(
            "very clean".parse::<ContaminationLevel>()?,
            ContaminationLevel::VeryClean
        );
        assert_eq!(
            "Very_Clean".parse::<ContaminationLevel>()?,
            ContaminationLevel::VeryClean
        );
        assert_eq!(" dirty ".parse::<ContaminationLevel>()?, ContaminationLevel::Dirty);
        assert!("filthy".parse::<ContaminationLevel>().is_err());
        for level in ContaminationLevel::ALL {
            assert_eq!(level.to_string().parse::<ContaminationLevel>()?, level);
            assert!(!level.description().is_empty());
        }
        Ok(())
    }

    #[test]
    fn test_maintenance_interval_bounds() {
        assert!(MaintenanceInterval::new(0).is_err());
        assert!(MaintenanceInterval::new(7).is_err());
        for years in 1..=6 {
            let interval = MaintenanceInterval::new(years).unwrap();
            assert_eq!(interval.years(), years);
            assert_eq!(interval.index(), (years - 1) as usize);
        }
    }

    #[test]
    fn test_requirements_json_shape() -> Result<()> {
        let json = r#"{
            "targetIlluminance": 300,
            "fluxPerLamp": 2400,
            "contaminationLevel": "very clean",
            "maintenanceInterval": 3,
            "ceilingReflectance": 0.8,
            "wallReflectance": 0.5
        }"#;
        let req: LightingRequirements = serde_json::from_str(json)?;
        assert_eq!(req.contamination_level, ContaminationLevel::VeryClean);
        assert_eq!(req.maintenance_interval.years(), 3);

        let bad = json.replace("\"maintenanceInterval\": 3", "\"maintenanceInterval\": 9");
        assert!(serde_json::from_str::<LightingRequirements>(&bad).is_err());

        let value = serde_json::to_value(req)?;
        assert_eq!(value["contaminationLevel"], "very clean");
        assert_eq!(value["maintenanceInterval"], 3);
        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let config: CalculationConfig =
            serde_json::from_str(r#"{ "rounding": "ceil_even", "gridResolution": 10 }"#)?;
        assert_eq!(config.rounding, FixtureRounding::CeilEven);
        assert_eq!(config.grid_resolution, 10);
        assert!((config.mount_clearance - 0.1).abs() < 1e-12);

        let value = serde_json::to_value(&config)?;
        assert_eq!(value["gridResolution"], 10);
        assert_eq!(value["mountClearance"], 0.1);
        assert_eq!(value["maxFixtures"], 10_000);

        let bad = CalculationConfig {
            grid_resolution: 1,
            ..CalculationConfig::new()
        };
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("gridResolution"), "{err}");
        Ok(())
    }
}
