//! Lamp catalog and room presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LightingError;

/// Flux values closer than this are considered the same lamp rating (lm).
const FLUX_MATCH_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LampType {
    Incandescent,
    Fluorescent,
    #[serde(rename = "LED")]
    Led,
    Halogen,
}

impl fmt::Display for LampType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Incandescent => "Incandescent",
            Self::Fluorescent => "Fluorescent",
            Self::Led => "LED",
            Self::Halogen => "Halogen",
        };
        f.write_str(name)
    }
}

/// A lamp product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSpec {
    pub key: String,
    pub label: String,
    /// Rated luminous flux (lm).
    pub flux_value: f64,
    /// Electrical power (W).
    pub wattage: f64,
    #[serde(rename = "type")]
    pub lamp_type: LampType,
}

impl FixtureSpec {
    pub fn new(key: &str, label: &str, flux_value: f64, wattage: f64, lamp_type: LampType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            flux_value,
            wattage,
            lamp_type,
        }
    }

    /// Luminous efficacy in lm/W.
    pub fn efficacy(&self) -> f64 {
        self.flux_value / self.wattage
    }
}

/// Ordered collection of lamp products.
///
/// Order matters: when several lamps share a flux rating, flux lookups
/// return the one added first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureCatalog {
    fixtures: Vec<FixtureSpec>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self {
            fixtures: Vec::new(),
        }
    }

    pub fn from_fixtures(fixtures: Vec<FixtureSpec>) -> Self {
        Self { fixtures }
    }

    /// Appends a lamp. An existing lamp with the same key is replaced in place.
    pub fn add(&mut self, fixture: FixtureSpec) {
        match self.fixtures.iter_mut().find(|f| f.key == fixture.key) {
            Some(existing) => *existing = fixture,
            None => self.fixtures.push(fixture),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FixtureSpec> {
        self.fixtures.iter().find(|f| f.key == key)
    }

    /// First lamp whose rated flux matches `flux`.
    pub fn lookup_by_flux(&self, flux: f64) -> Option<&FixtureSpec> {
        self.fixtures
            .iter()
            .find(|f| (f.flux_value - flux).abs() < FLUX_MATCH_TOLERANCE)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FixtureSpec> {
        self.fixtures.iter()
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Creates a catalog with common incandescent, fluorescent, LED and
    /// halogen lamps.
    pub fn with_presets() -> Self {
        use LampType::*;

        let mut catalog = Self::new();
        for (key, label, flux, watts, lamp_type) in [
            ("incandescent-60w", "Incandescent (60W)", 800.0, 60.0, Incandescent),
            ("incandescent-100w", "Incandescent (100W)", 1600.0, 100.0, Incandescent),
            ("fluorescent-t8-32w", "Fluorescent T8 (32W)", 2400.0, 32.0, Fluorescent),
            ("fluorescent-t5-28w", "Fluorescent T5 (28W)", 2800.0, 28.0, Fluorescent),
            ("led-9w", "LED Bulb (9W)", 800.0, 9.0, Led),
            ("led-12w", "LED Bulb (12W)", 1100.0, 12.0, Led),
            ("led-panel-36w", "LED Panel (36W)", 3600.0, 36.0, Led),
            ("halogen-50w", "Halogen (50W)", 900.0, 50.0, Halogen),
            ("halogen-100w", "Halogen (100W)", 1800.0, 100.0, Halogen),
        ] {
            catalog.add(FixtureSpec::new(key, label, flux, watts, lamp_type));
        }
        catalog
    }
}

/// Room usage with its recommended maintained illuminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Office,
    Classroom,
    Conference,
    Corridor,
    Kitchen,
    Bathroom,
    Bedroom,
    Living,
    Warehouse,
    Industry,
}

impl RoomType {
    pub const ALL: [RoomType; 10] = [
        RoomType::Office,
        RoomType::Classroom,
        RoomType::Conference,
        RoomType::Corridor,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::Bedroom,
        RoomType::Living,
        RoomType::Warehouse,
        RoomType::Industry,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Classroom => "classroom",
            Self::Conference => "conference",
            Self::Corridor => "corridor",
            Self::Kitchen => "kitchen",
            Self::Bathroom => "bathroom",
            Self::Bedroom => "bedroom",
            Self::Living => "living",
            Self::Warehouse => "warehouse",
            Self::Industry => "industry",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Classroom => "Classroom",
            Self::Conference => "Conference Room",
            Self::Corridor => "Corridor",
            Self::Kitchen => "Kitchen",
            Self::Bathroom => "Bathroom",
            Self::Bedroom => "Bedroom",
            Self::Living => "Living Room",
            Self::Warehouse => "Warehouse",
            Self::Industry => "Industrial Area",
        }
    }

    /// Recommended illuminance in lux.
    pub fn recommended_lux(&self) -> f64 {
        match self {
            Self::Office | Self::Classroom | Self::Conference | Self::Kitchen => 500.0,
            Self::Corridor => 100.0,
            Self::Bathroom | Self::Living | Self::Warehouse => 200.0,
            Self::Bedroom => 150.0,
            Self::Industry => 750.0,
        }
    }
}

impl FromStr for RoomType {
    type Err = LightingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|room| room.key() == key)
            .ok_or_else(|| LightingError::InvalidArgument {
                field: "roomType",
                reason: format!("unknown room type {s:?}"),
            })
    }
}
