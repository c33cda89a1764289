//! Bill of materials.
//!
//! Quantities are linear rules of thumb derived from the fixture count and
//! the room perimeter. They give an order of magnitude for budgeting and
//! are not an electrical bill of quantities.

use serde::{Deserialize, Serialize};

use crate::catalog::FixtureSpec;

use super::config::RoomDimensions;
use super::layout::Layout;

/// Cable allowance per fixture on top of the perimeter run (m).
const WIRING_PER_FIXTURE: f64 = 1.5;
/// Ceiling fixing points per fixture.
const MOUNTING_POINTS_PER_FIXTURE: usize = 2;
/// Fixtures served by one junction box.
const FIXTURES_PER_JUNCTION_BOX: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BomItem {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Builds the ordered material list for an installation of `count` fixtures.
pub fn bill_of_materials(
    count: usize,
    room: &RoomDimensions,
    layout: &Layout,
    flux_per_lamp: f64,
    fixture: Option<&FixtureSpec>,
) -> Vec<BomItem> {
    let n = count as f64;
    let fixture_description = match fixture {
        Some(spec) => format!("{} - {} lm, {} W", spec.label, spec.flux_value, spec.wattage),
        None => format!("{flux_per_lamp} lm fixture"),
    };
    let wiring = (room.perimeter() + n * WIRING_PER_FIXTURE).ceil();
    let junction_boxes = count.div_ceil(FIXTURES_PER_JUNCTION_BOX);

    vec![
        BomItem::new("Light fixture", n, "pcs").with_description(fixture_description),
        BomItem::new("Mounting kit", n, "pcs").with_description("One per fixture"),
        BomItem::new(
            "Mounting points",
            (count * MOUNTING_POINTS_PER_FIXTURE) as f64,
            "pcs",
        )
        .with_description(format!(
            "{MOUNTING_POINTS_PER_FIXTURE} ceiling fixings per fixture"
        )),
        BomItem::new("Electrical wiring", wiring, "m").with_description(format!(
            "Perimeter run plus {WIRING_PER_FIXTURE} m drop per fixture, {} x {} grid",
            layout.rows, layout.columns
        )),
        BomItem::new("Junction box", junction_boxes as f64, "pcs").with_description(format!(
            "One per {FIXTURES_PER_JUNCTION_BOX} fixtures"
        )),
        BomItem::new("Light switch", 1.0, "pcs"),
    ]
}
