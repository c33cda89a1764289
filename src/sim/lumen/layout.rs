use serde::{Deserialize, Serialize};

use crate::Point;

use super::config::{FixtureRounding, RoomDimensions};

/// Relative slack applied before rounding up, so that a quotient which is an
/// integer up to floating-point noise does not gain an extra fixture.
const CEIL_TOLERANCE: f64 = 1e-9;

/// Rectangular fixture grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Fixtures across the width (y axis).
    pub rows: usize,
    /// Fixtures along the length (x axis).
    pub columns: usize,
    /// Distance between neighbouring columns (m).
    pub length_spacing: f64,
    /// Distance between neighbouring rows (m).
    pub width_spacing: f64,
}

impl Layout {
    /// Number of grid slots, which may exceed the fixture count.
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }
}

/// Number of fixtures by the lumen method.
///
/// `N = E * A / (flux * CU * MF)`, rounded up according to `rounding`.
/// Inputs must be validated by the caller; an overflowing quotient
/// saturates at `usize::MAX`.
pub fn fixture_count(
    target_illuminance: f64,
    floor_area: f64,
    flux_per_lamp: f64,
    cu: f64,
    mf: f64,
    rounding: FixtureRounding,
) -> usize {
    let raw = target_illuminance * floor_area / (flux_per_lamp * cu * mf);
    let count = (raw * (1.0 - CEIL_TOLERANCE)).ceil() as usize;
    match rounding {
        FixtureRounding::Ceil => count,
        FixtureRounding::CeilEven => count.saturating_add(count % 2),
    }
}

/// Fits `count` fixtures into a grid that follows the room aspect ratio.
///
/// The grid is seeded from `columns = round(sqrt(N * L / W))` and
/// `rows = round(N / columns)`, with the column seed capped at `N`. While
/// the grid is too small, the dimension that currently undershoots the room
/// aspect ratio grows: columns when `columns / rows < L / W`, rows otherwise. The result satisfies
/// `rows * columns >= count` and is 1 x 1 for a single fixture.
pub fn solve_layout(count: usize, length: f64, width: f64) -> Layout {
    let aspect_ratio = length / width;
    let n = count as f64;

    let columns = ((n * aspect_ratio).sqrt().round() as usize).clamp(1, count.max(1));
    let rows = ((n / columns as f64).round() as usize).max(1);

    let (mut rows, mut columns) = (rows, columns);
    while rows * columns < count {
        if (columns as f64) / (rows as f64) < aspect_ratio {
            columns += 1;
        } else {
            rows += 1;
        }
    }

    Layout {
        rows,
        columns,
        length_spacing: length / columns as f64,
        width_spacing: width / rows as f64,
    }
}

/// Places `count` fixtures on the layout grid, centered in the room.
///
/// Fixtures hang `mount_clearance` below the ceiling. The grid is filled row
/// by row and filling stops after `count` fixtures, so when the grid has
/// spare slots the last row is only partially populated.
pub fn lamp_positions(
    layout: &Layout,
    room: &RoomDimensions,
    count: usize,
    mount_clearance: f64,
) -> Vec<Point> {
    let x_offset = (room.length - (layout.columns - 1) as f64 * layout.length_spacing) / 2.0;
    let y_offset = (room.width - (layout.rows - 1) as f64 * layout.width_spacing) / 2.0;
    let z = room.height - mount_clearance;

    (0..layout.rows)
        .flat_map(|row| (0..layout.columns).map(move |col| (row, col)))
        .take(count)
        .map(|(row, col)| {
            Point::new(
                x_offset + col as f64 * layout.length_spacing,
                y_offset + row as f64 * layout.width_spacing,
                z,
            )
        })
        .collect()
}
