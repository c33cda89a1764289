//! Illuminance estimates.
//!
//! Two independent models live here and they are not expected to agree:
//! - [`illuminance_distribution`] derives the headline average from total
//!   flux and applies fixed min/max ratios;
//! - [`illuminance_at_point`] and [`illuminance_grid`] superpose
//!   inverse-square contributions of every fixture, for visualization.
//!
//! Neither is a photometric simulation.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::Point;

use super::config::RoomDimensions;

/// Ratio of the estimated maximum to the average illuminance.
pub const MAX_TO_AVERAGE: f64 = 1.3;
/// Ratio of the estimated minimum to the average illuminance.
pub const MIN_TO_AVERAGE: f64 = 0.7;

/// Estimated illuminance on the workplane (lux).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IlluminanceDistribution {
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    /// `minimum / average`.
    pub uniformity: f64,
}

/// A sample of the visualization grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IlluminanceGridPoint {
    pub x: f64,
    pub y: f64,
    /// Lux.
    pub illuminance: f64,
}

/// Average illuminance from total delivered flux, with fixed-ratio extremes.
pub fn illuminance_distribution(
    count: usize,
    flux_per_lamp: f64,
    cu: f64,
    mf: f64,
    floor_area: f64,
) -> IlluminanceDistribution {
    let average = count as f64 * flux_per_lamp * cu * mf / floor_area;
    let minimum = average * MIN_TO_AVERAGE;
    IlluminanceDistribution {
        average,
        minimum,
        maximum: average * MAX_TO_AVERAGE,
        uniformity: minimum / average,
    }
}

/// Illuminance at `(x, y)` on the workplane.
///
/// Every lamp is treated as an isotropic point source whose utilized flux
/// `flux * CU * MF` spreads over a full sphere, so each contributes
/// `flux * CU * MF / (4 * pi * d^2)`.
pub fn illuminance_at_point(
    x: f64,
    y: f64,
    lamps: &[Point],
    flux_per_lamp: f64,
    workplane_height: f64,
    cu: f64,
    mf: f64,
) -> f64 {
    let target = Point::new(x, y, workplane_height);
    let utilized = flux_per_lamp * cu * mf;
    lamps
        .iter()
        .map(|lamp| utilized / (4.0 * PI * lamp.distance_squared(&target)))
        .sum()
}

/// Samples [`illuminance_at_point`] on a `resolution x resolution` grid
/// spanning the floor plan, corners included.
///
/// Points are ordered with `x` in the outer loop. `resolution` must be at
/// least 2.
pub fn illuminance_grid(
    room: &RoomDimensions,
    lamps: &[Point],
    flux_per_lamp: f64,
    cu: f64,
    mf: f64,
    resolution: usize,
) -> Vec<IlluminanceGridPoint> {
    let steps = (resolution - 1) as f64;
    let mut grid = Vec::with_capacity(resolution * resolution);
    for i in 0..resolution {
        let x = i as f64 / steps * room.length;
        for j in 0..resolution {
            let y = j as f64 / steps * room.width;
            let illuminance = illuminance_at_point(
                x,
                y,
                lamps,
                flux_per_lamp,
                room.workplane_height,
                cu,
                mf,
            );
            grid.push(IlluminanceGridPoint { x, y, illuminance });
        }
    }
    grid
}

/// Returns `(minimum, average, maximum)` over the grid samples.
pub fn grid_summary(grid: &[IlluminanceGridPoint]) -> Option<(f64, f64, f64)> {
    if grid.is_empty() {
        return None;
    }
    let min = grid
        .iter()
        .map(|p| p.illuminance)
        .fold(f64::INFINITY, f64::min);
    let max = grid
        .iter()
        .map(|p| p.illuminance)
        .fold(f64::NEG_INFINITY, f64::max);
    let avg = grid.iter().map(|p| p.illuminance).sum::<f64>() / grid.len() as f64;
    Some((min, avg, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_ratios() {
        let d = illuminance_distribution(20, 3600.0, 0.7, 0.84, 80.0);
        let expected_avg = 20.0 * 3600.0 * 0.7 * 0.84 / 80.0;
        assert!((d.average - expected_avg).abs() < 1e-9);
        assert!((d.maximum - expected_avg * 1.3).abs() < 1e-9);
        assert!((d.minimum - expected_avg * 0.7).abs() < 1e-9);
        assert!((d.uniformity - 0.7).abs() < 1e-12);
        assert!(d.minimum <= d.average && d.average <= d.maximum);
        assert_eq!(d.uniformity, d.minimum / d.average);
    }

    #[test]
    fn test_single_lamp_directly_above() {
        let lamps = [Point::new(1.0, 1.0, 3.0)];
        // d = 2 m straight down to the workplane at 1 m.
        let e = illuminance_at_point(1.0, 1.0, &lamps, 1000.0, 1.0, 1.0, 1.0);
        assert!((e - 1000.0 / (4.0 * PI * 4.0)).abs() < 1e-9);
    }

    #[test]
    fn test_contributions_superpose() {
        let a = Point::new(0.0, 0.0, 2.9);
        let b = Point::new(4.0, 0.0, 2.9);
        let ea = illuminance_at_point(2.0, 0.0, &[a], 3600.0, 0.85, 0.7, 0.84);
        let eb = illuminance_at_point(2.0, 0.0, &[b], 3600.0, 0.85, 0.7, 0.84);
        let both = illuminance_at_point(2.0, 0.0, &[a, b], 3600.0, 0.85, 0.7, 0.84);
        assert!((both - (ea + eb)).abs() < 1e-12);
        assert!((ea - eb).abs() < 1e-12);
    }

    #[test]
    fn test_no_lamps_is_dark() {
        assert_eq!(illuminance_at_point(1.0, 1.0, &[], 1000.0, 0.8, 0.7, 0.8), 0.0);
    }

    #[test]
    fn test_grid_shape_and_extent() {
        let room = RoomDimensions::new(10.0, 8.0, 3.0, 0.85);
        let lamps = [Point::new(5.0, 4.0, 2.9)];
        let grid = illuminance_grid(&room, &lamps, 3600.0, 0.7, 0.84, 20);
        assert_eq!(grid.len(), 400);
        assert_eq!((grid[0].x, grid[0].y), (0.0, 0.0));
        assert!((grid[19].x - 0.0).abs() < 1e-12 && (grid[19].y - 8.0).abs() < 1e-12);
        assert!((grid[20].x - 10.0 / 19.0).abs() < 1e-12);
        let last = grid[399];
        assert!((last.x - 10.0).abs() < 1e-12 && (last.y - 8.0).abs() < 1e-12);
        assert!(grid.iter().all(|p| p.illuminance.is_finite() && p.illuminance > 0.0));
    }

    #[test]
    fn test_grid_peaks_under_lamp() {
        let room = RoomDimensions::new(4.0, 4.0, 3.0, 0.8);
        let lamps = [Point::new(2.0, 2.0, 2.9)];
        let grid = illuminance_grid(&room, &lamps, 1000.0, 0.8, 0.9, 5);
        // Resolution 5 puts a sample exactly under the lamp (index 2, 2).
        let center = grid[2 * 5 + 2];
        assert!((center.x - 2.0).abs() < 1e-12 && (center.y - 2.0).abs() < 1e-12);
        let (min, avg, max) = grid_summary(&grid).unwrap();
        assert_eq!(max, center.illuminance);
        assert!(min < avg && avg < max);
        assert!(grid_summary(&[]).is_none());
    }
}
