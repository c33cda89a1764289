//! Room cavity ratio and coefficient of utilization.

use super::config::RoomDimensions;

/// Coefficient of utilization of an ideal room (RCR = 1, white surfaces).
pub const BASE_CU: f64 = 0.85;
/// Lowest coefficient of utilization ever reported.
pub const MIN_CU: f64 = 0.3;
/// Highest coefficient of utilization ever reported.
pub const MAX_CU: f64 = BASE_CU;

/// CU lost per unit of RCR above 1.
const RCR_PENALTY: f64 = 0.05;

/// Room cavity ratio.
///
/// `RCR = 5 * h_c * (L + W) / (L * W)` where `h_c` is the distance from the
/// workplane to the ceiling. Dimensions must be validated by the caller.
pub fn room_cavity_ratio(room: &RoomDimensions) -> f64 {
    5.0 * room.cavity_height() * (room.length + room.width) / room.floor_area()
}

/// Coefficient of utilization from the cavity ratio and surface reflectances.
///
/// Linear approximation of a photometric CU table: the base CU is reduced
/// with growing RCR and with darker ceiling/wall surfaces. The result is
/// clamped to `[MIN_CU, MAX_CU]`, also when the linear terms would leave it
/// (very deep cavities give a negative RCR factor).
pub fn coefficient_of_utilization(
    rcr: f64,
    ceiling_reflectance: f64,
    wall_reflectance: f64,
) -> f64 {
    let rcr_factor = 1.0 - (rcr - 1.0) * RCR_PENALTY;
    let reflectance_factor = 0.7 + 0.3 * (ceiling_reflectance + wall_reflectance) / 2.0;
    (BASE_CU * rcr_factor * reflectance_factor).clamp(MIN_CU, MAX_CU)
}
