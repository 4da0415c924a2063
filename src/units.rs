//! Unit conversion constants
//!
//! Hydration, distance, and time factors used by the extractors.

// ============================================================================
// Volume
// ============================================================================

/// Fluid ounces in one glass of water
pub const OZ_PER_GLASS: u32 = 8;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;

// ============================================================================
// Distance and Time
// ============================================================================

/// Miles per kilometer
pub const MILES_PER_KM: f64 = 0.621371;
/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Convert a glass count to whole fluid ounces (rounded)
pub fn glasses_to_ounces(glasses: f64) -> u32 {
    let ounces = (glasses * OZ_PER_GLASS as f64).round();
    if ounces.is_finite() && ounces > 0.0 {
        ounces.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Convert fluid ounces to milliliters
pub fn ounces_to_ml(ounces: f64) -> f64 {
    ounces * ML_PER_FL_OZ
}

/// Convert kilometers to miles
pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

/// Convert hours to whole minutes (rounded)
pub fn hours_to_minutes(hours: f64) -> u32 {
    (hours * MINUTES_PER_HOUR).round() as u32
}
