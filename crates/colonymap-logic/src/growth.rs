//! Population growth model.
//!
//! A colonized planet's year-over-year growth multiplier follows a
//! quartic in colony age. The polynomial dips below 1 (and eventually
//! negative) for old colonies, so the rate is clamped to a hard floor:
//! established worlds keep growing at 0.5% per year.

/// Minimum growth multiplier per simulated year.
pub const GROWTH_FLOOR: f64 = 1.005;

/// Growth multiplier for a planet founded at `founding_year`, evaluated
/// at `current_year`. A planet that was never colonized does not grow.
pub fn growth_rate(founding_year: Option<i64>, current_year: i64) -> f64 {
    let Some(founded) = founding_year else {
        return 1.0;
    };
    let t = (current_year - founded) as f64;
    let predicted = 1.009725 + 0.001393539 * t - 0.00005792155 * t * t
        + 8.629435e-7 * t * t * t
        - 4.54325e-9 * t * t * t * t;
    predicted.max(GROWTH_FLOOR)
}

/// Apply one year of growth, truncating to whole people.
pub fn apply_growth(population: f64, rate: f64) -> f64 {
    (population * rate).floor()
}
