//! Keplerian orbital period approximation.
//!
//! Periods are computed once from a static circular-orbit approximation;
//! orbits are never integrated over time.

const AU_IN_M: f64 = 1.496e11;
const SOLAR_MASS_KG: f64 = 1.988e30;
const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;
const SECONDS_PER_DAY: f64 = 86400.0;

/// Orbital period in days, from stellar mass (solar masses) and orbital
/// radius (AU).
pub fn orbital_period_days(stellar_masses: f64, orbital_au: f64) -> f64 {
    let orbit_m = orbital_au * AU_IN_M;
    let mu = stellar_masses * SOLAR_MASS_KG * GRAVITATIONAL_CONSTANT;
    2.0 * std::f64::consts::PI * (orbit_m.powi(3) / mu).sqrt() / SECONDS_PER_DAY
}
