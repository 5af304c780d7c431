//! Cycling power-to-speed physics model.
//!
//! Steady-state speed satisfies `P = (F_gravity + F_rolling + F_drag) × v`,
//! which expands to a cubic in velocity. The single real root is found in
//! closed form with Cardano's method, so no iteration is needed.

use log::debug;

use crate::error::PacingError;

/// Air density at sea level and 20 °C, kg/m³.
const AIR_DENSITY: f64 = 1.225;

/// Gravitational acceleration, m/s².
const GRAVITY: f64 = 9.8067;

/// Rolling resistance coefficient for good road tires.
const ROLLING_RESISTANCE: f64 = 0.004;

/// Fraction of crank power lost in the drivetrain.
const DRIVETRAIN_LOSS: f64 = 0.02;

/// Bike plus race gear, kg.
const BIKE_AND_GEAR_KG: f64 = 9.0;

/// Pounds per kilogram.
const LB_PER_KG: f64 = 2.205;

/// Miles per hour per metre per second.
const MPH_PER_M_PER_S: f64 = 2.237;

/// Course conditions for the speed model.
///
/// The race-day estimate assumes a flat, windless course; the default
/// reproduces that exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RideConditions {
    /// Road grade in percent (rise over run × 100).
    pub grade_percent: f64,
    /// Headwind in m/s; negative values are a tailwind.
    pub headwind_m_per_s: f64,
}

/// Total rider + bike mass in kilograms from rider weight in pounds.
pub fn total_mass_kg(rider_weight_lb: f64) -> f64 {
    rider_weight_lb / LB_PER_KG + BIKE_AND_GEAR_KG
}

/// Coefficients of the velocity cubic `a·v³ + b·v² + c·v + d = 0`
/// (with `d` the negated effective power, supplied by the caller).
fn cubic_coefficients(rider_weight_lb: f64, cda: f64, conditions: RideConditions) -> (f64, f64, f64) {
    let a = 0.5 * cda * AIR_DENSITY;
    let b = conditions.headwind_m_per_s * cda * AIR_DENSITY;
    let grade_radians = (conditions.grade_percent / 100.0).atan();
    let c = GRAVITY
        * total_mass_kg(rider_weight_lb)
        * (grade_radians.sin() + ROLLING_RESISTANCE * grade_radians.cos());
    (a, b, c)
}

/// Solves steady-state bike speed for a given crank power.
///
/// # Arguments
/// * `power_w` - Crank power in watts; 2 % drivetrain loss is deducted
/// * `rider_weight_lb` - Rider weight in pounds (9 kg bike+gear is added)
/// * `cda` - Effective frontal area × drag coefficient, m²
/// * `conditions` - Grade and headwind; `RideConditions::default()` is flat
///   and windless
///
/// # Returns
/// Speed in mph.
///
/// # Errors
/// Returns `PacingError::Domain` when the root is non-finite or negative,
/// which happens for physically implausible inputs such as negative power.
pub fn bike_speed_mph(
    power_w: f64,
    rider_weight_lb: f64,
    cda: f64,
    conditions: RideConditions,
) -> Result<f64, PacingError> {
    let effective_power = power_w * (1.0 - DRIVETRAIN_LOSS);
    let (a, b, c) = cubic_coefficients(rider_weight_lb, cda, conditions);
    let d = -effective_power;

    let v_m_per_s = cardano_real_root(a, b, c, d);
    let speed_mph = v_m_per_s * MPH_PER_M_PER_S;

    if !speed_mph.is_finite() || speed_mph < 0.0 {
        return Err(PacingError::Domain(format!(
            "no physical speed for {power_w} W at {rider_weight_lb} lb (root {v_m_per_s} m/s)"
        )));
    }

    debug!("bike speed: {power_w:.1} W -> {speed_mph:.2} mph (CdA {cda})");
    Ok(speed_mph)
}

/// Real root of `a·v³ + b·v² + c·v + d = 0` by Cardano's method.
fn cardano_real_root(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let q = (3.0 * a * c - b * b) / (9.0 * a * a);
    let r = (9.0 * a * b * c - 27.0 * a * a * d - 2.0 * b * b * b) / (54.0 * a * a * a);
    let discriminant = q * q * q + r * r;

    if discriminant >= 0.0 {
        let sqrt_d = discriminant.sqrt();
        (r + sqrt_d).cbrt() + (r - sqrt_d).cbrt() - b / (3.0 * a)
    } else {
        // Three real roots; the trigonometric form picks the physical one
        let theta = (r / (-q * q * q).sqrt()).acos();
        2.0 * (-q).sqrt() * (theta / 3.0).cos() - b / (3.0 * a)
    }
}

/// Power demanded at the wheel to hold `speed_mph` under the same model.
///
/// Exact inverse of the cubic in `bike_speed_mph` (before drivetrain loss),
/// used to cross-check the solver.
pub fn wheel_power_w(
    speed_mph: f64,
    rider_weight_lb: f64,
    cda: f64,
    conditions: RideConditions,
) -> f64 {
    let v = speed_mph / MPH_PER_M_PER_S;
    let (a, b, c) = cubic_coefficients(rider_weight_lb, cda, conditions);
    a * v.powi(3) + b * v.powi(2) + c * v
}
