//! Threshold estimation formulas for heart rate, swim, bike, and run metrics.

use crate::domain::Gender;

/// Age at or above which the same regression applies to all athletes.
const REGRESSION_AGE_CUTOFF: u32 = 40;

/// Max heart rate regression coefficients (`intercept − slope × age`).
mod max_hr {
    /// All athletes 40 and over.
    pub const OVER_40_INTERCEPT: f64 = 208.0;
    pub const OVER_40_SLOPE: f64 = 0.7;

    /// Men under 40.
    pub const MALE_INTERCEPT: f64 = 211.0;
    pub const MALE_SLOPE: f64 = 0.64;

    /// Women under 40.
    pub const FEMALE_INTERCEPT: f64 = 206.0;
    pub const FEMALE_SLOPE: f64 = 0.88;
}

/// Fraction of heart rate reserve above resting that marks threshold.
const HRR_THRESHOLD_FRACTION: f64 = 0.80;

/// Fallback threshold fraction of max HR when resting HR is unknown.
const MAX_HR_THRESHOLD_FRACTION: f64 = 0.85;

/// 5K race distance in miles, for converting a race time to a pace.
const FIVE_K_MILES: f64 = 3.1;

/// Estimates maximum heart rate from age and gender.
///
/// Uses `208 − 0.7·age` from age 40, and gender-specific regressions below
/// that (`211 − 0.64·age` for men, `206 − 0.88·age` for women).
///
/// # Arguments
/// * `age` - Athlete age in years (validated positive by the caller)
/// * `gender` - Athlete gender
///
/// # Returns
/// Estimated max heart rate in bpm, unrounded.
pub fn estimate_max_hr(age: u32, gender: Gender) -> f64 {
    let age = f64::from(age);
    if age >= f64::from(REGRESSION_AGE_CUTOFF) {
        return max_hr::OVER_40_INTERCEPT - max_hr::OVER_40_SLOPE * age;
    }
    match gender {
        Gender::Male => max_hr::MALE_INTERCEPT - max_hr::MALE_SLOPE * age,
        Gender::Female => max_hr::FEMALE_INTERCEPT - max_hr::FEMALE_SLOPE * age,
    }
}

/// Derives threshold heart rate from max HR and, when available, resting HR.
///
/// With resting HR the Karvonen-style heart rate reserve formula applies:
/// `resting + 0.80 × (max − resting)`. Without it, threshold falls back to
/// `0.85 × max`. Both results round to the nearest beat.
pub fn threshold_hr(max_hr_bpm: f64, resting_hr_bpm: Option<f64>) -> f64 {
    match resting_hr_bpm {
        Some(resting) => {
            let reserve = max_hr_bpm - resting;
            (resting + HRR_THRESHOLD_FRACTION * reserve).round()
        }
        None => (max_hr_bpm * MAX_HR_THRESHOLD_FRACTION).round(),
    }
}

/// Estimates critical swim speed from a fastest 100-yd effort by scaling
/// the benchmark pace with the level fraction.
///
/// # Arguments
/// * `fastest_100y_s` - Fastest 100-yd swim in seconds
/// * `level_fraction` - Athlete level threshold fraction
///
/// # Returns
/// CSS in seconds per 100 yd, unrounded.
pub fn estimate_css(fastest_100y_s: f64, level_fraction: f64) -> f64 {
    fastest_100y_s * level_fraction
}

/// Estimates functional threshold power from a 20-minute max effort.
///
/// # Arguments
/// * `max_20min_w` - Best 20-minute average power in watts
/// * `level_fraction` - Athlete level threshold fraction
///
/// # Returns
/// FTP in watts, rounded to the nearest watt.
pub fn estimate_ftp(max_20min_w: f64, level_fraction: f64) -> f64 {
    (max_20min_w * level_fraction).round()
}

/// Estimates run threshold pace from a fastest 5K time.
///
/// The 5K time converts to a race pace, then *divides* by the level
/// fraction: threshold pace must be slower (more seconds per mile) than 5K
/// race pace. This is deliberately the inverse of the CSS and FTP scaling.
///
/// # Arguments
/// * `fastest_5k_s` - Fastest 5K time in seconds
/// * `level_fraction` - Athlete level threshold fraction
///
/// # Returns
/// Threshold pace in seconds per mile, unrounded.
pub fn estimate_run_threshold_pace(fastest_5k_s: f64, level_fraction: f64) -> f64 {
    (fastest_5k_s / FIVE_K_MILES) / level_fraction
}
