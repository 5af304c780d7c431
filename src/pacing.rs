//! Pacing plan construction.
//!
//! Two sibling pipelines selected by the request mode: fitness mode resolves
//! physiological thresholds and cuts per-segment race targets from them,
//! target mode apportions a single goal finish time across segments. Both
//! attach the same static strategy notes and RPE guide.

use log::debug;

use crate::domain::{
    AthleteProfile, BikePlan, EffortTier, PacingMode, PacingPlan, PacingRequest,
    ResolvedThreshold, RunPlan, SwimPlan, ThresholdInput, TransitionPlan,
};
use crate::error::PacingError;
use crate::formulas;
use crate::physics::{self, RideConditions};
use crate::strategy;
use crate::units::{parse_pace, parse_time};
use crate::zones::{self, BikeSegment, RaceConfig, RunZones, SegmentDistance, SwimSegment};

/// Half-width of bike power and heart rate bands, as a fraction of the
/// threshold the target is cut from.
const TARGET_BAND_FRACTION: f64 = 0.02;

/// Half-width of run pace bands, seconds per mile.
const RUN_PACE_BAND_S: f64 = 5.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Zone-fraction cut points for the qualitative effort tiers.
mod effort_cuts {
    pub const SWIM_HARD: f64 = 0.95;
    pub const SWIM_MODERATE_HARD: f64 = 0.85;
    pub const BIKE_HARD: f64 = 0.90;
    pub const BIKE_MODERATE_HARD: f64 = 0.75;
    pub const TRI_RUN_VERY_HARD: f64 = 0.90;
    pub const TRI_RUN_HARD: f64 = 0.82;
    pub const RUN_VERY_HARD: f64 = 0.95;
    pub const RUN_HARD: f64 = 0.88;
}

/// Computes a complete pacing plan for one request.
///
/// This is the single entry point of the engine. The call is stateless:
/// the same request always produces the same plan.
///
/// # Arguments
/// * `request` - Category, mode, and the threshold or goal-time inputs the
///   mode consumes
///
/// # Returns
/// The full per-segment plan with strategy notes attached.
///
/// # Errors
/// `MissingRequiredField` when an input the selected branch needs is absent,
/// `Parse` for malformed time literals, `InvalidInput` for non-positive
/// numeric fields, and `Domain` when the speed solver has no physical root.
pub fn compute_pacing(request: &PacingRequest) -> Result<PacingPlan, PacingError> {
    let config = zones::config(request.category);
    debug!(
        "computing {} plan for {}",
        request.mode.display_name(),
        request.category
    );
    match request.mode {
        PacingMode::Fitness => fitness_plan(request, config),
        PacingMode::TargetTime => target_time_plan(request, config),
    }
}

fn require_positive(value: f64, field: &'static str) -> Result<f64, PacingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PacingError::InvalidInput(format!(
            "{field} must be positive, got {value}"
        )))
    }
}

fn level_fraction(request: &PacingRequest) -> Result<f64, PacingError> {
    let level = request
        .level
        .ok_or(PacingError::MissingRequiredField("level"))?;
    Ok(level.threshold_fraction())
}

fn resolve_css(request: &PacingRequest) -> Result<ResolvedThreshold, PacingError> {
    match request
        .css
        .as_ref()
        .ok_or(PacingError::MissingRequiredField("css"))?
    {
        ThresholdInput::Known(pace) => {
            let seconds = require_positive(parse_pace(pace)?, "css")?;
            Ok(ResolvedThreshold::measured(seconds))
        }
        ThresholdInput::Benchmark(pace) => {
            let fastest_100y = require_positive(parse_pace(pace)?, "fastest 100 yd pace")?;
            let css = formulas::estimate_css(fastest_100y, level_fraction(request)?);
            Ok(ResolvedThreshold::estimated(css))
        }
    }
}

fn resolve_ftp(request: &PacingRequest) -> Result<ResolvedThreshold, PacingError> {
    match request
        .ftp_w
        .as_ref()
        .ok_or(PacingError::MissingRequiredField("ftp"))?
    {
        ThresholdInput::Known(watts) => {
            Ok(ResolvedThreshold::measured(require_positive(*watts, "ftp")?))
        }
        ThresholdInput::Benchmark(watts) => {
            let max_20min = require_positive(*watts, "20 minute max power")?;
            let ftp = formulas::estimate_ftp(max_20min, level_fraction(request)?);
            Ok(ResolvedThreshold::estimated(ftp))
        }
    }
}

fn resolve_run_threshold(request: &PacingRequest) -> Result<ResolvedThreshold, PacingError> {
    match request
        .run_threshold_pace
        .as_ref()
        .ok_or(PacingError::MissingRequiredField("run threshold pace"))?
    {
        ThresholdInput::Known(pace) => {
            let seconds = require_positive(parse_pace(pace)?, "run threshold pace")?;
            Ok(ResolvedThreshold::measured(seconds))
        }
        ThresholdInput::Benchmark(time) => {
            let fastest_5k = require_positive(parse_time(time)?, "fastest 5K time")?;
            let pace = formulas::estimate_run_threshold_pace(fastest_5k, level_fraction(request)?);
            Ok(ResolvedThreshold::estimated(pace))
        }
    }
}

/// Resolves every threshold the category needs, estimating from benchmark
/// efforts where the direct value was not supplied.
fn resolve_profile(request: &PacingRequest) -> Result<AthleteProfile, PacingError> {
    let age = request.age.ok_or(PacingError::MissingRequiredField("age"))?;
    if age == 0 {
        return Err(PacingError::InvalidInput("age must be positive".to_string()));
    }
    let gender = request
        .gender
        .ok_or(PacingError::MissingRequiredField("gender"))?;
    let race_weight_lb = require_positive(
        request
            .race_weight_lb
            .ok_or(PacingError::MissingRequiredField("race weight"))?,
        "race weight",
    )?;

    let max_hr_bpm = match request.max_hr_bpm {
        Some(bpm) => ResolvedThreshold::measured(require_positive(bpm, "max heart rate")?),
        None => ResolvedThreshold::estimated(formulas::estimate_max_hr(age, gender)),
    };

    if let Some(resting) = request.resting_hr_bpm
        && (resting <= 0.0 || resting >= max_hr_bpm.value)
    {
        return Err(PacingError::InvalidInput(format!(
            "resting heart rate {resting} must lie between 0 and max heart rate {}",
            max_hr_bpm.value
        )));
    }
    let threshold_hr_bpm = formulas::threshold_hr(max_hr_bpm.value, request.resting_hr_bpm);

    let (css_s_per_100y, ftp_w) = if request.category.is_triathlon() {
        (Some(resolve_css(request)?), Some(resolve_ftp(request)?))
    } else {
        (None, None)
    };
    let run_threshold_pace_s_per_mi = resolve_run_threshold(request)?;

    let run_threshold_power_w = match request.run_threshold_power_w {
        Some(watts) => Some(require_positive(watts, "run threshold power")?),
        None => None,
    };

    debug!(
        "thresholds: max HR {:.0} bpm ({}), threshold HR {threshold_hr_bpm:.0} bpm, run pace {:.1} s/mi",
        max_hr_bpm.value,
        max_hr_bpm.provenance.display_name(),
        run_threshold_pace_s_per_mi.value
    );

    Ok(AthleteProfile {
        age,
        gender,
        race_weight_lb,
        max_hr_bpm,
        resting_hr_bpm: request.resting_hr_bpm,
        threshold_hr_bpm,
        css_s_per_100y,
        ftp_w,
        run_threshold_pace_s_per_mi,
        run_threshold_power_w,
    })
}

/// ± band around `base × fraction`, rounded like the target itself.
fn band(base: f64, fraction: f64) -> (f64, f64) {
    (
        (base * (fraction - TARGET_BAND_FRACTION)).round(),
        (base * (fraction + TARGET_BAND_FRACTION)).round(),
    )
}

fn swim_effort(css_fraction: f64) -> EffortTier {
    if css_fraction >= effort_cuts::SWIM_HARD {
        EffortTier::Hard
    } else if css_fraction >= effort_cuts::SWIM_MODERATE_HARD {
        EffortTier::ModerateHard
    } else {
        EffortTier::Moderate
    }
}

fn bike_effort(power_fraction: f64) -> EffortTier {
    if power_fraction >= effort_cuts::BIKE_HARD {
        EffortTier::Hard
    } else if power_fraction >= effort_cuts::BIKE_MODERATE_HARD {
        EffortTier::ModerateHard
    } else {
        EffortTier::Moderate
    }
}

/// Run effort cuts differ off the bike: a triathlon run is graded on
/// fresher-legs expectations than an open running race.
fn run_effort(hr_fraction: f64, is_triathlon: bool) -> EffortTier {
    let (very_hard, hard) = if is_triathlon {
        (effort_cuts::TRI_RUN_VERY_HARD, effort_cuts::TRI_RUN_HARD)
    } else {
        (effort_cuts::RUN_VERY_HARD, effort_cuts::RUN_HARD)
    };
    if hr_fraction >= very_hard {
        EffortTier::VeryHard
    } else if hr_fraction >= hard {
        EffortTier::Hard
    } else {
        EffortTier::ModerateHard
    }
}

fn swim_plan(segment: &SwimSegment, css_s_per_100y: f64) -> SwimPlan {
    let target_pace = css_s_per_100y / segment.css_fraction;
    let time_s = segment.distance.yards() / 100.0 * target_pace;
    SwimPlan {
        distance_label: segment.distance.label,
        target_pace_s_per_100y: target_pace,
        time_s,
        effort: Some(swim_effort(segment.css_fraction)),
    }
}

fn bike_plan(
    segment: &BikeSegment,
    ftp_w: f64,
    max_hr_bpm: f64,
    rider_weight_lb: f64,
    cda: f64,
) -> Result<BikePlan, PacingError> {
    // The solver sees the unrounded power; rounding is display-only
    let power_w = ftp_w * segment.power_fraction;
    let speed_mph =
        physics::bike_speed_mph(power_w, rider_weight_lb, cda, RideConditions::default())?;
    let time_s = segment.distance.miles / speed_mph * SECONDS_PER_HOUR;
    debug!("bike segment: {power_w:.1} W target, {speed_mph:.1} mph, {time_s:.0} s");
    Ok(BikePlan {
        distance_label: segment.distance.label,
        target_power_w: Some(power_w.round()),
        power_range_w: Some(band(ftp_w, segment.power_fraction)),
        target_hr_bpm: Some((max_hr_bpm * segment.hr_fraction).round()),
        hr_range_bpm: Some(band(max_hr_bpm, segment.hr_fraction)),
        speed_mph,
        time_s,
        effort: Some(bike_effort(segment.power_fraction)),
    })
}

fn run_plan(
    distance: &SegmentDistance,
    zones: &RunZones,
    threshold_pace_s_per_mi: f64,
    max_hr_bpm: f64,
    threshold_power_w: Option<f64>,
    effort: EffortTier,
) -> RunPlan {
    let target_pace = threshold_pace_s_per_mi / zones.pace_fraction;
    let time_s = target_pace * distance.miles;
    RunPlan {
        distance_label: distance.label,
        target_hr_bpm: Some((max_hr_bpm * zones.hr_fraction).round()),
        hr_range_bpm: Some(band(max_hr_bpm, zones.hr_fraction)),
        target_power_w: threshold_power_w.map(|w| (w * zones.power_fraction).round()),
        target_pace_s_per_mi: target_pace,
        pace_range_s_per_mi: Some((target_pace - RUN_PACE_BAND_S, target_pace + RUN_PACE_BAND_S)),
        time_s,
        effort: Some(effort),
    }
}

fn fitness_plan(
    request: &PacingRequest,
    config: &'static RaceConfig,
) -> Result<PacingPlan, PacingError> {
    let profile = resolve_profile(request)?;
    let max_hr = profile.max_hr_bpm.value;

    let (swim, bike) = match (
        &config.swim,
        &config.bike,
        &profile.css_s_per_100y,
        &profile.ftp_w,
    ) {
        (Some(swim_seg), Some(bike_seg), Some(css), Some(ftp)) => (
            Some(swim_plan(swim_seg, css.value)),
            Some(bike_plan(
                bike_seg,
                ftp.value,
                max_hr,
                profile.race_weight_lb,
                config.cda,
            )?),
        ),
        _ => (None, None),
    };

    let run = run_plan(
        &config.run,
        &config.run_zones,
        profile.run_threshold_pace_s_per_mi.value,
        max_hr,
        profile.run_threshold_power_w,
        run_effort(config.run_zones.hr_fraction, request.category.is_triathlon()),
    );

    let total_time_s = swim.as_ref().map_or(0.0, |s| s.time_s)
        + bike.as_ref().map_or(0.0, |b| b.time_s)
        + run.time_s
        + config.transition_s;

    Ok(PacingPlan {
        category: request.category,
        mode: request.mode,
        distance_label: config.distance_label,
        rpe: config.rpe,
        profile: Some(profile),
        swim,
        bike,
        run,
        transitions: None,
        total_time_s,
        strategy: strategy::strategy(request.category),
    })
}

/// Splits a goal finish time across segments and back-computes the pace or
/// speed each segment requires. No thresholds or physics participate.
fn target_time_plan(
    request: &PacingRequest,
    config: &'static RaceConfig,
) -> Result<PacingPlan, PacingError> {
    let goal = request
        .goal_time
        .as_deref()
        .ok_or(PacingError::MissingRequiredField("goal time"))?;
    let goal_s = require_positive(parse_time(goal)?, "goal time")?;

    let (swim, bike, run, transitions) = if let (Some(swim_seg), Some(bike_seg), Some(splits)) =
        (&config.swim, &config.bike, &config.splits)
    {
        let race_s = goal_s - config.transition_s;
        if race_s <= 0.0 {
            return Err(PacingError::InvalidInput(format!(
                "goal time {goal} must exceed the {}s transition allowance",
                config.transition_s
            )));
        }
        let swim_time = race_s * splits.swim;
        let bike_time = race_s * splits.bike;
        let run_time = race_s * splits.run;
        debug!(
            "allocating {race_s:.0} s: swim {swim_time:.0}, bike {bike_time:.0}, run {run_time:.0}"
        );

        let swim = SwimPlan {
            distance_label: swim_seg.distance.label,
            target_pace_s_per_100y: swim_time / swim_seg.distance.yards() * 100.0,
            time_s: swim_time,
            effort: None,
        };
        let bike = BikePlan {
            distance_label: bike_seg.distance.label,
            target_power_w: None,
            power_range_w: None,
            target_hr_bpm: None,
            hr_range_bpm: None,
            speed_mph: bike_seg.distance.miles / (bike_time / SECONDS_PER_HOUR),
            time_s: bike_time,
            effort: None,
        };
        let run = RunPlan {
            distance_label: config.run.label,
            target_hr_bpm: None,
            hr_range_bpm: None,
            target_power_w: None,
            target_pace_s_per_mi: run_time / config.run.miles,
            pace_range_s_per_mi: None,
            time_s: run_time,
            effort: None,
        };
        let transitions = TransitionPlan {
            t1_s: config.transition_s / 2.0,
            t2_s: config.transition_s / 2.0,
        };
        (Some(swim), Some(bike), run, Some(transitions))
    } else {
        let run = RunPlan {
            distance_label: config.run.label,
            target_hr_bpm: None,
            hr_range_bpm: None,
            target_power_w: None,
            target_pace_s_per_mi: goal_s / config.run.miles,
            pace_range_s_per_mi: None,
            time_s: goal_s,
            effort: None,
        };
        (None, None, run, None)
    };

    Ok(PacingPlan {
        category: request.category,
        mode: request.mode,
        distance_label: config.distance_label,
        rpe: config.rpe,
        profile: None,
        swim,
        bike,
        run,
        transitions,
        total_time_s: goal_s,
        strategy: strategy::strategy(request.category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AthleteLevel, Gender, Provenance, RaceCategory};
    use crate::units::{format_pace, format_time};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn tri_request(category: RaceCategory) -> PacingRequest {
        let mut request = PacingRequest::new(category, PacingMode::Fitness);
        request.age = Some(35);
        request.gender = Some(Gender::Male);
        request.race_weight_lb = Some(165.0);
        request.max_hr_bpm = Some(185.0);
        request.css = Some(ThresholdInput::Known("1:30".to_string()));
        request.ftp_w = Some(ThresholdInput::Known(250.0));
        request.run_threshold_pace = Some(ThresholdInput::Known("7:00".to_string()));
        request
    }

    fn run_request(category: RaceCategory) -> PacingRequest {
        let mut request = PacingRequest::new(category, PacingMode::Fitness);
        request.age = Some(35);
        request.gender = Some(Gender::Female);
        request.race_weight_lb = Some(140.0);
        request.max_hr_bpm = Some(190.0);
        request.run_threshold_pace = Some(ThresholdInput::Known("6:30".to_string()));
        request
    }

    #[test]
    fn test_fitness_half_distance_plan() {
        let plan = compute_pacing(&tri_request(RaceCategory::HalfDistance)).unwrap();
        let profile = plan.profile.as_ref().unwrap();
        assert_eq!(profile.threshold_hr_bpm, 157.0);
        assert_eq!(profile.max_hr_bpm.provenance, Provenance::Measured);

        let swim = plan.swim.as_ref().unwrap();
        assert_eq!(format_pace(swim.target_pace_s_per_100y), "1:42");
        assert!(approx_eq(swim.time_s, 2160.0, 1e-6), "swim {}", swim.time_s);
        assert_eq!(swim.effort, Some(EffortTier::ModerateHard));

        let bike = plan.bike.as_ref().unwrap();
        assert_eq!(bike.target_power_w, Some(193.0));
        assert_eq!(bike.power_range_w, Some((188.0, 198.0)));
        assert_eq!(bike.target_hr_bpm, Some(139.0));
        assert_eq!(bike.hr_range_bpm, Some((135.0, 142.0)));
        assert!(
            bike.speed_mph > 18.0 && bike.speed_mph < 24.0,
            "speed {}",
            bike.speed_mph
        );
        assert_eq!(bike.effort, Some(EffortTier::ModerateHard));

        assert!(approx_eq(plan.run.target_pace_s_per_mi, 506.024, 1e-3));
        assert_eq!(plan.run.target_hr_bpm, Some(154.0));
        assert_eq!(plan.run.effort, Some(EffortTier::Hard));
        let (lo, hi) = plan.run.pace_range_s_per_mi.unwrap();
        assert!(approx_eq(hi - lo, 10.0, 1e-9));

        let expected_total = swim.time_s + bike.time_s + plan.run.time_s + 300.0;
        assert!(approx_eq(plan.total_time_s, expected_total, 1e-9));
        assert_eq!(plan.rpe, "6-7/10");
        assert_eq!(plan.distance_label, "70.3 Miles");
    }

    #[test]
    fn test_fitness_bike_speed_matches_solver_exactly() {
        // Rounding the displayed power must not leak into the speed estimate
        let plan = compute_pacing(&tri_request(RaceCategory::HalfDistance)).unwrap();
        let direct =
            physics::bike_speed_mph(250.0 * 0.77, 165.0, 0.28, RideConditions::default()).unwrap();
        assert_eq!(plan.bike.unwrap().speed_mph, direct);
    }

    #[test]
    fn test_fitness_benchmark_estimates() {
        let mut request = PacingRequest::new(RaceCategory::Olympic, PacingMode::Fitness);
        request.age = Some(30);
        request.gender = Some(Gender::Male);
        request.race_weight_lb = Some(160.0);
        request.level = Some(AthleteLevel::Intermediate);
        request.css = Some(ThresholdInput::Benchmark("1:20".to_string()));
        request.ftp_w = Some(ThresholdInput::Benchmark(220.0));
        request.run_threshold_pace = Some(ThresholdInput::Benchmark("24:00".to_string()));

        let plan = compute_pacing(&request).unwrap();
        let profile = plan.profile.as_ref().unwrap();

        assert!(approx_eq(profile.max_hr_bpm.value, 191.8, 1e-9));
        assert_eq!(profile.max_hr_bpm.provenance, Provenance::Estimated);
        assert_eq!(profile.threshold_hr_bpm, 163.0);

        let css = profile.css_s_per_100y.unwrap();
        assert!(approx_eq(css.value, 68.0, 1e-9));
        assert_eq!(css.provenance, Provenance::Estimated);

        let ftp = profile.ftp_w.unwrap();
        assert_eq!(ftp.value, 187.0);

        let run_threshold = profile.run_threshold_pace_s_per_mi;
        assert!(
            approx_eq(run_threshold.value, 546.49, 0.01),
            "threshold {}",
            run_threshold.value
        );
        assert_eq!(format_pace(run_threshold.value), "9:06");

        assert_eq!(plan.bike.unwrap().target_power_w, Some(172.0));
    }

    #[test]
    fn test_fitness_run_only_plan() {
        let plan = compute_pacing(&run_request(RaceCategory::FiveK)).unwrap();
        assert!(plan.swim.is_none());
        assert!(plan.bike.is_none());
        assert!(plan.transitions.is_none());

        assert!(approx_eq(plan.run.target_pace_s_per_mi, 390.0 / 1.03, 1e-9));
        assert_eq!(plan.run.target_hr_bpm, Some(182.0));
        assert_eq!(plan.run.hr_range_bpm, Some((179.0, 186.0)));
        assert_eq!(plan.run.effort, Some(EffortTier::VeryHard));
        assert!(plan.run.target_power_w.is_none());
        assert!(approx_eq(plan.total_time_s, plan.run.time_s, 1e-9));
    }

    #[test]
    fn test_fitness_run_power_target_when_supplied() {
        let mut request = run_request(RaceCategory::Marathon);
        request.run_threshold_power_w = Some(300.0);
        let plan = compute_pacing(&request).unwrap();
        assert_eq!(plan.run.target_power_w, Some(276.0));
        assert_eq!(plan.run.effort, Some(EffortTier::ModerateHard));
    }

    #[test]
    fn test_fitness_effort_tiers_by_category() {
        let sprint = compute_pacing(&tri_request(RaceCategory::Sprint)).unwrap();
        assert_eq!(sprint.swim.unwrap().effort, Some(EffortTier::Hard));
        assert_eq!(sprint.bike.unwrap().effort, Some(EffortTier::Hard));
        assert_eq!(sprint.run.effort, Some(EffortTier::VeryHard));

        let full = compute_pacing(&tri_request(RaceCategory::FullDistance)).unwrap();
        assert_eq!(full.swim.unwrap().effort, Some(EffortTier::Moderate));
        assert_eq!(full.bike.unwrap().effort, Some(EffortTier::Moderate));
        assert_eq!(full.run.effort, Some(EffortTier::ModerateHard));

        let ten_k = compute_pacing(&run_request(RaceCategory::TenK)).unwrap();
        assert_eq!(ten_k.run.effort, Some(EffortTier::Hard));
    }

    #[test]
    fn test_power_target_monotonic_in_zone_fraction() {
        let sprint = compute_pacing(&tri_request(RaceCategory::Sprint)).unwrap();
        let full = compute_pacing(&tri_request(RaceCategory::FullDistance)).unwrap();
        let sprint_power = sprint.bike.unwrap().target_power_w.unwrap();
        let full_power = full.bike.unwrap().target_power_w.unwrap();
        assert!(
            sprint_power > full_power,
            "sprint {sprint_power} <= full {full_power}"
        );
        // 250 * 0.95 sits just under 237.5 in f64, so it rounds down
        assert_eq!(sprint_power, 237.0);
        assert_eq!(full_power, 175.0);
    }

    #[test]
    fn test_target_time_half_distance_allocation() {
        let mut request = PacingRequest::new(RaceCategory::HalfDistance, PacingMode::TargetTime);
        request.goal_time = Some("5:30:00".to_string());
        let plan = compute_pacing(&request).unwrap();

        let swim = plan.swim.as_ref().unwrap();
        let bike = plan.bike.as_ref().unwrap();
        let transitions = plan.transitions.unwrap();

        assert!(approx_eq(swim.time_s, 1950.0, 1e-9));
        assert!(approx_eq(bike.time_s, 10725.0, 1e-9));
        assert!(approx_eq(plan.run.time_s, 6825.0, 1e-9));
        assert_eq!(transitions.t1_s, 150.0);
        assert_eq!(transitions.t2_s, 150.0);

        let reassembled =
            swim.time_s + bike.time_s + plan.run.time_s + transitions.t1_s + transitions.t2_s;
        assert!(
            approx_eq(reassembled, 19800.0, 1.0),
            "segments reassemble to {reassembled}"
        );
        assert!(approx_eq(plan.total_time_s, 19800.0, 1e-9));
        assert_eq!(format_time(plan.total_time_s), "5:30:00");

        assert!(approx_eq(swim.target_pace_s_per_100y, 92.3295, 1e-3));
        assert!(approx_eq(bike.speed_mph, 18.797, 1e-3));
        assert!(approx_eq(plan.run.target_pace_s_per_mi, 520.992, 1e-3));

        assert!(plan.profile.is_none());
        assert!(swim.effort.is_none());
        assert!(bike.target_power_w.is_none());
        assert!(plan.run.pace_range_s_per_mi.is_none());
    }

    #[test]
    fn test_target_time_run_only() {
        let mut request = PacingRequest::new(RaceCategory::TenK, PacingMode::TargetTime);
        request.goal_time = Some("50:00".to_string());
        let plan = compute_pacing(&request).unwrap();

        assert!(plan.swim.is_none());
        assert!(plan.bike.is_none());
        assert!(plan.transitions.is_none());
        assert!(approx_eq(plan.run.target_pace_s_per_mi, 3000.0 / 6.2, 1e-9));
        assert!(approx_eq(plan.total_time_s, 3000.0, 1e-9));
        assert_eq!(format_pace(plan.run.target_pace_s_per_mi), "8:04");
    }

    #[test]
    fn test_target_time_must_cover_transitions() {
        let mut request = PacingRequest::new(RaceCategory::Sprint, PacingMode::TargetTime);
        request.goal_time = Some("2:00".to_string());
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::InvalidInput(_))
        ));

        request.goal_time = Some("1:59".to_string());
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::InvalidInput(_))
        ));

        request.goal_time = Some("2:01".to_string());
        assert!(compute_pacing(&request).is_ok());
    }

    #[test]
    fn test_missing_field_errors() {
        let mut request = tri_request(RaceCategory::Olympic);
        request.css = None;
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::MissingRequiredField("css"))
        ));

        let mut request = tri_request(RaceCategory::Olympic);
        request.ftp_w = None;
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::MissingRequiredField("ftp"))
        ));

        let mut request = run_request(RaceCategory::FiveK);
        request.run_threshold_pace = None;
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::MissingRequiredField("run threshold pace"))
        ));

        let mut request = tri_request(RaceCategory::Sprint);
        request.age = None;
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::MissingRequiredField("age"))
        ));

        let request = PacingRequest::new(RaceCategory::Marathon, PacingMode::TargetTime);
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::MissingRequiredField("goal time"))
        ));
    }

    #[test]
    fn test_benchmark_without_level_fails() {
        let mut request = run_request(RaceCategory::HalfMarathon);
        request.run_threshold_pace = Some(ThresholdInput::Benchmark("24:00".to_string()));
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::MissingRequiredField("level"))
        ));
    }

    #[test]
    fn test_malformed_time_fails_with_parse_error() {
        let mut request = PacingRequest::new(RaceCategory::Marathon, PacingMode::TargetTime);
        request.goal_time = Some("3:4x:00".to_string());
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::Parse(_))
        ));

        let mut request = run_request(RaceCategory::FiveK);
        request.level = Some(AthleteLevel::Intermediate);
        request.run_threshold_pace = Some(ThresholdInput::Benchmark("24:0x".to_string()));
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_numeric_inputs() {
        let mut request = tri_request(RaceCategory::Sprint);
        request.age = Some(0);
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::InvalidInput(_))
        ));

        let mut request = tri_request(RaceCategory::Sprint);
        request.resting_hr_bpm = Some(200.0);
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::InvalidInput(_))
        ));

        let mut request = tri_request(RaceCategory::Sprint);
        request.ftp_w = Some(ThresholdInput::Known(-50.0));
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::InvalidInput(_))
        ));

        let mut request = tri_request(RaceCategory::Sprint);
        request.race_weight_lb = Some(0.0);
        assert!(matches!(
            compute_pacing(&request),
            Err(PacingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resting_hr_switches_threshold_formula() {
        let mut request = run_request(RaceCategory::TenK);
        request.resting_hr_bpm = Some(50.0);
        let plan = compute_pacing(&request).unwrap();
        let profile = plan.profile.unwrap();
        // 50 + 0.80 * (190 - 50)
        assert_eq!(profile.threshold_hr_bpm, 162.0);
        assert!(
            profile.threshold_hr_bpm > 50.0 && profile.threshold_hr_bpm < 190.0,
            "threshold outside resting..max"
        );
    }
}
