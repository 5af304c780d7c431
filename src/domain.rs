//! Domain types for race pacing: categories, athlete inputs, and plan records.

use std::str::FromStr;

use serde::Serialize;

use crate::error::PacingError;
use crate::strategy::RaceStrategy;

/// Race categories supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RaceCategory {
    Sprint,
    Olympic,
    HalfDistance,
    FullDistance,
    #[serde(rename = "5K")]
    FiveK,
    #[serde(rename = "10K")]
    TenK,
    HalfMarathon,
    Marathon,
}

impl RaceCategory {
    /// Returns all race category variants.
    pub fn all() -> &'static [RaceCategory] {
        &[
            RaceCategory::Sprint,
            RaceCategory::Olympic,
            RaceCategory::HalfDistance,
            RaceCategory::FullDistance,
            RaceCategory::FiveK,
            RaceCategory::TenK,
            RaceCategory::HalfMarathon,
            RaceCategory::Marathon,
        ]
    }

    /// Returns the display name for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            RaceCategory::Sprint => "Sprint Triathlon",
            RaceCategory::Olympic => "Olympic Triathlon",
            RaceCategory::HalfDistance => "Half Distance Triathlon",
            RaceCategory::FullDistance => "Full Distance Triathlon",
            RaceCategory::FiveK => "5K Run",
            RaceCategory::TenK => "10K Run",
            RaceCategory::HalfMarathon => "Half Marathon",
            RaceCategory::Marathon => "Marathon",
        }
    }

    /// True for categories raced as swim + bike + run.
    pub fn is_triathlon(&self) -> bool {
        matches!(
            self,
            RaceCategory::Sprint
                | RaceCategory::Olympic
                | RaceCategory::HalfDistance
                | RaceCategory::FullDistance
        )
    }
}

impl FromStr for RaceCategory {
    type Err = PacingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sprint" => Ok(RaceCategory::Sprint),
            "olympic" => Ok(RaceCategory::Olympic),
            "halfdistance" => Ok(RaceCategory::HalfDistance),
            "fulldistance" => Ok(RaceCategory::FullDistance),
            "5k" => Ok(RaceCategory::FiveK),
            "10k" => Ok(RaceCategory::TenK),
            "halfmarathon" => Ok(RaceCategory::HalfMarathon),
            "marathon" => Ok(RaceCategory::Marathon),
            _ => Err(PacingError::InvalidInput(format!(
                "unknown race category: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for RaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Athlete gender, used only by the max heart rate age regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the display name for the gender.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = PacingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(PacingError::InvalidInput(format!("unknown gender: {s}"))),
        }
    }
}

/// Athlete experience level, mapped to the fraction of a maximal benchmark
/// effort the athlete can hold at threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AthleteLevel {
    Recreational,
    Intermediate,
    Competitive,
    Elite,
}

impl AthleteLevel {
    /// Returns all athlete level variants.
    pub fn all() -> &'static [AthleteLevel] {
        &[
            AthleteLevel::Recreational,
            AthleteLevel::Intermediate,
            AthleteLevel::Competitive,
            AthleteLevel::Elite,
        ]
    }

    /// Fraction of a maximal benchmark effort sustainable at threshold.
    pub fn threshold_fraction(&self) -> f64 {
        match self {
            AthleteLevel::Recreational => 0.80,
            AthleteLevel::Intermediate => 0.85,
            AthleteLevel::Competitive => 0.90,
            AthleteLevel::Elite => 0.95,
        }
    }

    /// Returns the display name for the level.
    pub fn display_name(&self) -> &'static str {
        match self {
            AthleteLevel::Recreational => "Recreational",
            AthleteLevel::Intermediate => "Intermediate",
            AthleteLevel::Competitive => "Competitive",
            AthleteLevel::Elite => "Elite",
        }
    }
}

impl FromStr for AthleteLevel {
    type Err = PacingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recreational" => Ok(AthleteLevel::Recreational),
            "intermediate" => Ok(AthleteLevel::Intermediate),
            "competitive" => Ok(AthleteLevel::Competitive),
            "elite" => Ok(AthleteLevel::Elite),
            _ => Err(PacingError::InvalidInput(format!(
                "unknown athlete level: {s}"
            ))),
        }
    }
}

/// How a threshold metric is supplied: the measured value itself, or a
/// benchmark effort to estimate it from.
#[derive(Debug, Clone)]
pub enum ThresholdInput<T> {
    /// The athlete knows the threshold value directly.
    Known(T),
    /// A recent maximal effort, scaled by the athlete level fraction.
    Benchmark(T),
}

/// Calculation mode selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PacingMode {
    /// Derive race targets from physiological thresholds.
    #[serde(rename = "fitness")]
    Fitness,
    /// Derive required paces from a single goal finish time.
    #[serde(rename = "target")]
    TargetTime,
}

impl PacingMode {
    /// Returns the display name for the mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            PacingMode::Fitness => "fitness",
            PacingMode::TargetTime => "target",
        }
    }
}

impl FromStr for PacingMode {
    type Err = PacingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fitness" => Ok(PacingMode::Fitness),
            "target" => Ok(PacingMode::TargetTime),
            _ => Err(PacingError::InvalidInput(format!(
                "unknown pacing mode: {s}"
            ))),
        }
    }
}

/// One calculation request, as supplied by the presentation layer.
///
/// Time and pace fields are colon-delimited literals (`M:SS` for paces,
/// `H:MM:SS` or `M:SS` for times); the engine parses and validates them.
/// Which optional fields are required depends on the category and mode.
#[derive(Debug, Clone)]
pub struct PacingRequest {
    pub category: RaceCategory,
    pub mode: PacingMode,
    /// Required whenever a threshold must be estimated from a benchmark.
    pub level: Option<AthleteLevel>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub race_weight_lb: Option<f64>,
    /// Goal finish time, target mode only.
    pub goal_time: Option<String>,
    /// Measured max heart rate; estimated from age and gender when absent.
    pub max_hr_bpm: Option<f64>,
    pub resting_hr_bpm: Option<f64>,
    /// Critical swim speed per 100 yd, or a fastest-100-yd benchmark.
    pub css: Option<ThresholdInput<String>>,
    /// Functional threshold power in watts, or a 20-minute max power benchmark.
    pub ftp_w: Option<ThresholdInput<f64>>,
    /// Run threshold pace per mile, or a fastest-5K benchmark time.
    pub run_threshold_pace: Option<ThresholdInput<String>>,
    pub run_threshold_power_w: Option<f64>,
}

impl PacingRequest {
    /// Creates an empty request for the given category and mode.
    pub fn new(category: RaceCategory, mode: PacingMode) -> Self {
        Self {
            category,
            mode,
            level: None,
            age: None,
            gender: None,
            race_weight_lb: None,
            goal_time: None,
            max_hr_bpm: None,
            resting_hr_bpm: None,
            css: None,
            ftp_w: None,
            run_threshold_pace: None,
            run_threshold_power_w: None,
        }
    }
}

/// Whether a resolved value was measured by the athlete or estimated by a
/// formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Measured,
    Estimated,
}

impl Provenance {
    /// Returns the display name for the provenance.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provenance::Measured => "measured",
            Provenance::Estimated => "estimated",
        }
    }
}

/// A resolved threshold value together with how it was obtained.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResolvedThreshold {
    pub value: f64,
    pub provenance: Provenance,
}

impl ResolvedThreshold {
    pub fn measured(value: f64) -> Self {
        Self {
            value,
            provenance: Provenance::Measured,
        }
    }

    pub fn estimated(value: f64) -> Self {
        Self {
            value,
            provenance: Provenance::Estimated,
        }
    }
}

/// Physiological inputs after threshold resolution, echoed into the plan so
/// the caller can show what the targets were derived from.
#[derive(Debug, Clone, Serialize)]
pub struct AthleteProfile {
    pub age: u32,
    pub gender: Gender,
    pub race_weight_lb: f64,
    pub max_hr_bpm: ResolvedThreshold,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_hr_bpm: Option<f64>,
    pub threshold_hr_bpm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_s_per_100y: Option<ResolvedThreshold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ftp_w: Option<ResolvedThreshold>,
    pub run_threshold_pace_s_per_mi: ResolvedThreshold,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_threshold_power_w: Option<f64>,
}

/// Qualitative effort tier for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EffortTier {
    Moderate,
    #[serde(rename = "Moderate-Hard")]
    ModerateHard,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl EffortTier {
    /// Returns the display name for the tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            EffortTier::Moderate => "Moderate",
            EffortTier::ModerateHard => "Moderate-Hard",
            EffortTier::Hard => "Hard",
            EffortTier::VeryHard => "Very Hard",
        }
    }
}

impl std::fmt::Display for EffortTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Swim segment of a pacing plan.
///
/// Fitness mode fills the effort tier; target mode reports only the pace
/// and time the goal requires.
#[derive(Debug, Clone, Serialize)]
pub struct SwimPlan {
    pub distance_label: &'static str,
    pub target_pace_s_per_100y: f64,
    pub time_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<EffortTier>,
}

/// Bike segment of a pacing plan.
#[derive(Debug, Clone, Serialize)]
pub struct BikePlan {
    pub distance_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_power_w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_range_w: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_range_bpm: Option<(f64, f64)>,
    pub speed_mph: f64,
    pub time_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<EffortTier>,
}

/// Run segment of a pacing plan.
#[derive(Debug, Clone, Serialize)]
pub struct RunPlan {
    pub distance_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_hr_bpm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_range_bpm: Option<(f64, f64)>,
    /// Present only when a run threshold power was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_power_w: Option<f64>,
    pub target_pace_s_per_mi: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_range_s_per_mi: Option<(f64, f64)>,
    pub time_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<EffortTier>,
}

/// Transition budget, reported in target mode where the goal time is
/// apportioned explicitly.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TransitionPlan {
    pub t1_s: f64,
    pub t2_s: f64,
}

/// The complete pacing plan returned to the caller. Immutable; rebuilt on
/// every calculation request.
#[derive(Debug, Clone, Serialize)]
pub struct PacingPlan {
    pub category: RaceCategory,
    pub mode: PacingMode,
    pub distance_label: &'static str,
    /// Perceived-exertion guide for the whole race.
    pub rpe: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<AthleteProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swim: Option<SwimPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bike: Option<BikePlan>,
    pub run: RunPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<TransitionPlan>,
    pub total_time_s: f64,
    pub strategy: &'static RaceStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_all_keys() {
        assert_eq!(
            RaceCategory::from_str("Sprint").unwrap(),
            RaceCategory::Sprint
        );
        assert_eq!(
            RaceCategory::from_str("Olympic").unwrap(),
            RaceCategory::Olympic
        );
        assert_eq!(
            RaceCategory::from_str("HalfDistance").unwrap(),
            RaceCategory::HalfDistance
        );
        assert_eq!(
            RaceCategory::from_str("FullDistance").unwrap(),
            RaceCategory::FullDistance
        );
        assert_eq!(RaceCategory::from_str("5K").unwrap(), RaceCategory::FiveK);
        assert_eq!(RaceCategory::from_str("10K").unwrap(), RaceCategory::TenK);
        assert_eq!(
            RaceCategory::from_str("HalfMarathon").unwrap(),
            RaceCategory::HalfMarathon
        );
        assert_eq!(
            RaceCategory::from_str("Marathon").unwrap(),
            RaceCategory::Marathon
        );
    }

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!(
            RaceCategory::from_str("sprint").unwrap(),
            RaceCategory::Sprint
        );
        assert_eq!(
            RaceCategory::from_str("HALFDISTANCE").unwrap(),
            RaceCategory::HalfDistance
        );
        assert_eq!(RaceCategory::from_str("5k").unwrap(), RaceCategory::FiveK);
    }

    #[test]
    fn test_category_from_str_with_whitespace() {
        assert_eq!(
            RaceCategory::from_str("  Marathon  ").unwrap(),
            RaceCategory::Marathon
        );
    }

    #[test]
    fn test_category_from_str_invalid() {
        assert!(matches!(
            RaceCategory::from_str("Ultra"),
            Err(PacingError::InvalidInput(_))
        ));
        assert!(RaceCategory::from_str("").is_err());
        assert!(RaceCategory::from_str("Half").is_err());
    }

    #[test]
    fn test_category_discipline_split() {
        assert!(RaceCategory::Sprint.is_triathlon());
        assert!(RaceCategory::FullDistance.is_triathlon());
        assert!(!RaceCategory::FiveK.is_triathlon());
        assert!(!RaceCategory::Marathon.is_triathlon());
    }

    #[test]
    fn test_category_all_has_eight_variants() {
        assert_eq!(RaceCategory::all().len(), 8);
    }

    #[test]
    fn test_level_threshold_fractions() {
        assert_eq!(AthleteLevel::Recreational.threshold_fraction(), 0.80);
        assert_eq!(AthleteLevel::Intermediate.threshold_fraction(), 0.85);
        assert_eq!(AthleteLevel::Competitive.threshold_fraction(), 0.90);
        assert_eq!(AthleteLevel::Elite.threshold_fraction(), 0.95);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!(
            AthleteLevel::from_str("intermediate").unwrap(),
            AthleteLevel::Intermediate
        );
        assert_eq!(
            AthleteLevel::from_str("Elite").unwrap(),
            AthleteLevel::Elite
        );
        assert!(AthleteLevel::from_str("pro").is_err());
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
        assert_eq!(Gender::from_str("F").unwrap(), Gender::Female);
        assert!(Gender::from_str("other").is_err());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(PacingMode::from_str("fitness").unwrap(), PacingMode::Fitness);
        assert_eq!(
            PacingMode::from_str("target").unwrap(),
            PacingMode::TargetTime
        );
        assert!(PacingMode::from_str("race").is_err());
    }

    #[test]
    fn test_effort_tier_display() {
        assert_eq!(EffortTier::ModerateHard.to_string(), "Moderate-Hard");
        assert_eq!(EffortTier::VeryHard.to_string(), "Very Hard");
    }
}
