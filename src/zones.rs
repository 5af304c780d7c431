//! Static per-category race configuration: distances, transition budgets,
//! aerodynamic drag, intensity fractions, and goal-time splits.
//!
//! Everything here is fixed at compile time and validated once at startup;
//! the rest of the engine reads it through [`config`].

use crate::domain::RaceCategory;
use crate::error::PacingError;

/// Yards in a mile, for swim pace units.
const YARDS_PER_MILE: f64 = 1760.0;

/// One segment's course length with its presentation label.
#[derive(Debug, Clone, Copy)]
pub struct SegmentDistance {
    pub miles: f64,
    pub label: &'static str,
}

impl SegmentDistance {
    /// Course length in yards (swim paces are per 100 yd).
    pub fn yards(&self) -> f64 {
        self.miles * YARDS_PER_MILE
    }
}

/// Swim leg: distance plus the fraction of CSS to hold.
#[derive(Debug, Clone, Copy)]
pub struct SwimSegment {
    pub distance: SegmentDistance,
    pub css_fraction: f64,
}

/// Bike leg: distance plus the fractions of FTP and max HR to hold.
#[derive(Debug, Clone, Copy)]
pub struct BikeSegment {
    pub distance: SegmentDistance,
    pub power_fraction: f64,
    pub hr_fraction: f64,
}

/// Run intensity fractions, applied to max HR, threshold power, and
/// threshold pace respectively.
#[derive(Debug, Clone, Copy)]
pub struct RunZones {
    pub hr_fraction: f64,
    pub power_fraction: f64,
    pub pace_fraction: f64,
}

/// Goal-time split fractions for triathlon categories. Sum to exactly 1.
#[derive(Debug, Clone, Copy)]
pub struct SplitFractions {
    pub swim: f64,
    pub bike: f64,
    pub run: f64,
}

/// Full static configuration for one race category.
#[derive(Debug, Clone, Copy)]
pub struct RaceConfig {
    pub distance_label: &'static str,
    pub swim: Option<SwimSegment>,
    pub bike: Option<BikeSegment>,
    pub run: SegmentDistance,
    pub run_zones: RunZones,
    /// Perceived-exertion guide for the whole race.
    pub rpe: &'static str,
    /// Combined T1 + T2 allowance in seconds; 0 for run-only categories.
    pub transition_s: f64,
    /// Race-day CdA in m²; run-only categories carry the 0.25 default.
    pub cda: f64,
    pub splits: Option<SplitFractions>,
}

/// Returns the configuration for a race category.
pub fn config(category: RaceCategory) -> &'static RaceConfig {
    match category {
        RaceCategory::Sprint => &SPRINT,
        RaceCategory::Olympic => &OLYMPIC,
        RaceCategory::HalfDistance => &HALF_DISTANCE,
        RaceCategory::FullDistance => &FULL_DISTANCE,
        RaceCategory::FiveK => &FIVE_K,
        RaceCategory::TenK => &TEN_K,
        RaceCategory::HalfMarathon => &HALF_MARATHON,
        RaceCategory::Marathon => &MARATHON,
    }
}

static SPRINT: RaceConfig = RaceConfig {
    distance_label: "Sprint Distance",
    swim: Some(SwimSegment {
        distance: SegmentDistance {
            miles: 0.5,
            label: "0.5 mi (750m)",
        },
        css_fraction: 0.97,
    }),
    bike: Some(BikeSegment {
        distance: SegmentDistance {
            miles: 12.4,
            label: "12.4 mi (20km)",
        },
        power_fraction: 0.95,
        hr_fraction: 0.88,
    }),
    run: SegmentDistance {
        miles: 3.1,
        label: "3.1 mi (5K)",
    },
    run_zones: RunZones {
        hr_fraction: 0.93,
        power_fraction: 1.10,
        pace_fraction: 0.97,
    },
    rpe: "8-9/10",
    transition_s: 120.0,
    cda: 0.29,
    splits: Some(SplitFractions {
        swim: 0.15,
        bike: 0.50,
        run: 0.35,
    }),
};

static OLYMPIC: RaceConfig = RaceConfig {
    distance_label: "Olympic Distance",
    swim: Some(SwimSegment {
        distance: SegmentDistance {
            miles: 0.93,
            label: "0.93 mi (1500m)",
        },
        css_fraction: 0.93,
    }),
    bike: Some(BikeSegment {
        distance: SegmentDistance {
            miles: 24.8,
            label: "24.8 mi (40km)",
        },
        power_fraction: 0.92,
        hr_fraction: 0.85,
    }),
    run: SegmentDistance {
        miles: 6.2,
        label: "6.2 mi (10K)",
    },
    run_zones: RunZones {
        hr_fraction: 0.89,
        power_fraction: 1.05,
        pace_fraction: 0.93,
    },
    rpe: "7-8/10",
    transition_s: 180.0,
    cda: 0.28,
    splits: Some(SplitFractions {
        swim: 0.13,
        bike: 0.52,
        run: 0.35,
    }),
};

static HALF_DISTANCE: RaceConfig = RaceConfig {
    distance_label: "70.3 Miles",
    swim: Some(SwimSegment {
        distance: SegmentDistance {
            miles: 1.2,
            label: "1.2 mi (1.9km)",
        },
        css_fraction: 0.88,
    }),
    bike: Some(BikeSegment {
        distance: SegmentDistance {
            miles: 56.0,
            label: "56 mi (90km)",
        },
        power_fraction: 0.77,
        hr_fraction: 0.75,
    }),
    run: SegmentDistance {
        miles: 13.1,
        label: "13.1 mi",
    },
    run_zones: RunZones {
        hr_fraction: 0.83,
        power_fraction: 0.90,
        pace_fraction: 0.83,
    },
    rpe: "6-7/10",
    transition_s: 300.0,
    cda: 0.28,
    splits: Some(SplitFractions {
        swim: 0.10,
        bike: 0.55,
        run: 0.35,
    }),
};

static FULL_DISTANCE: RaceConfig = RaceConfig {
    distance_label: "140.6 Miles",
    swim: Some(SwimSegment {
        distance: SegmentDistance {
            miles: 2.4,
            label: "2.4 mi (3.8km)",
        },
        css_fraction: 0.83,
    }),
    bike: Some(BikeSegment {
        distance: SegmentDistance {
            miles: 112.0,
            label: "112 mi (180km)",
        },
        power_fraction: 0.70,
        hr_fraction: 0.70,
    }),
    run: SegmentDistance {
        miles: 26.2,
        label: "26.2 mi",
    },
    run_zones: RunZones {
        hr_fraction: 0.76,
        power_fraction: 0.85,
        pace_fraction: 0.77,
    },
    rpe: "6/10",
    transition_s: 300.0,
    cda: 0.28,
    splits: Some(SplitFractions {
        swim: 0.09,
        bike: 0.55,
        run: 0.36,
    }),
};

static FIVE_K: RaceConfig = RaceConfig {
    distance_label: "3.1 miles (5K)",
    swim: None,
    bike: None,
    run: SegmentDistance {
        miles: 3.1,
        label: "3.1 miles (5K)",
    },
    run_zones: RunZones {
        hr_fraction: 0.96,
        power_fraction: 1.12,
        pace_fraction: 1.03,
    },
    rpe: "9/10",
    transition_s: 0.0,
    cda: 0.25,
    splits: None,
};

static TEN_K: RaceConfig = RaceConfig {
    distance_label: "6.2 miles (10K)",
    swim: None,
    bike: None,
    run: SegmentDistance {
        miles: 6.2,
        label: "6.2 miles (10K)",
    },
    run_zones: RunZones {
        hr_fraction: 0.93,
        power_fraction: 1.07,
        pace_fraction: 0.98,
    },
    rpe: "8/10",
    transition_s: 0.0,
    cda: 0.25,
    splits: None,
};

static HALF_MARATHON: RaceConfig = RaceConfig {
    distance_label: "13.1 Miles",
    swim: None,
    bike: None,
    run: SegmentDistance {
        miles: 13.1,
        label: "13.1 Miles",
    },
    run_zones: RunZones {
        hr_fraction: 0.89,
        power_fraction: 0.97,
        pace_fraction: 0.90,
    },
    rpe: "7/10",
    transition_s: 0.0,
    cda: 0.25,
    splits: None,
};

static MARATHON: RaceConfig = RaceConfig {
    distance_label: "26.2 Miles",
    swim: None,
    bike: None,
    run: SegmentDistance {
        miles: 26.2,
        label: "26.2 Miles",
    },
    run_zones: RunZones {
        hr_fraction: 0.86,
        power_fraction: 0.92,
        pace_fraction: 0.87,
    },
    rpe: "7/10",
    transition_s: 0.0,
    cda: 0.25,
    splits: None,
};

/// Checks every category table for internal consistency.
///
/// Run once at startup; the same checks back the table tests. Violations
/// surface as `InvalidInput` naming the offending category.
pub fn validate_tables() -> Result<(), PacingError> {
    for &category in RaceCategory::all() {
        let cfg = config(category);
        let fail = |msg: String| {
            Err(PacingError::InvalidInput(format!(
                "race table {}: {}",
                category.display_name(),
                msg
            )))
        };

        if cfg.run.miles <= 0.0 {
            return fail(format!("run distance {} not positive", cfg.run.miles));
        }
        if cfg.cda <= 0.0 {
            return fail(format!("CdA {} not positive", cfg.cda));
        }
        let zones = &cfg.run_zones;
        if zones.hr_fraction <= 0.0 || zones.power_fraction <= 0.0 || zones.pace_fraction <= 0.0 {
            return fail("run zone fraction not positive".to_string());
        }

        if cfg.swim.is_some() != category.is_triathlon()
            || cfg.bike.is_some() != category.is_triathlon()
            || cfg.splits.is_some() != category.is_triathlon()
        {
            return fail("discipline set disagrees with category".to_string());
        }

        if let Some(swim) = &cfg.swim {
            if swim.distance.miles <= 0.0 || swim.css_fraction <= 0.0 {
                return fail("swim segment not positive".to_string());
            }
        }
        if let Some(bike) = &cfg.bike {
            if bike.distance.miles <= 0.0 || bike.power_fraction <= 0.0 || bike.hr_fraction <= 0.0
            {
                return fail("bike segment not positive".to_string());
            }
        }

        if category.is_triathlon() {
            if cfg.transition_s <= 0.0 {
                return fail(format!("transition {} not positive", cfg.transition_s));
            }
        } else if cfg.transition_s != 0.0 {
            return fail("run-only category has a transition budget".to_string());
        }

        if let Some(splits) = &cfg.splits {
            if splits.swim <= 0.0 || splits.bike <= 0.0 || splits.run <= 0.0 {
                return fail("split fraction not positive".to_string());
            }
            let sum = splits.swim + splits.bike + splits.run;
            if (sum - 1.0).abs() > 1e-9 {
                return fail(format!("split fractions sum to {}", sum));
            }
        }

        if cfg.rpe.is_empty() || cfg.distance_label.is_empty() || cfg.run.label.is_empty() {
            return fail("missing presentation label".to_string());
        }
    }

    Ok(())
}
