//! Execution advice attached to every pacing plan: the classic mistake for
//! the distance, per-discipline notes, and a mindset line.

use serde::Serialize;

use crate::domain::RaceCategory;

/// Race-day execution notes for one category.
#[derive(Debug, Serialize)]
pub struct RaceStrategy {
    pub mistake: &'static str,
    #[serde(flatten)]
    pub notes: SegmentNotes,
    pub mindset: &'static str,
}

/// Discipline notes; triathlons carry one line per leg, run races a single
/// strategy line.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SegmentNotes {
    Triathlon {
        swim: &'static str,
        bike: &'static str,
        run: &'static str,
    },
    Run {
        strategy: &'static str,
    },
}

/// Returns the strategy notes for a race category.
pub fn strategy(category: RaceCategory) -> &'static RaceStrategy {
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

static SPRINT: RaceStrategy = RaceStrategy {
    mistake: "Racing like it's a 45-60 minute suffer-fest from the gun.",
    notes: SegmentNotes::Triathlon {
        swim: "Calm and controlled. You should exit slightly under redline, not gasping.",
        bike: "Hard but smooth. Avoid surging out of turns or chasing faster riders.",
        run: "First half = control on target. Second half = let it all out and race.",
    },
    mindset: "Sprint rewards fitness, but still punishes stupidity. You can't win it on the bike \
              if you destroy the run.",
};

static OLYMPIC: RaceStrategy = RaceStrategy {
    mistake: "Treating it like a long sprint.",
    notes: SegmentNotes::Triathlon {
        swim: "First 400m controlled breathing. Build effort gradually, don't surge.",
        bike: "Settle the first 10 minutes, then apply steady pressure to the wattage target. \
               Increase cadence the final 5-10 minutes.",
        run: "First 2K easy. Lock in rhythm. Final 2K empty the tank.",
    },
    mindset: "Olympic races are decided by bike discipline and run patience, not bravery.",
};

static HALF_DISTANCE: RaceStrategy = RaceStrategy {
    mistake: "Riding \"just a little too hard\" because it feels easy early.",
    notes: SegmentNotes::Triathlon {
        swim: "Very controlled. Find breath rhythm and feet early if possible.",
        bike: "Conservative first 20-30 minutes. Steady middle. Aim for a negative split. \
               Increase cadence the final 5-10 minutes. Remember your fueling plan!",
        run: "First 3-4 miles easy. Build to race pace by mile 6.",
    },
    mindset: "If the bike feels impressive, the run will often be disappointing.",
};

static FULL_DISTANCE: RaceStrategy = RaceStrategy {
    mistake: "Racing the first half instead of preparing for the second.",
    notes: SegmentNotes::Triathlon {
        swim: "Extremely controlled. Rhythm over position.",
        bike: "The number 1 key is your hydro/fueling plan! Conservative effort the first hour. \
               Stay within your planned target wattage zones until special needs. \
               Self-evaluation on modifying target wattage up or down in the back half. \
               Increase cadence the final 5-10 minutes.",
        run: "First 6-8 miles conservative. Hold steady through the middle. Walk the aid \
              stations to maximize hydro/nutrition, and cooling. The back half will be painful; \
              embrace it and finish strong.",
    },
    mindset: "Ironman is an execution event. You don't win it with heroics — you earn it with \
              restraint.",
};

static FIVE_K: RaceStrategy = RaceStrategy {
    mistake: "Starting faster than goal pace because it feels \"easy.\"",
    notes: SegmentNotes::Run {
        strategy: "Start at goal pace. Hold miles 1-2. Push the final mile.",
    },
    mindset: "You don't race the first mile — you survive it well enough to race the last.",
};

static TEN_K: RaceStrategy = RaceStrategy {
    mistake: "Overreaching at mile 2-3 and paying for it late.",
    notes: SegmentNotes::Run {
        strategy: "Controlled start. Hold steady through miles 3-5. Push the final mile.",
    },
    mindset: "The 10K rewards patience and punishes impatience quietly.",
};

static HALF_MARATHON: RaceStrategy = RaceStrategy {
    mistake: "Banking time early.",
    notes: SegmentNotes::Run {
        strategy: "Conservative first 3 miles. Lock into rhythm mid-race. Negative split \
                   miles 10-13.",
    },
    mindset: "The best half marathons feel boring early and powerful late.",
};

static MARATHON: RaceStrategy = RaceStrategy {
    mistake: "Letting excitement dictate the first 10 miles.",
    notes: SegmentNotes::Run {
        strategy: "Very conservative first 10 miles. Manage miles 10-20. Grit miles 20-26 \
                   only if earned.",
    },
    mindset: "Marathons aren't finished with courage — they're managed with discipline.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_strategy_text() {
        for &category in RaceCategory::all() {
            let s = strategy(category);
            assert!(!s.mistake.is_empty(), "{} mistake", category.display_name());
            assert!(!s.mindset.is_empty(), "{} mindset", category.display_name());
        }
    }

    #[test]
    fn test_note_shape_matches_discipline_set() {
        for &category in RaceCategory::all() {
            let s = strategy(category);
            match s.notes {
                SegmentNotes::Triathlon { .. } => assert!(category.is_triathlon()),
                SegmentNotes::Run { .. } => assert!(!category.is_triathlon()),
            }
        }
    }

    #[test]
    fn test_sprint_strategy_text() {
        let s = strategy(RaceCategory::Sprint);
        assert_eq!(
            s.mistake,
            "Racing like it's a 45-60 minute suffer-fest from the gun."
        );
        match s.notes {
            SegmentNotes::Triathlon { swim, .. } => {
                assert!(swim.starts_with("Calm and controlled."));
            }
            SegmentNotes::Run { .. } => panic!("sprint should carry triathlon notes"),
        }
    }

    #[test]
    fn test_serialized_shape() {
        let tri = serde_json::to_value(strategy(RaceCategory::Olympic)).unwrap();
        assert!(tri.get("swim").is_some());
        assert!(tri.get("bike").is_some());
        assert!(tri.get("run").is_some());
        assert!(tri.get("strategy").is_none());

        let run = serde_json::to_value(strategy(RaceCategory::TenK)).unwrap();
        assert!(run.get("strategy").is_some());
        assert!(run.get("swim").is_none());
    }
}
