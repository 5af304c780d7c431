mod domain;
mod error;
mod formulas;
mod pacing;
mod physics;
mod strategy;
mod units;
mod zones;

use anyhow::{Context, Result};
use clap::Parser;

use crate::domain::{
    AthleteLevel, Gender, PacingMode, PacingPlan, PacingRequest, RaceCategory, ThresholdInput,
};
use crate::strategy::SegmentNotes;
use crate::units::{format_pace, format_time};

/// Race pacing calculator for triathlon and running events.
#[derive(Parser, Debug)]
#[command(name = "paceplan")]
#[command(about = "Per-segment race pacing targets from thresholds or a goal time")]
#[command(version)]
struct Args {
    /// Race category: Sprint, Olympic, HalfDistance, FullDistance,
    /// 5K, 10K, HalfMarathon, or Marathon.
    #[arg(value_name = "RACE")]
    race: RaceCategory,

    /// Pacing mode: "fitness" derives targets from thresholds, "target"
    /// splits a goal finish time across segments.
    /// Can also be set via PACEPLAN_MODE environment variable.
    #[arg(long, env = "PACEPLAN_MODE", default_value = "fitness")]
    mode: PacingMode,

    /// Athlete level for benchmark-based estimates: Recreational,
    /// Intermediate, Competitive, or Elite.
    #[arg(long)]
    level: Option<AthleteLevel>,

    /// Athlete age in years (fitness mode).
    #[arg(long)]
    age: Option<u32>,

    /// Athlete gender, male or female (fitness mode).
    #[arg(long)]
    gender: Option<Gender>,

    /// Race-day weight in pounds (fitness mode).
    #[arg(long, value_name = "LB")]
    race_weight: Option<f64>,

    /// Measured maximum heart rate in bpm; estimated from age and gender
    /// when omitted.
    #[arg(long, value_name = "BPM")]
    max_hr: Option<f64>,

    /// Resting heart rate in bpm; switches the threshold heart rate to the
    /// heart-rate-reserve formula.
    #[arg(long, value_name = "BPM")]
    resting_hr: Option<f64>,

    /// Known critical swim speed per 100 yd, M:SS (triathlon).
    #[arg(long, value_name = "M:SS")]
    css: Option<String>,

    /// Fastest recent 100 yd swim, M:SS; estimates CSS with --level when
    /// --css is not known.
    #[arg(long, value_name = "M:SS")]
    fastest_100y: Option<String>,

    /// Known functional threshold power in watts (triathlon).
    #[arg(long, value_name = "WATTS")]
    ftp: Option<f64>,

    /// Best 20 minute average power in watts; estimates FTP with --level
    /// when --ftp is not known.
    #[arg(long, value_name = "WATTS")]
    max_20min_watts: Option<f64>,

    /// Known run threshold pace per mile, M:SS.
    #[arg(long, value_name = "M:SS")]
    threshold_pace: Option<String>,

    /// Fastest recent 5K, M:SS or H:MM:SS; estimates threshold pace with
    /// --level when --threshold-pace is not known.
    #[arg(long, value_name = "TIME")]
    fastest_5k: Option<String>,

    /// Run threshold power in watts; adds a run power target when given.
    #[arg(long, value_name = "WATTS")]
    threshold_power: Option<f64>,

    /// Goal finish time for target mode, M:SS or H:MM:SS.
    #[arg(long, value_name = "TIME")]
    goal: Option<String>,

    /// Print the plan as JSON instead of text.
    /// Can also be set via PACEPLAN_JSON environment variable.
    #[arg(long, env = "PACEPLAN_JSON")]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    zones::validate_tables().context("race configuration tables failed validation")?;

    let request = build_request(&args);
    let plan = pacing::compute_pacing(&request)
        .with_context(|| format!("failed to compute pacing for {}", args.race))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }

    Ok(())
}

/// Maps command line options onto an engine request. A known threshold wins
/// over its benchmark counterpart when both are given.
fn build_request(args: &Args) -> PacingRequest {
    let mut request = PacingRequest::new(args.race, args.mode);
    request.level = args.level;
    request.age = args.age;
    request.gender = args.gender;
    request.race_weight_lb = args.race_weight;
    request.goal_time = args.goal.clone();
    request.max_hr_bpm = args.max_hr;
    request.resting_hr_bpm = args.resting_hr;

    request.css = match (&args.css, &args.fastest_100y) {
        (Some(pace), _) => Some(ThresholdInput::Known(pace.clone())),
        (None, Some(pace)) => Some(ThresholdInput::Benchmark(pace.clone())),
        (None, None) => None,
    };
    request.ftp_w = match (args.ftp, args.max_20min_watts) {
        (Some(watts), _) => Some(ThresholdInput::Known(watts)),
        (None, Some(watts)) => Some(ThresholdInput::Benchmark(watts)),
        (None, None) => None,
    };
    request.run_threshold_pace = match (&args.threshold_pace, &args.fastest_5k) {
        (Some(pace), _) => Some(ThresholdInput::Known(pace.clone())),
        (None, Some(time)) => Some(ThresholdInput::Benchmark(time.clone())),
        (None, None) => None,
    };
    request.run_threshold_power_w = args.threshold_power;

    request
}

/// Prints the plan as aligned text sections.
fn print_plan(plan: &PacingPlan) {
    println!();
    println!("=== {} ({}) ===", plan.category, plan.distance_label);
    println!();
    println!("Mode:           {}", plan.mode.display_name());
    println!("Race RPE:       {}", plan.rpe);

    if let Some(profile) = &plan.profile {
        println!();
        println!("=== Athlete Profile ===");
        println!();
        println!(
            "Age:            {} ({}, {:.0} lb)",
            profile.age,
            profile.gender.display_name(),
            profile.race_weight_lb
        );
        println!(
            "Max HR:         {:.0} bpm ({})",
            profile.max_hr_bpm.value,
            profile.max_hr_bpm.provenance.display_name()
        );
        match profile.resting_hr_bpm {
            Some(bpm) => println!("Resting HR:     {bpm:.0} bpm"),
            None => println!("Resting HR:     not provided"),
        }
        println!("Threshold HR:   {:.0} bpm", profile.threshold_hr_bpm);
        if let Some(css) = &profile.css_s_per_100y {
            println!(
                "CSS:            {} /100yd ({})",
                format_pace(css.value),
                css.provenance.display_name()
            );
        }
        if let Some(ftp) = &profile.ftp_w {
            println!(
                "FTP:            {:.0} W ({})",
                ftp.value,
                ftp.provenance.display_name()
            );
        }
        let run_threshold = &profile.run_threshold_pace_s_per_mi;
        println!(
            "Run threshold:  {} /mi ({})",
            format_pace(run_threshold.value),
            run_threshold.provenance.display_name()
        );
        if let Some(watts) = profile.run_threshold_power_w {
            println!("Run power:      {watts:.0} W");
        }
    }

    if let Some(swim) = &plan.swim {
        println!();
        println!("=== Swim: {} ===", swim.distance_label);
        println!();
        println!(
            "Target pace:    {} /100yd",
            format_pace(swim.target_pace_s_per_100y)
        );
        println!("Time:           {}", format_time(swim.time_s));
        if let Some(effort) = swim.effort {
            println!("Effort:         {effort}");
        }
    }

    if let Some(bike) = &plan.bike {
        println!();
        println!("=== Bike: {} ===", bike.distance_label);
        println!();
        if let Some(power) = bike.target_power_w {
            println!("Target power:   {power:.0} W");
        }
        if let Some((low, high)) = bike.power_range_w {
            println!("Power range:    {low:.0}-{high:.0} W");
        }
        if let Some(hr) = bike.target_hr_bpm {
            println!("Target HR:      {hr:.0} bpm");
        }
        if let Some((low, high)) = bike.hr_range_bpm {
            println!("HR range:       {low:.0}-{high:.0} bpm");
        }
        println!("Speed:          {:.1} mph", bike.speed_mph);
        println!("Time:           {}", format_time(bike.time_s));
        if let Some(effort) = bike.effort {
            println!("Effort:         {effort}");
        }
    }

    println!();
    println!("=== Run: {} ===", plan.run.distance_label);
    println!();
    if let Some(hr) = plan.run.target_hr_bpm {
        println!("Target HR:      {hr:.0} bpm");
    }
    if let Some((low, high)) = plan.run.hr_range_bpm {
        println!("HR range:       {low:.0}-{high:.0} bpm");
    }
    if let Some(power) = plan.run.target_power_w {
        println!("Target power:   {power:.0} W");
    }
    println!(
        "Target pace:    {} /mi",
        format_pace(plan.run.target_pace_s_per_mi)
    );
    if let Some((low, high)) = plan.run.pace_range_s_per_mi {
        println!(
            "Pace range:     {}-{} /mi",
            format_pace(low),
            format_pace(high)
        );
    }
    println!("Time:           {}", format_time(plan.run.time_s));
    if let Some(effort) = plan.run.effort {
        println!("Effort:         {effort}");
    }

    if let Some(transitions) = plan.transitions {
        println!();
        println!("=== Transitions ===");
        println!();
        println!("T1:             {}", format_time(transitions.t1_s));
        println!("T2:             {}", format_time(transitions.t2_s));
    }

    println!();
    println!("=== Race Plan ===");
    println!();
    println!("Total time:     {}", format_time(plan.total_time_s));
    println!();
    println!("Common mistake: {}", plan.strategy.mistake);
    match &plan.strategy.notes {
        SegmentNotes::Triathlon { swim, bike, run } => {
            println!("Swim:           {swim}");
            println!("Bike:           {bike}");
            println!("Run:            {run}");
        }
        SegmentNotes::Run { strategy } => {
            println!("Strategy:       {strategy}");
        }
    }
    println!("Mindset:        {}", plan.strategy.mindset);
}
