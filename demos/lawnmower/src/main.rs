//! lawnmower — smallest end-to-end coverage mission.
//!
//! Two vehicles sweep a 200 × 400 m rectangle in adjacent bands while a
//! stationary landmark platform sits on the shared band boundary.  Drift
//! accumulates during solo coverage legs and is corrected opportunistically
//! at rendezvous and landmark passes; the run ends with a coverage/error
//! report on stdout and a CSV report directory.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use auv_core::Pose;
use auv_drift::DriftSpec;
use auv_output::write_mission_report;
use auv_plan::{LawnmowerSpec, MissionConfig, MissionPlan, plan_lawnmower};
use auv_sim::{MissionBuilder, NoopObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const DT_SECS: f64 = 0.05;
const NUM_AGENTS: usize = 2;
const SWATH: f64 = 50.0;
const RECT_WIDTH: f64 = 200.0;
const RECT_HEIGHT: f64 = 400.0;
const SPEED: f64 = 1.5;
const COMM_RANGE: f64 = 50.0;
const LANDMARK_RANGE: f64 = 30.0;
const DRIFT_RATE_K: f64 = 0.05;
const UNCERTAINTY_RADIUS: f64 = 10.0;
const OUTPUT_DIR: &str = "output/lawnmower";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== lawnmower — cooperative AUV coverage ===");
    println!("Agents: {NUM_AGENTS}  |  Area: {RECT_WIDTH}x{RECT_HEIGHT} m  |  Seed: {SEED}");
    println!();

    // 1. Generate the mission plan.
    let spec = LawnmowerSpec {
        num_agents: NUM_AGENTS,
        swath: SWATH,
        rect_width: RECT_WIDTH,
        rect_height: RECT_HEIGHT,
        speed: SPEED,
        uncertainty_radius: UNCERTAINTY_RADIUS,
        ..LawnmowerSpec::default()
    };
    let paths = plan_lawnmower(&spec).context("planning lawnmower pattern")?;
    let config = MissionConfig {
        comm_range: COMM_RANGE,
        landmark_range: LANDMARK_RANGE,
        swath: SWATH,
        accumulation_rate_k: DRIFT_RATE_K,
        speed: SPEED,
        rect_width: RECT_WIDTH,
        rect_height: RECT_HEIGHT,
        uncertainty_radius: UNCERTAINTY_RADIUS,
        ..MissionConfig::default()
    };
    let plan = MissionPlan::new(config, paths);
    info!(
        last_planned_secs = plan.last_planned_time() as u64,
        "mission plan generated"
    );

    // 2. Build the runner: drift field + one landmark on the band boundary.
    let mut runner = MissionBuilder::new(SEED, DT_SECS, plan)
        .drift(DriftSpec {
            num_spirals: 10,
            area_width: RECT_WIDTH,
            area_height: RECT_HEIGHT,
            ..DriftSpec::default()
        })
        .landmarks(vec![Pose::new(RECT_WIDTH / 2.0, RECT_HEIGHT / 2.0, 0.0)])
        .build()
        .context("assembling mission")?;

    // 3. Run to completion.
    let t0 = Instant::now();
    let outcome = runner.run(&mut NoopObserver);
    let elapsed = t0.elapsed();
    println!(
        "Run finished: {outcome:?} after {} ticks ({:.1} simulated s) in {:.2} s",
        runner.current_tick().0,
        runner.clock.elapsed_secs(),
        elapsed.as_secs_f64()
    );

    // 4. Aggregate statistics.
    let stats = runner.stats();
    println!();
    println!("Missed area : {:>10.1} m2 ({} holes)", stats.missed_area, stats.missed.0.len());
    println!("Total travel: {:>10.1} m", stats.total_travel);
    println!("Agent time  : {:>10.1} s", stats.total_agent_time);
    println!();

    // 5. Per-agent summary table.
    println!("{:<8} {:<10} {:<14} {:<14} {:<12}", "Agent", "Role", "Travel [m]", "FinalErr [m]", "Corrections");
    println!("{}", "-".repeat(60));
    for agent in runner.agents() {
        let role = if agent.role().is_landmark() { "landmark" } else { "mobile" };
        let final_err = stats
            .final_errors
            .iter()
            .find(|(id, _)| *id == agent.id())
            .map_or(0.0, |(_, e)| *e);
        println!(
            "{:<8} {:<10} {:<14.1} {:<14.3} {:<12}",
            agent.id().0,
            role,
            agent.truth().total_distance_traveled(),
            final_err,
            agent.viz().corrected.len(),
        );
    }

    // 6. Write the CSV report.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    write_mission_report(Path::new(OUTPUT_DIR), runner.agents(), &stats)
        .context("writing report")?;
    println!();
    println!("Report written to {OUTPUT_DIR}/");

    Ok(())
}
