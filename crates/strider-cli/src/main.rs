//! strider demo - replans every frame over the reference runner world.
//!
//! Mirrors how a game agent consumes the planner: each frame gets a fresh
//! search under a wall-clock budget, the first logical action of the plan
//! is played, and the next frame replans from the advanced world.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use strider_core::{Deadline, ForwardModel, SimStatus};
use strider_plan::{Planner, PlannerConfig};
use strider_sim::{RunnerCatalog, RunnerWorld, MAX_SPEED_X};

#[derive(Parser)]
#[command(name = "strider")]
#[command(about = "Anytime planner demo on the reference runner world", version)]
struct Cli {
    /// Goal x position
    #[arg(long, default_value_t = 300.0)]
    goal: f32,

    /// Planning budget per frame, in milliseconds
    #[arg(long, default_value_t = 20)]
    budget_ms: u64,

    /// Low-level ticks one logical action is held for
    #[arg(long, default_value_t = PlannerConfig::DEFAULT_SEARCH_STEPS)]
    steps: u32,

    /// Weight on the time-to-goal cost term
    #[arg(long, default_value_t = PlannerConfig::DEFAULT_TIME_WEIGHT)]
    time_weight: f32,

    /// Collectible weight: below 1.0 seeks coins, above 1.0 avoids them
    #[arg(long, default_value_t = PlannerConfig::DEFAULT_COLLECTIBLE_WEIGHT)]
    collectible_weight: f32,

    /// Give up after this many frames
    #[arg(long, default_value_t = 1000)]
    max_frames: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// A course with two gaps and a few coins in front of the second one.
fn demo_world(goal: f32) -> RunnerWorld {
    let mut world = RunnerWorld::new(goal);
    world.add_gap(60.0, 72.0);
    world.add_gap(170.0, 185.0);
    world.add_coin(40.0);
    world.add_coin(150.0);
    world.add_coin(160.0);
    world
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let mut config = PlannerConfig::new(cli.goal, MAX_SPEED_X);
    config.search_steps = cli.steps;
    config.time_weight = cli.time_weight;
    config.collectible_weight = cli.collectible_weight;

    let catalog = RunnerCatalog;
    let mut world = demo_world(cli.goal);

    let mut frames = 0u32;
    let mut total_nodes = 0u64;

    while world.status() == SimStatus::Running && frames < cli.max_frames {
        let mut planner = Planner::new(world.clone(), &catalog, config)?;
        let plan = planner.search(&Deadline::from_millis(cli.budget_ms));
        let stats = planner.stats();
        total_nodes += stats.nodes_evaluated;

        let ticks = plan.into_chronological();
        if ticks.is_empty() {
            info!(x = world.agent_x(), "no progress found this frame, stopping");
            break;
        }

        // Play the first logical action, then replan from the new state.
        for action in ticks.iter().take(config.search_steps as usize) {
            world.advance(action);
        }
        frames += 1;

        info!(
            frame = frames,
            x = world.agent_x(),
            nodes = stats.nodes_evaluated,
            backtracked = stats.most_backtracked,
            "frame planned"
        );
    }

    let outcome = match world.status() {
        SimStatus::Win => "reached the goal",
        SimStatus::Loss => "died",
        SimStatus::Running => "ran out of frames",
    };
    println!(
        "{outcome}: x = {:.1} after {frames} frames, {total_nodes} nodes evaluated, {} coins left",
        world.agent_x(),
        world.collectibles()
    );

    Ok(())
}
