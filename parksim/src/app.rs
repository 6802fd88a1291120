//! # Runner Logic
//!
//! Builds the requested variant from an explicit [`EnvRegistry`], applies the
//! optional JSON overrides, and drives episodes until each one terminates.

use anyhow::{Context, Result};
use parking::{EnvRegistry, ParkingEnv, Resettable, Steppable, Viewport};

use crate::policy::Policy;
use crate::Args;

/// Outcome of one episode.
#[derive(Debug)]
struct EpisodeSummary {
    steps: u32,
    total_reward: f64,
    reason: Option<parking::TerminalReason>,
    parked: bool,
}

/// Run the episodes requested on the command line.
///
/// # Errors
///
/// Returns an error for an unknown environment id, an unreadable or invalid
/// configuration file, or a failing step.
pub fn run(args: &Args) -> Result<()> {
    let registry = EnvRegistry::with_defaults();
    if args.list {
        for id in registry.ids() {
            println!("{id}");
        }
        return Ok(());
    }

    let mut env = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let overrides: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            registry.make_with(&args.env, &overrides)?
        }
        None => registry.make(&args.env)?,
    };
    tracing::info!(
        env = %args.env,
        vehicles = env.config().controlled_vehicles,
        duration = env.config().duration,
        policy = ?args.policy,
        "environment ready"
    );

    let mut policy = Policy::new(args.policy, args.seed);
    let mut successes = 0;
    for episode in 0..args.episodes {
        let seed = (episode == 0).then_some(args.seed);
        let summary = run_episode(&mut env, &mut policy, seed)?;
        if summary.parked {
            successes += 1;
        }
        tracing::info!(
            episode,
            steps = summary.steps,
            total_reward = summary.total_reward,
            reason = ?summary.reason,
            "episode finished"
        );
    }
    tracing::info!(successes, episodes = args.episodes, "done");
    Ok(())
}

fn run_episode(
    env: &mut ParkingEnv,
    policy: &mut Policy,
    seed: Option<u64>,
) -> Result<EpisodeSummary> {
    env.reset(seed)?;
    let viewport = Viewport::from_config(env.config());
    let mut total_reward = 0.0;
    loop {
        let action = policy.act(env);
        let step = env.step(&action)?;
        total_reward += step.reward;
        if let (Some(goal), Some(car)) = (env.goal(), env.controlled_vehicles().first()) {
            let view = viewport.centered_on(car.position);
            let in_slot = env
                .network()
                .zip(env.goal_lane())
                .and_then(|(network, index)| network.lane(index))
                .is_some_and(|lane| lane.on_lane(car.position));
            tracing::trace!(
                step = step.info.steps,
                reward = step.reward,
                car_px = ?view.to_pixels(car.position),
                goal_px = ?view.to_pixels(goal.position),
                goal_visible = view.is_visible(goal.position),
                in_slot,
                "step"
            );
        }
        if step.terminal {
            tracing::debug!(info = %serde_json::to_string(&step.info)?, "final step");
            return Ok(EpisodeSummary {
                steps: step.info.steps,
                total_reward,
                reason: step.info.terminal_reason,
                parked: step.info.is_success.all(),
            });
        }
    }
}
