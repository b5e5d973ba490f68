use crate::PlannerConfig;

/// Scalar priority for a candidate state; lower is better.
///
/// `depth` plays the role of cost so far and the weighted time-to-goal
/// term the role of the estimate, so this is a `g + h` scheme. The
/// estimate is the remaining distance divided by the agent's top speed:
/// optimistic ticks-to-finish, scaled by `time_weight`. Past the goal
/// line the term goes negative, which is correct: such states should
/// win every comparison.
///
/// `prior_collectibles` is the producing node's pre-advance count;
/// `None` for the root. A strict decrease means the candidate consumed
/// a collectible on the way, and the whole estimate is multiplied by
/// `collectible_weight`.
pub fn step_cost(
    config: &PlannerConfig,
    x: f32,
    collectibles: u32,
    depth: u32,
    prior_collectibles: Option<u32>,
) -> f32 {
    let time_to_goal = (config.goal_x - x) / config.max_speed_x * config.time_weight;
    let base = depth as f32 + time_to_goal;
    match prior_collectibles {
        Some(prior) if collectibles < prior => base * config.collectible_weight,
        _ => base,
    }
}
