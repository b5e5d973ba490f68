#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for one planner instance.
///
/// Passed by value into [`crate::Planner::new`], never read from global
/// state, so concurrent searches with different tunables are safe.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// X position that counts as reaching the goal.
    pub goal_x: f32,
    /// Top forward speed of the agent, in units per tick.
    pub max_speed_x: f32,
    /// Low-level ticks one logical action is held for.
    pub search_steps: u32,
    /// Weight on the time-to-goal term of the cost estimate.
    pub time_weight: f32,
    /// Multiplier applied to the cost of a successor that consumed a
    /// collectible. 1.0 leaves the estimate untouched; below 1.0 steers
    /// the search toward collectibles, above 1.0 away from them.
    pub collectible_weight: f32,
}

impl PlannerConfig {
    pub const DEFAULT_SEARCH_STEPS: u32 = 3;
    pub const DEFAULT_TIME_WEIGHT: f32 = 1.1;
    pub const DEFAULT_COLLECTIBLE_WEIGHT: f32 = 1.0;

    /// Config with default weights for the given environment constants.
    pub fn new(goal_x: f32, max_speed_x: f32) -> Self {
        Self {
            goal_x,
            max_speed_x,
            search_steps: Self::DEFAULT_SEARCH_STEPS,
            time_weight: Self::DEFAULT_TIME_WEIGHT,
            collectible_weight: Self::DEFAULT_COLLECTIBLE_WEIGHT,
        }
    }
}
