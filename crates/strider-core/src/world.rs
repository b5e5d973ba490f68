#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coarse outcome reported by a forward model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SimStatus {
    Running,
    Win,
    Loss,
}

/// A clonable simulated world that can be advanced tick by tick.
///
/// Cloning must be deep enough that advancing the clone never affects the
/// original; the planner relies on this to expand a node without touching
/// states already held by the open set.
///
/// The core crate intentionally does not prescribe what a tick simulates;
/// any side-scrolling model that can report position, status, liveness,
/// and a collectible count can drive the planner.
pub trait ForwardModel: Clone {
    /// One logical decision, held constant across several low-level ticks.
    type Action: Clone + std::fmt::Debug;

    /// Advance the simulation by one low-level tick under `action`.
    fn advance(&mut self, action: &Self::Action);

    /// Horizontal position of the agent.
    fn agent_x(&self) -> f32;

    /// Vertical position of the agent.
    fn agent_y(&self) -> f32;

    fn status(&self) -> SimStatus;

    fn agent_alive(&self) -> bool;

    /// Secondary-objective counter: collectibles still present in the
    /// world. A decrease between two states means one was consumed.
    fn collectibles(&self) -> u32;
}
