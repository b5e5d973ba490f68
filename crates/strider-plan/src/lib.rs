//! Anytime best-first action planner for side-scrolling agents.
//!
//! Given a clonable forward model, an action catalog, and a deadline,
//! [`Planner::search`] returns the best action sequence discovered in the
//! time available. When the goal was not reached the plan leads to the
//! furthest-progressed node seen so far, so a caller always gets a usable
//! answer, even under a zero budget.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod cost;
pub mod frontier;
pub mod node;
pub mod plan;
pub mod planner;
pub mod visited;

pub use config::PlannerConfig;
pub use node::{NodeArena, NodeId, SearchNode};
pub use plan::Plan;
pub use planner::{PlanError, Planner, SearchStats};
