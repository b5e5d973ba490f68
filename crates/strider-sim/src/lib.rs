//! Minimal deterministic side-scroller for exercising the planner.
//!
//! A kinematic runner on flat ground with lethal gaps, collectible coins,
//! and a win line. This is a reference collaborator for tests, benches,
//! and the demo binary, not a physics engine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod runner;

pub use runner::{RunnerAction, RunnerCatalog, RunnerWorld, MAX_SPEED_X};
