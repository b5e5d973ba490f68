//! Engine-agnostic simulation contracts consumed by the strider planner.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod timer;
pub mod world;

pub use catalog::ActionCatalog;
pub use timer::{Deadline, SearchTimer, TickBudget};
pub use world::{ForwardModel, SimStatus};
