//! Expansion loop and anytime termination.

use strider_core::{ActionCatalog, ForwardModel, SearchTimer, SimStatus};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::PlannerConfig;
use crate::cost::step_cost;
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::plan::Plan;
use crate::visited::{spatial_key, VisitedIndex};

/// Why a planner could not be constructed.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("start state is not viable: {reason}")]
    InvalidStart { reason: &'static str },
}

/// Diagnostic counters for one search session. Never feed back into
/// search behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the open set.
    pub nodes_evaluated: u64,
    /// Largest number of pops between two successive farthest-x milestones.
    pub most_backtracked: u64,
    /// Successors dropped as dominated duplicates.
    pub duplicates_pruned: u64,
    /// High-water mark of the open set.
    pub frontier_peak: usize,
}

/// One search session: a tree of explored states rooted at the start
/// state, a cost-ordered open set, and the best-so-far fallback answer.
///
/// Single-threaded and synchronous; one [`Planner::search`] call runs to
/// its deadline on the calling thread with no suspension points.
#[derive(Debug)]
pub struct Planner<M, C>
where
    M: ForwardModel,
    C: ActionCatalog<M>,
{
    config: PlannerConfig,
    catalog: C,
    arena: NodeArena<M>,
    open: Frontier,
    visited: VisitedIndex,
    best: NodeId,
    best_x: f32,
    farthest_x: i32,
    pops_since_farthest: u64,
    won: bool,
    stats: SearchStats,
}

impl<M, C> Planner<M, C>
where
    M: ForwardModel,
    C: ActionCatalog<M>,
{
    /// Seed a session from `start`: root node costed with no prior
    /// collectible count, recorded as best-so-far, pushed into the open
    /// set and the visited index.
    pub fn new(start: M, catalog: C, config: PlannerConfig) -> Result<Self, PlanError> {
        let x = start.agent_x();
        let y = start.agent_y();
        if !x.is_finite() || !y.is_finite() {
            return Err(PlanError::InvalidStart {
                reason: "non-finite agent position",
            });
        }
        if !start.agent_alive() {
            return Err(PlanError::InvalidStart {
                reason: "agent is not alive",
            });
        }

        let root_cost = step_cost(&config, x, start.collectibles(), 0, None);

        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode {
            state: start,
            parent: None,
            action: None,
            depth: 0,
            cost: root_cost,
        });

        let mut open = Frontier::new();
        open.push(root, root_cost);

        let mut visited = VisitedIndex::new();
        visited.admit(spatial_key(x, y), root_cost);

        Ok(Self {
            config,
            catalog,
            arena,
            open,
            visited,
            best: root,
            best_x: x,
            farthest_x: x as i32,
            pops_since_farthest: 0,
            won: false,
            stats: SearchStats::default(),
        })
    }

    /// Best-first expansion until goal, open-set exhaustion, or deadline.
    ///
    /// Always returns a plan: when the goal was not reached it leads to
    /// the furthest-progressed node seen so far, which is the root (an
    /// empty plan) in the worst case of an already-expired deadline.
    /// Calling again with a fresh timer resumes the same session; once
    /// the goal has been found, further calls return the winning plan
    /// without expanding anything.
    pub fn search(&mut self, timer: &impl SearchTimer) -> Plan<M::Action> {
        while !self.won && !self.open.is_empty() && !timer.expired() {
            let Some(current) = self.open.pop() else {
                break;
            };
            self.stats.nodes_evaluated += 1;

            let current_x = self.arena.get(current).state.agent_x();

            // Backtracking diagnostic: how many pops separated the last
            // two farthest-x milestones.
            if current_x as i32 > self.farthest_x {
                self.stats.most_backtracked =
                    self.stats.most_backtracked.max(self.pops_since_farthest);
                self.farthest_x = current_x as i32;
                self.pops_since_farthest = 0;
            } else {
                self.pops_since_farthest += 1;
            }

            if current_x > self.best_x {
                self.best = current;
                self.best_x = current_x;
            }

            if self.arena.get(current).state.status() == SimStatus::Win {
                self.best = current;
                self.best_x = current_x;
                self.won = true;
                break;
            }

            // Pre-advance count; a successor below it consumed something.
            let prior_collectibles = self.arena.get(current).state.collectibles();
            let next_depth = self.arena.get(current).depth + 1;

            let actions = self.catalog.actions(&self.arena.get(current).state);
            for action in actions {
                let mut state = self.arena.get(current).state.clone();
                for _ in 0..self.config.search_steps {
                    state.advance(&action);
                }

                if !state.agent_alive() {
                    continue;
                }

                let cost = step_cost(
                    &self.config,
                    state.agent_x(),
                    state.collectibles(),
                    next_depth,
                    Some(prior_collectibles),
                );

                let key = spatial_key(state.agent_x(), state.agent_y());
                if !self.visited.admit(key, cost) {
                    self.stats.duplicates_pruned += 1;
                    continue;
                }

                let child = self.arena.insert(SearchNode {
                    state,
                    parent: Some(current),
                    action: Some(action),
                    depth: next_depth,
                    cost,
                });
                self.open.push(child, cost);
            }

            trace!(
                node = current.index(),
                x = current_x,
                open = self.open.len(),
                "expanded"
            );
        }

        self.stats.frontier_peak = self.open.peak();

        let plan = self.reconstruct();
        debug!(
            nodes = self.stats.nodes_evaluated,
            best_x = self.best_x,
            reached_goal = self.won,
            ticks = plan.len(),
            "search finished"
        );
        plan
    }

    /// Walk parent links from best-so-far to the root, emitting each
    /// node's action once per low-level tick it was held for. The root
    /// contributes nothing, so a root-only plan is empty.
    fn reconstruct(&self) -> Plan<M::Action> {
        let steps = self.config.search_steps as usize;
        let depth = self.arena.get(self.best).depth;

        let mut ticks = Vec::with_capacity(depth as usize * steps);
        for node in self.arena.ancestry(self.best) {
            if let Some(action) = &node.action {
                for _ in 0..steps {
                    ticks.push(action.clone());
                }
            }
        }

        Plan::new(ticks, self.won, self.best_x, depth)
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Diagnostic counters, with the open-set high-water mark current as
    /// of this call.
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            frontier_peak: self.open.peak(),
            ..self.stats
        }
    }

    /// Horizontal progress of the best-so-far node.
    pub fn best_x(&self) -> f32 {
        self.best_x
    }

    pub fn reached_goal(&self) -> bool {
        self.won
    }

    /// Nodes created so far, the root included.
    pub fn nodes_allocated(&self) -> usize {
        self.arena.len()
    }

    /// Open-set size; nonzero after a goal pop is normal, the remaining
    /// entries are simply never expanded.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }
}
