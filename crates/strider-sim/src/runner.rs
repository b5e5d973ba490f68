use strider_core::{ActionCatalog, ForwardModel, SimStatus};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Top forward speed in units per tick.
pub const MAX_SPEED_X: f32 = 10.91;

const ACCEL: f32 = 1.0;
const BRAKE: f32 = 2.0;
const GRAVITY: f32 = 1.0;
const JUMP_VY: f32 = 3.0;

/// Height below which a passing runner still picks up a coin.
const COIN_REACH_Y: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunnerAction {
    /// Accelerate toward top speed.
    Run,
    /// Accelerate, and start a jump when grounded.
    RunJump,
    /// Decelerate toward a stop.
    Brake,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Coin {
    x: f32,
    taken: bool,
}

/// A runner on flat ground at `y = 0`. Gaps in the ground are lethal
/// when entered grounded; coins are collected by passing over them low
/// enough. Reaching `goal_x` wins, after which the world is inert.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunnerWorld {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    alive: bool,
    goal_x: f32,
    gaps: Vec<(f32, f32)>,
    coins: Vec<Coin>,
}

impl RunnerWorld {
    pub fn new(goal_x: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            alive: true,
            goal_x,
            gaps: Vec::new(),
            coins: Vec::new(),
        }
    }

    /// Mark `[from, to]` as a hole in the ground.
    pub fn add_gap(&mut self, from: f32, to: f32) {
        self.gaps.push((from, to));
    }

    pub fn add_coin(&mut self, x: f32) {
        self.coins.push(Coin { x, taken: false });
    }

    pub fn goal_x(&self) -> f32 {
        self.goal_x
    }

    fn over_gap(&self, x: f32) -> bool {
        self.gaps.iter().any(|&(from, to)| x >= from && x <= to)
    }
}

impl ForwardModel for RunnerWorld {
    type Action = RunnerAction;

    fn advance(&mut self, action: &RunnerAction) {
        // Terminal states are inert; extra ticks after a win or death
        // change nothing, so holding an action past the end is harmless.
        if !self.alive || self.x >= self.goal_x {
            return;
        }

        let grounded = self.y <= 0.0;
        match action {
            RunnerAction::Run => self.vx = (self.vx + ACCEL).min(MAX_SPEED_X),
            RunnerAction::RunJump => {
                self.vx = (self.vx + ACCEL).min(MAX_SPEED_X);
                if grounded {
                    self.vy = JUMP_VY;
                }
            }
            RunnerAction::Brake => self.vx = (self.vx - BRAKE).max(0.0),
        }

        let prev_x = self.x;
        self.x += self.vx;

        if self.y > 0.0 || self.vy > 0.0 {
            self.y += self.vy;
            self.vy -= GRAVITY;
            if self.y <= 0.0 {
                self.y = 0.0;
                self.vy = 0.0;
            }
        }

        if self.y <= 0.0 && self.over_gap(self.x) {
            self.alive = false;
            return;
        }

        if self.y <= COIN_REACH_Y {
            for coin in &mut self.coins {
                if !coin.taken && coin.x >= prev_x && coin.x <= self.x {
                    coin.taken = true;
                }
            }
        }
    }

    fn agent_x(&self) -> f32 {
        self.x
    }

    fn agent_y(&self) -> f32 {
        self.y
    }

    fn status(&self) -> SimStatus {
        if !self.alive {
            SimStatus::Loss
        } else if self.x >= self.goal_x {
            SimStatus::Win
        } else {
            SimStatus::Running
        }
    }

    fn agent_alive(&self) -> bool {
        self.alive
    }

    fn collectibles(&self) -> u32 {
        self.coins.iter().filter(|coin| !coin.taken).count() as u32
    }
}

/// Catalog over the full action set.
///
/// Fixed order for determinism: Run, RunJump, Brake.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerCatalog;

impl ActionCatalog<RunnerWorld> for RunnerCatalog {
    fn actions(&self, _model: &RunnerWorld) -> Vec<RunnerAction> {
        vec![
            RunnerAction::Run,
            RunnerAction::RunJump,
            RunnerAction::Brake,
        ]
    }
}
