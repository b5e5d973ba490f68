use std::cell::Cell;
use std::time::{Duration, Instant};

/// Remaining-time query polled by the search loop.
///
/// The loop polls once per iteration, so a search can overrun its
/// deadline by at most one node expansion.
pub trait SearchTimer {
    /// Milliseconds left before the deadline; zero or negative means expired.
    fn remaining_millis(&self) -> f32;

    fn expired(&self) -> bool {
        self.remaining_millis() <= 0.0
    }
}

/// Wall-clock deadline anchored at construction time.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn new(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl SearchTimer for Deadline {
    fn remaining_millis(&self) -> f32 {
        (self.budget.as_secs_f32() - self.started.elapsed().as_secs_f32()) * 1000.0
    }
}

/// Deterministic timer that spends one unit of budget per poll.
///
/// Wall-clock-free stand-in for tests and benches: a budget of `n`
/// lets a loop that polls once per iteration run exactly `n` times.
#[derive(Debug)]
pub struct TickBudget {
    remaining: Cell<i64>,
}

impl TickBudget {
    pub fn new(polls: i64) -> Self {
        Self {
            remaining: Cell::new(polls),
        }
    }
}

impl SearchTimer for TickBudget {
    fn remaining_millis(&self) -> f32 {
        let left = self.remaining.get();
        self.remaining.set(left - 1);
        left as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_budget_expires_after_exactly_n_polls() {
        let timer = TickBudget::new(3);
        assert!(!timer.expired());
        assert!(!timer.expired());
        assert!(!timer.expired());
        assert!(timer.expired());
    }

    #[test]
    fn zero_tick_budget_is_expired_immediately() {
        let timer = TickBudget::new(0);
        assert!(timer.expired());
    }

    #[test]
    fn zero_deadline_is_expired() {
        let timer = Deadline::from_millis(0);
        assert!(timer.expired());
    }

    #[test]
    fn generous_deadline_has_time_remaining() {
        let timer = Deadline::new(Duration::from_secs(3600));
        assert!(timer.remaining_millis() > 0.0);
    }
}
