use strider_core::{ActionCatalog, ForwardModel, SearchTimer, SimStatus, TickBudget};

#[derive(Debug, Clone)]
struct Still;

impl ForwardModel for Still {
    type Action = u8;

    fn advance(&mut self, _action: &u8) {}

    fn agent_x(&self) -> f32 {
        0.0
    }

    fn agent_y(&self) -> f32 {
        0.0
    }

    fn status(&self) -> SimStatus {
        SimStatus::Running
    }

    fn agent_alive(&self) -> bool {
        true
    }

    fn collectibles(&self) -> u32 {
        0
    }
}

struct Fixed(Vec<u8>);

impl ActionCatalog<Still> for Fixed {
    fn actions(&self, _model: &Still) -> Vec<u8> {
        self.0.clone()
    }
}

#[test]
fn catalogs_are_usable_by_reference() {
    let catalog = Fixed(vec![1, 2, 3]);
    let by_ref = &catalog;
    assert_eq!(by_ref.actions(&Still), vec![1, 2, 3]);
}

#[test]
fn tick_budget_is_shared_through_the_trait_object_boundary() {
    fn drain(timer: &dyn SearchTimer) -> u32 {
        let mut polls = 0;
        while !timer.expired() {
            polls += 1;
        }
        polls
    }

    assert_eq!(drain(&TickBudget::new(4)), 4);
}
