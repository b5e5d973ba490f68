#![cfg(feature = "serde")]

use strider_core::ForwardModel;
use strider_sim::{RunnerAction, RunnerWorld};

#[test]
fn runner_world_roundtrips_via_serde() {
    let mut world = RunnerWorld::new(120.0);
    world.add_gap(30.0, 36.0);
    world.add_coin(15.0);
    for _ in 0..4 {
        world.advance(&RunnerAction::Run);
    }

    let json = serde_json::to_string(&world).expect("serialize world");
    let mut restored: RunnerWorld = serde_json::from_str(&json).expect("deserialize world");
    assert_eq!(world, restored);

    // Both copies must keep simulating identically.
    world.advance(&RunnerAction::RunJump);
    restored.advance(&RunnerAction::RunJump);
    assert_eq!(world, restored);
}
