//! Property tests for simulation invariants

use proptest::prelude::*;

use side_scroller::consts::SIM_DT;
use side_scroller::sim::{Rect, aabb_overlap};
use side_scroller::{Command, Engine, SimConfig};

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::JumpPressed),
        Just(Command::JumpReleased),
    ]
}

fn rect() -> impl Strategy<Value = Rect> {
    (-500.0f32..500.0, -500.0f32..500.0, 1.0f32..200.0, 1.0f32..200.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(aabb_overlap(&a, &b), aabb_overlap(&b, &a));
    }

    #[test]
    fn identical_rects_overlap(a in rect()) {
        prop_assert!(aabb_overlap(&a, &a));
    }

    #[test]
    fn separated_rects_never_overlap(a in rect(), gap in 1.0f32..100.0, w in 1.0f32..100.0, h in 1.0f32..100.0) {
        let right_of = Rect::new(a.right() + gap, a.top(), w, h);
        let below = Rect::new(a.left(), a.bottom() + gap, w, h);
        prop_assert!(!aabb_overlap(&a, &right_of));
        prop_assert!(!aabb_overlap(&a, &below));
    }

    #[test]
    fn player_stays_inside_world(
        seed in any::<u64>(),
        god in any::<bool>(),
        script in prop::collection::vec(prop::option::of(command()), 1..600),
    ) {
        let config = SimConfig { invulnerable: god, ..Default::default() };
        let mut engine = Engine::new(config, seed).expect("valid config");
        let max_y = engine.state().config.ground_y();
        let max_x = engine.state().config.world_width - engine.state().config.player_width;

        for step in script {
            if let Some(cmd) = step {
                engine.submit_command(cmd);
            }
            engine.tick(SIM_DT);
            let player = engine.render_state().player;
            prop_assert!(player.y >= 0.0 && player.y <= max_y, "y out of range: {}", player.y);
            prop_assert!(player.x >= 0.0 && player.x <= max_x, "x out of range: {}", player.x);
        }
    }

    #[test]
    fn halted_session_is_frozen(
        seed in any::<u64>(),
        script in prop::collection::vec(command(), 0..50),
    ) {
        let mut engine = Engine::new(SimConfig::default(), seed).expect("valid config");
        engine.state_mut().session.is_game_over = true;
        let before = serde_json::to_string(engine.state()).expect("serialize");

        for cmd in script {
            engine.submit_command(cmd);
            engine.tick(SIM_DT);
            engine.advance(SIM_DT * 3.0);
        }
        prop_assert_eq!(serde_json::to_string(engine.state()).expect("serialize"), before);
    }

    #[test]
    fn hazard_stays_in_play(seed in any::<u64>(), ticks in 1usize..1500) {
        let config = SimConfig { invulnerable: true, ..Default::default() };
        let mut engine = Engine::new(config, seed).expect("valid config");
        let world_width = engine.state().config.world_width;

        for _ in 0..ticks {
            engine.tick(SIM_DT);
            let hazard = &engine.state().hazard.body;
            prop_assert!(hazard.right() >= 0.0);
            prop_assert!(hazard.left() <= world_width);
        }
    }
}
