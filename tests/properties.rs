//! Randomized properties of the scan, particles and overlay

use glam::Vec2;
use proptest::prelude::*;
use vision_attack::config::{AttackConfig, OverlayConfig, ParticleConfig};
use vision_attack::sim::{
    AdvanceResult, AttackSimulator, Particle, ParticleField, RngState, SuccessPresenter,
};

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,6}", 1..120)
}

proptest! {
    #[test]
    fn prop_secret_never_in_first_third(list in word_list(), seed in any::<u64>()) {
        let secret = "1231232024";
        let mut sim = AttackSimulator::new(AttackConfig::default());
        let mut rng = RngState::new(seed).to_rng();
        let run = sim.start(&list, secret, 0.0, &mut rng).unwrap();

        let others = run.len() - 1;
        let index = run.secret_index().unwrap();
        prop_assert!(index >= others / 3);
        prop_assert!(index <= others.saturating_sub(1));
        prop_assert_eq!(run.candidates().iter().filter(|c| *c == secret).count(), 1);
    }

    #[test]
    fn prop_unit_chunks_count_one_per_call(
        list in word_list(),
        seed in any::<u64>(),
        guarantee in any::<bool>(),
    ) {
        let mut sim = AttackSimulator::new(AttackConfig {
            guarantee_secret: guarantee,
            ..AttackConfig::default()
        });
        let mut rng = RngState::new(seed).to_rng();
        let len = sim.start(&list, "needle", 0.0, &mut rng).unwrap().len();

        let mut now = 0.0;
        let mut expected = 0u64;
        let terminal = loop {
            now += 1.0 / 60.0;
            let result = sim.advance(1, now).unwrap();
            expected += 1;
            prop_assert_eq!(result.attempts(), expected);
            if result.is_terminal() {
                break result;
            }
            prop_assert!(expected as usize <= len);
        };

        match &terminal {
            AdvanceResult::Found { candidate, .. } => prop_assert_eq!(candidate.as_str(), "needle"),
            AdvanceResult::Exhausted { attempts } => prop_assert_eq!(*attempts as usize, len),
            AdvanceResult::InProgress(_) => prop_assert!(false, "not terminal"),
        }
        if guarantee {
            let found = matches!(terminal, AdvanceResult::Found { .. });
            prop_assert!(found);
        }
        prop_assert_eq!(sim.advance(1, now + 1.0), Some(terminal));
    }

    #[test]
    fn prop_chunk_bounds_attempts(list in word_list(), chunk in 1usize..64, seed in any::<u64>()) {
        let mut sim = AttackSimulator::new(AttackConfig {
            guarantee_secret: false,
            ..AttackConfig::default()
        });
        let mut rng = RngState::new(seed).to_rng();
        sim.start(&list, "", 0.0, &mut rng).unwrap();

        let mut previous = 0u64;
        let mut now = 0.0;
        loop {
            now += 0.016;
            let result = sim.advance(chunk, now).unwrap();
            prop_assert!(result.attempts() - previous <= chunk as u64);
            previous = result.attempts();
            if let AdvanceResult::InProgress(p) = &result {
                prop_assert!(p.throughput.is_finite());
                prop_assert!((0.0..=1.0).contains(&p.progress));
            } else {
                break;
            }
        }
    }

    #[test]
    fn prop_particle_dies_once_at_end_of_life(
        life in 0.8f32..1.8,
        birth in 0.0f64..1000.0,
        steps in 2usize..400,
    ) {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(10.0, -60.0), birth, life, 8.0);
        let horizon = life as f64 * 1.5;
        let mut died_at = None;
        for i in 0..=steps {
            let now = birth + horizon * i as f64 / steps as f64;
            let alive = p.step(now);
            let t = p.age(now);
            prop_assert_eq!(alive, t < 1.0);
            match (died_at, alive) {
                (None, false) => died_at = Some(i),
                (Some(_), true) => prop_assert!(false, "particle revived"),
                _ => {}
            }
        }
        prop_assert!(died_at.is_some());
    }

    #[test]
    fn prop_field_never_grows_without_bursts(seed in any::<u64>(), count in 1usize..80) {
        let config = ParticleConfig::default();
        let mut rng = RngState::new(seed).to_rng();
        let mut field = ParticleField::new();
        field.spawn_burst(Vec2::new(640.0, 144.0), count, 0.0, &mut rng, &config);

        let mut previous = field.len();
        for i in 1..150 {
            field.step(i as f64 / 60.0);
            prop_assert!(field.len() <= previous);
            previous = field.len();
        }
        prop_assert!(field.is_empty());
    }

    #[test]
    fn prop_overlay_progress_monotone_then_resets(step in 0.005f32..0.3) {
        let mut presenter = SuccessPresenter::new(OverlayConfig {
            step,
            ..OverlayConfig::default()
        });
        presenter.activate();
        let mut previous = presenter.progress();
        let mut ticks = 0;
        while presenter.is_active() {
            presenter.step();
            ticks += 1;
            if presenter.is_active() {
                prop_assert!(presenter.progress() >= previous);
                prop_assert!(presenter.progress() < 1.0);
                previous = presenter.progress();
            } else {
                prop_assert_eq!(presenter.progress(), 0.0);
            }
            prop_assert!(ticks < 1000);
        }
        prop_assert!(presenter.style().settled);
    }
}
