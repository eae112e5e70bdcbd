//! Throughput of the transition function: one apply call per duel action.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use duel_core::{Action, DuelConfig, DuelEngine, DuelRng, DuelSession, Phase, SequenceRng};

fn bench_apply(c: &mut Criterion) {
    let engine = DuelEngine::new(DuelConfig::default());
    let active = engine.apply(
        &engine.initial_state(),
        Action::Start,
        &mut SequenceRng::new(vec![]),
    );

    c.bench_function("apply_fire", |b| {
        let mut rng = DuelRng::new(42);
        b.iter(|| black_box(engine.apply(black_box(&active), Action::Fire, &mut rng)));
    });

    c.bench_function("apply_reload", |b| {
        let mut rng = DuelRng::new(42);
        b.iter(|| black_box(engine.apply(black_box(&active), Action::Reload, &mut rng)));
    });
}

fn bench_full_duel(c: &mut Criterion) {
    c.bench_function("duel_to_completion", |b| {
        b.iter(|| {
            let mut session = DuelSession::new(black_box(42));
            session.dispatch(Action::Start);

            while session.state().phase == Phase::Active {
                let action = if session.state().turn_combatant().has_ammo() {
                    Action::Fire
                } else {
                    Action::Reload
                };
                session.dispatch(action);
            }

            black_box(session.state().clone())
        });
    });
}

criterion_group!(benches, bench_apply, bench_full_duel);
criterion_main!(benches);
