use criterion::{black_box, criterion_group, criterion_main, Criterion};
use led_dodge::core::{GameLoop, LatestFrame, ScrollEngine, SimpleRng, StageGenerator};
use led_dodge::types::Tilt;

fn bench_tick(c: &mut Criterion) {
    let mut game = GameLoop::new(12345);
    let mut display = LatestFrame::default();
    let mut level = || Tilt::None;

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.status().is_terminal() {
                game = GameLoop::new(12345);
            }
            black_box(game.tick(&mut level, &mut display));
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_course", |b| {
        b.iter(|| {
            black_box(StageGenerator::new(&mut rng).generate());
        })
    });
}

fn bench_obstacle_frame(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let mut stage = ScrollEngine::new::<Vec<u8>, _>(None, &mut rng);
    for _ in 0..6 {
        stage.advance();
    }

    c.bench_function("obstacle_frame", |b| {
        b.iter(|| {
            black_box(black_box(&stage).obstacle_frame());
        })
    });
}

criterion_group!(benches, bench_tick, bench_generate, bench_obstacle_frame);
criterion_main!(benches);
