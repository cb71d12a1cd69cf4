use cabinos_core::generation::random_bag;
use cabinos_core::prelude::*;
use cabinos_core::systems::{optimize_packing, ForecastEngine, LuggageManifest};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn manifest(bags: usize) -> Vec<LuggageItem> {
    let mut rng = StdRng::seed_from_u64(17);
    let mut manifest = LuggageManifest::new(BinCapacity::default(), "12A");
    for _ in 0..bags {
        let bag = random_bag(&mut rng, manifest.next_id());
        manifest.add_item(bag).unwrap();
    }
    manifest.items().to_vec()
}

fn bench_packing(c: &mut Criterion) {
    let small = manifest(6);
    let large = manifest(200);
    c.bench_function("optimize_packing_6", |b| {
        b.iter(|| optimize_packing(black_box(&small)))
    });
    c.bench_function("optimize_packing_200", |b| {
        b.iter(|| optimize_packing(black_box(&large)))
    });
}

fn bench_forecast(c: &mut Criterion) {
    let mut forecaster = ForecastEngine::default();
    for i in 0..50 {
        forecaster.add_data_point(30.0 + (i as f64 * 0.5).sin() * 15.0);
    }
    let mut rng = StdRng::seed_from_u64(3);
    c.bench_function("forecast_5", |b| {
        b.iter(|| forecaster.forecast(black_box(5), &mut rng))
    });
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("engine_snapshot", |b| {
        let mut engine = CabinEngine::with_seed(FlightConfig::default(), 1).unwrap();
        b.iter(|| black_box(engine.snapshot()))
    });
}

criterion_group!(benches, bench_packing, bench_forecast, bench_session);
criterion_main!(benches);
