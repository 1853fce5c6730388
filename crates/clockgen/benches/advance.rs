use clockgen::ClockModel;
use criterion::{Criterion, criterion_group, criterion_main};

fn benchmark_advance_loop(c: &mut Criterion) {
    // Steady-state driver loop: query the edge distance, step exactly to
    // the edge, repeat.
    let mut clock = ClockModel::with_period(1000).unwrap();
    while clock.time_to_next_edge() == 0 {
        clock.advance(0).unwrap();
    }

    c.bench_function("clock_edge_service_x10000", |b| {
        b.iter(|| {
            for _ in 0..10000 {
                let step = clock.time_to_next_edge();
                clock.advance(step).unwrap();
            }
        })
    });
}

criterion_group!(benches, benchmark_advance_loop);
criterion_main!(benches);
