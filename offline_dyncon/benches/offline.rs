use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flexi_logger::Logger;
use offline_dyncon::{bipartite_over_time, connectivity_queries, Operation};
use rand::{Rng, SeedableRng};
use std::sync::{LazyLock, Mutex};

fn random_log(n: usize, steps: usize, seed: u64) -> Vec<Operation> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut present = vec![];
    let mut ops = Vec::with_capacity(steps);
    for _ in 0..steps {
        let roll: f64 = rng.gen();
        if present.is_empty() || roll < 0.45 {
            let (u, v) = (rng.gen_range(1..=n), rng.gen_range(1..=n));
            present.push((u, v));
            ops.push(Operation::Add(u, v));
        } else if roll < 0.8 {
            let (u, v) = present.swap_remove(rng.gen_range(0..present.len()));
            ops.push(Operation::Remove(u, v));
        } else {
            ops.push(Operation::Query(rng.gen_range(1..=n), rng.gen_range(1..=n)));
        }
    }
    ops
}

fn by_log_size(c: &mut Criterion) {
    let _ = &*LOGGER;
    let mut g = c.benchmark_group("Offline log");
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    for steps in [1_000usize, 10_000, 100_000] {
        g.throughput(criterion::Throughput::Elements(steps as u64));
        let seed = rng.gen();
        log::debug!("Using seed {seed}");
        let n = steps / 4;
        let ops = random_log(n, steps, seed);
        let input_str = format!("N {n} steps {steps}");
        g.bench_with_input(
            BenchmarkId::new("connectivity", &input_str),
            &ops,
            |b, ops| b.iter(|| black_box(connectivity_queries(n, ops))),
        );
        g.bench_with_input(
            BenchmarkId::new("bipartite", &input_str),
            &ops,
            |b, ops| b.iter(|| black_box(bipartite_over_time(n, ops))),
        );
    }
    g.finish();
}

criterion_group!(benches, by_log_size);
criterion_main!(benches);

pub static LOGGER: LazyLock<Mutex<flexi_logger::LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});
