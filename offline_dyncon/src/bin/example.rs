use offline_dyncon::{bipartite_over_time, connectivity_queries, Operation};
use rand::{Rng, SeedableRng};

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

fn random_log(n: usize, steps: usize, seed: u64) -> Vec<Operation> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut present: Vec<(usize, usize)> = Vec::new();
    let mut ops = Vec::with_capacity(steps);
    for _ in 0..steps {
        let roll: f64 = rng.gen();
        if present.is_empty() || roll < 0.5 {
            let (u, v) = (rng.gen_range(1..=n), rng.gen_range(1..=n));
            present.push((u, v));
            ops.push(Operation::Add(u, v));
        } else if roll < 0.75 {
            let (u, v) = present.swap_remove(rng.gen_range(0..present.len()));
            ops.push(Operation::Remove(u, v));
        } else {
            ops.push(Operation::Query(rng.gen_range(1..=n), rng.gen_range(1..=n)));
        }
    }
    ops
}

fn main() -> offline_dyncon::Result<()> {
    use Operation::*;
    let ops = [
        Add(1, 2),
        Add(2, 3),
        Query(1, 3),
        Add(3, 1),
        Remove(1, 2),
        Query(1, 2),
        Remove(2, 3),
        Query(1, 2),
    ];
    println!("Operations: {ops:?}");
    for (i, ans) in connectivity_queries(4, &ops)?.into_iter().enumerate() {
        println!("Query #{}: {}", i + 1, yes_no(ans));
    }
    for (t, ans) in bipartite_over_time(4, &ops)?.into_iter().enumerate() {
        println!("Bipartite after step {}? {}", t + 1, yes_no(ans));
    }

    let (n, steps, seed) = (1000, 20000, 4815162342);
    let ops = random_log(n, steps, seed);
    let answers = connectivity_queries(n, &ops)?;
    let connected = answers.iter().filter(|&&b| b).count();
    println!(
        "Random log (n = {n}, {steps} steps, seed {seed}): {connected} of {} queries connected",
        answers.len()
    );
    Ok(())
}
