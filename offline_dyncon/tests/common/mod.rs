use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use offline_dyncon::{Edge, Time};
use rand::Rng;

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
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

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Recomputes everything from scratch at every time step.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Dumb {
    pub n: usize,
    pub horizon: Time,
    pub windows: Vec<(Time, Time, Edge)>,
}

#[allow(dead_code)]
impl Dumb {
    pub fn new(n: usize, horizon: Time) -> Self {
        Self {
            n,
            horizon,
            windows: vec![],
        }
    }

    pub fn random(n: usize, horizon: Time, edges: usize, rng: &mut impl Rng) -> Self {
        let mut dumb = Self::new(n, horizon);
        for _ in 0..edges {
            let l = rng.gen_range(1..=horizon);
            let r = rng.gen_range(l..=horizon);
            let (u, v) = (rng.gen_range(1..=n), rng.gen_range(1..=n));
            dumb.windows.push((l, r, Edge::new(u, v)));
        }
        dumb
    }

    fn adj(&self, t: Time) -> Vec<Vec<usize>> {
        let mut adj = vec![vec![]; self.n + 1];
        for &(l, r, e) in &self.windows {
            if l <= t && t <= r {
                adj[e.u].push(e.v);
                adj[e.v].push(e.u);
            }
        }
        adj
    }

    /// Component id of every vertex at time t, ids start at 1. Index 0 is unused.
    pub fn groups(&self, t: Time) -> Vec<usize> {
        let adj = self.adj(t);
        let mut groups = vec![0; self.n + 1];
        let mut group_id = 0;
        for u in 1..=self.n {
            if groups[u] == 0 {
                group_id += 1;
                groups[u] = group_id;
                let mut stack = vec![u];
                while let Some(u) = stack.pop() {
                    for &v in &adj[u] {
                        if groups[v] == 0 {
                            groups[v] = group_id;
                            stack.push(v);
                        }
                    }
                }
            }
        }
        groups
    }

    pub fn is_bipartite(&self, t: Time) -> bool {
        let adj = self.adj(t);
        let mut side: Vec<Option<bool>> = vec![None; self.n + 1];
        for s in 1..=self.n {
            if side[s].is_some() {
                continue;
            }
            side[s] = Some(false);
            let mut stack = vec![s];
            while let Some(u) = stack.pop() {
                let su = side[u].unwrap();
                for &v in &adj[u] {
                    match side[v] {
                        None => {
                            side[v] = Some(!su);
                            stack.push(v);
                        }
                        Some(sv) if sv == su => return false,
                        Some(_) => {}
                    }
                }
            }
        }
        true
    }
}
