//! Turns a log of graph operations into validity windows for the engine.
//!
//! Operation `i` (1-based) happens at time `i`, and the state at time `t` is
//! the graph right after operation `t`. An edge added at `a` and removed at
//! `b` is therefore valid on `[a, b - 1]`.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::engine::OfflineEngine;
use crate::error::{Error, Result};
use crate::event::Edge;
use crate::policies::{Bipartite, Connectivity};
use crate::{Time, Vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(Vertex, Vertex),
    Remove(Vertex, Vertex),
    /// Are u and v connected right now?
    Query(Vertex, Vertex),
    /// A time step that changes nothing.
    Idle,
}

/// `edge` exists on every time step of `[l, r]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub l: Time,
    pub r: Time,
    pub edge: Edge,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    horizon: Time,
    windows: Vec<Window>,
    queries: Vec<(Time, Edge)>,
}

impl Timeline {
    pub fn from_operations(ops: &[Operation]) -> Result<Self> {
        Self::with_initial(&[], ops)
    }

    /// Like `from_operations`, but `initial` edges exist from time 1.
    ///
    /// Edges are undirected and may have parallel copies; removing one closes
    /// the most recently added copy.
    pub fn with_initial(initial: &[Edge], ops: &[Operation]) -> Result<Self> {
        let horizon = ops.len();
        let mut open: BTreeMap<Edge, Vec<Time>> = BTreeMap::new();
        let mut windows = Vec::new();
        let mut queries = Vec::new();
        for edge in initial {
            open.entry(edge.normalized()).or_default().push(1);
        }
        for (i, op) in ops.iter().enumerate() {
            let t = i + 1;
            match *op {
                Operation::Add(u, v) => {
                    open.entry(Edge::new(u, v).normalized())
                        .or_default()
                        .push(t);
                }
                Operation::Remove(u, v) => {
                    let edge = Edge::new(u, v).normalized();
                    let start = open
                        .get_mut(&edge)
                        .and_then(|starts| starts.pop())
                        .ok_or(Error::RemovingAbsentEdge { time: t, u, v })?;
                    if start < t {
                        windows.push(Window {
                            l: start,
                            r: t - 1,
                            edge,
                        });
                    }
                }
                Operation::Query(u, v) => queries.push((t, Edge::new(u, v))),
                Operation::Idle => {}
            }
        }
        for (edge, starts) in open {
            for l in starts {
                if l <= horizon {
                    windows.push(Window {
                        l,
                        r: horizon,
                        edge,
                    });
                }
            }
        }
        log::debug!(
            "timeline over {horizon} steps: {} windows, {} queries",
            windows.len(),
            queries.len()
        );
        Ok(Self {
            horizon,
            windows,
            queries,
        })
    }

    pub fn horizon(&self) -> Time {
        self.horizon
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Queries with the time they were asked at, in order.
    pub fn queries(&self) -> &[(Time, Edge)] {
        &self.queries
    }

    pub fn schedule_into(&self, engine: &mut OfflineEngine<Edge>) -> Result<()> {
        for w in &self.windows {
            engine.schedule(w.l, w.r, w.edge)?;
        }
        Ok(())
    }

    fn engine(&self, n: usize) -> Result<OfflineEngine<Edge>> {
        let mut engine = OfflineEngine::new(Config::new(n, self.horizon))?;
        self.schedule_into(&mut engine)?;
        Ok(engine)
    }
}

/// Answers every `Query` of the log, in order, for a graph on `1..=n`.
pub fn connectivity_queries(n: usize, ops: &[Operation]) -> Result<Vec<bool>> {
    let timeline = Timeline::from_operations(ops)?;
    if timeline.horizon == 0 {
        return Ok(Vec::new());
    }
    let mut asked: Vec<Option<Edge>> = vec![None; timeline.horizon];
    for &(t, q) in &timeline.queries {
        for vertex in [q.u, q.v] {
            if vertex < 1 || vertex > n {
                return Err(Error::VertexOutOfRange {
                    vertex,
                    vertices: n,
                });
            }
        }
        asked[t - 1] = Some(q);
    }
    let engine = timeline.engine(n)?;
    let mut policy = Connectivity::new(n, |c, t| asked[t - 1].map(|q| c.connected(q.u, q.v)));
    let answers = engine.run(&mut policy)?;
    Ok(answers.into_vec().into_iter().flatten().collect())
}

/// Whether the graph on `1..=n` is bipartite after each operation.
pub fn bipartite_over_time(n: usize, ops: &[Operation]) -> Result<Vec<bool>> {
    let timeline = Timeline::from_operations(ops)?;
    if timeline.horizon == 0 {
        return Ok(Vec::new());
    }
    let engine = timeline.engine(n)?;
    Ok(engine.run(&mut Bipartite::new(n))?.into_vec())
}
