use std::marker::PhantomData;

use derivative::Derivative;

use crate::dc::{Applied, Policy};
use crate::event::Edge;
use crate::rollback_union_find::RollbackUnionFind;
use crate::{Time, Vertex};

/// Read-only view of the components at the time step being evaluated.
/// Vertices are 1-based.
#[derive(Debug, Clone, Copy)]
pub struct Components<'a> {
    uf: &'a RollbackUnionFind,
}

impl Components<'_> {
    pub fn connected(&self, u: Vertex, v: Vertex) -> bool {
        self.uf.same(u - 1, v - 1)
    }

    /// Number of connected components.
    pub fn count(&self) -> usize {
        self.uf.components()
    }

    /// Size of the component of `v`.
    pub fn size_of(&self, v: Vertex) -> usize {
        self.uf.size_of(v - 1)
    }
}

/// Plain union of both endpoints. Never reports a violation; `query` decides
/// what is reported at each time step.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Connectivity<Q, A> {
    uf: RollbackUnionFind,
    #[derivative(Debug = "ignore")]
    query: Q,
    #[derivative(Debug = "ignore")]
    _answer: PhantomData<fn() -> A>,
}

impl<Q, A> Connectivity<Q, A>
where
    Q: FnMut(&Components<'_>, Time) -> A,
{
    /// `n` vertices, `1..=n`.
    pub fn new(n: usize, query: Q) -> Self {
        Self {
            uf: RollbackUnionFind::new(n),
            query,
            _answer: PhantomData,
        }
    }

    pub fn union_find(&self) -> &RollbackUnionFind {
        &self.uf
    }
}

impl<Q, A> Policy for Connectivity<Q, A>
where
    Q: FnMut(&Components<'_>, Time) -> A,
{
    type Event = Edge;
    type Answer = A;

    fn vertices(&self) -> usize {
        self.uf.len()
    }

    fn apply(&mut self, edge: &Edge) -> Applied {
        Applied::unions(self.uf.union(edge.u - 1, edge.v - 1).into())
    }

    fn history_len(&self) -> usize {
        self.uf.history_len()
    }

    fn rollback(&mut self, depth: usize) {
        self.uf.rollback(depth)
    }

    fn evaluate(&mut self, t: Time) -> A {
        (self.query)(&Components { uf: &self.uf }, t)
    }

    fn on_violation(&mut self, _t: Time) -> A {
        unreachable!("connectivity never reports a violation")
    }
}
