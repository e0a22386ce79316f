use crate::dc::{Applied, Policy};
use crate::event::Edge;
use crate::rollback_union_find::RollbackUnionFind;
use crate::{Time, Vertex};

/// Forces `u` and `v` to opposite sides in a doubled domain where `x` is
/// "x on the left" and `x + n` is "x on the right".
///
/// If they are already on the same side nothing is merged and a violation is
/// reported. Otherwise both cross pairs are merged, which may be 0 or 2
/// unions depending on whether the constraint was already implied.
pub(crate) fn constrain(uf: &mut RollbackUnionFind, n: usize, u: Vertex, v: Vertex) -> Applied {
    let (x, y) = (u - 1, v - 1);
    if uf.same(x, y) {
        return Applied::violation();
    }
    let unions = usize::from(uf.union(x, y + n)) + usize::from(uf.union(y, x + n));
    Applied::unions(unions)
}

/// Is the graph bipartite at each time step?
#[derive(Debug, Clone)]
pub struct Bipartite {
    n: usize,
    uf: RollbackUnionFind,
}

impl Bipartite {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            uf: RollbackUnionFind::new(2 * n),
        }
    }
}

impl Policy for Bipartite {
    type Event = Edge;
    type Answer = bool;

    fn vertices(&self) -> usize {
        self.n
    }

    fn apply(&mut self, edge: &Edge) -> Applied {
        constrain(&mut self.uf, self.n, edge.u, edge.v)
    }

    fn history_len(&self) -> usize {
        self.uf.history_len()
    }

    fn rollback(&mut self, depth: usize) {
        self.uf.rollback(depth)
    }

    fn evaluate(&mut self, _t: Time) -> bool {
        true
    }

    fn on_violation(&mut self, _t: Time) -> bool {
        false
    }
}
