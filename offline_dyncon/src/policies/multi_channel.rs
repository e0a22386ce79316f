use derivative::Derivative;

use super::bipartite::constrain;
use crate::dc::{Applied, Policy};
use crate::event::ColoredEdge;
use crate::rollback_union_find::RollbackUnionFind;
use crate::Time;

/// One bipartite constraint system per channel (edge colour). Answers whether
/// every colour class is bipartite at each time step.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct MultiChannel {
    n: usize,
    #[derivative(Debug = "ignore")]
    channels: Vec<RollbackUnionFind>,
    /// Channel of every union performed, oldest first. Undone from the back,
    /// so merges are reverted in exactly the reverse order across channels.
    journal: Vec<usize>,
}

impl MultiChannel {
    /// `n` vertices and channels `0..channels`.
    pub fn new(n: usize, channels: usize) -> Self {
        Self {
            n,
            channels: (0..channels)
                .map(|_| RollbackUnionFind::new(2 * n))
                .collect(),
            journal: Vec::new(),
        }
    }
}

impl Policy for MultiChannel {
    type Event = ColoredEdge;
    type Answer = bool;

    fn vertices(&self) -> usize {
        self.n
    }

    fn channels(&self) -> usize {
        self.channels.len()
    }

    fn apply(&mut self, e: &ColoredEdge) -> Applied {
        let uf = &mut self.channels[e.channel];
        let before = uf.history_len();
        let applied = constrain(uf, self.n, e.edge.u, e.edge.v);
        let grown = uf.history_len() - before;
        self.journal.extend(std::iter::repeat(e.channel).take(grown));
        applied
    }

    fn history_len(&self) -> usize {
        self.journal.len()
    }

    fn rollback(&mut self, depth: usize) {
        assert!(depth <= self.journal.len());
        while self.journal.len() > depth {
            if let Some(channel) = self.journal.pop() {
                self.channels[channel].undo();
            }
        }
    }

    fn evaluate(&mut self, _t: Time) -> bool {
        true
    }

    fn on_violation(&mut self, _t: Time) -> bool {
        false
    }
}
