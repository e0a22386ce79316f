//! Divide and conquer over the time tree.
//!
//! One depth-first walk: apply the node's events, evaluate leaves or recurse
//! left then right, and roll the policy back to where it was on entry. While a
//! node is being visited the policy state reflects exactly the events on the
//! path from the root to that node.

use crate::segment_tree::{Span, TimeTree};
use crate::Time;

/// Result of applying a single event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    /// Successful unions, each of which added one entry to the history.
    pub unions: usize,
    /// The event breaks the property being tracked for every time step below
    /// this node.
    pub violated: bool,
}

impl Applied {
    pub fn unions(unions: usize) -> Self {
        Self {
            unions,
            violated: false,
        }
    }

    pub fn violation() -> Self {
        Self {
            unions: 0,
            violated: true,
        }
    }
}

/// What a merge means and what gets reported at each time step.
///
/// The driver only relies on the history depth: whatever `apply` adds must be
/// reported in `Applied::unions` and must be undone by `rollback`.
pub trait Policy {
    type Event;
    type Answer;
    /// Vertices this policy can hold.
    fn vertices(&self) -> usize;
    /// Channels this policy can hold.
    fn channels(&self) -> usize {
        1
    }
    fn apply(&mut self, event: &Self::Event) -> Applied;
    /// Current depth of the undo history.
    fn history_len(&self) -> usize;
    /// Undo back to a depth previously returned by `history_len`.
    fn rollback(&mut self, depth: usize);
    /// Answer for `t`, with every event valid at `t` applied.
    fn evaluate(&mut self, t: Time) -> Self::Answer;
    /// Answer for `t` when an event valid at `t` reported a violation.
    fn on_violation(&mut self, t: Time) -> Self::Answer;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub events_applied: usize,
    pub unions: usize,
    /// Nodes whose subtree was skipped because of a violation.
    pub short_circuits: usize,
    /// Deepest the history got.
    pub max_depth: usize,
}

/// One answer per time step, `1..=T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers<A> {
    slots: Vec<A>,
    stats: TraversalStats,
}

impl<A> Answers<A> {
    /// Answer at time `t`, 1-based.
    pub fn get(&self, t: Time) -> Option<&A> {
        t.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Answers in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[A] {
        &self.slots
    }

    pub fn into_vec(self) -> Vec<A> {
        self.slots
    }

    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }
}

impl<'a, A> IntoIterator for &'a Answers<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct Walk<'a, P: Policy> {
    tree: &'a TimeTree<P::Event>,
    policy: &'a mut P,
    slots: Vec<P::Answer>,
    stats: TraversalStats,
}

impl<P: Policy> Walk<'_, P> {
    fn visit(&mut self, span: Span) {
        log::trace!("enter [{}, {}]", span.l, span.r);
        self.stats.nodes_visited += 1;
        let depth = self.policy.history_len();
        let mut unions = 0;
        let mut violated = false;
        let tree = self.tree;
        for &id in tree.events_at(span.node) {
            let applied = self.policy.apply(tree.event(id));
            self.stats.events_applied += 1;
            unions += applied.unions;
            if applied.violated {
                violated = true;
                break;
            }
        }
        self.stats.unions += unions;
        self.stats.max_depth = self.stats.max_depth.max(self.policy.history_len());

        if violated {
            log::trace!("violation at [{}, {}]", span.l, span.r);
            self.stats.short_circuits += 1;
            self.slots.reserve(span.width());
            for t in span.l..=span.r {
                let answer = self.policy.on_violation(t);
                self.slots.push(answer);
            }
        } else if span.is_leaf() {
            let answer = self.policy.evaluate(span.l);
            self.slots.push(answer);
        } else {
            let [left, right] = span.children();
            self.visit(left);
            self.visit(right);
        }

        let grown = self.policy.history_len().checked_sub(depth);
        assert_eq!(
            grown,
            Some(unions),
            "node [{}, {}] reported {unions} unions but the history moved from {depth} to {}",
            span.l,
            span.r,
            self.policy.history_len()
        );
        self.policy.rollback(depth);
    }
}

/// Walks the whole tree once and returns the answer of every time step.
///
/// Panics if the policy's history does not move exactly as its `apply` calls
/// reported, which would leave the state of every later time step corrupt.
pub fn traverse<P: Policy>(tree: &TimeTree<P::Event>, policy: &mut P) -> Answers<P::Answer> {
    let mut walk = Walk {
        tree,
        policy,
        slots: Vec::with_capacity(tree.horizon()),
        stats: TraversalStats::default(),
    };
    walk.visit(tree.root());
    assert_eq!(walk.slots.len(), tree.horizon());
    log::debug!("traversal done: {:?}", walk.stats);
    Answers {
        slots: walk.slots,
        stats: walk.stats,
    }
}
