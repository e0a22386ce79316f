//! Static segment tree over the time axis `1..=T`, used as an interval
//! scheduler: every event is attached to the O(log T) canonical nodes that
//! exactly cover its validity interval.

use std::fmt::{Debug, Formatter};

use debug_tree::{add_branch_to, AsTree, TreeBuilder};

use crate::config::Limits;
use crate::error::{Error, LimitKind, Result};
use crate::{EventId, Time};

/// Index of a node in the implicit heap layout. Children of `i` are `2i` and `2i + 1`.
pub type NodeId = usize;

pub const ROOT: NodeId = 1;

/// A node together with the time range it covers. Ranges are implicit in the
/// tree position, so they travel with the node id instead of being stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub node: NodeId,
    pub l: Time,
    pub r: Time,
}

impl Span {
    pub fn is_leaf(&self) -> bool {
        self.l == self.r
    }

    /// Number of time steps covered.
    pub fn width(&self) -> usize {
        self.r - self.l + 1
    }

    pub fn contains(&self, t: Time) -> bool {
        self.l <= t && t <= self.r
    }

    /// Left and right halves. Meaningless on a leaf.
    pub fn children(&self) -> [Span; 2] {
        let mid = (self.l + self.r) / 2;
        [
            Span {
                node: 2 * self.node,
                l: self.l,
                r: mid,
            },
            Span {
                node: 2 * self.node + 1,
                l: mid + 1,
                r: self.r,
            },
        ]
    }
}

pub struct TimeTree<E> {
    horizon: Time,
    /// Every scheduled event, stored once.
    events: Vec<E>,
    /// Event ids attached to each node, in scheduling order.
    nodes: Vec<Vec<EventId>>,
}

impl<E> TimeTree<E> {
    /// Empty tree over `1..=horizon`. Midpoint splits give height
    /// `ceil(log2 horizon)`, so every node id is below `2 * horizon.next_power_of_two()`.
    pub fn build(horizon: Time, limits: &Limits) -> Result<Self> {
        limits.check(LimitKind::Horizon, horizon)?;
        Ok(Self {
            horizon,
            events: Vec::new(),
            nodes: vec![Vec::new(); 2 * horizon.next_power_of_two()],
        })
    }

    pub fn horizon(&self) -> Time {
        self.horizon
    }

    pub fn root(&self) -> Span {
        Span {
            node: ROOT,
            l: 1,
            r: self.horizon,
        }
    }

    /// Number of scheduled events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn event(&self, id: EventId) -> &E {
        &self.events[id]
    }

    /// Ids attached to `node`.
    pub fn events_at(&self, node: NodeId) -> &[EventId] {
        &self.nodes[node]
    }

    /// Makes `event` valid on `[l, r]`. Returns its id.
    pub fn schedule(&mut self, l: Time, r: Time, event: E) -> Result<EventId> {
        if l > r {
            return Err(Error::EmptyInterval { l, r });
        }
        if l < 1 || r > self.horizon {
            return Err(Error::IntervalOutOfRange {
                l,
                r,
                horizon: self.horizon,
            });
        }
        let id = self.events.len();
        self.events.push(event);
        self.attach(self.root(), l, r, id);
        Ok(id)
    }

    fn attach(&mut self, span: Span, l: Time, r: Time, id: EventId) {
        if l <= span.l && span.r <= r {
            self.nodes[span.node].push(id);
            return;
        }
        for child in span.children() {
            if child.l <= r && l <= child.r {
                self.attach(child, l, r, id);
            }
        }
    }

    /// Ids on the path from the root to the leaf of `t`, root first. These are
    /// exactly the events the traversal has applied when it evaluates `t`.
    pub fn covering(&self, t: Time) -> Vec<EventId> {
        assert!(1 <= t && t <= self.horizon, "time {t} outside the tree");
        let mut span = self.root();
        let mut ids = self.nodes[span.node].clone();
        while !span.is_leaf() {
            let [left, right] = span.children();
            span = if left.contains(t) { left } else { right };
            ids.extend_from_slice(&self.nodes[span.node]);
        }
        ids
    }

    fn span_dbg<T: AsTree>(&self, span: Span, tree: &T)
    where
        E: Debug,
    {
        let events: Vec<&E> = self.nodes[span.node]
            .iter()
            .map(|&id| &self.events[id])
            .collect();
        add_branch_to!(*tree, "[{}, {}] {:?}", span.l, span.r, events);
        if !span.is_leaf() {
            for child in span.children() {
                self.span_dbg(child, tree);
            }
        }
    }
}

impl<E: Debug> Debug for TimeTree<E> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch(&format!("TimeTree over [1, {}]", self.horizon));
        self.span_dbg(self.root(), &builder);
        writeln!(f, "{}", builder.string())
    }
}
