use crate::Vertex;

/// Something that can be scheduled on the time axis.
pub trait Event {
    /// Both endpoints, 1-based.
    fn endpoints(&self) -> [Vertex; 2];
    /// Which union-find instance the event belongs to.
    fn channel(&self) -> usize {
        0
    }
}

/// An undirected edge between two 1-based vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
}

impl Edge {
    pub fn new(u: Vertex, v: Vertex) -> Self {
        Self { u, v }
    }

    /// Same edge with `u <= v`.
    pub fn normalized(self) -> Self {
        Self {
            u: self.u.min(self.v),
            v: self.u.max(self.v),
        }
    }
}

impl Event for Edge {
    fn endpoints(&self) -> [Vertex; 2] {
        [self.u, self.v]
    }
}

/// An edge that only constrains the union-find of its channel (its colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColoredEdge {
    pub edge: Edge,
    pub channel: usize,
}

impl ColoredEdge {
    pub fn new(u: Vertex, v: Vertex, channel: usize) -> Self {
        Self {
            edge: Edge::new(u, v),
            channel,
        }
    }
}

impl Event for ColoredEdge {
    fn endpoints(&self) -> [Vertex; 2] {
        self.edge.endpoints()
    }
    fn channel(&self) -> usize {
        self.channel
    }
}
