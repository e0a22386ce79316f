//! Disjoint sets over `0..n` whose merges can be undone in LIFO order.
//!
//! There is no path compression, a compressed path could not be restored by
//! `undo`. Union-by-size keeps every tree at logarithmic height instead.

use std::fmt::Formatter;

use derivative::Derivative;

/// One successful merge: `absorbed` was hung under `root`, which had
/// `root_size` elements before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    pub absorbed: usize,
    pub root: usize,
    pub root_size: usize,
}

fn history_fmt(history: &Vec<Merge>, f: &mut Formatter) -> std::fmt::Result {
    write!(f, "[")?;
    for (i, m) in history.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}->{}", m.absorbed, m.root)?;
    }
    write!(f, "]")
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct RollbackUnionFind {
    parent: Vec<usize>,
    /// Only meaningful for roots.
    size: Vec<usize>,
    #[derivative(Debug(format_with = "history_fmt"))]
    history: Vec<Merge>,
    components: usize,
}

impl RollbackUnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            history: Vec::new(),
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }

    pub fn find(&self, x: usize) -> usize {
        let mut x = x;
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    pub fn same(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Size of the set containing x.
    pub fn size_of(&self, x: usize) -> usize {
        self.size[self.find(x)]
    }

    /// Merges the sets of x and y. Returns false, and records nothing, if they
    /// were already together.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (mut root, mut absorbed) = (self.find(x), self.find(y));
        if root == absorbed {
            return false;
        }
        if self.size[root] < self.size[absorbed] {
            std::mem::swap(&mut root, &mut absorbed);
        }
        self.history.push(Merge {
            absorbed,
            root,
            root_size: self.size[root],
        });
        self.parent[absorbed] = root;
        self.size[root] += self.size[absorbed];
        self.components -= 1;
        true
    }

    /// Reverses the most recent successful `union`.
    ///
    /// Panics if there is nothing to undo.
    pub fn undo(&mut self) {
        let Merge {
            absorbed,
            root,
            root_size,
        } = self
            .history
            .pop()
            .expect("undo called with no merge on the history");
        self.parent[absorbed] = absorbed;
        self.size[root] = root_size;
        self.components += 1;
    }

    /// Depth of the undo stack. Pass it back to `rollback` to return to the
    /// current state.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Undoes merges until only `depth` of them remain.
    pub fn rollback(&mut self, depth: usize) {
        assert!(
            depth <= self.history.len(),
            "rollback to depth {depth} but history has only {} merges",
            self.history.len()
        );
        while self.history.len() > depth {
            self.undo();
        }
    }

    /// Most recent merge, if any.
    pub fn last_merge(&self) -> Option<&Merge> {
        self.history.last()
    }
}
