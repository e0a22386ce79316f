//! Offline dynamic graph queries by divide and conquer over time.
//!
//! Events valid on a time interval are scheduled onto a segment tree over
//! `1..=T`; a single depth-first walk applies them to a union-find that can
//! undo its merges, and a [`Policy`] decides what a merge means and what is
//! reported at each time step.
//!
//! ```
//! use offline_dyncon::{Config, Connectivity, Edge, OfflineEngine};
//!
//! let mut engine = OfflineEngine::new(Config::new(4, 3)).unwrap();
//! engine.schedule(1, 3, Edge::new(1, 2)).unwrap();
//! engine.schedule(2, 2, Edge::new(3, 4)).unwrap();
//! let mut policy = Connectivity::new(4, |c, _t| c.connected(3, 4));
//! let answers = engine.run(&mut policy).unwrap();
//! assert_eq!(answers.into_vec(), vec![false, true, false]);
//! ```

pub mod config;
pub mod dc;
pub mod engine;
pub mod error;
pub mod event;
pub mod policies;
pub mod rollback_union_find;
pub mod segment_tree;
pub mod timeline;

/// 1-based vertex id.
pub type Vertex = usize;
/// 1-based time step.
pub type Time = usize;
/// Index of a scheduled event.
pub type EventId = usize;

pub use config::{Config, Limits};
pub use dc::{traverse, Answers, Applied, Policy, TraversalStats};
pub use engine::OfflineEngine;
pub use error::{Error, Result};
pub use event::{ColoredEdge, Edge, Event};
pub use policies::{Bipartite, Components, Connectivity, MultiChannel};
pub use rollback_union_find::RollbackUnionFind;
pub use timeline::{bipartite_over_time, connectivity_queries, Operation, Timeline};
