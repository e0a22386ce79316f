//! Concrete [`Policy`](crate::dc::Policy) implementations.

pub mod bipartite;
pub mod connectivity;
pub mod multi_channel;

pub use bipartite::Bipartite;
pub use connectivity::{Components, Connectivity};
pub use multi_channel::MultiChannel;
