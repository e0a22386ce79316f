use core::fmt;

use crate::{Time, Vertex};

/// Which configured bound was exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitKind {
    Vertices,
    Horizon,
    Channels,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LimitKind::Vertices => "vertex count",
            LimitKind::Horizon => "time horizon",
            LimitKind::Channels => "channel count",
        };
        write!(f, "{label}")
    }
}

/// Everything that can go wrong before a traversal starts.
///
/// All of these are collaborator bugs or oversized inputs. They are reported
/// eagerly at build/schedule time, the traversal itself never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// `l > r`, the event would never be valid.
    EmptyInterval { l: Time, r: Time },
    /// The interval leaves `1..=horizon`.
    IntervalOutOfRange { l: Time, r: Time, horizon: Time },
    VertexOutOfRange { vertex: Vertex, vertices: usize },
    ChannelOutOfRange { channel: usize, channels: usize },
    LimitExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
    /// Zero vertices, zero time steps or zero channels.
    EmptyConfiguration(LimitKind),
    /// The policy handed to `run` cannot hold the configured instance.
    PolicyTooSmall {
        kind: LimitKind,
        needed: usize,
        available: usize,
    },
    RemovingAbsentEdge { time: Time, u: Vertex, v: Vertex },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInterval { l, r } => write!(f, "empty interval [{l}, {r}]"),
            Error::IntervalOutOfRange { l, r, horizon } => {
                write!(f, "interval [{l}, {r}] is outside [1, {horizon}]")
            }
            Error::VertexOutOfRange { vertex, vertices } => {
                write!(f, "vertex {vertex} is outside [1, {vertices}]")
            }
            Error::ChannelOutOfRange { channel, channels } => {
                write!(f, "channel {channel} is outside [0, {channels})")
            }
            Error::LimitExceeded {
                kind,
                limit,
                actual,
            } => write!(f, "{kind} {actual} exceeds the limit {limit}"),
            Error::EmptyConfiguration(kind) => write!(f, "{kind} must be positive"),
            Error::PolicyTooSmall {
                kind,
                needed,
                available,
            } => write!(f, "policy {kind} is {available}, the engine needs {needed}"),
            Error::RemovingAbsentEdge { time, u, v } => {
                write!(f, "time {time}: removing edge ({u}, {v}) which is not present")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
