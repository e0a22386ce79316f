use crate::error::{Error, LimitKind, Result};
use crate::Time;

/// Upper bounds checked before anything is allocated.
///
/// Every array of the engine is sized once from the configuration, so an
/// oversized instance is rejected up front instead of being resized later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_vertices: usize,
    pub max_horizon: Time,
    pub max_channels: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vertices: 1 << 22,
            max_horizon: 1 << 22,
            max_channels: 64,
        }
    }
}

impl Limits {
    pub(crate) fn check(&self, kind: LimitKind, actual: usize) -> Result<()> {
        let limit = match kind {
            LimitKind::Vertices => self.max_vertices,
            LimitKind::Horizon => self.max_horizon,
            LimitKind::Channels => self.max_channels,
        };
        if actual == 0 {
            return Err(Error::EmptyConfiguration(kind));
        }
        if actual > limit {
            return Err(Error::LimitExceeded {
                kind,
                limit,
                actual,
            });
        }
        Ok(())
    }
}

/// Shape of one offline run. Fixed once the engine is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Vertices are `1..=vertices`.
    pub vertices: usize,
    /// Time steps are `1..=horizon`.
    pub horizon: Time,
    /// Channels are `0..channels`.
    pub channels: usize,
    pub limits: Limits,
}

impl Config {
    pub fn new(vertices: usize, horizon: Time) -> Self {
        Self {
            vertices,
            horizon,
            channels: 1,
            limits: Limits::default(),
        }
    }

    pub fn with_channels(self, channels: usize) -> Self {
        Self { channels, ..self }
    }

    pub fn with_limits(self, limits: Limits) -> Self {
        Self { limits, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        self.limits.check(LimitKind::Vertices, self.vertices)?;
        self.limits.check(LimitKind::Horizon, self.horizon)?;
        self.limits.check(LimitKind::Channels, self.channels)
    }
}
