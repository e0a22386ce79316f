use crate::config::Config;
use crate::dc::{traverse, Answers, Policy};
use crate::error::{Error, LimitKind, Result};
use crate::event::Event;
use crate::segment_tree::TimeTree;
use crate::{EventId, Time};

/// Holds everything one offline run needs: its configuration and the time tree
/// the events are scheduled on. Nothing is global, so independent runs can
/// live side by side.
#[derive(Debug)]
pub struct OfflineEngine<E> {
    config: Config,
    tree: TimeTree<E>,
}

impl<E: Event> OfflineEngine<E> {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tree: TimeTree::build(config.horizon, &config.limits)?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tree(&self) -> &TimeTree<E> {
        &self.tree
    }

    /// Makes `event` valid on every time step of `[l, r]`.
    pub fn schedule(&mut self, l: Time, r: Time, event: E) -> Result<EventId> {
        for vertex in event.endpoints() {
            if vertex < 1 || vertex > self.config.vertices {
                return Err(Error::VertexOutOfRange {
                    vertex,
                    vertices: self.config.vertices,
                });
            }
        }
        let channel = event.channel();
        if channel >= self.config.channels {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: self.config.channels,
            });
        }
        self.tree.schedule(l, r, event)
    }

    /// Runs the traversal with `policy`. The schedule is left untouched, so
    /// the same engine can be run again.
    pub fn run<P>(&self, policy: &mut P) -> Result<Answers<P::Answer>>
    where
        P: Policy<Event = E>,
    {
        if policy.vertices() < self.config.vertices {
            return Err(Error::PolicyTooSmall {
                kind: LimitKind::Vertices,
                needed: self.config.vertices,
                available: policy.vertices(),
            });
        }
        if policy.channels() < self.config.channels {
            return Err(Error::PolicyTooSmall {
                kind: LimitKind::Channels,
                needed: self.config.channels,
                available: policy.channels(),
            });
        }
        log::debug!(
            "running over {} events, {} vertices, horizon {}",
            self.tree.len(),
            self.config.vertices,
            self.config.horizon
        );
        Ok(traverse(&self.tree, policy))
    }
}
