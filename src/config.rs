//! Configuration for floatkv
//!
//! Capacity, scale coefficient and the key/value domains are fixed at compile
//! time through the container's generic parameters. What remains here is the
//! runtime behaviour that callers may pick per instance.

/// Runtime configuration for a container instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// What `insert` does once every slot is occupied
    pub overflow_policy: OverflowPolicy,
}

/// Insert behaviour for a full container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Refuse the insert and leave the container untouched
    #[default]
    Reject,

    /// Drop the entry with the highest key to make room.
    /// A new key that would sort past every stored key is discarded instead.
    EvictHighest,

    /// Drop the entry with the lowest key to make room.
    /// A new key that would sort before every stored key is discarded instead.
    EvictLowest,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the overflow policy
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.config.overflow_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
