//! Error type for the simulation crate.

use thiserror::Error;

/// Errors surfaced by the engine, configuration loading and the event log.
#[derive(Debug, Error)]
pub enum SimError {
    /// A force evaluated to NaN or infinity. The trajectory is unusable
    /// from this point on, so the step is aborted.
    #[error("non-finite force on agent {agent} at tick {tick}")]
    NonFiniteForce { agent: u32, tick: u64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
