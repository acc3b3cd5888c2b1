//! Simulation engine for ARMADA.
//!
//! Owns the hecs ECS world, runs the per-step systems in a fixed order
//! and produces replay log records.

pub mod config;
pub mod engine;
pub mod error;
pub mod event_log;
pub mod forces;
pub mod integrator;
pub mod runner;
pub mod systems;
pub mod world_setup;

pub use armada_core as core;
pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use error::SimError;
pub use event_log::EventLog;
