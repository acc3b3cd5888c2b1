//! Core types and definitions for the ARMADA simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector helpers, components, log events, state snapshots and constants.
//! It has no runtime of its own.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod vector;

#[cfg(test)]
mod tests;
