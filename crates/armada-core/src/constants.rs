//! Simulation constants and tuning defaults.
//!
//! These are the defaults behind `SimConfig`; the engine reads the
//! configured values, never these directly.

/// Integration time step (Δt). Damage and velocity accrue on the same clock.
pub const DT: f64 = 0.2;

/// Maximum agent speed. Velocity and per-step displacement are clamped
/// to `MAX_SPEED * DT`.
pub const MAX_SPEED: f64 = 15.0;

/// Energy every agent starts with.
pub const INITIAL_ENERGY: f64 = 100.0;

/// Default number of steps for a full run.
pub const DEFAULT_STEPS: u64 = 12_500;

/// Default population size.
pub const DEFAULT_POPULATION: usize = 400;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Scheduling ---

/// Dead agents are compacted out of the population every this many steps.
pub const CLEANUP_INTERVAL: u64 = 100;

/// Neighbor caches are rebuilt every this many steps.
pub const NEIGHBOR_REFRESH_INTERVAL: u64 = 10;

// --- Targeting ---

/// A held target farther than this (squared) is dropped.
pub const TARGET_DROP_DISTANCE_SQ: f64 = 100.0 * 100.0;

/// New targets are only acquired strictly inside this squared radius.
pub const TARGET_SEARCH_RADIUS_SQ: f64 = 100.0 * 100.0;

/// Per-step chance of dropping a target regardless of distance.
pub const TARGET_DROP_PROBABILITY: f64 = 0.01;

/// Maximum number of agents that may hold the same target.
pub const MAX_LOCK_HOLDERS: u32 = 8;

// --- Combat ---

/// Squared-distance threshold for firing. Compared against squared
/// distance as-is (500, not 500²).
pub const ATTACK_RANGE_SQ: f64 = 500.0;

/// Per-step chance to fire when in range.
pub const FIRE_PROBABILITY: f64 = 0.08;

/// Damage per shot, scaled by `DT` on application.
pub const SHOT_DAMAGE: f64 = 2.5;

// --- Neighbor cache ---

/// Squared radius for neighbor cache membership.
pub const NEIGHBOR_RADIUS_SQ: f64 = 10_000.0;

// --- Force model ---

pub const SOCIAL_WEIGHT: f64 = 0.2;
pub const CENTER_WEIGHT: f64 = 0.4;
pub const NO_FLY_WEIGHT: f64 = 0.1;
pub const TARGET_WEIGHT: f64 = 0.4;

/// Below this separation the social repulsion magnitude saturates.
pub const SOCIAL_SATURATION_DISTANCE: f64 = 2.0;

/// Center attraction magnitude is `distance² / CENTER_SCALE`.
pub const CENTER_SCALE: f64 = 1_000_000.0;

/// Center of the exclusion zone (the station).
pub const NO_FLY_CENTER: [f64; 3] = [0.0, 500.0, 40.0];

/// Soft radius of the exclusion zone.
pub const NO_FLY_RADIUS: f64 = 180.0;

/// e-folding length of the exclusion zone's boundary falloff.
pub const NO_FLY_FALLOFF: f64 = 12.0;

/// Upper bound on the exclusion-zone force magnitude.
pub const NO_FLY_CAP: f64 = 0.2;

// --- Spawn ---

/// Faction 0 spawns with x in this inclusive range.
pub const SPAWN_X_FACTION_0: [i32; 2] = [-1000, -500];

/// Faction 1 spawns with x in this inclusive range.
pub const SPAWN_X_FACTION_1: [i32; 2] = [500, 1000];

pub const SPAWN_Y: [i32; 2] = [-1000, 1000];
pub const SPAWN_Z: [i32; 2] = [250, 500];

// --- Log header ---

pub const DEFAULT_TITLE: &str = "Simple Spaceship Simulation";

/// Viewport hint written to the `Scene` record.
pub const DEFAULT_SCENE: [i32; 3] = [0, 0, 1280];
