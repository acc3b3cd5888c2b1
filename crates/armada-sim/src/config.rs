//! Run configuration.
//!
//! Every tunable of the engine lives here with the defaults from
//! `armada_core::constants`. Configs load from TOML; missing keys fall
//! back to defaults, so a file only needs the values it changes.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use armada_core::constants::*;

use crate::error::SimError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same event log.
    pub seed: u64,
    /// Number of ticks a full run lasts.
    pub steps: u64,
    /// Number of agents spawned by `SimulationEngine::populate`.
    pub population: usize,
    /// Integration time step.
    pub dt: f64,
    /// Maximum speed; velocity and displacement clamp to `max_speed * dt`.
    pub max_speed: f64,
    pub initial_energy: f64,
    /// Dead agents are compacted out every this many ticks.
    pub cleanup_interval: u64,
    pub title: String,
    pub scene: [i32; 3],
    pub spawn: SpawnConfig,
    pub targeting: TargetingConfig,
    pub combat: CombatConfig,
    pub neighbors: NeighborConfig,
    pub forces: ForceConfig,
}

/// Initial placement ranges (inclusive, integer coordinates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub red_x: [i32; 2],
    pub green_x: [i32; 2],
    pub y: [i32; 2],
    pub z: [i32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    /// A held target beyond this squared distance is released.
    pub drop_distance_sq: f64,
    /// Acquisition only considers candidates strictly inside this squared radius.
    pub search_radius_sq: f64,
    /// Per-step chance of releasing a target that is still in range.
    pub drop_probability: f64,
    /// Agents already held by this many attackers are not eligible.
    pub max_lock_holders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Compared directly against squared distance.
    pub attack_range_sq: f64,
    pub fire_probability: f64,
    /// Damage per shot before scaling by `dt`.
    pub damage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighborConfig {
    pub radius_sq: f64,
    pub refresh_interval: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    pub social_weight: f64,
    pub center_weight: f64,
    pub no_fly_weight: f64,
    pub target_weight: f64,
    pub social_saturation_distance: f64,
    pub center_scale: f64,
    pub no_fly_center: [f64; 3],
    pub no_fly_radius: f64,
    pub no_fly_falloff: f64,
    pub no_fly_cap: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            steps: DEFAULT_STEPS,
            population: DEFAULT_POPULATION,
            dt: DT,
            max_speed: MAX_SPEED,
            initial_energy: INITIAL_ENERGY,
            cleanup_interval: CLEANUP_INTERVAL,
            title: DEFAULT_TITLE.to_string(),
            scene: DEFAULT_SCENE,
            spawn: SpawnConfig::default(),
            targeting: TargetingConfig::default(),
            combat: CombatConfig::default(),
            neighbors: NeighborConfig::default(),
            forces: ForceConfig::default(),
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            red_x: SPAWN_X_FACTION_0,
            green_x: SPAWN_X_FACTION_1,
            y: SPAWN_Y,
            z: SPAWN_Z,
        }
    }
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            drop_distance_sq: TARGET_DROP_DISTANCE_SQ,
            search_radius_sq: TARGET_SEARCH_RADIUS_SQ,
            drop_probability: TARGET_DROP_PROBABILITY,
            max_lock_holders: MAX_LOCK_HOLDERS,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            attack_range_sq: ATTACK_RANGE_SQ,
            fire_probability: FIRE_PROBABILITY,
            damage: SHOT_DAMAGE,
        }
    }
}

impl Default for NeighborConfig {
    fn default() -> Self {
        Self {
            radius_sq: NEIGHBOR_RADIUS_SQ,
            refresh_interval: NEIGHBOR_REFRESH_INTERVAL,
        }
    }
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            social_weight: SOCIAL_WEIGHT,
            center_weight: CENTER_WEIGHT,
            no_fly_weight: NO_FLY_WEIGHT,
            target_weight: TARGET_WEIGHT,
            social_saturation_distance: SOCIAL_SATURATION_DISTANCE,
            center_scale: CENTER_SCALE,
            no_fly_center: NO_FLY_CENTER,
            no_fly_radius: NO_FLY_RADIUS,
            no_fly_falloff: NO_FLY_FALLOFF,
            no_fly_cap: NO_FLY_CAP,
        }
    }
}

impl ForceConfig {
    pub fn no_fly_center(&self) -> DVec3 {
        DVec3::from_array(self.no_fly_center)
    }
}

impl SimConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SimError> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Largest per-step displacement and velocity magnitude.
    pub fn speed_limit(&self) -> f64 {
        self.max_speed * self.dt
    }

    /// Reject configurations the engine cannot run meaningfully.
    pub fn validate(&self) -> Result<(), SimError> {
        fn positive(name: &str, value: f64) -> Result<(), SimError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        }
        fn probability(name: &str, value: f64) -> Result<(), SimError> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )))
            }
        }
        fn range(name: &str, r: [i32; 2]) -> Result<(), SimError> {
            if r[0] <= r[1] {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{name} range is empty: [{}, {}]",
                    r[0], r[1]
                )))
            }
        }

        if self.title.contains(|c: char| c == '\n' || c == '\r') {
            return Err(SimError::InvalidConfig(
                "title must fit on a single log line".into(),
            ));
        }
        positive("dt", self.dt)?;
        positive("max_speed", self.max_speed)?;
        if !self.initial_energy.is_finite() {
            return Err(SimError::InvalidConfig("initial_energy must be finite".into()));
        }
        if self.cleanup_interval == 0 {
            return Err(SimError::InvalidConfig("cleanup_interval must be at least 1".into()));
        }

        range("spawn.red_x", self.spawn.red_x)?;
        range("spawn.green_x", self.spawn.green_x)?;
        range("spawn.y", self.spawn.y)?;
        range("spawn.z", self.spawn.z)?;

        positive("targeting.drop_distance_sq", self.targeting.drop_distance_sq)?;
        positive("targeting.search_radius_sq", self.targeting.search_radius_sq)?;
        probability("targeting.drop_probability", self.targeting.drop_probability)?;

        positive("combat.attack_range_sq", self.combat.attack_range_sq)?;
        probability("combat.fire_probability", self.combat.fire_probability)?;
        if !(self.combat.damage.is_finite() && self.combat.damage >= 0.0) {
            return Err(SimError::InvalidConfig(
                "combat.damage must be non-negative and finite".into(),
            ));
        }

        positive("neighbors.radius_sq", self.neighbors.radius_sq)?;
        if self.neighbors.refresh_interval == 0 {
            return Err(SimError::InvalidConfig(
                "neighbors.refresh_interval must be at least 1".into(),
            ));
        }

        let f = &self.forces;
        for (name, weight) in [
            ("forces.social_weight", f.social_weight),
            ("forces.center_weight", f.center_weight),
            ("forces.no_fly_weight", f.no_fly_weight),
            ("forces.target_weight", f.target_weight),
        ] {
            if !weight.is_finite() {
                return Err(SimError::InvalidConfig(format!("{name} must be finite")));
            }
        }
        positive("forces.social_saturation_distance", f.social_saturation_distance)?;
        positive("forces.center_scale", f.center_scale)?;
        positive("forces.no_fly_falloff", f.no_fly_falloff)?;
        positive("forces.no_fly_cap", f.no_fly_cap)?;
        if !(f.no_fly_radius.is_finite() && f.no_fly_center.iter().all(|c| c.is_finite())) {
            return Err(SimError::InvalidConfig("no-fly zone must be finite".into()));
        }

        Ok(())
    }
}
