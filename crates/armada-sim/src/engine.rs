//! Simulation engine: the core of the crate.
//!
//! `SimulationEngine` owns the hecs world, the population roster and the
//! single seeded RNG. Each tick runs the move phase for every agent, then
//! the update phase agent by agent, then the periodic cleanup. Completely
//! headless, enabling deterministic testing.

use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use armada_core::components::{AgentId, Vitality};
use armada_core::enums::{AgentState, Faction};
use armada_core::events::{LogRecord, SimEvent};
use armada_core::state::{AgentView, CombatTally, FactionCounts, PopulationSnapshot, RunSummary};
use armada_core::types::SimTime;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    /// Population in spawn order. Iteration order for both phases.
    roster: Vec<Entity>,
    time: SimTime,
    rng: ChaCha8Rng,
    config: SimConfig,
    next_agent_id: u32,
    despawn_buffer: Vec<Entity>,
    events: Vec<LogRecord>,
    tally: CombatTally,
}

impl SimulationEngine {
    /// Create an engine with an empty population. The log header
    /// (`Title`, `Scene`) is queued immediately.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let [x, y, z] = config.scene;
        let events = vec![
            LogRecord::new(
                0,
                SimEvent::Title {
                    title: config.title.clone(),
                },
            ),
            LogRecord::new(0, SimEvent::Scene { x, y, z }),
        ];

        Ok(Self {
            world: World::new(),
            roster: Vec::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_agent_id: 0,
            despawn_buffer: Vec::new(),
            events,
            tally: CombatTally::default(),
        })
    }

    /// Create an engine and spawn the configured random population.
    pub fn with_population(config: SimConfig) -> Result<Self, SimError> {
        let mut engine = Self::new(config)?;
        engine.populate();
        Ok(engine)
    }

    /// Spawn `config.population` agents with alternating factions on
    /// opposite sides of the origin.
    pub fn populate(&mut self) {
        for i in 0..self.config.population {
            let faction = Faction::alternating(i);
            let position = world_setup::spawn_position(&mut self.rng, faction, &self.config.spawn);
            self.spawn_agent(faction, position);
        }
        info!(population = self.roster.len(), "population spawned");
    }

    /// Spawn one agent at rest and log its creation.
    pub fn spawn_agent(&mut self, faction: Faction, position: DVec3) -> Entity {
        let id = self.next_agent_id;
        self.next_agent_id += 1;

        let entity = world_setup::spawn_agent(
            &mut self.world,
            id,
            faction,
            position,
            self.config.initial_energy,
        );
        self.roster.push(entity);
        self.events.push(LogRecord::new(
            self.time.tick,
            SimEvent::Agent { id, faction },
        ));
        entity
    }

    /// Advance the simulation by one tick and return every record logged
    /// since the previous call.
    pub fn tick(&mut self) -> Result<Vec<LogRecord>, SimError> {
        self.run_systems()?;
        self.time.advance(self.config.dt);
        Ok(self.drain_events())
    }

    /// Take all queued log records.
    pub fn drain_events(&mut self) -> Vec<LogRecord> {
        std::mem::take(&mut self.events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Population in spawn order, including dead agents not yet compacted.
    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    /// Mutable world access for tests that stage specific situations.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn tally(&self) -> CombatTally {
        self.tally
    }

    pub fn alive_count(&self) -> usize {
        self.roster
            .iter()
            .filter(|&&e| {
                self.world
                    .get::<&Vitality>(e)
                    .map(|v| v.alive)
                    .unwrap_or(false)
            })
            .count()
    }

    /// Look up an agent's entity by id. `None` once it has been compacted away.
    pub fn entity_of(&self, id: u32) -> Option<Entity> {
        self.roster.iter().copied().find(|&e| {
            self.world
                .get::<&AgentId>(e)
                .map(|a| a.0 == id)
                .unwrap_or(false)
        })
    }

    pub fn agent(&self, id: u32) -> Option<AgentView> {
        let entity = self.entity_of(id)?;
        systems::snapshot::agent_view(&self.world, entity, self.config.combat.attack_range_sq)
    }

    /// Combat state of an agent; compacted agents report `Dead`.
    pub fn agent_state(&self, id: u32) -> AgentState {
        match self.entity_of(id) {
            Some(entity) => systems::snapshot::agent_state(
                &self.world,
                entity,
                self.config.combat.attack_range_sq,
            ),
            None => AgentState::Dead,
        }
    }

    pub fn snapshot(&self) -> PopulationSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.roster,
            &self.time,
            self.config.combat.attack_range_sq,
        )
    }

    /// End-of-run report over the current population.
    pub fn summary(&self, initial_population: usize) -> RunSummary {
        let mut survivors = Vec::new();
        let mut by_faction = FactionCounts::default();
        for view in self.snapshot().agents.into_iter().filter(|a| a.alive) {
            survivors.push(view.id);
            by_faction.add(view.faction);
        }
        RunSummary {
            seed: self.config.seed,
            steps: self.time.tick,
            initial_population,
            survivors,
            by_faction,
            tally: self.tally,
        }
    }

    /// Run one full step: move, update, periodic cleanup.
    fn run_systems(&mut self) -> Result<(), SimError> {
        let tick = self.time.tick;
        let dt = self.config.dt;

        // 1. Move phase, using the previous step's velocity and force.
        systems::movement::run(
            &mut self.world,
            &self.roster,
            dt,
            self.config.speed_limit(),
            tick,
            &mut self.events,
        );

        // 2. Update phase, agent by agent in population order.
        let refresh_neighbors = self.time.is_every(self.config.neighbors.refresh_interval);
        for &entity in &self.roster {
            let alive = self
                .world
                .get::<&Vitality>(entity)
                .map(|v| v.alive)
                .unwrap_or(false);
            if !alive {
                continue;
            }

            systems::targeting::clear_stale(&mut self.world, entity);
            systems::targeting::refresh(
                &mut self.world,
                entity,
                &mut self.rng,
                &self.config.targeting,
            );
            systems::combat::attempt_attack(
                &mut self.world,
                entity,
                &mut self.rng,
                &self.config.combat,
                dt,
                tick,
                &mut self.events,
                &mut self.tally,
            );
            if refresh_neighbors {
                systems::neighbors::rebuild(
                    &mut self.world,
                    entity,
                    self.config.neighbors.radius_sq,
                    tick,
                );
            }
            systems::steering::run(&mut self.world, entity, &self.config, tick)?;
        }

        // 3. Compaction of dead agents.
        if self.time.is_every(self.config.cleanup_interval) {
            let removed = systems::cleanup::run(
                &mut self.world,
                &mut self.roster,
                &mut self.despawn_buffer,
            );
            if removed > 0 {
                debug!(tick, removed, "compacted dead agents");
            }
            info!(tick, alive = self.roster.len(), "population");
        }

        Ok(())
    }
}
