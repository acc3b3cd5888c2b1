//! Headless batch runner: drives an engine for a fixed number of ticks
//! and streams every record to an event log.

use std::io::Write;

use tracing::info;

use armada_core::state::RunSummary;

use crate::config::SimConfig;
use crate::engine::SimulationEngine;
use crate::error::SimError;
use crate::event_log::EventLog;

/// Spawn the configured population, run `config.steps` ticks and return
/// the survivors.
pub fn run<W: Write>(config: &SimConfig, log: &mut EventLog<W>) -> Result<RunSummary, SimError> {
    let mut engine = SimulationEngine::with_population(config.clone())?;
    run_engine(&mut engine, config.steps, log)
}

/// Run an already-populated engine for `steps` ticks.
pub fn run_engine<W: Write>(
    engine: &mut SimulationEngine,
    steps: u64,
    log: &mut EventLog<W>,
) -> Result<RunSummary, SimError> {
    let initial_population = engine.roster().len();
    info!(
        seed = engine.config().seed,
        population = initial_population,
        steps,
        "starting run"
    );

    // Header and creation records queued before the first tick.
    log.record_batch(&engine.drain_events())?;

    for _ in 0..steps {
        let records = engine.tick()?;
        log.record_batch(&records)?;
    }
    log.flush()?;

    let summary = engine.summary(initial_population);
    info!(
        survivors = summary.survivors.len(),
        red = summary.by_faction.red,
        green = summary.by_faction.green,
        shots = summary.tally.shots,
        explosions = summary.tally.explosions,
        "run complete"
    );
    Ok(summary)
}
