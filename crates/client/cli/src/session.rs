//! Script driver: applies parsed commands to an engine and reports results.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use game_core::{
    EngineError, EventRecorder, GameEngine, GameError, GameEvent, Hint, InventorySnapshot,
    ItemHandle, WorldItemInstance,
};
use serde::Serialize;

use crate::command::{Command, parse_line};
use crate::format::{format_event, format_instance, format_status};

/// Serializable view of a session, printed by `save`.
#[derive(Debug, Serialize)]
pub struct SaveState {
    pub inventory: InventorySnapshot,
    pub equipped: Option<ItemHandle>,
    pub collected: u32,
    pub total: u32,
    pub won: bool,
    pub hint: Hint,
    pub world: Vec<WorldItemInstance>,
}

impl SaveState {
    pub fn capture(engine: &GameEngine) -> Self {
        Self {
            inventory: engine.inventory().snapshot(),
            equipped: engine.equipment().current_weapon().map(|weapon| weapon.handle),
            collected: engine.progress().collected(),
            total: engine.progress().total(),
            won: engine.progress().has_won(),
            hint: engine.hint(),
            world: engine.world().iter().cloned().collect(),
        }
    }
}

pub struct Session {
    engine: GameEngine,
    events: EventRecorder<GameEvent>,
    verbose_events: bool,
}

impl Session {
    pub fn new(mut engine: GameEngine, verbose_events: bool) -> Self {
        let events = engine.events_mut().record();
        Self {
            engine,
            events,
            verbose_events,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Runs every line of `script`. Malformed lines are reported and skipped;
    /// engine errors abort the run.
    pub fn run_script(&mut self, script: impl BufRead, out: &mut impl Write) -> Result<()> {
        for (index, line) in script.lines().enumerate() {
            let line = line.context("Failed to read script")?;
            let line_number = index + 1;
            match parse_line(&line) {
                Ok(Some(command)) => self
                    .execute(command, out)
                    .with_context(|| format!("Line {}: `{}`", line_number, line.trim()))?,
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(line = line_number, %err, "skipping malformed command");
                    writeln!(out, "line {}: {}", line_number, err)?;
                }
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        tracing::debug!(?command, "executing");
        match command {
            Command::Pickup(world) => {
                let outcome = self.engine.request_pickup(world).map_err(rejected)?;
                writeln!(out, "> pickup {}: {}", world, outcome)?;
            }
            Command::Drop(selected) => {
                let outcome = self.engine.request_drop(selected).map_err(rejected)?;
                match selected {
                    Some(item) => writeln!(out, "> drop {}: {}", item, outcome)?,
                    None => writeln!(out, "> drop: {}", outcome)?,
                }
            }
            Command::Fire => {
                let outcome = self.engine.request_fire();
                writeln!(out, "> fire: {}", outcome)?;
            }
            Command::Wait(elapsed) => {
                self.engine.advance(elapsed);
                writeln!(out, "> wait {}ms", elapsed.as_millis())?;
            }
            Command::Status => {
                writeln!(out, "{}", format_status(&self.engine))?;
            }
            Command::World => {
                for instance in self.engine.world().iter() {
                    writeln!(out, "{}", format_instance(self.engine.catalog(), instance))?;
                }
            }
            Command::Save => {
                let state = SaveState::capture(&self.engine);
                let json =
                    serde_json::to_string_pretty(&state).context("Failed to serialize session")?;
                writeln!(out, "{}", json)?;
            }
        }
        self.flush_events(out)
    }

    fn flush_events(&mut self, out: &mut impl Write) -> Result<()> {
        let events = self.events.take();
        if !self.verbose_events {
            return Ok(());
        }
        for event in &events {
            writeln!(out, "  {}", format_event(self.engine.catalog(), event))?;
        }
        Ok(())
    }
}

/// Logs an engine rejection and tags it with its code and severity.
fn rejected(err: EngineError) -> anyhow::Error {
    let code = err.error_code();
    let severity = err.severity();
    tracing::error!(code, %severity, %err, "engine rejected request");
    anyhow::Error::new(err).context(format!("{} ({})", code, severity))
}
