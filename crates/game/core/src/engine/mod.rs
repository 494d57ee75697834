//! Pickup/drop orchestration.
//!
//! The [`GameEngine`] is the only place where items move between the world,
//! the inventory and the equip slot. Every request runs to completion on the
//! caller's thread:
//!
//! 1. validate the request against the current state
//! 2. mutate the collaborators (inventory events fire synchronously here)
//! 3. feed internal consumers (progress tracker, hint advisor)
//! 4. publish [`GameEvent`]s to external listeners
//!
//! Deferred hint evaluation is driven by [`GameEngine::advance`].

mod drop;
mod errors;
mod fire;
mod pickup;

pub use drop::DropOutcome;
pub use errors::EngineError;
pub use fire::FireOutcome;
pub use pickup::PickupOutcome;

use core::time::Duration;

use crate::config::GameConfig;
use crate::env::{ItemCatalog, ItemDefinition, ItemHandle, ItemKind, ItemOracle};
use crate::events::{EventBus, GameEvent, InventoryEvent, ListenerId};
use crate::hint::{DeferredTask, Hint, HintAdvisor};
use crate::progress::{ProgressTracker, ProgressUpdate};
use crate::schedule::DeferredScheduler;
use crate::state::{EquipSlot, InventoryStore, Position, WorldItemId, WorldPlacement};

/// Item/inventory/equip simulation for a single player session.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    catalog: ItemCatalog,
    inventory: InventoryStore,
    equipment: EquipSlot,
    world: WorldPlacement,
    progress: ProgressTracker,
    hints: HintAdvisor,
    scheduler: DeferredScheduler<DeferredTask>,
    drop_origin: Position,
    drop_forward: Position,
    events: EventBus<GameEvent>,
}

impl GameEngine {
    /// Builds a session from a validated catalog and the initial world.
    ///
    /// The collection goal is counted here, once.
    pub fn new(
        catalog: ItemCatalog,
        world: WorldPlacement,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        if config.max_unique_items == 0 {
            return Err(EngineError::InvalidConfig("max_unique_items must be at least 1"));
        }
        if !config.drop_distance.is_finite() {
            return Err(EngineError::InvalidConfig("drop_distance must be finite"));
        }
        if let Some(unknown) = world.iter().find(|instance| !catalog.contains(instance.item)) {
            return Err(EngineError::UnknownItem(unknown.item));
        }

        let progress = ProgressTracker::from_census(&world, &catalog, config.exclude_ammo);
        tracing::info!(
            items = catalog.len(),
            placed = world.len(),
            goal = progress.total(),
            "game engine initialized"
        );

        Ok(Self {
            inventory: InventoryStore::new(config.max_unique_items),
            equipment: EquipSlot::new(),
            world,
            progress,
            hints: HintAdvisor::new(),
            scheduler: DeferredScheduler::new(),
            drop_origin: Position::ORIGIN,
            drop_forward: Position::new(0.0, 0.0, 1.0),
            events: EventBus::new(),
            catalog,
            config,
        })
    }

    /// Moves the clock forward and runs deferred work that came due.
    pub fn advance(&mut self, elapsed: Duration) {
        for task in self.scheduler.advance(elapsed) {
            match task {
                DeferredTask::EvaluateHints => self.evaluate_hints_now(),
            }
        }
    }

    /// Updates where dropped items reappear: `drop_distance` along `forward`.
    pub fn set_drop_origin(&mut self, origin: Position, forward: Position) {
        self.drop_origin = origin;
        self.drop_forward = forward;
    }

    pub fn drop_point(&self) -> Position {
        self.drop_origin
            .offset(self.drop_forward, self.config.drop_distance)
    }

    /// Units of ammo available to the equipped weapon; 0 without a weapon.
    pub fn current_ammo(&self) -> u32 {
        self.equipment
            .ammo_type()
            .map_or(0, |ammo| self.inventory.count_of(ammo))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn equipment(&self) -> &EquipSlot {
        &self.equipment
    }

    pub fn world(&self) -> &WorldPlacement {
        &self.world
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn hint(&self) -> Hint {
        self.hints.current()
    }

    pub fn hint_pending(&self) -> bool {
        self.scheduler.is_pending(&DeferredTask::EvaluateHints)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    pub fn events_mut(&mut self) -> &mut EventBus<GameEvent> {
        &mut self.events
    }

    /// Listener registry of the inventory store (added/removed/changed).
    pub fn inventory_events_mut(&mut self) -> &mut EventBus<InventoryEvent> {
        self.inventory.events_mut()
    }

    fn definition(&self, handle: ItemHandle) -> Result<ItemDefinition, EngineError> {
        self.catalog
            .definition(handle)
            .cloned()
            .ok_or(EngineError::UnknownItem(handle))
    }

    /// Feeds a completed pickup to the progress tracker, then to listeners.
    fn record_collected(&mut self, item: &ItemDefinition, world: WorldItemId) {
        let update = self.progress.on_collected(item);
        self.events.publish(&GameEvent::ItemCollected {
            item: item.handle,
            world,
        });
        self.publish_progress(update);
    }

    fn record_dropped(&mut self, item: &ItemDefinition, world: WorldItemId) {
        let update = self.progress.on_dropped(item);
        self.events.publish(&GameEvent::ItemDropped {
            item: item.handle,
            world,
        });
        self.publish_progress(update);
    }

    fn publish_progress(&mut self, update: ProgressUpdate) {
        match update {
            ProgressUpdate::Unchanged => {}
            ProgressUpdate::Changed { collected, total } => {
                self.events
                    .publish(&GameEvent::ProgressChanged { collected, total });
            }
            ProgressUpdate::Won { collected, total } => {
                self.events
                    .publish(&GameEvent::ProgressChanged { collected, total });
                self.events
                    .publish(&GameEvent::WinConditionMet { collected, total });
            }
        }
    }

    /// Requests a hint evaluation. A zero delay evaluates immediately; either
    /// way any evaluation still pending is cancelled.
    fn request_hint_evaluation(&mut self, delay: Duration) {
        if delay.is_zero() {
            self.scheduler.cancel(&DeferredTask::EvaluateHints);
            self.evaluate_hints_now();
        } else {
            self.scheduler.schedule(DeferredTask::EvaluateHints, delay);
        }
    }

    fn evaluate_hints_now(&mut self) {
        let has_gun = self.equipment.has_weapon();
        let has_ammo = if has_gun {
            self.current_ammo() > 0
        } else {
            self.inventory
                .stackable_items()
                .any(|(definition, count)| matches!(definition.kind, ItemKind::Ammo(_)) && count > 0)
        };

        if let Some(hint) = self.hints.evaluate(has_gun, has_ammo) {
            self.events.publish(&GameEvent::HintChanged(hint));
        }
    }
}
