//! Item instances placed in the world.

use std::collections::BTreeMap;

use crate::env::ItemHandle;
use crate::error::{ErrorSeverity, GameError};

/// Identifier of a placed item instance. Never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldItemId(pub u32);

impl core::fmt::Display for WorldItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// World-space position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point `distance` units away along `direction`.
    pub fn offset(self, direction: Position, distance: f32) -> Self {
        Self {
            x: self.x + direction.x * distance,
            y: self.y + direction.y * distance,
            z: self.z + direction.z * distance,
        }
    }
}

/// Lifecycle of a world instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Presence {
    /// Placed in the world, animated and interactable.
    Present,
    /// Equipped: world behavior and collider are detached.
    Held,
    /// Picked up into the inventory.
    Removed,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldItemInstance {
    pub id: WorldItemId,
    pub item: ItemHandle,
    pub position: Position,
    pub presence: Presence,
}

impl WorldItemInstance {
    pub fn is_present(&self) -> bool {
        self.presence == Presence::Present
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("world instance {0} does not exist")]
    UnknownInstance(WorldItemId),

    #[error("world instance {id} is {from}, cannot become {to}")]
    InvalidTransition {
        id: WorldItemId,
        from: Presence,
        to: Presence,
    },
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownInstance(_) => ErrorSeverity::Validation,
            Self::InvalidTransition { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownInstance(_) => "WORLD_UNKNOWN_INSTANCE",
            Self::InvalidTransition { .. } => "WORLD_INVALID_TRANSITION",
        }
    }
}

/// Owner of every world instance, live or not.
#[derive(Clone, Debug, Default)]
pub struct WorldPlacement {
    instances: BTreeMap<WorldItemId, WorldItemInstance>,
    next_id: u32,
}

impl WorldPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new, present instance of `item`.
    pub fn spawn(&mut self, item: ItemHandle, position: Position) -> WorldItemId {
        let id = WorldItemId(self.next_id);
        self.next_id += 1;
        self.instances.insert(
            id,
            WorldItemInstance {
                id,
                item,
                position,
                presence: Presence::Present,
            },
        );
        tracing::debug!(%id, %item, "world item spawned");
        id
    }

    pub fn get(&self, id: WorldItemId) -> Option<&WorldItemInstance> {
        self.instances.get(&id)
    }

    pub fn is_interactable(&self, id: WorldItemId) -> bool {
        self.get(id).is_some_and(WorldItemInstance::is_present)
    }

    /// Present → Removed (picked up into the inventory).
    pub fn remove(&mut self, id: WorldItemId) -> Result<(), WorldError> {
        self.transition(id, Presence::Present, Presence::Removed)
    }

    /// Present → Held (equipped).
    pub fn hold(&mut self, id: WorldItemId) -> Result<(), WorldError> {
        self.transition(id, Presence::Present, Presence::Held)
    }

    /// Held → Present at `position` (unequipped and dropped).
    pub fn release(&mut self, id: WorldItemId, position: Position) -> Result<(), WorldError> {
        self.transition(id, Presence::Held, Presence::Present)?;
        if let Some(instance) = self.instances.get_mut(&id) {
            instance.position = position;
        }
        Ok(())
    }

    /// Forgets `Removed` records of `item`. Returns how many were dropped.
    ///
    /// Ids stay retired; only the bookkeeping for instances that can never
    /// come back is released.
    pub fn discard_removed(&mut self, item: ItemHandle) -> usize {
        let before = self.instances.len();
        self.instances
            .retain(|_, instance| instance.item != item || instance.presence != Presence::Removed);
        let discarded = before - self.instances.len();
        if discarded > 0 {
            tracing::debug!(%item, discarded, "removed world records discarded");
        }
        discarded
    }

    fn transition(&mut self, id: WorldItemId, from: Presence, to: Presence) -> Result<(), WorldError> {
        let instance = self
            .instances
            .get_mut(&id)
            .ok_or(WorldError::UnknownInstance(id))?;
        if instance.presence != from {
            return Err(WorldError::InvalidTransition {
                id,
                from: instance.presence,
                to,
            });
        }
        instance.presence = to;
        tracing::debug!(%id, item = %instance.item, %from, %to, "world item transition");
        Ok(())
    }

    /// Instances currently placed in the world.
    pub fn present(&self) -> impl Iterator<Item = &WorldItemInstance> {
        self.instances.values().filter(|instance| instance.is_present())
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldItemInstance> {
        self.instances.values()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
