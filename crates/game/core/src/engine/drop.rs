use super::{EngineError, GameEngine};
use crate::env::ItemHandle;
use crate::events::GameEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DropOutcome {
    Success,
    NothingSelected,
    /// Ammo stays in the inventory once picked up.
    AmmoNotDroppable,
    /// The selected item is not held; nothing changed.
    RemovalFailed,
}

impl GameEngine {
    /// Drops one unit of the selected item at [`GameEngine::drop_point`].
    ///
    /// The equipped weapon leaves the equip slot and its held world instance
    /// is put back; any other item gets a fresh world instance, replacing the
    /// record left behind when it was picked up.
    pub fn request_drop(&mut self, selected: Option<ItemHandle>) -> Result<DropOutcome, EngineError> {
        let Some(handle) = selected else {
            return Ok(self.drop_refused(None, DropOutcome::NothingSelected));
        };
        let definition = self.definition(handle)?;

        if definition.is_ammo() {
            return Ok(self.drop_refused(Some(handle), DropOutcome::AmmoNotDroppable));
        }
        if let Err(err) = self.inventory.try_remove(&definition, 1) {
            tracing::warn!(item = %handle, %err, "drop failed: could not remove from inventory");
            return Ok(self.drop_refused(Some(handle), DropOutcome::RemovalFailed));
        }

        let drop_point = self.drop_point();
        let dropped_weapon = self.equipment.is_equipped(handle);
        let world = if dropped_weapon {
            let held = self
                .equipment
                .unequip()
                .ok_or(EngineError::UnknownItem(handle))?;
            self.world.release(held, drop_point)?;
            self.events.publish(&GameEvent::WeaponUnequipped {
                weapon: handle,
                world: held,
            });
            held
        } else {
            self.world.discard_removed(handle);
            self.world.spawn(handle, drop_point)
        };

        tracing::info!(item = %handle, %world, "item dropped");
        self.record_dropped(&definition, world);
        if dropped_weapon {
            self.request_hint_evaluation(core::time::Duration::ZERO);
        }
        Ok(DropOutcome::Success)
    }

    fn drop_refused(&mut self, item: Option<ItemHandle>, reason: DropOutcome) -> DropOutcome {
        tracing::info!(item = ?item, %reason, "drop refused");
        self.events.publish(&GameEvent::DropFailed { item, reason });
        reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::PickupOutcome;
    use crate::env::{ItemCatalog, ItemDefinition};
    use crate::state::{Position, Presence, WorldItemId, WorldPlacement};

    fn engine() -> GameEngine {
        let catalog = ItemCatalog::new([
            ItemDefinition::generic(ItemHandle(1), "Keycard"),
            ItemDefinition::weapon(ItemHandle(10), "Pistol", ItemHandle(100)),
            ItemDefinition::ammo(ItemHandle(100), "9mm", 50),
        ])
        .unwrap();
        let mut world = WorldPlacement::new();
        world.spawn(ItemHandle(1), Position::ORIGIN);
        world.spawn(ItemHandle(10), Position::ORIGIN);
        world.spawn(ItemHandle(100), Position::ORIGIN);
        GameEngine::new(catalog, world, GameConfig::default()).unwrap()
    }

    #[test]
    fn refusals_leave_state_unchanged() {
        let mut engine = engine();
        engine.request_pickup(WorldItemId(2)).unwrap();

        assert_eq!(engine.request_drop(None), Ok(DropOutcome::NothingSelected));
        assert_eq!(
            engine.request_drop(Some(ItemHandle(100))),
            Ok(DropOutcome::AmmoNotDroppable)
        );
        assert_eq!(
            engine.request_drop(Some(ItemHandle(1))),
            Ok(DropOutcome::RemovalFailed)
        );
        assert_eq!(engine.inventory().count_of(ItemHandle(100)), 50);
        assert_eq!(engine.world().len(), 3);
    }

    #[test]
    fn dropped_generic_gets_a_fresh_instance_at_drop_point() {
        let mut engine = engine();
        engine.set_drop_origin(Position::new(2.0, 0.0, 0.0), Position::new(1.0, 0.0, 0.0));
        engine.request_pickup(WorldItemId(0)).unwrap();

        assert_eq!(engine.request_drop(Some(ItemHandle(1))), Ok(DropOutcome::Success));

        let fresh = engine.world().get(WorldItemId(3)).unwrap();
        assert_eq!(fresh.item, ItemHandle(1));
        assert_eq!(fresh.position, Position::new(3.5, 0.0, 0.0));
        assert!(!engine.inventory().has_id(ItemHandle(1)));
        assert_eq!(engine.progress().collected(), 0);
        assert!(engine.world().get(WorldItemId(0)).is_none());
    }

    #[test]
    fn pickup_drop_cycles_do_not_grow_the_world() {
        let mut engine = engine();
        let mut current = WorldItemId(0);

        for _ in 0..50 {
            assert_eq!(engine.request_pickup(current), Ok(PickupOutcome::Success));
            assert_eq!(engine.request_drop(Some(ItemHandle(1))), Ok(DropOutcome::Success));
            current = engine
                .world()
                .present()
                .find(|instance| instance.item == ItemHandle(1))
                .map(|instance| instance.id)
                .unwrap();
        }

        assert_eq!(engine.world().len(), 3);
        assert_eq!(current, WorldItemId(52));
    }

    #[test]
    fn dropping_equipped_weapon_releases_held_instance() {
        let mut engine = engine();
        assert_eq!(engine.request_pickup(WorldItemId(1)), Ok(PickupOutcome::Success));
        let recorder = engine.events_mut().record();

        assert_eq!(engine.request_drop(Some(ItemHandle(10))), Ok(DropOutcome::Success));

        assert!(!engine.equipment().has_weapon());
        assert!(!engine.inventory().has_id(ItemHandle(10)));
        assert_eq!(
            engine.world().get(WorldItemId(1)).map(|i| i.presence),
            Some(Presence::Present)
        );
        assert_eq!(engine.world().len(), 3);

        let events = recorder.take();
        assert_eq!(
            events[0],
            GameEvent::WeaponUnequipped {
                weapon: ItemHandle(10),
                world: WorldItemId(1)
            }
        );
        assert_eq!(
            events[1],
            GameEvent::ItemDropped {
                item: ItemHandle(10),
                world: WorldItemId(1)
            }
        );

        // the same instance can be picked up again
        assert_eq!(engine.request_pickup(WorldItemId(1)), Ok(PickupOutcome::Success));
        assert_eq!(engine.progress().collected(), 1);
    }
}
