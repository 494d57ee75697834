use super::{EngineError, GameEngine};
use crate::env::{AmmoData, ItemDefinition, ItemKind};
use crate::events::GameEvent;
use crate::state::WorldItemId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PickupOutcome {
    Success,
    InventoryFull,
    /// A weapon is already equipped; the world instance stays where it is.
    WeaponAlreadyHeld,
}

impl GameEngine {
    /// Picks up the world instance `world`.
    ///
    /// - Ammo adds a whole pack to the stack under the ammo's id.
    /// - A weapon is equipped and mirrored in the inventory. Picking up a
    ///   second weapon while holding one is refused, never a swap.
    /// - Anything else is added to the inventory.
    ///
    /// Instances that are missing or no longer present are errors; the
    /// refusals above are outcomes.
    pub fn request_pickup(&mut self, world: WorldItemId) -> Result<PickupOutcome, EngineError> {
        let instance = self
            .world
            .get(world)
            .ok_or(EngineError::UnknownWorldItem(world))?;
        if !instance.is_present() {
            return Err(EngineError::NotInteractable {
                world,
                presence: instance.presence,
            });
        }
        let definition = self.definition(instance.item)?;

        let outcome = match definition.kind {
            ItemKind::Ammo(AmmoData { pack_size }) => self.pickup_ammo(world, &definition, pack_size)?,
            ItemKind::Weapon(_) => self.pickup_weapon(world, &definition)?,
            ItemKind::Generic => self.pickup_generic(world, &definition)?,
        };

        if outcome != PickupOutcome::Success {
            tracing::info!(%world, item = %definition.handle, %outcome, "pickup refused");
            self.events.publish(&GameEvent::PickupFailed {
                world,
                reason: outcome,
            });
        }
        Ok(outcome)
    }

    fn pickup_ammo(
        &mut self,
        world: WorldItemId,
        ammo: &ItemDefinition,
        pack_size: u32,
    ) -> Result<PickupOutcome, EngineError> {
        if let Err(err) = self.inventory.try_add(ammo, pack_size) {
            tracing::warn!(%world, item = %ammo.handle, %err, "ammo pickup failed");
            return Ok(PickupOutcome::InventoryFull);
        }
        self.world.remove(world)?;
        self.record_collected(ammo, world);

        let delay = self.config.hint_delay();
        self.request_hint_evaluation(delay);
        Ok(PickupOutcome::Success)
    }

    fn pickup_weapon(
        &mut self,
        world: WorldItemId,
        weapon: &ItemDefinition,
    ) -> Result<PickupOutcome, EngineError> {
        if self.equipment.has_weapon() {
            return Ok(PickupOutcome::WeaponAlreadyHeld);
        }

        // Equipping must not leave a weapon in hand that the inventory cannot list.
        let needs_entry = !self.inventory.has_item(weapon);
        if needs_entry && self.inventory.is_full() {
            return Ok(PickupOutcome::InventoryFull);
        }

        self.equipment.equip(weapon, world)?;
        self.world.hold(world)?;
        if needs_entry {
            self.inventory.try_add(weapon, 1)?;
        }
        self.events.publish(&GameEvent::WeaponEquipped {
            weapon: weapon.handle,
            world,
        });
        self.record_collected(weapon, world);

        let delay = self.config.hint_delay();
        self.request_hint_evaluation(delay);
        Ok(PickupOutcome::Success)
    }

    fn pickup_generic(
        &mut self,
        world: WorldItemId,
        item: &ItemDefinition,
    ) -> Result<PickupOutcome, EngineError> {
        if let Err(err) = self.inventory.try_add(item, 1) {
            tracing::warn!(%world, item = %item.handle, %err, "pickup failed");
            return Ok(PickupOutcome::InventoryFull);
        }
        self.world.remove(world)?;
        self.record_collected(item, world);
        Ok(PickupOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{ItemCatalog, ItemHandle};
    use crate::state::{Position, Presence, WorldPlacement};

    fn engine(capacity: usize, items: &[u32]) -> GameEngine {
        let catalog = ItemCatalog::new([
            ItemDefinition::generic(ItemHandle(1), "Keycard"),
            ItemDefinition::generic(ItemHandle(2), "Datapad"),
            ItemDefinition::weapon(ItemHandle(10), "Pistol", ItemHandle(100)),
            ItemDefinition::ammo(ItemHandle(100), "9mm", 50),
        ])
        .unwrap();
        let mut world = WorldPlacement::new();
        for id in items {
            world.spawn(ItemHandle(*id), Position::ORIGIN);
        }
        GameEngine::new(
            catalog,
            world,
            GameConfig::default().with_max_unique_items(capacity),
        )
        .unwrap()
    }

    #[test]
    fn ammo_pickup_adds_whole_pack() {
        let mut engine = engine(4, &[100, 100]);

        assert_eq!(engine.request_pickup(WorldItemId(0)), Ok(PickupOutcome::Success));
        assert_eq!(engine.request_pickup(WorldItemId(1)), Ok(PickupOutcome::Success));

        assert_eq!(engine.inventory().count_of(ItemHandle(100)), 100);
        assert_eq!(engine.inventory().stackable_type_count(), 1);
        assert_eq!(engine.progress().collected(), 0);
    }

    #[test]
    fn weapon_is_equipped_held_and_mirrored() {
        let mut engine = engine(4, &[10]);

        assert_eq!(engine.request_pickup(WorldItemId(0)), Ok(PickupOutcome::Success));

        assert!(engine.equipment().is_equipped(ItemHandle(10)));
        assert!(engine.inventory().has_id(ItemHandle(10)));
        assert_eq!(
            engine.world().get(WorldItemId(0)).map(|i| i.presence),
            Some(Presence::Held)
        );
    }

    #[test]
    fn full_inventory_refuses_generic_and_weapon() {
        let mut engine = engine(1, &[1, 2, 10]);
        let recorder = engine.events_mut().record();

        assert_eq!(engine.request_pickup(WorldItemId(0)), Ok(PickupOutcome::Success));
        assert_eq!(engine.request_pickup(WorldItemId(1)), Ok(PickupOutcome::InventoryFull));
        assert_eq!(engine.request_pickup(WorldItemId(2)), Ok(PickupOutcome::InventoryFull));

        assert!(engine.world().is_interactable(WorldItemId(1)));
        assert!(engine.world().is_interactable(WorldItemId(2)));
        assert!(!engine.equipment().has_weapon());
        assert!(recorder.take().contains(&GameEvent::PickupFailed {
            world: WorldItemId(2),
            reason: PickupOutcome::InventoryFull
        }));
    }

    #[test]
    fn missing_or_removed_instances_are_errors() {
        let mut engine = engine(4, &[1]);

        assert_eq!(
            engine.request_pickup(WorldItemId(9)),
            Err(EngineError::UnknownWorldItem(WorldItemId(9)))
        );
        engine.request_pickup(WorldItemId(0)).unwrap();
        assert_eq!(
            engine.request_pickup(WorldItemId(0)),
            Err(EngineError::NotInteractable {
                world: WorldItemId(0),
                presence: Presence::Removed
            })
        );
    }

    #[test]
    fn progress_is_settled_before_collection_is_announced() {
        let mut engine = engine(4, &[1]);
        let recorder = engine.events_mut().record();

        engine.request_pickup(WorldItemId(0)).unwrap();

        assert!(engine.progress().has_won());
        assert_eq!(
            recorder.take(),
            vec![
                GameEvent::ItemCollected {
                    item: ItemHandle(1),
                    world: WorldItemId(0)
                },
                GameEvent::ProgressChanged {
                    collected: 1,
                    total: 1
                },
                GameEvent::WinConditionMet {
                    collected: 1,
                    total: 1
                },
            ]
        );
    }
}
