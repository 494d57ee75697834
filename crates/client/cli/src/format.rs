//! Human-readable lines for engine events and state.

use game_core::{GameEngine, GameEvent, Hint, ItemHandle, ItemOracle, WorldItemInstance};

/// Name of an item, falling back to its id for unknown handles.
pub fn item_name(items: &impl ItemOracle, item: ItemHandle) -> String {
    items
        .definition(item)
        .map_or_else(|| item.to_string(), |definition| definition.name.clone())
}

/// Text shown for a hint; `None` when the hint is hidden.
pub fn hint_text(hint: Hint) -> Option<&'static str> {
    match hint {
        Hint::Hidden => None,
        Hint::PickAmmoToUseGun => Some("Pick up ammo to use the gun"),
        Hint::PickGunToUseAmmo => Some("Pick up a gun to use the ammo"),
        Hint::PressFire => Some("Press fire to shoot"),
    }
}

pub fn format_event(items: &impl ItemOracle, event: &GameEvent) -> String {
    match event {
        GameEvent::ItemCollected { item, world } => {
            format!("collected {} ({})", item_name(items, *item), world)
        }
        GameEvent::ItemDropped { item, world } => {
            format!("dropped {} ({})", item_name(items, *item), world)
        }
        GameEvent::ProgressChanged { collected, total } => {
            format!("progress ({}/{})", collected, total)
        }
        GameEvent::WinConditionMet { collected, total } => {
            format!("all items collected ({}/{})", collected, total)
        }
        GameEvent::PickupFailed { world, reason } => {
            format!("cannot pick up {}: {}", world, reason)
        }
        GameEvent::DropFailed { item, reason } => match item {
            Some(item) => format!("cannot drop {}: {}", item_name(items, *item), reason),
            None => format!("cannot drop: {}", reason),
        },
        GameEvent::WeaponEquipped { weapon, .. } => {
            format!("equipped {}", item_name(items, *weapon))
        }
        GameEvent::WeaponUnequipped { weapon, .. } => {
            format!("unequipped {}", item_name(items, *weapon))
        }
        GameEvent::ShotFired {
            weapon, remaining, ..
        } => format!("{} fired, {} rounds left", item_name(items, *weapon), remaining),
        GameEvent::HintChanged(hint) => match hint_text(*hint) {
            Some(text) => format!("hint: {}", text),
            None => "hint cleared".to_string(),
        },
    }
}

/// Multi-line summary of inventory, equipment, progress and hint.
pub fn format_status(engine: &GameEngine) -> String {
    let inventory = engine.inventory();
    let mut lines = Vec::new();

    lines.push(format!(
        "inventory: {}/{} unique",
        inventory.unique_count(),
        inventory.capacity()
    ));
    for entry in inventory.entries() {
        lines.push(format!(
            "  {} {} x{}",
            entry.definition.handle, entry.definition.name, entry.count
        ));
    }

    match engine.equipment().current_weapon() {
        Some(weapon) => lines.push(format!(
            "equipped: {} ({} rounds)",
            weapon.name,
            engine.current_ammo()
        )),
        None => lines.push("equipped: nothing".to_string()),
    }

    lines.push(format!("progress: {}", engine.progress().progress_string()));
    if let Some(text) = hint_text(engine.hint()) {
        lines.push(format!("hint: {}", text));
    }
    lines.join("\n")
}

pub fn format_instance(items: &impl ItemOracle, instance: &WorldItemInstance) -> String {
    let position = instance.position;
    format!(
        "{} {} at ({:.1}, {:.1}, {:.1}) {}",
        instance.id,
        item_name(items, instance.item),
        position.x,
        position.y,
        position.z,
        instance.presence
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ItemCatalog, ItemDefinition, PickupOutcome, WorldItemId};

    fn catalog() -> ItemCatalog {
        ItemCatalog::new([
            ItemDefinition::weapon(ItemHandle(10), "Pistol", ItemHandle(100)),
            ItemDefinition::ammo(ItemHandle(100), "9mm Rounds", 12),
        ])
        .unwrap()
    }

    #[test]
    fn events_use_item_names() {
        let catalog = catalog();

        assert_eq!(
            format_event(
                &catalog,
                &GameEvent::ShotFired {
                    weapon: ItemHandle(10),
                    ammo: ItemHandle(100),
                    remaining: 3
                }
            ),
            "Pistol fired, 3 rounds left"
        );
        assert_eq!(
            format_event(
                &catalog,
                &GameEvent::PickupFailed {
                    world: WorldItemId(4),
                    reason: PickupOutcome::WeaponAlreadyHeld
                }
            ),
            "cannot pick up w4: weapon_already_held"
        );
        assert_eq!(item_name(&catalog, ItemHandle(7)), "#7");
    }

    #[test]
    fn hidden_hint_has_no_text() {
        assert_eq!(hint_text(Hint::Hidden), None);
        assert_eq!(
            format_event(&catalog(), &GameEvent::HintChanged(Hint::Hidden)),
            "hint cleared"
        );
    }
}
