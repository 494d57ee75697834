use core::time::Duration;

use super::GameEngine;
use crate::events::GameEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FireOutcome {
    NoWeapon,
    NoAmmo,
    Fired,
}

impl GameEngine {
    /// Fires the equipped weapon, consuming one unit of its ammo type.
    ///
    /// Every attempt re-evaluates hints immediately.
    pub fn request_fire(&mut self) -> FireOutcome {
        let outcome = self.fire_once();
        self.request_hint_evaluation(Duration::ZERO);
        outcome
    }

    fn fire_once(&mut self) -> FireOutcome {
        let Some(weapon) = self.equipment.current_weapon().map(|weapon| weapon.handle) else {
            tracing::debug!("fire ignored: no weapon equipped");
            return FireOutcome::NoWeapon;
        };
        let Some(ammo) = self.equipment.ammo_type() else {
            return FireOutcome::NoWeapon;
        };
        let Some(ammo_definition) = self.inventory.get_by_id(ammo).cloned() else {
            tracing::info!(%weapon, %ammo, "fire failed: no ammo");
            return FireOutcome::NoAmmo;
        };

        match self.inventory.try_remove(&ammo_definition, 1) {
            Ok(remaining) => {
                self.hints.mark_fired();
                tracing::info!(%weapon, %ammo, remaining, "shot fired");
                self.events.publish(&GameEvent::ShotFired {
                    weapon,
                    ammo,
                    remaining,
                });
                FireOutcome::Fired
            }
            Err(err) => {
                tracing::warn!(%weapon, %ammo, %err, "fire failed: could not consume ammo");
                FireOutcome::NoAmmo
            }
        }
    }
}
