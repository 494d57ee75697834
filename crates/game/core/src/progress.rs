//! Collection goal and win state.
//!
//! The goal is a census of the world taken once at session start:
//! - every non-ammo item counts once per world instance
//! - ammo is skipped when `exclude_ammo` is set
//! - weapons, however many are placed, reserve a single slot because the
//!   player can only ever hold one
//!
//! Collected counts move additively with pickups and drops. The win fires on
//! the first counted pickup that reaches the goal and is terminal afterwards.

use crate::env::{ItemDefinition, ItemOracle};
use crate::state::WorldPlacement;

/// Result of feeding a transfer event to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// Item does not count toward the goal.
    Unchanged,
    Changed { collected: u32, total: u32 },
    /// The goal was reached for the first time.
    Won { collected: u32, total: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressTracker {
    total: u32,
    collected: u32,
    won: bool,
    exclude_ammo: bool,
}

impl ProgressTracker {
    pub fn new(total: u32, exclude_ammo: bool) -> Self {
        Self {
            total,
            collected: 0,
            won: false,
            exclude_ammo,
        }
    }

    /// Counts the goal from the instances currently present in `world`.
    pub fn from_census(world: &WorldPlacement, items: &impl ItemOracle, exclude_ammo: bool) -> Self {
        let mut total = 0u32;
        let mut weapon_counted = false;

        for instance in world.present() {
            let Some(definition) = items.definition(instance.item) else {
                tracing::warn!(world = %instance.id, item = %instance.item, "census skipped unknown item");
                continue;
            };
            if definition.is_weapon() {
                if !weapon_counted {
                    total += 1;
                    weapon_counted = true;
                }
            } else if !(exclude_ammo && definition.is_ammo()) {
                total += 1;
            }
        }

        tracing::info!(total, "collection goal counted");
        Self::new(total, exclude_ammo)
    }

    /// Whether transfers of `item` move the collected count.
    pub fn counts(&self, item: &ItemDefinition) -> bool {
        item.is_weapon() || !(self.exclude_ammo && item.is_ammo())
    }

    pub fn on_collected(&mut self, item: &ItemDefinition) -> ProgressUpdate {
        if !self.counts(item) {
            return ProgressUpdate::Unchanged;
        }

        self.collected += 1;
        tracing::debug!(collected = self.collected, total = self.total, "progress");

        if !self.won && self.collected >= self.total {
            self.won = true;
            tracing::info!(collected = self.collected, total = self.total, "win condition met");
            return ProgressUpdate::Won {
                collected: self.collected,
                total: self.total,
            };
        }
        ProgressUpdate::Changed {
            collected: self.collected,
            total: self.total,
        }
    }

    /// Decrements the collected count, clamped at zero.
    pub fn on_dropped(&mut self, item: &ItemDefinition) -> ProgressUpdate {
        if !self.counts(item) {
            return ProgressUpdate::Unchanged;
        }

        match self.collected.checked_sub(1) {
            Some(collected) => self.collected = collected,
            None => tracing::warn!(item = %item.handle, "drop of an uncounted item; progress clamped at 0"),
        }
        tracing::debug!(collected = self.collected, total = self.total, "progress after drop");
        ProgressUpdate::Changed {
            collected: self.collected,
            total: self.total,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// `"(collected/total)"`, as shown next to hints.
    pub fn progress_string(&self) -> String {
        format!("({}/{})", self.collected, self.total)
    }
}
