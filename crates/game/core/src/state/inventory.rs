//! Player inventory storage.
//!
//! Unique items (weapons, keys, collectibles) occupy one of a fixed number of
//! slots and can be held at most once. Stackable items (ammo) accumulate under
//! one entry per item id and do not count toward capacity.

use std::collections::BTreeMap;

use crate::env::{ItemDefinition, ItemHandle, ItemOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::events::{EventBus, InventoryEvent, ListenerId};

/// Errors returned by [`InventoryStore`] mutators.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("unique item {0} is already held")]
    AlreadyHeld(ItemHandle),

    #[error("inventory full ({capacity} unique items)")]
    Full { capacity: usize },

    #[error("item {0} is not in the inventory")]
    NotHeld(ItemHandle),

    #[error("not enough of item {item}: have {have}, need {need}")]
    InsufficientStock { item: ItemHandle, have: u32, need: u32 },

    #[error("stack of item {0} would overflow")]
    StackOverflow(ItemHandle),

    #[error("item {0} is not in the catalog")]
    UnknownItem(ItemHandle),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } | Self::InsufficientStock { .. } | Self::NotHeld(_) => {
                ErrorSeverity::Recoverable
            }
            Self::InvalidAmount | Self::AlreadyHeld(_) | Self::UnknownItem(_) => {
                ErrorSeverity::Validation
            }
            Self::StackOverflow(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVENTORY_INVALID_AMOUNT",
            Self::AlreadyHeld(_) => "INVENTORY_ALREADY_HELD",
            Self::Full { .. } => "INVENTORY_FULL",
            Self::NotHeld(_) => "INVENTORY_NOT_HELD",
            Self::InsufficientStock { .. } => "INVENTORY_INSUFFICIENT_STOCK",
            Self::StackOverflow(_) => "INVENTORY_STACK_OVERFLOW",
            Self::UnknownItem(_) => "INVENTORY_UNKNOWN_ITEM",
        }
    }
}

#[derive(Clone, Debug)]
struct StackEntry {
    definition: ItemDefinition,
    count: u32,
}

/// Read-only view of one inventory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryEntry<'a> {
    pub definition: &'a ItemDefinition,
    /// Always 1 for unique items, at least 1 for stacks.
    pub count: u32,
}

/// Serializable inventory contents, keyed by item id only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySnapshot {
    pub unique: Vec<ItemHandle>,
    pub stackable: Vec<(ItemHandle, u32)>,
}

/// The player's held items.
#[derive(Debug)]
pub struct InventoryStore {
    capacity: usize,
    unique: BTreeMap<ItemHandle, ItemDefinition>,
    stackable: BTreeMap<ItemHandle, StackEntry>,
    events: EventBus<InventoryEvent>,
}

impl InventoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            unique: BTreeMap::new(),
            stackable: BTreeMap::new(),
            events: EventBus::new(),
        }
    }

    /// Adds `amount` units of `item`, returning the resulting count.
    ///
    /// Unique items are added at most once; asking for more than one unit of a
    /// unique item adds a single unit.
    pub fn try_add(&mut self, item: &ItemDefinition, amount: u32) -> Result<u32, InventoryError> {
        if amount == 0 {
            tracing::warn!(item = %item.handle, "rejected add: amount must be greater than zero");
            return Err(InventoryError::InvalidAmount);
        }

        let count = if item.stackable {
            let entry = self
                .stackable
                .entry(item.handle)
                .or_insert_with(|| StackEntry {
                    definition: item.clone(),
                    count: 0,
                });
            let Some(next) = entry.count.checked_add(amount) else {
                if entry.count == 0 {
                    self.stackable.remove(&item.handle);
                }
                return Err(InventoryError::StackOverflow(item.handle));
            };
            entry.count = next;
            next
        } else {
            if amount > 1 {
                tracing::warn!(
                    item = %item.handle,
                    amount,
                    "adding several units of a unique item; only one is stored"
                );
            }
            if self.unique.contains_key(&item.handle) {
                tracing::warn!(item = %item.handle, name = %item.name, "unique item already held");
                return Err(InventoryError::AlreadyHeld(item.handle));
            }
            if self.is_full() {
                tracing::warn!(item = %item.handle, capacity = self.capacity, "inventory full");
                return Err(InventoryError::Full {
                    capacity: self.capacity,
                });
            }
            self.unique.insert(item.handle, item.clone());
            1
        };

        let added = if item.stackable { amount } else { 1 };
        tracing::debug!(item = %item.handle, name = %item.name, added, count, "item added");
        self.events.publish(&InventoryEvent::ItemAdded {
            item: item.handle,
            amount: added,
        });
        self.events.publish(&InventoryEvent::Changed);
        Ok(count)
    }

    /// Removes `amount` units of `item`, returning what remains.
    ///
    /// A stack that reaches zero is deleted along with its cached definition.
    pub fn try_remove(&mut self, item: &ItemDefinition, amount: u32) -> Result<u32, InventoryError> {
        if amount == 0 {
            return Err(InventoryError::InvalidAmount);
        }

        let remaining = if item.stackable {
            let Some(entry) = self.stackable.get_mut(&item.handle) else {
                tracing::debug!(item = %item.handle, "stackable item not held");
                return Err(InventoryError::NotHeld(item.handle));
            };
            if entry.count < amount {
                tracing::warn!(item = %item.handle, have = entry.count, need = amount, "not enough stock");
                return Err(InventoryError::InsufficientStock {
                    item: item.handle,
                    have: entry.count,
                    need: amount,
                });
            }
            entry.count -= amount;
            let remaining = entry.count;
            if remaining == 0 {
                self.stackable.remove(&item.handle);
            }
            remaining
        } else {
            if self.unique.remove(&item.handle).is_none() {
                tracing::debug!(item = %item.handle, "unique item not held");
                return Err(InventoryError::NotHeld(item.handle));
            }
            0
        };

        let removed = if item.stackable { amount } else { 1 };
        tracing::debug!(item = %item.handle, removed, remaining, "item removed");
        self.events.publish(&InventoryEvent::ItemRemoved {
            item: item.handle,
            amount: removed,
        });
        self.events.publish(&InventoryEvent::Changed);
        Ok(remaining)
    }

    pub fn has_item(&self, item: &ItemDefinition) -> bool {
        if item.stackable {
            self.stackable.contains_key(&item.handle)
        } else {
            self.unique.contains_key(&item.handle)
        }
    }

    pub fn has_id(&self, handle: ItemHandle) -> bool {
        self.unique.contains_key(&handle) || self.stackable.contains_key(&handle)
    }

    /// Units held of `item`; 0 when absent.
    pub fn count(&self, item: &ItemDefinition) -> u32 {
        self.count_of(item.handle)
    }

    pub fn count_of(&self, handle: ItemHandle) -> u32 {
        if self.unique.contains_key(&handle) {
            1
        } else {
            self.stackable.get(&handle).map_or(0, |entry| entry.count)
        }
    }

    /// Looks up a held definition, checking unique items first.
    pub fn get_by_id(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.unique
            .get(&handle)
            .or_else(|| self.stackable.get(&handle).map(|entry| &entry.definition))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn unique_count(&self) -> usize {
        self.unique.len()
    }

    pub fn stackable_type_count(&self) -> usize {
        self.stackable.len()
    }

    pub fn is_full(&self) -> bool {
        self.unique.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.unique.is_empty() && self.stackable.is_empty()
    }

    pub fn unique_items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.unique.values()
    }

    pub fn stackable_items(&self) -> impl Iterator<Item = (&ItemDefinition, u32)> {
        self.stackable
            .values()
            .map(|entry| (&entry.definition, entry.count))
    }

    /// Every held definition, unique items first.
    pub fn items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.unique
            .values()
            .chain(self.stackable.values().map(|entry| &entry.definition))
    }

    /// All entries: unique items first, then stacks, each ordered by id.
    pub fn entries(&self) -> impl Iterator<Item = InventoryEntry<'_>> {
        self.unique
            .values()
            .map(|definition| InventoryEntry {
                definition,
                count: 1,
            })
            .chain(self.stackable.values().map(|entry| InventoryEntry {
                definition: &entry.definition,
                count: entry.count,
            }))
    }

    /// Removes every unit of `item`. Returns the number of units removed.
    pub fn remove_all_of(&mut self, item: &ItemDefinition) -> Result<u32, InventoryError> {
        let held = self.count(item);
        if held == 0 {
            return Err(InventoryError::NotHeld(item.handle));
        }
        self.try_remove(item, held)?;
        Ok(held)
    }

    /// Drops everything. Emits a single [`InventoryEvent::Changed`].
    pub fn clear(&mut self) {
        self.unique.clear();
        self.stackable.clear();
        tracing::info!("inventory cleared");
        self.events.publish(&InventoryEvent::Changed);
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            unique: self.unique.keys().copied().collect(),
            stackable: self
                .stackable
                .iter()
                .map(|(handle, entry)| (*handle, entry.count))
                .collect(),
        }
    }

    /// Replaces the contents with `snapshot`, resolving ids through `items`.
    ///
    /// The snapshot is rebuilt in a scratch store under the same capacity and
    /// swapped in only if every entry fits. Unknown ids, duplicate unique ids,
    /// zero stack counts and overflowing capacity all leave the inventory
    /// unchanged. Emits a single [`InventoryEvent::Changed`] on success.
    pub fn restore(
        &mut self,
        snapshot: &InventorySnapshot,
        items: &impl ItemOracle,
    ) -> Result<(), InventoryError> {
        let resolve = |handle: ItemHandle| {
            items
                .definition(handle)
                .ok_or(InventoryError::UnknownItem(handle))
        };

        let mut staged = Self::new(self.capacity);
        for handle in &snapshot.unique {
            staged.try_add(resolve(*handle)?, 1)?;
        }
        for (handle, count) in &snapshot.stackable {
            staged.try_add(resolve(*handle)?, *count)?;
        }

        self.unique = staged.unique;
        self.stackable = staged.stackable;
        tracing::info!(
            unique = self.unique.len(),
            stacks = self.stackable.len(),
            "inventory restored"
        );
        self.events.publish(&InventoryEvent::Changed);
        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&InventoryEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    pub fn events_mut(&mut self) -> &mut EventBus<InventoryEvent> {
        &mut self.events
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new(crate::config::GameConfig::DEFAULT_MAX_UNIQUE_ITEMS)
    }
}
