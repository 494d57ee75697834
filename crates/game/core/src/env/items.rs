use std::collections::BTreeMap;

/// Reference to an item definition stored in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl core::fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub trait ItemOracle {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;
}

/// Item definition with common fields and kind-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle, name, stacking rule)
/// - `kind` enum holds kind-specific data (ammo pack size, weapon ammo binding)
///
/// # Stacking
///
/// - Weapons: never stack (one may be held at a time)
/// - Ammo: always stack (packs accumulate under one entry)
/// - Generic: either, as authored
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub stackable: bool,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, stackable: bool, kind: ItemKind) -> Self {
        Self {
            handle,
            name: name.into(),
            stackable,
            kind,
            description: None,
        }
    }

    /// A unique item with no kind-specific behavior.
    pub fn generic(handle: ItemHandle, name: impl Into<String>) -> Self {
        Self::new(handle, name, false, ItemKind::Generic)
    }

    /// A stackable ammo pack granting `pack_size` units on pickup.
    pub fn ammo(handle: ItemHandle, name: impl Into<String>, pack_size: u32) -> Self {
        Self::new(handle, name, true, ItemKind::Ammo(AmmoData { pack_size }))
    }

    /// A unique weapon firing the ammo stored under `ammo`.
    pub fn weapon(handle: ItemHandle, name: impl Into<String>, ammo: ItemHandle) -> Self {
        Self::new(handle, name, false, ItemKind::Weapon(WeaponData { ammo }))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(_))
    }

    pub fn is_ammo(&self) -> bool {
        matches!(self.kind, ItemKind::Ammo(_))
    }

    /// Ammo type fired by this item, if it is a weapon.
    pub fn ammo_type(&self) -> Option<ItemHandle> {
        match self.kind {
            ItemKind::Weapon(WeaponData { ammo }) => Some(ammo),
            _ => None,
        }
    }

    /// Units granted per pickup, if this item is ammo.
    pub fn pack_size(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Ammo(AmmoData { pack_size }) => Some(pack_size),
            _ => None,
        }
    }
}

/// Item type with kind-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Collectible with no special rules.
    Generic,

    /// Ammunition consumed by a weapon.
    Ammo(AmmoData),

    /// Equippable weapon.
    Weapon(WeaponData),
}

/// Ammo-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmoData {
    pub pack_size: u32,
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub ammo: ItemHandle,
}

/// Configuration errors detected while building an [`ItemCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item {0} is defined more than once")]
    DuplicateItem(ItemHandle),

    #[error("item {0} has an empty name")]
    EmptyName(ItemHandle),

    #[error("weapon {weapon} is bound to ammo {ammo}, which is not in the catalog")]
    MissingAmmoBinding { weapon: ItemHandle, ammo: ItemHandle },

    #[error("weapon {weapon} is bound to {ammo}, which is not an ammo item")]
    AmmoBindingNotAmmo { weapon: ItemHandle, ammo: ItemHandle },

    #[error("ammo {0} has a pack size of zero")]
    ZeroPackSize(ItemHandle),

    #[error("weapon {0} must not be stackable")]
    StackableWeapon(ItemHandle),

    #[error("ammo {0} must be stackable")]
    UniqueAmmo(ItemHandle),
}

impl crate::error::GameError for CatalogError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateItem(_) => "CATALOG_DUPLICATE_ITEM",
            Self::EmptyName(_) => "CATALOG_EMPTY_NAME",
            Self::MissingAmmoBinding { .. } => "CATALOG_MISSING_AMMO_BINDING",
            Self::AmmoBindingNotAmmo { .. } => "CATALOG_AMMO_BINDING_NOT_AMMO",
            Self::ZeroPackSize(_) => "CATALOG_ZERO_PACK_SIZE",
            Self::StackableWeapon(_) => "CATALOG_STACKABLE_WEAPON",
            Self::UniqueAmmo(_) => "CATALOG_UNIQUE_AMMO",
        }
    }
}

/// Validated, immutable set of item definitions.
///
/// Construction fails fast on any configuration error so that weapons are
/// guaranteed to reference a real ammo item once the core is running.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: BTreeMap<ItemHandle, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Result<Self, CatalogError> {
        let mut items = BTreeMap::new();
        for definition in definitions {
            if definition.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(definition.handle));
            }
            let handle = definition.handle;
            if items.insert(handle, definition).is_some() {
                return Err(CatalogError::DuplicateItem(handle));
            }
        }

        for definition in items.values() {
            match definition.kind {
                ItemKind::Generic => {}
                ItemKind::Ammo(AmmoData { pack_size }) => {
                    if pack_size == 0 {
                        return Err(CatalogError::ZeroPackSize(definition.handle));
                    }
                    if !definition.stackable {
                        return Err(CatalogError::UniqueAmmo(definition.handle));
                    }
                }
                ItemKind::Weapon(WeaponData { ammo }) => {
                    if definition.stackable {
                        return Err(CatalogError::StackableWeapon(definition.handle));
                    }
                    let weapon = definition.handle;
                    match items.get(&ammo) {
                        None => return Err(CatalogError::MissingAmmoBinding { weapon, ammo }),
                        Some(bound) if !bound.is_ammo() => {
                            return Err(CatalogError::AmmoBindingNotAmmo { weapon, ammo });
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        tracing::debug!(items = items.len(), "item catalog validated");
        Ok(Self { items })
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.get(&handle)
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.items.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.get(handle)
    }
}
