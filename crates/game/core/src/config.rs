/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Maximum number of distinct unique (non-stackable) items the inventory holds.
    pub max_unique_items: usize,

    /// When true, ammo never counts toward the collection goal.
    pub exclude_ammo: bool,

    /// Delay before gun/ammo hints are re-evaluated after a pickup, in milliseconds.
    pub hint_delay_ms: u64,

    /// Distance in front of the drop origin where dropped items reappear.
    pub drop_distance: f32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_UNIQUE_ITEMS: usize = 10;
    pub const DEFAULT_HINT_DELAY_MS: u64 = 3_000;
    pub const DEFAULT_DROP_DISTANCE: f32 = 1.5;

    pub fn new() -> Self {
        Self {
            max_unique_items: Self::DEFAULT_MAX_UNIQUE_ITEMS,
            exclude_ammo: true,
            hint_delay_ms: Self::DEFAULT_HINT_DELAY_MS,
            drop_distance: Self::DEFAULT_DROP_DISTANCE,
        }
    }

    pub fn with_max_unique_items(mut self, max_unique_items: usize) -> Self {
        self.max_unique_items = max_unique_items;
        self
    }

    pub fn with_exclude_ammo(mut self, exclude_ammo: bool) -> Self {
        self.exclude_ammo = exclude_ammo;
        self
    }

    pub fn with_hint_delay_ms(mut self, hint_delay_ms: u64) -> Self {
        self.hint_delay_ms = hint_delay_ms;
        self
    }

    /// Hint re-evaluation delay as a [`core::time::Duration`].
    pub fn hint_delay(&self) -> core::time::Duration {
        core::time::Duration::from_millis(self.hint_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
