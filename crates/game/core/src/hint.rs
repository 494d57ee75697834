//! Gun/ammo guidance hints.

/// Guidance shown to the player about the weapon and its ammunition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Hint {
    #[default]
    Hidden,
    PickAmmoToUseGun,
    PickGunToUseAmmo,
    PressFire,
}

/// Work deferred on the engine's scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeferredTask {
    EvaluateHints,
}

/// Tracks the last published hint and whether the player has fired yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HintAdvisor {
    current: Hint,
    fired_once: bool,
}

impl HintAdvisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure hint rule.
    pub fn compute(has_gun: bool, has_ammo: bool, fired_once: bool) -> Hint {
        match (has_gun, has_ammo) {
            (true, false) => Hint::PickAmmoToUseGun,
            (false, true) => Hint::PickGunToUseAmmo,
            (true, true) if !fired_once => Hint::PressFire,
            _ => Hint::Hidden,
        }
    }

    /// Re-evaluates the hint. Returns the new hint only if it changed.
    pub fn evaluate(&mut self, has_gun: bool, has_ammo: bool) -> Option<Hint> {
        let next = Self::compute(has_gun, has_ammo, self.fired_once);
        if next == self.current {
            return None;
        }
        tracing::debug!(from = %self.current, to = %next, "hint changed");
        self.current = next;
        Some(next)
    }

    pub fn mark_fired(&mut self) {
        self.fired_once = true;
    }

    pub fn current(&self) -> Hint {
        self.current
    }
}
