//! Duel configuration.
//!
//! Hosts configure a duel at session startup: combatant names and the combat
//! constants. The defaults are the standard ruleset (100 health, magazine of
//! 10 starting with 5, +3 per reload, 60% hit chance, 25 damage); tests of
//! the standard rules use `DuelConfig::default()`.

use serde::{Deserialize, Serialize};

use super::combatant::{CombatantId, CombatantPair};

/// Complete duel configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DuelConfig {
    /// Display names, fixed for the session.
    pub names: CombatantPair<String>,

    /// Health both combatants start (and reset) with. Upper bound for health.
    pub max_health: i32,

    /// Magazine capacity. Upper bound for ammo.
    pub max_ammo: i32,

    /// Rounds loaded at session start and on reset.
    pub starting_ammo: i32,

    /// Rounds gained per reload, before the magazine cap.
    pub reload_amount: i32,

    /// Probability that a shot hits, in `[0, 1]`.
    pub hit_chance: f64,

    /// Health removed by a hit.
    pub damage: i32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            names: CombatantPair::new("Ranger".to_string(), "Delta".to_string()),
            max_health: 100,
            max_ammo: 10,
            starting_ammo: 5,
            reload_amount: 3,
            hit_chance: 0.6,
            damage: 25,
        }
    }
}

impl DuelConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both display names.
    #[must_use]
    pub fn with_names(mut self, p1: impl Into<String>, p2: impl Into<String>) -> Self {
        self.names = CombatantPair::new(p1.into(), p2.into());
        self
    }

    /// Set the hit probability.
    #[must_use]
    pub fn with_hit_chance(mut self, chance: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&chance),
            "Hit chance must lie in [0, 1]"
        );
        self.hit_chance = chance;
        self
    }

    /// Set the damage per hit.
    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        assert!(damage > 0, "Damage must be positive");
        self.damage = damage;
        self
    }

    /// Set the starting (and reset) health.
    #[must_use]
    pub fn with_max_health(mut self, health: i32) -> Self {
        assert!(health > 0, "Max health must be positive");
        self.max_health = health;
        self
    }

    /// Set the magazine capacity and starting load.
    #[must_use]
    pub fn with_ammo(mut self, starting: i32, max: i32) -> Self {
        assert!(max > 0, "Magazine capacity must be positive");
        assert!(
            (0..=max).contains(&starting),
            "Starting ammo must lie in [0, max]"
        );
        self.starting_ammo = starting;
        self.max_ammo = max;
        self
    }

    /// Get a combatant's display name.
    #[must_use]
    pub fn name(&self, id: CombatantId) -> &str {
        &self.names[id]
    }
}
