//! Shot resolution: hit/miss and damage for one fired round.
//!
//! Resolution is a pure function of the injected RNG draw and the combat
//! constants: one unit value is drawn per shot, and the shot hits iff the
//! value falls below the configured hit chance. Given the same RNG sequence
//! the outcomes are identical, which is what makes duels replayable.

use serde::{Deserialize, Serialize};

use crate::core::{DuelConfig, UnitRng};

/// Outcome of one fired round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotOutcome {
    /// Whether the shot connected.
    pub hit: bool,

    /// Health removed from the target. Zero on a miss.
    pub damage: i32,
}

/// Resolve one shot against the configured constants.
///
/// Draws exactly one unit value from `rng`. The shot hits iff the value is
/// strictly below `config.hit_chance`.
///
/// ```
/// use duel_core::combat::resolve_shot;
/// use duel_core::core::{DuelConfig, SequenceRng};
///
/// let config = DuelConfig::default();
///
/// let hit = resolve_shot(&mut SequenceRng::new(vec![0.59]), &config);
/// assert!(hit.hit);
/// assert_eq!(hit.damage, 25);
///
/// let miss = resolve_shot(&mut SequenceRng::new(vec![0.6]), &config);
/// assert!(!miss.hit);
/// assert_eq!(miss.damage, 0);
/// ```
pub fn resolve_shot<R: UnitRng>(rng: &mut R, config: &DuelConfig) -> ShotOutcome {
    let hit = rng.next_unit() < config.hit_chance;

    ShotOutcome {
        hit,
        damage: if hit { config.damage } else { 0 },
    }
}
