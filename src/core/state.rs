//! Game state: the complete snapshot of one duel.
//!
//! `GameState` is a plain value with structural equality. Transitions never
//! mutate a state in place; the engine builds a successor and the host
//! replaces its current value wholesale. Consumers read the snapshot, they
//! do not write it.

use serde::{Deserialize, Serialize};

use super::combatant::{Combatant, CombatantId, CombatantPair};
use super::config::DuelConfig;

/// Coarse lifecycle stage of a duel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Session created, match not yet started.
    #[default]
    Idle,
    /// Match in progress; combat actions are live.
    Active,
    /// One combatant eliminated. Terminal except for a reset.
    Finished,
}

/// The complete, immutable snapshot of one duel.
///
/// Invariants, holding after every transition:
/// - health and ammo stay within their configured bounds for both sides
/// - while `Active`, both combatants are alive and `turn` names a live one
/// - when `Finished`, exactly one combatant is at zero health and `winner`
///   names the other
/// - scores never decrease and change only on a duel-ending hit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The two combatants, addressed by id.
    pub combatants: CombatantPair<Combatant>,

    /// Whose turn it is to act.
    pub turn: CombatantId,

    /// Current lifecycle stage.
    pub phase: Phase,

    /// Last narration line. Display-only; no invariant.
    pub message: String,

    /// Name of the winner. Set only when `phase` is `Finished`.
    pub winner: Option<String>,
}

impl GameState {
    /// Create the session-initial state: idle, full health, starting ammo,
    /// zero scores, first turn to P1.
    #[must_use]
    pub fn new(config: &DuelConfig) -> Self {
        Self {
            combatants: CombatantPair::from_fn(|id| {
                Combatant::new(id, config.name(id), config.max_health, config.starting_ammo)
            }),
            turn: CombatantId::P1,
            phase: Phase::Idle,
            message: "Press start to begin the match.".to_string(),
            winner: None,
        }
    }

    /// Get one combatant by id.
    #[must_use]
    pub fn combatant(&self, id: CombatantId) -> &Combatant {
        &self.combatants[id]
    }

    /// The combatant who may currently act.
    #[must_use]
    pub fn turn_combatant(&self) -> &Combatant {
        &self.combatants[self.turn]
    }

    /// The combatant waiting for their turn.
    #[must_use]
    pub fn idle_combatant(&self) -> &Combatant {
        &self.combatants[self.turn.opponent()]
    }
}
