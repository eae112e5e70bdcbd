//! Core engine types: combatants, state, actions, RNG, configuration.
//!
//! These are the value types the transition function is defined over. They
//! carry no game rules of their own; the rules live in [`crate::engine`].

pub mod action;
pub mod combatant;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, ParseActionError};
pub use combatant::{Combatant, CombatantId, CombatantPair};
pub use config::DuelConfig;
pub use rng::{DuelRng, DuelRngState, SequenceRng, UnitRng};
pub use state::{GameState, Phase};
