//! Host-facing session: the dispatcher loop around the pure engine.
//!
//! The engine itself is a function; something has to own the current state,
//! the RNG, and the one-action-at-a-time discipline. `DuelSession` is that
//! owner. It applies actions synchronously (`&mut self` serializes them),
//! keeps an append-only transcript of the actions that changed state, and
//! hands out read-only snapshots for rendering.
//!
//! Hosts with their own loop can ignore this module and call
//! [`DuelEngine::apply`] directly; the session adds no rules.

use im::Vector;

use crate::core::{
    Action, ActionRecord, DuelConfig, DuelRng, DuelRngState, GameState, ParseActionError, Phase,
};
use crate::engine::DuelEngine;

/// One interactive duel: engine, current state, RNG, and transcript.
#[derive(Clone, Debug)]
pub struct DuelSession {
    engine: DuelEngine,
    state: GameState,
    rng: DuelRng,
    transcript: Vector<ActionRecord>,
    sequence: u32,
}

impl DuelSession {
    /// Create a session with the standard configuration and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(DuelConfig::default(), seed)
    }

    /// Create a session with a custom configuration and the given seed.
    #[must_use]
    pub fn with_config(config: DuelConfig, seed: u64) -> Self {
        let engine = DuelEngine::new(config);
        let state = engine.initial_state();
        Self {
            engine,
            state,
            rng: DuelRng::new(seed),
            transcript: Vector::new(),
            sequence: 0,
        }
    }

    /// Apply one action and return the new current state.
    ///
    /// Actions that change the state are appended to the transcript with the
    /// acting combatant and a sequence number; guarded-out no-ops are not.
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        let actor = self.state.turn;
        let next = self.engine.apply(&self.state, action, &mut self.rng);

        tracing::debug!(action = %action, phase = ?next.phase, "dispatched action");

        if next != self.state {
            self.transcript
                .push_back(ActionRecord::new(actor, action, self.sequence));
            self.sequence += 1;

            if next.phase == Phase::Finished && self.state.phase != Phase::Finished {
                if let Some(winner) = next.winner.as_deref() {
                    tracing::info!(winner, "duel finished");
                }
            }
        }

        self.state = next;
        &self.state
    }

    /// Parse a textual action tag and apply it.
    ///
    /// Unknown tags fail fast here, before reaching the engine.
    pub fn dispatch_tag(&mut self, tag: &str) -> Result<&GameState, ParseActionError> {
        let action: Action = tag.parse()?;
        Ok(self.dispatch(action))
    }

    /// The current state, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The rule set this session runs under.
    #[must_use]
    pub fn engine(&self) -> &DuelEngine {
        &self.engine
    }

    /// Ordered record of the actions that changed state.
    #[must_use]
    pub fn transcript(&self) -> &Vector<ActionRecord> {
        &self.transcript
    }

    /// Current RNG position, for checkpointing a snapshot of this session.
    #[must_use]
    pub fn rng_state(&self) -> DuelRngState {
        self.rng.state()
    }
}
