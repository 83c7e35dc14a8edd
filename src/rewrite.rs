//! Generation-by-generation string rewriting.
//!
//! The [`RewriteEngine`] owns the axiom and the [`RuleTable`]; the evolving
//! sequence lives in a separate [`SimulationState`] so that several states can
//! share one engine. Every pass is simultaneous and context-free: each symbol of
//! the *previous* generation is replaced independently, never recursively.

use crate::error::{Error, Result};
use crate::rules::RuleTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The symbol sequence at a given generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    current: String,
    generation: usize,
}

impl SimulationState {
    /// The current symbol sequence.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// How many rewrite passes produced [`current`](Self::current).
    pub fn generation(&self) -> usize {
        self.generation
    }
}

/// Applies a [`RuleTable`] to a [`SimulationState`].
#[derive(Clone, Debug)]
pub struct RewriteEngine {
    axiom: String,
    rules: RuleTable,
}

impl RewriteEngine {
    pub fn new(axiom: impl Into<String>, rules: RuleTable) -> Self {
        Self {
            axiom: axiom.into(),
            rules,
        }
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// A state at generation 0 holding the axiom.
    pub fn initial_state(&self) -> SimulationState {
        SimulationState {
            current: self.axiom.clone(),
            generation: 0,
        }
    }

    /// Performs a single rewrite pass over `symbols` and returns the next generation.
    pub fn rewrite(&self, symbols: &str) -> String {
        let len = symbols.chars().map(|c| self.rules.expansion_len(c)).sum();
        let mut next = String::with_capacity(len);
        for symbol in symbols.chars() {
            self.rules.expand_into(symbol, &mut next);
        }
        next
    }

    /// Advances `state` by `iterations` generations.
    pub fn advance(&self, state: &mut SimulationState, iterations: usize) {
        for _ in 0..iterations {
            state.current = self.rewrite(&state.current);
            state.generation += 1;
            debug!(
                generation = state.generation,
                len = state.current.len(),
                "rewrite pass complete"
            );
        }
    }

    /// Advances `state` until it reaches `target`.
    ///
    /// Fails with [`Error::Ordering`] if `target` lies before the current generation;
    /// the state is left untouched in that case.
    pub fn advance_to(&self, state: &mut SimulationState, target: usize) -> Result<()> {
        if target < state.generation {
            return Err(Error::Ordering {
                current: state.generation,
                target,
            });
        }
        self.advance(state, target - state.generation);
        Ok(())
    }

    /// Rewinds `state` to the axiom at generation 0.
    pub fn reset(&self, state: &mut SimulationState) {
        state.current.clear();
        state.current.push_str(&self.axiom);
        state.generation = 0;
    }
}
