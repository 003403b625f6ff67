//! Matchers that consume input directly rather than composing other
//! matchers.

use super::{Evaluator, PredicateFn};
use crate::state::MatchState;

/// Matches a given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Singleton<C> {
    value: C,
}

impl<C> Singleton<C> {
    #[must_use]
    pub fn new(value: C) -> Self {
        Self { value }
    }
}

impl<C: PartialEq> Evaluator for Singleton<C> {
    type Item = C;

    fn initialize(&mut self) -> MatchState {
        MatchState::Undecided
    }

    fn update(&mut self, next: &C) -> MatchState {
        if next == &self.value {
            MatchState::FinalMatch
        } else {
            MatchState::Mismatch
        }
    }
}

/// Matches any value that satisfies a test.
#[derive(Clone)]
pub struct Predicate<C> {
    test: PredicateFn<C>,
}

impl<C> Predicate<C> {
    #[must_use]
    pub fn new(test: PredicateFn<C>) -> Self {
        Self { test }
    }
}

impl<C> std::fmt::Debug for Predicate<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// Predicates compare equal only when they share the same test.
impl<C> PartialEq for Predicate<C> {
    fn eq(&self, other: &Self) -> bool {
        std::sync::Arc::ptr_eq(&self.test, &other.test)
    }
}

impl<C> Evaluator for Predicate<C> {
    type Item = C;

    fn initialize(&mut self) -> MatchState {
        MatchState::Undecided
    }

    fn update(&mut self, next: &C) -> MatchState {
        if (self.test)(next) {
            MatchState::FinalMatch
        } else {
            MatchState::Mismatch
        }
    }
}

/// Matches any single value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Universal;

impl Universal {
    pub fn initialize(&mut self) -> MatchState {
        MatchState::Undecided
    }

    pub fn update(&mut self) -> MatchState {
        MatchState::FinalMatch
    }
}

/// Matches a fixed sequence of values, one per update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral<C> {
    literal: Vec<C>,
    cursor: usize,
}

impl<C> StringLiteral<C> {
    #[must_use]
    pub fn new(literal: Vec<C>) -> Self {
        Self { literal, cursor: 0 }
    }

    pub fn literal(&self) -> &[C] {
        &self.literal
    }
}

impl<C: PartialEq> Evaluator for StringLiteral<C> {
    type Item = C;

    fn initialize(&mut self) -> MatchState {
        self.cursor = 0;

        if self.literal.is_empty() {
            MatchState::FinalMatch
        } else {
            MatchState::Undecided
        }
    }

    fn update(&mut self, next: &C) -> MatchState {
        match self.literal.get(self.cursor) {
            Some(expected) if expected == next => {
                self.cursor += 1;

                if self.cursor == self.literal.len() {
                    MatchState::FinalMatch
                } else {
                    MatchState::Undecided
                }
            }
            // either a mismatch or the literal is already exhausted.
            _ => MatchState::Mismatch,
        }
    }
}
