//! Defines the [Matcher] value type and the combinators a matcher tree is
//! composed from.

use std::fmt::Display;
use std::sync::Arc;

use crate::state::MatchState;

mod alternation;
mod atomic;
mod concatenation;
mod replication;

pub use alternation::Alternation;
pub use atomic::{Predicate, Singleton, StringLiteral, Universal};
pub use concatenation::Concatenation;
pub use replication::Replication;

/// A state machine that consumes its input one item at a time.
pub trait Evaluator {
    /// The input item type to be compared.
    type Item;

    /// Resets all progress, returning the state that applies before any input
    /// has been consumed.
    fn initialize(&mut self) -> MatchState;

    /// Consumes a single item, returning the resulting state.
    fn update(&mut self, next: &Self::Item) -> MatchState;

    /// Feeds every item of `iter` in order, returning the state observed after
    /// each one. This does not reset the evaluator beforehand.
    fn states<I>(&mut self, iter: I) -> Vec<MatchState>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        iter.into_iter().map(|item| self.update(&item)).collect()
    }

    /// Resets the evaluator then feeds all of `iter`, returning a boolean
    /// signifying if the complete input matched.
    fn matches<I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let initial = self.initialize().is_match();

        iter.into_iter()
            .fold(initial, |_, item| self.update(&item).is_match())
    }
}

/// The representation of an unbounded upper repetition count.
pub const UNBOUNDED: usize = usize::MAX;

/// The inclusive lower and upper repetition counts of a [Replication].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepetitionBounds {
    lower: usize,
    upper: usize,
}

impl RepetitionBounds {
    /// Returns bounds spanning `lower` to `upper` inclusive, or `None` if the
    /// lower bound exceeds the upper.
    #[must_use]
    pub fn between(lower: usize, upper: usize) -> Option<Self> {
        (lower <= upper).then_some(Self { lower, upper })
    }

    /// Returns bounds matching exactly `count` repetitions.
    #[must_use]
    pub const fn exactly(count: usize) -> Self {
        Self {
            lower: count,
            upper: count,
        }
    }

    /// Returns bounds matching `lower` or more repetitions.
    #[must_use]
    pub const fn at_least(lower: usize) -> Self {
        Self {
            lower,
            upper: UNBOUNDED,
        }
    }

    pub fn lower(&self) -> usize {
        self.lower
    }

    pub fn upper(&self) -> usize {
        self.upper
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper == UNBOUNDED
    }
}

impl Display for RepetitionBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unbounded() {
            write!(f, "{{{},}}", self.lower)
        } else {
            write!(f, "{{{},{}}}", self.lower, self.upper)
        }
    }
}

/// Drops every progression that is structurally equal to one earlier in
/// `live`. Equal progressions behave identically on all future input, so
/// only one needs to be kept.
pub(crate) fn dedup_progressions<T: PartialEq>(live: &mut Vec<T>) {
    let mut idx = 0;

    while idx < live.len() {
        if live[..idx].contains(&live[idx]) {
            live.remove(idx);
        } else {
            idx += 1;
        }
    }
}

/// The shared, immutable test applied by a predicate matcher.
pub type PredicateFn<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;

/// The strategy a [Matcher] delegates to.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<C> {
    Singleton(Singleton<C>),
    Predicate(Predicate<C>),
    Universal(Universal),
    StringLiteral(StringLiteral<C>),
    Concatenation(Concatenation<C>),
    Alternation(Alternation<C>),
    Replication(Box<Replication<C>>),
}

impl<C> Transition<C> {
    fn clear_progress(&mut self) {
        match self {
            Self::Concatenation(t) => t.clear_progress(),
            Self::Alternation(t) => t.clear_progress(),
            Self::Replication(t) => t.clear_progress(),
            Self::Singleton(_) | Self::Predicate(_) | Self::Universal(_) | Self::StringLiteral(_) => (),
        }
    }
}

impl<C: Clone + PartialEq> Evaluator for Transition<C> {
    type Item = C;

    fn initialize(&mut self) -> MatchState {
        match self {
            Self::Singleton(t) => t.initialize(),
            Self::Predicate(t) => t.initialize(),
            Self::Universal(t) => t.initialize(),
            Self::StringLiteral(t) => t.initialize(),
            Self::Concatenation(t) => t.initialize(),
            Self::Alternation(t) => t.initialize(),
            Self::Replication(t) => t.initialize(),
        }
    }

    fn update(&mut self, next: &C) -> MatchState {
        match self {
            Self::Singleton(t) => t.update(next),
            Self::Predicate(t) => t.update(next),
            Self::Universal(t) => t.update(),
            Self::StringLiteral(t) => t.update(next),
            Self::Concatenation(t) => t.update(next),
            Self::Alternation(t) => t.update(next),
            Self::Replication(t) => t.update(next),
        }
    }
}

/// A value owning one node of a compiled matcher tree along with the state
/// it last reported.
///
/// Cloning a matcher produces a deep, fully independent copy, which is how
/// the combinators track many parallel progressions of the same
/// sub-matcher.
///
/// # Examples
///
/// ```
/// use stepre_runtime::*;
///
/// let mut literal_char = Matcher::singleton('a');
///
/// // Advances one character that matches the expected literal.
/// assert_eq!(MatchState::FinalMatch, literal_char.update(&'a'));
///
/// // A completed match can not consume further input.
/// assert_eq!(MatchState::Mismatch, literal_char.update(&'a'));
///
/// literal_char.initialize();
/// assert!(literal_char.matches("a".chars()));
/// assert!(!literal_char.matches("ab".chars()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matcher<C> {
    transition: Transition<C>,
    state: MatchState,
}

impl<C: Clone + PartialEq> Matcher<C> {
    /// Wraps a transition, initializing it.
    #[must_use]
    pub fn new(transition: Transition<C>) -> Self {
        let mut matcher = Self {
            transition,
            state: MatchState::Undecided,
        };
        matcher.initialize();
        matcher
    }

    /// Matches exactly one item equal to `value`.
    #[must_use]
    pub fn singleton(value: C) -> Self {
        Self::new(Transition::Singleton(Singleton::new(value)))
    }

    /// Matches exactly one item satisfying `predicate`.
    #[must_use]
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self::new(Transition::Predicate(Predicate::new(Arc::new(predicate))))
    }

    /// Matches exactly one item of any value.
    #[must_use]
    pub fn universal() -> Self {
        Self::new(Transition::Universal(Universal::default()))
    }

    /// Matches the exact sequence yielded by `literal`.
    #[must_use]
    pub fn string_literal<I>(literal: I) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        Self::new(Transition::StringLiteral(StringLiteral::new(
            literal.into_iter().collect(),
        )))
    }

    /// Matches each of `elements` in sequence.
    #[must_use]
    pub fn concatenation(elements: Vec<Matcher<C>>) -> Self {
        Self::new(Transition::Concatenation(Concatenation::new(elements)))
    }

    /// Matches any one of `branches`.
    #[must_use]
    pub fn alternation(branches: Vec<Matcher<C>>) -> Self {
        Self::new(Transition::Alternation(Alternation::new(branches)))
    }

    /// Matches `template` repeated within `bounds`.
    #[must_use]
    pub fn replication(template: Matcher<C>, bounds: RepetitionBounds) -> Self {
        Self::new(Transition::Replication(Box::new(Replication::new(
            template, bounds,
        ))))
    }

    /// Returns the state reported by the last `initialize` or `update`.
    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn transition(&self) -> &Transition<C> {
        &self.transition
    }

    /// Returns a freshly initialized copy of this matcher, ready to consume
    /// input.
    #[must_use]
    pub fn started(&self) -> Self {
        let mut copy = self.clone();
        copy.initialize();
        copy
    }

    /// Resets the matcher then discards the progress its own combinator
    /// holds, keeping only its structure and its initial state. Combinators
    /// store their sub-matchers in this form and only ever progress
    /// [Matcher::started] copies of them.
    #[must_use]
    pub(crate) fn into_template(mut self) -> Self {
        self.initialize();
        self.transition.clear_progress();
        self
    }
}

impl<C: Clone + PartialEq> Evaluator for Matcher<C> {
    type Item = C;

    fn initialize(&mut self) -> MatchState {
        self.state = self.transition.initialize();
        self.state
    }

    fn update(&mut self, next: &C) -> MatchState {
        self.state = match self.state {
            MatchState::Mismatch | MatchState::FinalMatch => MatchState::Mismatch,
            MatchState::Match | MatchState::Undecided => self.transition.update(next),
        };
        self.state
    }
}
