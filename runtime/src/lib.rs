//! Provides the incremental matcher combinators that a compiled pattern is
//! assembled from.
//!
//! A [`Matcher`] is a small state machine that is fed one input item at a
//! time. After every item it reports a [`MatchState`], signifying whether the
//! input seen so far matches, can no longer match, or needs more input to
//! decide.
//!
//! # Example
//!
//! ```rust
//! use stepre_runtime::*;
//!
//! // approximate to `ab|a*`
//! let mut matcher = Matcher::alternation(vec![
//!     Matcher::string_literal("ab".chars()),
//!     Matcher::replication(Matcher::singleton('a'), RepetitionBounds::at_least(0)),
//! ]);
//!
//! // zero repetitions of `a` already satisfy the second branch.
//! assert_eq!(MatchState::Match, matcher.initialize());
//! assert_eq!(
//!     vec![MatchState::Match, MatchState::FinalMatch],
//!     matcher.states("ab".chars())
//! );
//! ```

pub mod matcher;
mod state;

pub use matcher::*;
pub use state::MatchState;
