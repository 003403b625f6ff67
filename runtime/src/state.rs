use std::fmt::Display;

/// Represents the status of a matcher after it has consumed zero or more
/// items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    /// The input seen so far matches and further input may extend the match.
    Match,
    /// The input seen so far matches and no further input can extend it.
    FinalMatch,
    /// The input seen so far can never match.
    Mismatch,
    /// The input seen so far is a viable prefix but not yet a match.
    Undecided,
}

impl MatchState {
    /// Returns a boolean signifying if the state represents a successful
    /// match, whether or not it could be extended.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match | Self::FinalMatch)
    }

    /// Returns a boolean signifying if the state can still progress on
    /// further input.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Match | Self::Undecided)
    }

    /// Returns a boolean signifying if no further input can change the
    /// outcome without an intervening `initialize`.
    pub fn is_terminal(&self) -> bool {
        !self.is_live()
    }
}

impl Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::Match => "MATCH",
            Self::FinalMatch => "FINAL_MATCH",
            Self::Mismatch => "MISMATCH",
            Self::Undecided => "UNDECIDED",
        };

        write!(f, "{}", repr)
    }
}

/// Accumulates the outcome of every live progression of a combinator over a
/// single step and reduces them into one [MatchState].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Verdict {
    matched: bool,
    final_matched: bool,
    undecided: bool,
}

impl Verdict {
    pub(crate) fn matched(&mut self) {
        self.matched = true;
    }

    pub(crate) fn final_matched(&mut self) {
        self.final_matched = true;
    }

    pub(crate) fn undecided(&mut self) {
        self.undecided = true;
    }

    /// Folds an arbitrary state into the verdict, as reported by a
    /// progression that is retained afterwards.
    pub(crate) fn observe(&mut self, state: MatchState) {
        match state {
            MatchState::Match => self.matched(),
            MatchState::FinalMatch => self.final_matched(),
            MatchState::Undecided => self.undecided(),
            MatchState::Mismatch => (),
        }
    }

    pub(crate) fn state(&self) -> MatchState {
        match (self.matched, self.final_matched, self.undecided) {
            (true, _, _) => MatchState::Match,
            // something completed here while another progression lives on.
            (false, true, true) => MatchState::Match,
            (false, true, false) => MatchState::FinalMatch,
            (false, false, true) => MatchState::Undecided,
            (false, false, false) => MatchState::Mismatch,
        }
    }
}
