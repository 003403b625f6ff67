use super::{Evaluator, Matcher};
use crate::state::{MatchState, Verdict};

/// Matches any one of its branches.
///
/// Every branch that has not yet mismatched progresses in parallel, so the
/// reported state is independent of branch order.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternation<C> {
    branches: Vec<Matcher<C>>,
    live: Vec<Matcher<C>>,
}

impl<C: Clone + PartialEq> Alternation<C> {
    #[must_use]
    pub fn new(branches: Vec<Matcher<C>>) -> Self {
        Self {
            branches: branches.into_iter().map(Matcher::into_template).collect(),
            live: vec![],
        }
    }

    pub fn branches(&self) -> &[Matcher<C>] {
        &self.branches
    }
}

impl<C> Alternation<C> {
    pub(crate) fn clear_progress(&mut self) {
        self.live.clear();
    }
}

impl<C: Clone + PartialEq> Evaluator for Alternation<C> {
    type Item = C;

    fn initialize(&mut self) -> MatchState {
        let mut verdict = Verdict::default();
        self.live.clear();

        for branch in self.branches.iter() {
            let state = branch.state();
            verdict.observe(state);

            if state.is_live() {
                self.live.push(branch.started());
            }
        }

        verdict.state()
    }

    fn update(&mut self, next: &C) -> MatchState {
        let mut verdict = Verdict::default();

        self.live.retain_mut(|branch| {
            let state = branch.update(next);
            verdict.observe(state);

            state.is_live()
        });

        verdict.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::RepetitionBounds;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_match_any_branch() {
        let mut alternation = Alternation::new(vec![
            Matcher::string_literal("ab".chars()),
            Matcher::string_literal("cd".chars()),
        ]);

        let input_output = [
            ("ab", vec![MatchState::Undecided, MatchState::FinalMatch]),
            ("cd", vec![MatchState::Undecided, MatchState::FinalMatch]),
            ("ad", vec![MatchState::Undecided, MatchState::Mismatch]),
            ("x", vec![MatchState::Mismatch]),
        ];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!(MatchState::Undecided, alternation.initialize());
            assert_eq!(
                (test_id, expected),
                (test_id, alternation.states(input.chars()))
            )
        }
    }

    #[test]
    fn should_report_match_when_completed_branch_coexists_with_live_branch() {
        // approximate to `a|abc`
        let mut alternation = Alternation::new(vec![
            Matcher::singleton('a'),
            Matcher::string_literal("abc".chars()),
        ]);

        assert_eq!(MatchState::Undecided, alternation.initialize());
        assert_eq!(
            vec![
                MatchState::Match,
                MatchState::Undecided,
                MatchState::FinalMatch
            ],
            alternation.states("abc".chars())
        );
    }

    #[test]
    fn should_initialize_to_match_with_empty_matching_branch() {
        // approximate to `x|y*`
        let mut alternation = Alternation::new(vec![
            Matcher::singleton('x'),
            Matcher::replication(Matcher::singleton('y'), RepetitionBounds::at_least(0)),
        ]);

        assert_eq!(MatchState::Match, alternation.initialize());
        assert_eq!(
            vec![MatchState::Match, MatchState::Mismatch],
            alternation.states("yx".chars())
        );
    }
}
