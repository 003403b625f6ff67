use super::{dedup_progressions, Evaluator, Matcher, RepetitionBounds};
use crate::state::{MatchState, Verdict};

/// A progressing copy of the repeated matcher paired with the repetition it
/// is currently matching, counting from one.
type Progression<C> = (Matcher<C>, usize);

/// Matches a template matcher repeated a bounded number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Replication<C> {
    template: Matcher<C>,
    bounds: RepetitionBounds,
    /// The lower bound in effect. This is zero whenever the template itself
    /// matches the empty input.
    lower: usize,
    live: Vec<Progression<C>>,
}

impl<C: Clone + PartialEq> Replication<C> {
    #[must_use]
    pub fn new(template: Matcher<C>, bounds: RepetitionBounds) -> Self {
        Self {
            template: template.into_template(),
            bounds,
            lower: bounds.lower(),
            live: vec![],
        }
    }

    pub fn bounds(&self) -> RepetitionBounds {
        self.bounds
    }
}

impl<C> Replication<C> {
    pub(crate) fn clear_progress(&mut self) {
        self.live.clear();
    }
}

/// Returns the count of the repetition following `count`.
///
/// Without an upper bound, counts past the lower bound are indistinguishable,
/// so they saturate to keep equivalent progressions structurally equal.
fn next_count(bounds: RepetitionBounds, lower: usize, count: usize) -> usize {
    let next = count.saturating_add(1);

    if bounds.is_unbounded() {
        next.min(lower.max(1))
    } else {
        next
    }
}

impl<C: Clone + PartialEq> Evaluator for Replication<C> {
    type Item = C;

    fn initialize(&mut self) -> MatchState {
        self.live.clear();
        self.lower = self.bounds.lower();

        let pristine = self.template.state();
        if self.bounds.upper() == 0 {
            return MatchState::FinalMatch;
        }

        match pristine {
            MatchState::FinalMatch | MatchState::Mismatch => return pristine,
            MatchState::Undecided => self.live.push((self.template.started(), 1)),
            MatchState::Match => {
                self.live.push((self.template.started(), 1));
                self.lower = 0;
            }
        }

        if self.lower == 0 {
            MatchState::Match
        } else {
            pristine
        }
    }

    fn update(&mut self, next: &C) -> MatchState {
        let mut verdict = Verdict::default();
        let mut spawned = vec![];

        let bounds = self.bounds;
        let lower = self.lower;
        let upper = bounds.upper();

        self.live.retain_mut(|(matcher, count)| {
            let next_count = next_count(bounds, lower, *count);

            match matcher.update(next) {
                MatchState::Match => {
                    if *count >= lower {
                        verdict.matched()
                    } else {
                        verdict.undecided()
                    }

                    // the same repetition may extend while the next one starts.
                    if *count < upper {
                        spawned.push((self.template.started(), next_count));
                    }
                    true
                }
                MatchState::FinalMatch => {
                    if *count < lower {
                        verdict.undecided()
                    } else if *count == upper {
                        verdict.final_matched()
                    } else {
                        verdict.matched()
                    }

                    // reuse the spent copy for the next repetition.
                    if *count != upper {
                        matcher.initialize();
                        *count = next_count;
                        true
                    } else {
                        false
                    }
                }
                MatchState::Undecided => {
                    verdict.undecided();
                    true
                }
                MatchState::Mismatch => false,
            }
        });

        self.live.append(&mut spawned);
        dedup_progressions(&mut self.live);

        verdict.state()
    }
}
