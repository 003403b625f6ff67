use super::{dedup_progressions, Evaluator, Matcher};
use crate::state::{MatchState, Verdict};

/// A partially matched concatenation: a progressing copy of one element
/// paired with the index of the element that follows it.
type Progression<C> = (Matcher<C>, usize);

/// Matches each of its elements in sequence.
///
/// Because an element may report [MatchState::Match], and so both complete
/// and keep extending, every such element continues to progress in parallel
/// with a freshly started copy of the element that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Concatenation<C> {
    elements: Vec<Matcher<C>>,
    live: Vec<Progression<C>>,
}

impl<C: Clone + PartialEq> Concatenation<C> {
    #[must_use]
    pub fn new(elements: Vec<Matcher<C>>) -> Self {
        Self {
            elements: elements.into_iter().map(Matcher::into_template).collect(),
            live: vec![],
        }
    }

    pub fn elements(&self) -> &[Matcher<C>] {
        &self.elements
    }
}

impl<C> Concatenation<C> {
    pub(crate) fn clear_progress(&mut self) {
        self.live.clear();
    }
}

/// Starts every element from `from` onwards that is reachable without
/// consuming input, appending their progressions to `live`.
///
/// Returns [MatchState::FinalMatch] or [MatchState::Match] when the end of
/// the concatenation is reachable without input, the latter signifying that a
/// seeded progression may still extend. [MatchState::Undecided] signifies
/// that seeding stopped at an element that requires input.
fn seed<C: Clone + PartialEq>(
    elements: &[Matcher<C>],
    from: usize,
    live: &mut Vec<Progression<C>>,
) -> MatchState {
    let checkpoint = live.len();

    for (idx, element) in elements.iter().enumerate().skip(from) {
        let next = idx + 1;

        match element.state() {
            MatchState::Mismatch => {
                live.truncate(checkpoint);
                return MatchState::Mismatch;
            }
            MatchState::Undecided => {
                live.push((element.started(), next));
                return MatchState::Undecided;
            }
            MatchState::Match => live.push((element.started(), next)),
            MatchState::FinalMatch => (),
        }
    }

    if live.len() > checkpoint {
        MatchState::Match
    } else {
        MatchState::FinalMatch
    }
}

impl<C: Clone + PartialEq> Evaluator for Concatenation<C> {
    type Item = C;

    fn initialize(&mut self) -> MatchState {
        self.live.clear();

        if self.elements.is_empty() {
            return MatchState::Match;
        }

        seed(&self.elements, 0, &mut self.live)
    }

    fn update(&mut self, next: &C) -> MatchState {
        let mut verdict = Verdict::default();
        let mut spawned = vec![];

        self.live.retain_mut(|(matcher, next_idx)| {
            match matcher.update(next) {
                MatchState::Match => {
                    match seed(&self.elements, *next_idx, &mut spawned) {
                        MatchState::Match | MatchState::FinalMatch => verdict.matched(),
                        _ => verdict.undecided(),
                    }
                    true
                }
                MatchState::FinalMatch => {
                    verdict.observe(seed(&self.elements, *next_idx, &mut spawned));
                    false
                }
                MatchState::Undecided => {
                    verdict.undecided();
                    true
                }
                MatchState::Mismatch => false,
            }
        });

        // spawned elements begin consuming input from the next update.
        self.live.append(&mut spawned);
        dedup_progressions(&mut self.live);

        verdict.state()
    }
}
