use proptest::prelude::*;
use proptest::sample::select;
use stepre_compiler::{compile, SyntaxFlag};
use stepre_runtime::*;

const PATTERNS: &[&str] = &[
    "ab", "a*", "(ab)+", "[a-c]x?", "a{2,3}", "b|x", "", ".c", "(a|ab)(c|bcd)",
];

fn compile_extended(pattern: &str) -> Matcher<char> {
    compile(pattern, SyntaxFlag::Extended.into()).unwrap()
}

/// Every string over `alphabet` of at most `max_len` characters.
fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    (0..max_len).fold(vec![String::new()], |mut acc, _| {
        let longest: Vec<String> = acc
            .iter()
            .filter(|s| s.chars().count() == acc.last().map_or(0, |l| l.chars().count()))
            .flat_map(|s| alphabet.iter().map(move |c| format!("{}{}", s, c)))
            .collect();

        acc.extend(longest);
        acc
    })
}

#[test]
fn should_enumerate_every_string_up_to_length() {
    let strings = strings_up_to(&['a', 'b'], 2);

    assert_eq!(vec!["", "a", "b", "aa", "ab", "ba", "bb"], strings);
}

#[test]
fn should_preserve_language_across_concatenation_groupings() {
    // approximate to `(ab)(cd)`
    let mut grouped = Matcher::concatenation(vec![
        Matcher::string_literal("ab".chars()),
        Matcher::string_literal("cd".chars()),
    ]);
    // approximate to `abcd`
    let mut flat = Matcher::concatenation(vec![
        Matcher::singleton('a'),
        Matcher::singleton('b'),
        Matcher::singleton('c'),
        Matcher::singleton('d'),
    ]);
    // approximate to `(a(bc))d`
    let mut nested = Matcher::concatenation(vec![
        Matcher::concatenation(vec![
            Matcher::singleton('a'),
            Matcher::concatenation(vec![Matcher::singleton('b'), Matcher::singleton('c')]),
        ]),
        Matcher::singleton('d'),
    ]);

    let inputs = strings_up_to(&['a', 'b', 'c', 'd', 'x'], 6);
    assert_eq!(19531, inputs.len());

    for (test_id, input) in inputs.iter().enumerate() {
        let expected = input == "abcd";

        assert_eq!(
            (test_id, expected, expected, expected),
            (
                test_id,
                grouped.matches(input.chars()),
                flat.matches(input.chars()),
                nested.matches(input.chars())
            )
        );
    }
}

#[test]
fn should_respect_replication_boundaries() {
    let input_output = [
        (
            "xxC;",
            vec![
                MatchState::Match,
                MatchState::Match,
                MatchState::Mismatch,
                MatchState::Mismatch,
            ],
        ),
        (
            "xxx.",
            vec![
                MatchState::Match,
                MatchState::Match,
                MatchState::FinalMatch,
                MatchState::Mismatch,
            ],
        ),
        ("ab", vec![MatchState::Mismatch, MatchState::Mismatch]),
    ];

    for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
        let mut matcher = compile_extended("x{1,3}");

        assert_eq!(
            (test_id, MatchState::Undecided),
            (test_id, matcher.initialize())
        );
        assert_eq!((test_id, expected), (test_id, matcher.states(input.chars())));
    }
}

#[test]
fn should_match_unbounded_replication_of_zero_or_more() {
    let constructed = Matcher::replication(Matcher::singleton('.'), RepetitionBounds::at_least(0));
    let compiled = compile_extended("\\.*");
    assert_eq!(constructed, compiled);

    let mut matcher = compiled;
    assert_eq!(MatchState::Match, matcher.initialize());
    assert_eq!(
        [vec![MatchState::Match; 5], vec![MatchState::Mismatch]].concat(),
        matcher.states(".....x".chars())
    );
}

#[test]
fn should_mismatch_all_input_after_terminal_state() {
    let inputs = strings_up_to(&['a', 'b', 'c', 'x'], 5);

    for pattern in PATTERNS {
        let mut matcher = compile_extended(pattern);

        for input in &inputs {
            matcher.initialize();
            let states = matcher.states(input.chars());

            for (step, window) in states.windows(2).enumerate() {
                if window[0].is_terminal() {
                    assert_eq!(
                        (*pattern, input.as_str(), step + 1, MatchState::Mismatch),
                        (*pattern, input.as_str(), step + 1, window[1])
                    );
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn should_produce_identical_states_after_reinitializing(
        pattern in select(PATTERNS),
        prior in "[abcx]{0,8}",
        input in "[abcx]{0,8}",
    ) {
        let mut fresh = compile_extended(pattern);
        let mut reused = compile_extended(pattern);

        let fresh_initial = fresh.initialize();
        let expected = fresh.states(input.chars());

        reused.states(prior.chars());
        prop_assert_eq!(fresh_initial, reused.initialize());
        prop_assert_eq!(expected, reused.states(input.chars()));
    }

    #[test]
    fn should_produce_identical_states_for_commuted_branches(
        first in select(PATTERNS),
        second in select(PATTERNS),
        input in "[abcx]{0,8}",
    ) {
        let mut forward = Matcher::alternation(vec![
            compile_extended(first),
            compile_extended(second),
        ]);
        let mut backward = Matcher::alternation(vec![
            compile_extended(second),
            compile_extended(first),
        ]);

        prop_assert_eq!(forward.initialize(), backward.initialize());
        prop_assert_eq!(
            forward.states(input.chars()),
            backward.states(input.chars())
        );
    }
}
