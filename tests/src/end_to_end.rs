use pretty_assertions::assert_eq;
use stepre_compiler::*;
use stepre_runtime::{Evaluator, MatchState};

#[test]
fn should_reach_final_match_after_replicated_literal() {
    let regex = create_regex("ab{1}", SyntaxFlag::Extended.into()).unwrap();
    let mut matcher = regex.matcher();

    assert_eq!(
        vec![MatchState::Undecided, MatchState::FinalMatch],
        matcher.states("ab".chars())
    );
    assert_eq!(Some(2), regex.match_len("ab".chars()));
}

#[test]
fn should_fail_on_unparseable_brace_in_every_dialect() {
    let dialects = [
        SyntaxFlag::Basic,
        SyntaxFlag::Extended,
        SyntaxFlag::Grep,
        SyntaxFlag::Egrep,
        SyntaxFlag::Awk,
        SyntaxFlag::ECMAScript,
    ];

    for (test_id, dialect) in dialects.into_iter().enumerate() {
        assert_eq!(
            (test_id, Some(ErrorKind::BadBrace)),
            (
                test_id,
                create_regex("{x5}", dialect.into()).err().map(|e| e.kind())
            )
        )
    }
}

#[test]
fn should_read_patterns_by_dialect() {
    let input_output = [
        ("a+", SyntaxFlag::Basic, "a+", true),
        ("a+", SyntaxFlag::Extended, "aaa", true),
        ("a\\{2\\}", SyntaxFlag::Basic, "aa", true),
        ("a\\{2\\}", SyntaxFlag::Grep, "aa", true),
        ("a{2}", SyntaxFlag::Egrep, "aa", true),
        ("a?", SyntaxFlag::Grep, "a?", true),
        ("ab\ncd", SyntaxFlag::Grep, "cd", true),
        ("ab\ncd", SyntaxFlag::Egrep, "ab", true),
        ("ab\ncd", SyntaxFlag::Extended, "ab\ncd", true),
        ("a\\/b", SyntaxFlag::Awk, "a/b", true),
        ("a\\tb", SyntaxFlag::Awk, "a\tb", true),
        ("\\x41\\u0042", SyntaxFlag::ECMAScript, "AB", true),
        ("\\x4", SyntaxFlag::ECMAScript, "x4", true),
        ("\\cJ", SyntaxFlag::ECMAScript, "\n", true),
        ("[^\\d]", SyntaxFlag::ECMAScript, "7", false),
        ("[[:alpha:]_][[:alnum:]_]*", SyntaxFlag::Extended, "snake_case2", true),
    ];

    for (test_id, (pattern, dialect, input, expected)) in input_output.into_iter().enumerate() {
        let regex = create_regex(pattern, dialect.into()).unwrap();

        assert_eq!((test_id, expected), (test_id, regex.is_match(input)))
    }
}

#[test]
fn should_match_case_insensitively() {
    let regex = create_regex("hello [w-z]orld", SyntaxFlag::ICase.into()).unwrap();

    assert!(regex.is_match("HeLLo World"));
    assert!(regex.is_match("hello world"));
    assert!(!regex.is_match("hello vorld"));
}

#[test]
fn should_find_matches_within_lines() {
    let regex = create_regex("[0-9]+(\\.[0-9]+)?", SyntaxFlags::none()).unwrap();

    let input_output = [
        ("pi is 3.14!", Some(6..10)),
        ("version 2", Some(8..9)),
        ("none", None),
        ("1.", Some(0..1)),
    ];

    for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
        assert_eq!((test_id, expected), (test_id, regex.find(input)))
    }
}

#[test]
fn should_report_error_offsets() {
    let input_output = [
        ("ab)", SyntaxFlag::Extended, RegexError::new(ErrorKind::Paren, 3)),
        ("[abc", SyntaxFlag::Extended, RegexError::new(ErrorKind::Brack, 4)),
        ("a{1,x}", SyntaxFlag::Extended, RegexError::new(ErrorKind::BadBrace, 5)),
    ];

    for (test_id, (pattern, dialect, expected)) in input_output.into_iter().enumerate() {
        assert_eq!(
            (test_id, Some(expected)),
            (test_id, create_regex(pattern, dialect.into()).err())
        )
    }
}

#[test]
fn should_tokenize_without_compiling() {
    let tokens: Result<Vec<TokenType>, RegexError> = TokenSource::new("a[b-c]*", SyntaxFlags::none())
        .map(|token| token.map(|t| t.kind))
        .collect();

    assert_eq!(
        Ok(vec![
            TokenType::StringLiteral,
            TokenType::LBracket,
            TokenType::BracketLiteral,
            TokenType::RangeDash,
            TokenType::BracketLiteral,
            TokenType::RBracket,
            TokenType::RepLower,
            TokenType::RepUpper,
        ]),
        tokens
    );
}
