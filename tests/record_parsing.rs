//! Integration tests for game record line parsing
//!
//! Covers the worked examples of the record grammar and the full error
//! taxonomy: one line in, one record or one typed error out.

use cubegame::parser::{parse_line, Color, ErrorKind};
use cubegame::testing::game;
use rstest::rstest;

#[test]
fn test_worked_example() {
    let record = parse_line("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
    let expected = game(1)
        .round(&[(3, Color::Blue), (4, Color::Red)])
        .round(&[(1, Color::Red), (2, Color::Green), (6, Color::Blue)])
        .round(&[(2, Color::Green)])
        .build();
    assert_eq!(record, expected);
}

#[test]
fn test_two_round_example() {
    let record = parse_line("Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green").unwrap();
    let expected = game(5)
        .round(&[(6, Color::Red), (1, Color::Blue), (3, Color::Green)])
        .round(&[(2, Color::Blue), (1, Color::Red), (2, Color::Green)])
        .build();
    assert_eq!(record, expected);
}

#[test]
fn test_single_cube_entries() {
    let cases = [(0, Color::Red), (7, Color::Green), (12, Color::Blue)];
    for (count, color) in cases {
        let line = format!("Game 1: {} {}", count, color);
        let record = parse_line(&line).unwrap();
        assert_eq!(record, game(1).round(&[(count, color)]).build());
    }
}

#[test]
fn test_trailing_newline_is_accepted() {
    let record = parse_line("Game 9: 1 red\n").unwrap();
    assert_eq!(record, game(9).round(&[(1, Color::Red)]).build());
}

#[test]
fn test_duplicate_colors_kept_in_order() {
    let record = parse_line("Game 2: 3 blue, 2 blue").unwrap();
    assert_eq!(
        record,
        game(2).round(&[(3, Color::Blue), (2, Color::Blue)]).build()
    );
}

#[test]
fn test_canonical_rendering_round_trips() {
    let line = "Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";
    let record = parse_line(line).unwrap();
    assert_eq!(record.to_string(), line);
    assert_eq!(parse_line(&record.to_string()).unwrap(), record);
}

#[test]
fn test_max_count_queries() {
    let record = parse_line("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
    assert_eq!(record.max_count(Color::Red), 4);
    assert_eq!(record.max_count(Color::Green), 2);
    assert_eq!(record.max_count(Color::Blue), 6);
}

#[rstest]
#[case::empty_line("", ErrorKind::MalformedHeader)]
#[case::lowercase_keyword("game 1: 1 red", ErrorKind::MalformedHeader)]
#[case::missing_id("Game : 1 red", ErrorKind::MalformedHeader)]
#[case::id_zero("Game 0: 1 red", ErrorKind::MalformedHeader)]
#[case::double_space_in_header("Game  1: 1 red", ErrorKind::MalformedHeader)]
#[case::missing_colon("Game 1 1 red", ErrorKind::MalformedHeader)]
#[case::no_space_after_colon("Game 1:1 red", ErrorKind::MalformedHeader)]
#[case::unknown_color("Game 2: 1 purple", ErrorKind::UnknownColor)]
#[case::unknown_color_second_entry("Game 2: 3 blue, 1 purple", ErrorKind::UnknownColor)]
#[case::unknown_color_second_round("Game 2: 3 blue; 1 purple", ErrorKind::UnknownColor)]
#[case::empty_round_before_semicolon("Game 3: ;", ErrorKind::EmptyRound)]
#[case::empty_round_between_semicolons("Game 3: 1 red;; 2 blue", ErrorKind::EmptyRound)]
#[case::no_rounds("Game 3: ", ErrorKind::EmptyRound)]
#[case::bare_word_round("Game 4: mauve", ErrorKind::EmptyRound)]
#[case::missing_comma("Game 4: 3 blue 4 red", ErrorKind::TrailingGarbage)]
#[case::stray_punctuation("Game 4: 3 blue!", ErrorKind::TrailingGarbage)]
fn test_rejected_lines(#[case] line: &str, #[case] expected: ErrorKind) {
    let error = parse_line(line).unwrap_err();
    assert_eq!(error.kind, expected, "line {:?} -> {:?}", line, error);
}

#[test]
fn test_error_reports_offset_and_fragment() {
    let error = parse_line("").unwrap_err();
    assert_eq!(error.kind, ErrorKind::MalformedHeader);
    assert_eq!(error.offset, 0);

    let error = parse_line("Game 2: 1 purple").unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnknownColor);
    assert_eq!(error.offset, 10);
    assert_eq!(error.fragment, "purple");

    let error = parse_line("Game 4: 3 blue 4 red").unwrap_err();
    assert_eq!(error.kind, ErrorKind::TrailingGarbage);
    assert_eq!(error.offset, 15);
    assert_eq!(error.fragment, "4 red");
}

#[test]
fn test_rejection_never_yields_partial_records() {
    // once the header is committed, a bad round fails the whole line
    assert!(parse_line("Game 6: 1 red; oops").is_err());
}
