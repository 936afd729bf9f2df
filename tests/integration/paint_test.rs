//! Integration tests for the paint, codes and swatch commands (CLI)

use crate::helpers::run_chalk;

#[test]
fn paint_foreground_only() {
    let (stdout, _stderr, exit_code) = run_chalk(&["paint", "--fg", "red", "hi"]);

    assert_eq!(exit_code, 0);
    insta::assert_debug_snapshot!(stdout, @r#""\u{1b}[31mhi\u{1b}[39m\n""#);
}

#[test]
fn paint_with_background_joins_words() {
    let (stdout, _stderr, exit_code) =
        run_chalk(&["paint", "--fg", "Blue", "--bg", "green", "hello", "world"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[42m\x1b[34mhello world\x1b[49m\x1b[39m\n");
}

#[test]
fn paint_unknown_color_is_usage_error() {
    let (stdout, stderr, exit_code) = run_chalk(&["paint", "--fg", "purple", "x"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown color 'purple'"));
}

#[test]
fn paint_requires_text() {
    let (_stdout, stderr, exit_code) = run_chalk(&["paint", "--fg", "red"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<TEXT>"));
}

#[test]
fn codes_lists_every_color() {
    let (stdout, _stderr, exit_code) = run_chalk(&["codes"]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[8], "white        7  37  47");
    assert_eq!(lines[9], "reset        9  39  49");
}

#[test]
fn swatch_prints_eight_rows() {
    let (stdout, _stderr, exit_code) = run_chalk(&["swatch"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.starts_with("\x1b[40m\x1b[30m  black  \x1b[49m\x1b[39m"));
}
