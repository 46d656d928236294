use super::*;

#[test]
fn truncate_respects_wide_glyphs() {
    assert_eq!(truncate_to_width("hello", 3), 3);
    assert_eq!(truncate_to_width("日本語", 3), "日".len());
    assert_eq!(truncate_to_width("日本語", 4), "日本".len());
    assert_eq!(truncate_to_width("abc", 0), 0);
}

#[test]
fn wrap_breaks_on_spaces() {
    let lines = wrap("Do you want to quit?", 12);
    assert_eq!(lines, vec!["Do you want", "to quit?"]);
}

#[test]
fn wrap_keeps_line_that_fits() {
    assert_eq!(wrap("Do you want to quit?", 20), vec!["Do you want to quit?"]);
}

#[test]
fn wrap_splits_overlong_words() {
    assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
}

#[test]
fn wrap_honours_explicit_newlines() {
    assert_eq!(wrap("one\ntwo", 10), vec!["one", "two"]);
}

#[test]
fn wrap_edge_cases() {
    assert_eq!(wrap("", 5), vec![String::new()]);
    assert!(wrap("anything", 0).is_empty());
}

#[test]
fn wrapped_lines_never_exceed_width() {
    let text = "In a dialogbox you can select buttons or press <esc>";
    for width in 1..60u16 {
        for line in wrap(text, width) {
            assert!(display_width(&line) <= width, "{line:?} wider than {width}");
        }
    }
}
