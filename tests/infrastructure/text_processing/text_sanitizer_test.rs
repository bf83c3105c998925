use synopsis::infrastructure::text_processing::{collapse_whitespace, sanitize_extracted_text};

#[test]
fn given_whitespace_runs_when_collapsing_then_single_spaces_and_trimmed() {
    assert_eq!(
        collapse_whitespace("  one\n\n two\t\tthree  "),
        "one two three"
    );
}

#[test]
fn given_compatibility_characters_when_sanitizing_then_kept_as_written() {
    assert_eq!(sanitize_extracted_text("ﬁle ① x²"), "ﬁle ① x²");
}

#[test]
fn given_decomposed_accent_when_sanitizing_then_composed() {
    assert_eq!(sanitize_extracted_text("cafe\u{0301}"), "caf\u{00e9}");
}

#[test]
fn given_non_breaking_spaces_when_sanitizing_then_collapsed() {
    assert_eq!(sanitize_extracted_text("a\u{00a0}\u{00a0}b"), "a b");
}
