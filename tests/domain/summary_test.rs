use std::time::Duration;

use synopsis::domain::{SummaryRequest, SummaryRole, truncate_chars};

#[test]
fn given_long_text_when_building_request_then_truncated_to_max_chars() {
    let text = "a".repeat(5000);

    let request = SummaryRequest::new(SummaryRole::Document, &text, 4000);

    assert_eq!(request.source_text.chars().count(), 4000);
}

#[test]
fn given_multibyte_text_when_truncating_then_cuts_on_char_boundary() {
    let text = "héllo wörld";

    assert_eq!(truncate_chars(text, 4), "héll");
    assert_eq!(truncate_chars(text, 100), text);
}

#[test]
fn given_short_text_when_building_request_then_kept_whole() {
    let request = SummaryRequest::new(SummaryRole::Webpage, "short", 4000);

    assert_eq!(request.source_text, "short");
    assert_eq!(request.timeout, None);
}

#[test]
fn given_roles_when_reading_instructions_then_both_require_input_language() {
    for role in [SummaryRole::Document, SummaryRole::Webpage] {
        assert!(role.instruction().contains("same language"));
    }
    assert_ne!(
        SummaryRole::Document.instruction(),
        SummaryRole::Webpage.instruction()
    );
}

#[test]
fn given_timeout_when_building_request_then_carried() {
    let request = SummaryRequest::new(SummaryRole::Document, "text", 10)
        .with_timeout(Duration::from_secs(30));

    assert_eq!(request.timeout, Some(Duration::from_secs(30)));
}
