use unicode_normalization::UnicodeNormalization;

/// Composes extracted text to NFC, collapses every whitespace run (newlines
/// included) to a single space and trims the result. Compatibility
/// characters such as ligatures and superscripts are left as written.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfc().collect();
    collapse_whitespace(&normalized)
}

/// Collapses every whitespace run to one space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }

    result
}
