use std::time::Duration;

/// What kind of source the summary is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryRole {
    Document,
    Webpage,
}

impl SummaryRole {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Document => {
                "You are a helpful assistant that summarizes text. \
                 The summary must be written in the same language as the input."
            }
            Self::Webpage => {
                "You are a helpful assistant that summarizes the main content of webpages. \
                 Ignore navigation leftovers and write the summary in the same language as the page."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub system_instruction: String,
    pub source_text: String,
    pub timeout: Option<Duration>,
}

impl SummaryRequest {
    /// Builds a request whose source text holds at most `max_chars`
    /// characters. Longer input is cut, never rejected.
    pub fn new(role: SummaryRole, text: &str, max_chars: usize) -> Self {
        Self {
            system_instruction: role.instruction().to_string(),
            source_text: truncate_chars(text, max_chars).to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Cuts `text` to its first `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
