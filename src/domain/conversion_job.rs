use std::ops::Range;
use std::path::PathBuf;

/// Zero-based page window, end exclusive. `end: None` runs to the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl PageRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Clamps the window to a document of `page_count` pages.
    pub fn clamp(&self, page_count: usize) -> Range<usize> {
        let end = self.end.map_or(page_count, |e| e.min(page_count));
        let start = self.start.min(end);
        start..end
    }

    /// Splits `0..page_count` into consecutive windows of `size` pages.
    pub fn windows(page_count: usize, size: usize) -> Vec<PageRange> {
        let size = size.max(1);
        (0..page_count)
            .step_by(size)
            .map(|start| PageRange::new(start, Some((start + size).min(page_count))))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Append,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionJob {
    pub source_pdf: PathBuf,
    pub target_docx: PathBuf,
    pub page_range: PageRange,
    pub mode: WriteMode,
}

impl ConversionJob {
    pub fn new(source_pdf: PathBuf, target_docx: PathBuf) -> Self {
        Self {
            source_pdf,
            target_docx,
            page_range: PageRange::all(),
            mode: WriteMode::Create,
        }
    }

    pub fn window(&self, page_range: PageRange, mode: WriteMode) -> Self {
        Self {
            source_pdf: self.source_pdf.clone(),
            target_docx: self.target_docx.clone(),
            page_range,
            mode,
        }
    }
}
