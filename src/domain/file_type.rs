/// Upload formats the service knows how to read, resolved once from the
/// filename at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Text,
    Pdf,
    Docx,
    Unsupported,
}

impl FileType {
    pub fn from_filename(filename: &str) -> Self {
        let Some((_, suffix)) = filename.rsplit_once('.') else {
            return Self::Unsupported;
        };

        match suffix.to_lowercase().as_str() {
            "txt" => Self::Text,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            _ => Self::Unsupported,
        }
    }

    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Text => Some("txt"),
            Self::Pdf => Some("pdf"),
            Self::Docx => Some("docx"),
            Self::Unsupported => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

/// Returns true when the lowercased suffix after the last `.` is one of
/// `txt`, `pdf` or `docx`.
pub fn allowed_file(filename: &str) -> bool {
    FileType::from_filename(filename).is_supported()
}
