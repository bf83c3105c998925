use synopsis::domain::{FileType, allowed_file};

#[test]
fn given_supported_extensions_when_checking_then_allowed() {
    assert!(allowed_file("notes.txt"));
    assert!(allowed_file("paper.pdf"));
    assert!(allowed_file("report.docx"));
}

#[test]
fn given_uppercase_extension_when_checking_then_allowed() {
    assert!(allowed_file("REPORT.PDF"));
    assert_eq!(FileType::from_filename("Scan.Docx"), FileType::Docx);
}

#[test]
fn given_name_without_dot_when_checking_then_rejected() {
    assert!(!allowed_file("README"));
    assert_eq!(FileType::from_filename("README"), FileType::Unsupported);
}

#[test]
fn given_unsupported_or_empty_suffix_when_checking_then_rejected() {
    assert!(!allowed_file("image.png"));
    assert!(!allowed_file("archive."));
    assert!(!allowed_file(""));
    assert!(!allowed_file("legacy.doc"));
}

#[test]
fn given_double_extension_when_resolving_then_last_suffix_wins() {
    assert_eq!(FileType::from_filename("report.pdf.txt"), FileType::Text);
    assert!(!allowed_file("report.txt.exe"));
}

#[test]
fn given_supported_type_when_asking_extension_then_lowercase_extension() {
    assert_eq!(FileType::Pdf.extension(), Some("pdf"));
    assert_eq!(FileType::Unsupported.extension(), None);
}
