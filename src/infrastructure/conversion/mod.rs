mod pdf_to_docx_converter;

pub use pdf_to_docx_converter::PdfToDocxConverter;
