pub mod conversion;
pub mod llm;
pub mod observability;
pub mod storage;
pub mod text_processing;
pub mod web;
