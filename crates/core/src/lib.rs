pub mod chunking;
pub mod error;
pub mod extractor;
pub mod keywords;
pub mod loader;
pub mod matcher;
pub mod models;
pub mod report;
pub mod scanner;

#[cfg(test)]
pub(crate) mod test_support;

pub use chunking::{normalize_whitespace, split_into_chunks, ChunkingConfig};
pub use error::ScanError;
pub use extractor::{extract_page_texts, LopdfExtractor, PageText, PdfExtractor};
pub use keywords::load_keywords;
pub use loader::{discover_pdf_files, load_file_chunks, load_folder_chunks};
pub use matcher::{best_word_score, compile_patterns, KeywordPattern};
pub use models::{
    DocumentFingerprint, KeywordHit, LoadReport, MatchMode, PageChunk, ScanOptions, ScanReport,
    SkippedPdf,
};
pub use report::{render_summary, write_csv, write_json, write_text};
pub use scanner::KeywordScanner;
