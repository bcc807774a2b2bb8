use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFingerprint {
    pub document_id: String,
    pub document_title: String,
    pub source_path: String,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// One unit of extracted text, tied to exactly one page of one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageChunk {
    pub chunk_id: String,
    pub document_id: String,
    pub source_path: String,
    pub title: String,
    pub page: u32,
    pub chunk_index: u64,
    pub text_raw: String,
    pub text_normalized: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Exact,
    Fuzzy,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// A single keyword occurrence inside one chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub source_path: String,
    pub title: String,
    pub page: u32,
    pub chunk_index: u64,
    /// 1.0 for exact matches, the similarity score for fuzzy matches.
    pub score: f64,
    pub snippet: String,
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub mode: MatchMode,
    pub fuzzy_threshold: f64,
    pub chunk_max_chars: usize,
    pub chunk_overlap_chars: usize,
    pub workers: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::Exact,
            fuzzy_threshold: 0.85,
            chunk_max_chars: 1_000,
            chunk_overlap_chars: 200,
            workers: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedPdf {
    pub path: std::path::PathBuf,
    pub reason: String,
}

/// Outcome of loading a folder: usable chunks plus the files that failed.
#[derive(Debug)]
pub struct LoadReport {
    pub chunks: Vec<PageChunk>,
    pub documents: Vec<DocumentFingerprint>,
    pub skipped: Vec<SkippedPdf>,
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub mode: MatchMode,
    pub hits: Vec<KeywordHit>,
    pub keywords_total: usize,
    pub keywords_matched: usize,
    pub chunks_scanned: usize,
}

impl ScanReport {
    /// Groups hits per keyword, preserving the order keywords were supplied in.
    pub fn hits_by_keyword(&self) -> Vec<(&str, Vec<&KeywordHit>)> {
        let mut order: Vec<&str> = Vec::new();
        let mut grouped: std::collections::HashMap<&str, Vec<&KeywordHit>> =
            std::collections::HashMap::new();

        for hit in &self.hits {
            let entry = grouped.entry(hit.keyword.as_str()).or_default();
            if entry.is_empty() {
                order.push(hit.keyword.as_str());
            }
            entry.push(hit);
        }

        order
            .into_iter()
            .map(|keyword| (keyword, grouped.remove(keyword).unwrap_or_default()))
            .collect()
    }
}
