use crate::error::ScanError;
use crate::matcher::{best_word_score, compile_patterns};
use crate::models::{KeywordHit, MatchMode, PageChunk, ScanOptions, ScanReport};
use std::collections::HashSet;

const SNIPPET_CHARS: usize = 200;

/// Runs one matching mode over every chunk × keyword pair.
pub struct KeywordScanner {
    options: ScanOptions,
}

impl KeywordScanner {
    pub fn new(options: ScanOptions) -> Result<Self, ScanError> {
        if !(0.0..=1.0).contains(&options.fuzzy_threshold) {
            return Err(ScanError::InvalidArgument(format!(
                "fuzzy threshold must be within 0..=1, got {}",
                options.fuzzy_threshold
            )));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn scan(&self, chunks: &[PageChunk], keywords: &[String]) -> Result<ScanReport, ScanError> {
        let hits = match self.options.mode {
            MatchMode::Exact => self.scan_exact(chunks, keywords)?,
            MatchMode::Fuzzy => self.scan_fuzzy(chunks, keywords),
        };

        let matched: HashSet<&str> = hits.iter().map(|hit| hit.keyword.as_str()).collect();

        Ok(ScanReport {
            mode: self.options.mode,
            keywords_total: keywords.len(),
            keywords_matched: matched.len(),
            chunks_scanned: chunks.len(),
            hits,
        })
    }

    fn scan_exact(
        &self,
        chunks: &[PageChunk],
        keywords: &[String],
    ) -> Result<Vec<KeywordHit>, ScanError> {
        let patterns = compile_patterns(keywords)?;
        let mut hits = Vec::new();

        for chunk in chunks {
            for pattern in &patterns {
                if pattern.is_match(&chunk.text_raw) {
                    hits.push(make_hit(chunk, &pattern.keyword, 1.0));
                }
            }
        }

        Ok(hits)
    }

    fn scan_fuzzy(&self, chunks: &[PageChunk], keywords: &[String]) -> Vec<KeywordHit> {
        let mut hits = Vec::new();

        for chunk in chunks {
            for keyword in keywords {
                if let Some(score) = best_word_score(keyword, &chunk.text_raw) {
                    if score >= self.options.fuzzy_threshold {
                        hits.push(make_hit(chunk, keyword, score));
                    }
                }
            }
        }

        hits
    }
}

fn make_hit(chunk: &PageChunk, keyword: &str, score: f64) -> KeywordHit {
    KeywordHit {
        keyword: keyword.to_string(),
        source_path: chunk.source_path.clone(),
        title: chunk.title.clone(),
        page: chunk.page,
        chunk_index: chunk.chunk_index,
        score,
        snippet: snippet(&chunk.text_raw),
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}
