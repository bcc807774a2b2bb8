use crate::error::ScanError;
use crate::models::ScanOptions;

#[derive(Debug, Clone, Copy)]
pub struct ChunkingConfig {
    pub max_chars: usize,
    pub overlap_chars: usize,
}

impl ChunkingConfig {
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.max_chars == 0 {
            return Err(ScanError::InvalidChunkConfig(
                "chunk_max_chars must be greater than zero".to_string(),
            ));
        }
        if self.overlap_chars >= self.max_chars {
            return Err(ScanError::InvalidChunkConfig(format!(
                "overlap ({}) must be smaller than chunk size ({})",
                self.overlap_chars, self.max_chars
            )));
        }
        Ok(())
    }
}

impl From<&ScanOptions> for ChunkingConfig {
    fn from(value: &ScanOptions) -> Self {
        Self {
            max_chars: value.chunk_max_chars,
            overlap_chars: value.chunk_overlap_chars,
        }
    }
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits one page of text into overlapping character windows.
///
/// Windows prefer to end on a whitespace boundary near `max_chars`; when a
/// single word overshoots the window the cut is hard. Operates on `char`
/// boundaries throughout, so multi-byte text never splits mid-character.
pub fn split_into_chunks(text: &str, config: ChunkingConfig) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() <= config.max_chars {
        let only = text.trim();
        return if only.is_empty() {
            Vec::new()
        } else {
            vec![only.to_string()]
        };
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let hard_end = (start + config.max_chars).min(chars.len());
        let end = if hard_end == chars.len() {
            hard_end
        } else {
            // Walk back to the nearest whitespace so words stay intact,
            // but never give up more than half the window.
            let floor = start + config.max_chars / 2;
            let mut candidate = hard_end;
            while candidate > floor && !chars[candidate - 1].is_whitespace() {
                candidate -= 1;
            }
            if candidate > floor {
                candidate
            } else {
                hard_end
            }
        };

        let piece: String = chars[start..end].iter().collect();
        let piece = piece.trim();
        if !piece.is_empty() {
            chunks.push(piece.to_string());
        }

        if end == chars.len() {
            break;
        }
        // Step back by the overlap, guaranteeing forward progress.
        let next = end.saturating_sub(config.overlap_chars);
        start = if next > start { next } else { end };
    }

    chunks
}
