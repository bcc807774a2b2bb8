use crate::chunking::{normalize_whitespace, split_into_chunks, ChunkingConfig};
use crate::error::ScanError;
use crate::extractor::extract_page_texts;
use crate::models::{DocumentFingerprint, LoadReport, PageChunk, ScanOptions, SkippedPdf};
use chrono::Utc;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn discover_pdf_files(folder: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .into_iter()
        .filter_map(|item| item.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let is_pdf = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort_unstable();
    files
}

pub fn digest_file(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Extracts and chunks every PDF under `folder`.
///
/// Files are processed on a fixed-size worker pool; each file is independent,
/// so a parse failure only lands that file in `LoadReport::skipped`. The
/// returned chunks are re-sorted by path, page and index so the report is
/// deterministic regardless of worker scheduling.
pub fn load_folder_chunks(folder: &Path, options: &ScanOptions) -> Result<LoadReport, ScanError> {
    let files = discover_pdf_files(folder);

    if files.is_empty() {
        return Err(ScanError::InvalidArgument(format!(
            "no pdf files found in {}",
            folder.display()
        )));
    }

    ChunkingConfig::from(options).validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers.max(1))
        .build()
        .map_err(|error| ScanError::InvalidArgument(error.to_string()))?;

    let outcomes: Vec<(PathBuf, Result<(DocumentFingerprint, Vec<PageChunk>), ScanError>)> =
        pool.install(|| {
            files
                .par_iter()
                .map(|path| (path.clone(), load_file_chunks(path, options)))
                .collect()
        });

    let mut chunks = Vec::new();
    let mut documents = Vec::new();
    let mut skipped = Vec::new();

    for (path, outcome) in outcomes {
        match outcome {
            Ok((fingerprint, file_chunks)) => {
                documents.push(fingerprint);
                chunks.extend(file_chunks);
            }
            Err(error) => skipped.push(SkippedPdf {
                path,
                reason: error.to_string(),
            }),
        }
    }

    chunks.sort_by(|left, right| {
        (left.source_path.as_str(), left.page, left.chunk_index).cmp(&(
            right.source_path.as_str(),
            right.page,
            right.chunk_index,
        ))
    });
    documents.sort_by(|left, right| left.source_path.cmp(&right.source_path));

    Ok(LoadReport {
        chunks,
        documents,
        skipped,
    })
}

/// Extracts and chunks a single PDF, keeping page attribution intact.
pub fn load_file_chunks(
    path: &Path,
    options: &ScanOptions,
) -> Result<(DocumentFingerprint, Vec<PageChunk>), ScanError> {
    let fingerprint = build_document_fingerprint(path)?;
    let config = ChunkingConfig::from(options);
    let pages = extract_page_texts(path)?;

    let mut chunks = Vec::new();
    let mut cursor = 0u64;

    for page in pages {
        let normalized = normalize_whitespace(&page.text);
        for raw_chunk in split_into_chunks(&normalized, config) {
            let chunk_id = make_chunk_id(&fingerprint.document_id, page.number, cursor, &raw_chunk);
            chunks.push(PageChunk {
                chunk_id,
                document_id: fingerprint.document_id.clone(),
                source_path: fingerprint.source_path.clone(),
                title: fingerprint.document_title.clone(),
                page: page.number,
                chunk_index: cursor,
                text_normalized: normalize_whitespace(&raw_chunk),
                text_raw: raw_chunk,
            });
            cursor = cursor.saturating_add(1);
        }
    }

    Ok((fingerprint, chunks))
}

fn build_document_fingerprint(path: &Path) -> Result<DocumentFingerprint, ScanError> {
    let checksum = digest_file(path)?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            ScanError::MissingFileName(format!("path missing filename: {}", path.display()))
        })?;

    Ok(DocumentFingerprint {
        document_id: generate_document_id(path),
        document_title: name.to_string(),
        source_path: path.to_string_lossy().to_string(),
        checksum,
        loaded_at: Utc::now(),
    })
}

fn generate_document_id(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    format!("{:x}", hasher.finalize())
}

fn make_chunk_id(document_id: &str, page: u32, index: u64, text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document_id.as_bytes());
    hasher.update(page.to_le_bytes());
    hasher.update(index.to_le_bytes());
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
