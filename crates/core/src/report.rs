use crate::error::ScanError;
use crate::models::ScanReport;
use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

const DIVIDER: &str = "--------------------------------------------------------------------------------";

/// Renders the per-keyword console summary, capped at `limit_per_keyword`
/// matches for each keyword.
pub fn render_summary(report: &ScanReport, limit_per_keyword: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Keyword Search Results ===");
    let _ = writeln!(
        out,
        "mode={} keywords_matched={}/{} chunks_scanned={}",
        report.mode, report.keywords_matched, report.keywords_total, report.chunks_scanned
    );

    if report.hits.is_empty() {
        let _ = writeln!(out, "\nno matches");
        return out;
    }

    for (keyword, hits) in report.hits_by_keyword() {
        let _ = writeln!(out, "\n{} (found in {} locations):", keyword, hits.len());

        for (index, hit) in hits.iter().take(limit_per_keyword).enumerate() {
            let _ = writeln!(
                out,
                "\nmatch {} | {} | page {} | score {:.2}",
                index + 1,
                hit.title,
                hit.page,
                hit.score
            );
            let _ = writeln!(out, "{}...", hit.snippet);
            let _ = writeln!(out, "{DIVIDER}");
        }

        if hits.len() > limit_per_keyword {
            let _ = writeln!(
                out,
                "... {} more match(es) not shown",
                hits.len() - limit_per_keyword
            );
        }
    }

    out
}

/// Writes one row per hit: file, keyword, page, score, snippet.
pub fn write_csv(report: &ScanReport, path: &Path) -> Result<(), ScanError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["file", "keyword", "page", "score", "snippet"])?;

    for hit in &report.hits {
        writer.write_record([
            hit.title.as_str(),
            hit.keyword.as_str(),
            &hit.page.to_string(),
            &format!("{:.4}", hit.score),
            hit.snippet.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_json(report: &ScanReport, path: &Path) -> Result<(), ScanError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

pub fn write_text(
    report: &ScanReport,
    path: &Path,
    limit_per_keyword: usize,
) -> Result<(), ScanError> {
    std::fs::write(path, render_summary(report, limit_per_keyword))?;
    Ok(())
}
