use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use pdf_keyword_core::{
    extract_page_texts, load_folder_chunks, load_keywords, render_summary, write_csv, write_json,
    write_text, KeywordScanner, MatchMode, ScanOptions,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pdf-keyword-scan", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Exact,
    Fuzzy,
}

impl From<ModeArg> for MatchMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Exact => MatchMode::Exact,
            ModeArg::Fuzzy => MatchMode::Fuzzy,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
    Text,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a folder of PDFs for a keyword list and print the match report.
    Scan {
        /// Folder that contains PDFs recursively.
        #[arg(long)]
        folder: PathBuf,
        /// Keyword list, .txt (one per line) or .csv (all columns).
        #[arg(long)]
        keywords: PathBuf,
        /// Matching strategy.
        #[arg(long, value_enum, default_value_t = ModeArg::Exact)]
        mode: ModeArg,
        /// Minimum similarity for fuzzy matches, between 0 and 1.
        #[arg(long, default_value_t = 0.85)]
        threshold: f64,
        /// Worker threads for parallel PDF loading.
        #[arg(long, default_value_t = 4)]
        workers: usize,
        /// Maximum characters per chunk.
        #[arg(long, default_value_t = 1_000)]
        chunk_max_chars: usize,
        /// Characters of overlap between consecutive chunks.
        #[arg(long, default_value_t = 200)]
        chunk_overlap_chars: usize,
        /// Matches printed per keyword in the summary.
        #[arg(long, default_value_t = 3)]
        limit: usize,
        /// Write the full result set to this path.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Export format used with --output.
        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,
    },
    /// Print the extracted page text of a single PDF.
    Extract {
        /// Path to the PDF.
        #[arg(long)]
        file: PathBuf,
        /// Maximum number of pages to print.
        #[arg(long, default_value_t = 2)]
        max_pages: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        "pdf-keyword-scan boot"
    );

    match cli.command {
        Command::Scan {
            folder,
            keywords,
            mode,
            threshold,
            workers,
            chunk_max_chars,
            chunk_overlap_chars,
            limit,
            output,
            format,
        } => {
            let keyword_list = load_keywords(&keywords)?;
            if keyword_list.is_empty() {
                anyhow::bail!("keyword file {} contained no keywords", keywords.display());
            }
            info!(
                keyword_count = keyword_list.len(),
                file = %keywords.display(),
                "keywords loaded"
            );

            let options = ScanOptions {
                mode: mode.into(),
                fuzzy_threshold: threshold,
                chunk_max_chars,
                chunk_overlap_chars,
                workers,
            };
            let scanner = KeywordScanner::new(options.clone())?;

            let load_report = load_folder_chunks(&folder, &options)?;
            if !load_report.skipped.is_empty() {
                warn!(
                    "skipped_files={} for folder={}",
                    load_report.skipped.len(),
                    folder.display()
                );
                for skipped in &load_report.skipped {
                    warn!(path = %skipped.path.display(), reason = %skipped.reason, "skipped pdf");
                }
            }
            info!(
                documents = load_report.documents.len(),
                chunks = load_report.chunks.len(),
                "documents loaded"
            );

            let report = scanner.scan(&load_report.chunks, &keyword_list)?;
            print!("{}", render_summary(&report, limit));

            if let Some(path) = output {
                match format {
                    FormatArg::Csv => write_csv(&report, &path)?,
                    FormatArg::Json => write_json(&report, &path)?,
                    FormatArg::Text => write_text(&report, &path, limit)?,
                }
                println!(
                    "results written to {} at {}",
                    path.display(),
                    Utc::now().to_rfc3339()
                );
            }
        }
        Command::Extract { file, max_pages } => {
            let pages = extract_page_texts(&file)?;
            for (index, page) in pages.iter().enumerate() {
                if index >= max_pages {
                    break;
                }
                println!("[page {}]\n{}", page.number, page.text);
            }
            if pages.len() > max_pages {
                println!("... output truncated to first {max_pages} page(s)");
            }
        }
    }

    Ok(())
}
