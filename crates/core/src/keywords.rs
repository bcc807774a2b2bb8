use crate::error::ScanError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Loads the keyword list from a `.txt` (one keyword per line) or `.csv`
/// (every non-empty cell of every column) file.
///
/// Duplicates are dropped, first occurrence wins, order is preserved.
pub fn load_keywords(path: &Path) -> Result<Vec<String>, ScanError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("txt") => load_from_text(path),
        Some("csv") => load_from_csv(path),
        _ => Err(ScanError::UnsupportedKeywordFile(
            path.display().to_string(),
        )),
    }
}

fn load_from_text(path: &Path) -> Result<Vec<String>, ScanError> {
    let raw = fs::read_to_string(path)?;
    Ok(dedupe_preserving_order(
        raw.lines().map(|line| line.trim().to_string()),
    ))
}

fn load_from_csv(path: &Path) -> Result<Vec<String>, ScanError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record?;
        for field in record.iter() {
            cells.push(field.trim().to_string());
        }
    }

    Ok(dedupe_preserving_order(cells.into_iter()))
}

fn dedupe_preserving_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| !item.is_empty())
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::load_keywords;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn text_file_is_one_keyword_per_line() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("keywords.txt");
        fs::write(&path, "Tamoxifen\n\n  Crestor  \nTamoxifen\n")?;

        let keywords = load_keywords(&path)?;
        assert_eq!(keywords, vec!["Tamoxifen", "Crestor"]);
        Ok(())
    }

    #[test]
    fn csv_file_collects_every_column() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("keywords.csv");
        fs::write(&path, "Tamoxifen,Crestor\nIressa,\nTamoxifen,Lynparza\n")?;

        let keywords = load_keywords(&path)?;
        assert_eq!(keywords, vec!["Tamoxifen", "Crestor", "Iressa", "Lynparza"]);
        Ok(())
    }

    #[test]
    fn unknown_extension_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("keywords.xlsx");
        fs::write(&path, b"not really a spreadsheet")?;

        assert!(load_keywords(&path).is_err());
        Ok(())
    }

    #[test]
    fn blank_only_file_yields_empty_list() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("keywords.txt");
        fs::write(&path, "\n   \n\n")?;

        let keywords = load_keywords(&path)?;
        assert!(keywords.is_empty());
        Ok(())
    }
}
