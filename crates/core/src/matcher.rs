use crate::error::ScanError;
use regex::Regex;

/// A keyword with its compiled whole-word pattern.
///
/// Exact mode is a case-insensitive word-boundary search, so "nexium" matches
/// "Nexium." but not "Nexiumol". A keyword made only of non-word characters
/// keeps a valid pattern whose boundaries require adjacent word characters:
/// "???" matches inside "a???b" but not surrounded by spaces.
#[derive(Debug)]
pub struct KeywordPattern {
    pub keyword: String,
    regex: Regex,
}

impl KeywordPattern {
    pub fn compile(keyword: &str) -> Result<Self, ScanError> {
        let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))?;
        Ok(Self {
            keyword: keyword.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

pub fn compile_patterns(keywords: &[String]) -> Result<Vec<KeywordPattern>, ScanError> {
    keywords.iter().map(|k| KeywordPattern::compile(k)).collect()
}

/// Best fuzzy similarity of `keyword` against the individual words of `text`.
///
/// Words are whitespace-split and trimmed of edge punctuation before the
/// comparison; both sides are lowercased. Returns `None` for text with no
/// comparable words.
pub fn best_word_score(keyword: &str, text: &str) -> Option<f64> {
    let needle = keyword.to_lowercase();
    if needle.is_empty() {
        return None;
    }

    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .map(|word| strsim::normalized_levenshtein(&needle, &word.to_lowercase()))
        .fold(None, |best, score| match best {
            Some(current) if current >= score => Some(current),
            _ => Some(score),
        })
}

#[cfg(test)]
mod tests {
    use super::{best_word_score, compile_patterns, KeywordPattern};

    #[test]
    fn exact_match_is_case_insensitive_whole_word() {
        let pattern = KeywordPattern::compile("Nexium").unwrap();

        assert!(pattern.is_match("prescribed NEXIUM twice daily"));
        assert!(pattern.is_match("switch to nexium."));
        assert!(!pattern.is_match("nexiumol is something else"));
        assert!(!pattern.is_match("no mention here"));
    }

    #[test]
    fn exact_match_handles_multiword_and_hyphenated_keywords() {
        let pattern = KeywordPattern::compile("COVID-19 Vaccine").unwrap();

        assert!(pattern.is_match("the covid-19 vaccine rollout"));
        assert!(!pattern.is_match("covid-19 vaccination"));
    }

    #[test]
    fn regex_metacharacters_in_keywords_are_escaped() {
        let pattern = KeywordPattern::compile("A.B").unwrap();
        assert!(pattern.is_match("per the A.B standard"));
        assert!(!pattern.is_match("per the AxB standard"));
    }

    #[test]
    fn nonword_keyword_needs_word_characters_on_both_sides() {
        let pattern = KeywordPattern::compile("???").unwrap();

        assert!(pattern.is_match("section a???b continues"));
        assert!(!pattern.is_match("say ??? loudly"));
        assert!(!pattern.is_match("???"));

        let dashes = KeywordPattern::compile("--").unwrap();
        assert!(dashes.is_match("x--y"));
        assert!(!dashes.is_match(" -- "));
    }

    #[test]
    fn compile_patterns_keeps_keyword_order() {
        let keywords = vec!["alpha".to_string(), "beta".to_string()];
        let patterns = compile_patterns(&keywords).unwrap();
        assert_eq!(patterns[0].keyword, "alpha");
        assert_eq!(patterns[1].keyword, "beta");
    }

    #[test]
    fn fuzzy_score_is_exact_for_identical_word() {
        let score = best_word_score("Tamoxifen", "took tamoxifen, daily").unwrap();
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fuzzy_score_tolerates_a_dropped_letter() {
        let score = best_word_score("Tamoxifen", "records mention tamoxifn here").unwrap();
        assert!(score >= 0.85, "score was {score}");
    }

    #[test]
    fn fuzzy_score_stays_low_for_unrelated_words() {
        let score = best_word_score("Tamoxifen", "completely unrelated prose").unwrap();
        assert!(score < 0.5, "score was {score}");
    }

    #[test]
    fn fuzzy_score_is_none_without_comparable_words() {
        assert!(best_word_score("Tamoxifen", " --- ... ").is_none());
        assert!(best_word_score("", "some words").is_none());
    }
}
