//! Content quality heuristics: title/description length, keyword density and
//! an aggregate SEO score.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const TITLE_MIN: usize = 30;
pub const TITLE_MAX: usize = 60;
pub const DESCRIPTION_MIN: usize = 120;
pub const DESCRIPTION_MAX: usize = 160;
pub const DENSITY_MIN: f64 = 0.5;
pub const DENSITY_MAX: f64 = 2.5;

const TITLE_PENALTY: i32 = 15;
const DESCRIPTION_PENALTY: i32 = 10;
const KEYWORD_PENALTY: i32 = 5;

static PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthCheck {
    pub is_valid: bool,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensity {
    pub keyword: String,
    pub count: usize,
    pub total_words: usize,
    /// Percentage of tokens that start a keyword match
    pub density: f64,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoScore {
    pub score: u32,
    pub issues: Vec<String>,
}

fn check_length(label: &str, text: &str, min: usize, max: usize) -> LengthCheck {
    let length = text.chars().count();
    let message = if length < min {
        Some(format!(
            "{} is too short ({} characters). Aim for {}-{} characters.",
            label, length, min, max
        ))
    } else if length > max {
        Some(format!(
            "{} is too long ({} characters). Aim for {}-{} characters.",
            label, length, min, max
        ))
    } else {
        None
    };

    LengthCheck {
        is_valid: message.is_none(),
        length,
        message,
    }
}

pub fn validate_title_length(title: &str) -> LengthCheck {
    check_length("Title", title, TITLE_MIN, TITLE_MAX)
}

pub fn validate_description_length(description: &str) -> LengthCheck {
    check_length("Description", description, DESCRIPTION_MIN, DESCRIPTION_MAX)
}

/// Lowercase, drop punctuation and split on whitespace.
fn tokenize(text: &str) -> Vec<String> {
    let regex = PUNCTUATION_REGEX.get_or_init(|| Regex::new(r"[^\p{L}\p{N}\s]").unwrap());
    regex
        .replace_all(&text.to_lowercase(), "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Share of `text` taken by `keyword`, as a percentage of its tokens.
///
/// Multi-word keywords match runs of consecutive tokens.
pub fn keyword_density(text: &str, keyword: &str) -> KeywordDensity {
    let tokens = tokenize(text);
    let needle = tokenize(keyword);
    let total_words = tokens.len();

    let count = if needle.is_empty() || needle.len() > total_words {
        0
    } else {
        tokens
            .windows(needle.len())
            .filter(|window| *window == needle.as_slice())
            .count()
    };

    let density = if total_words == 0 {
        0.0
    } else {
        count as f64 / total_words as f64 * 100.0
    };

    let message = if density < DENSITY_MIN {
        Some(format!(
            "Keyword density too low ({:.2}%). Aim for {}-{}%.",
            density, DENSITY_MIN, DENSITY_MAX
        ))
    } else if density > DENSITY_MAX {
        Some(format!(
            "Keyword density too high ({:.2}%). Risk of keyword stuffing.",
            density
        ))
    } else {
        None
    };

    KeywordDensity {
        keyword: keyword.to_string(),
        count,
        total_words,
        density,
        is_valid: message.is_none(),
        message,
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{}...", kept)
}

fn append_if_fits(base: String, suffix: &str, max: usize) -> String {
    let candidate = format!("{}{}", base, suffix);
    if candidate.chars().count() <= max {
        candidate
    } else {
        base
    }
}

/// Work `keyword` and `brand` into `title` where they fit within the title limit.
pub fn optimize_title(title: &str, keyword: Option<&str>, brand: Option<&str>) -> String {
    let mut result = title.trim().to_string();

    if let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) {
        if !result.to_lowercase().contains(&keyword.to_lowercase()) {
            result = append_if_fits(result, &format!(" - {}", keyword), TITLE_MAX);
        }
    }

    if let Some(brand) = brand.map(str::trim).filter(|b| !b.is_empty()) {
        if !result.contains(brand) {
            result = append_if_fits(result, &format!(" | {}", brand), TITLE_MAX);
        }
    }

    truncate(&result, TITLE_MAX)
}

/// Append a call to action when it fits within the description limit.
pub fn optimize_description(description: &str, cta: Option<&str>) -> String {
    let mut result = description.trim().to_string();

    if let Some(cta) = cta.map(str::trim).filter(|c| !c.is_empty()) {
        result = append_if_fits(result, &format!(" {}", cta), DESCRIPTION_MAX);
    }

    truncate(&result, DESCRIPTION_MAX)
}

/// Score a page from 100 down, collecting one issue per failed check.
pub fn validate_seo<K: AsRef<str>>(
    title: &str,
    description: &str,
    keywords: &[K],
    content: &str,
) -> SeoScore {
    let mut score = 100;
    let mut issues = Vec::new();

    let title_check = validate_title_length(title);
    if let Some(message) = title_check.message {
        score -= TITLE_PENALTY;
        issues.push(message);
    }

    let description_check = validate_description_length(description);
    if let Some(message) = description_check.message {
        score -= DESCRIPTION_PENALTY;
        issues.push(message);
    }

    for keyword in keywords {
        let density = keyword_density(content, keyword.as_ref());
        if let Some(message) = density.message {
            score -= KEYWORD_PENALTY;
            issues.push(format!("\"{}\": {}", density.keyword, message));
        }
    }

    SeoScore {
        score: score.max(0) as u32,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_with_keyword(total: usize, hits: usize, keyword: &str) -> String {
        let mut words: Vec<String> = (0..total - hits).map(|i| format!("word{}", i)).collect();
        for _ in 0..hits {
            words.push(keyword.to_string());
        }
        words.join(" ")
    }

    // ==================== Length Tests ====================

    #[test]
    fn test_title_length_bounds() {
        let short = validate_title_length(&"x".repeat(25));
        assert!(!short.is_valid);
        assert_eq!(short.length, 25);
        assert!(short.message.unwrap().contains("too short"));

        assert!(validate_title_length(&"x".repeat(55)).is_valid);
        assert!(validate_title_length(&"x".repeat(30)).is_valid);
        assert!(validate_title_length(&"x".repeat(60)).is_valid);

        let long = validate_title_length(&"x".repeat(61));
        assert!(long.message.unwrap().contains("too long"));
    }

    #[test]
    fn test_description_length_bounds() {
        assert!(!validate_description_length(&"x".repeat(119)).is_valid);
        assert!(validate_description_length(&"x".repeat(120)).is_valid);
        assert!(validate_description_length(&"x".repeat(160)).is_valid);
        assert!(!validate_description_length(&"x".repeat(161)).is_valid);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(validate_title_length("Référencement").length, 13);
    }

    // ==================== Density Tests ====================

    #[test]
    fn test_one_in_hundred_is_valid() {
        let text = text_with_keyword(100, 1, "seo");
        let result = keyword_density(&text, "seo");

        assert_eq!(result.count, 1);
        assert_eq!(result.total_words, 100);
        assert!((result.density - 1.0).abs() < f64::EPSILON);
        assert!(result.is_valid);
    }

    #[test]
    fn test_density_is_case_and_punctuation_insensitive() {
        let result = keyword_density("SEO, seo! Seo. other", "seo");
        assert_eq!(result.count, 3);
        assert_eq!(result.total_words, 4);
    }

    #[test]
    fn test_density_too_low() {
        let text = text_with_keyword(300, 1, "seo");
        let result = keyword_density(&text, "seo");
        assert!(!result.is_valid);
        assert!(result.message.unwrap().contains("too low"));
    }

    #[test]
    fn test_density_stuffing() {
        let text = text_with_keyword(20, 5, "seo");
        let result = keyword_density(&text, "seo");
        assert!(!result.is_valid);
        assert!(result.message.unwrap().contains("keyword stuffing"));
    }

    #[test]
    fn test_multi_word_keyword() {
        let mut text = text_with_keyword(98, 0, "");
        text.push_str(" SEO audit");
        let result = keyword_density(&text, "seo audit");

        assert_eq!(result.count, 1);
        assert_eq!(result.total_words, 100);
        assert!(result.is_valid);
    }

    #[test]
    fn test_empty_text() {
        let result = keyword_density("", "seo");
        assert_eq!(result.density, 0.0);
        assert!(!result.is_valid);
    }

    // ==================== Optimizer Tests ====================

    #[test]
    fn test_optimize_title_appends_when_it_fits() {
        let title = optimize_title("Technical Audits", Some("SEO"), Some("AI SEO Turbo"));
        assert_eq!(title, "Technical Audits - SEO | AI SEO Turbo");
    }

    #[test]
    fn test_optimize_title_skips_existing_keyword() {
        let title = optimize_title("SEO Audits for Teams", Some("seo"), None);
        assert_eq!(title, "SEO Audits for Teams");
    }

    #[test]
    fn test_optimize_title_skips_brand_that_does_not_fit() {
        let base = "x".repeat(55);
        assert_eq!(optimize_title(&base, None, Some("AI SEO Turbo")), base);
    }

    #[test]
    fn test_optimize_title_truncates() {
        let title = optimize_title(&"word ".repeat(20), None, None);
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), TITLE_MAX);
    }

    #[test]
    fn test_truncation_keeps_space_at_cut() {
        let title = optimize_title(&format!("{} {}", "a".repeat(56), "b".repeat(10)), None, None);
        assert_eq!(title, format!("{} ...", "a".repeat(56)));
        assert_eq!(title.chars().count(), TITLE_MAX);
    }

    #[test]
    fn test_optimize_description() {
        let description = optimize_description("Audit your site.", Some("Start free today."));
        assert_eq!(description, "Audit your site. Start free today.");

        let long = optimize_description(&"a".repeat(200), Some("Go"));
        assert_eq!(long.chars().count(), 160);
        assert!(long.ends_with("..."));
    }

    // ==================== Score Tests ====================

    #[test]
    fn test_perfect_score() {
        let title = "x".repeat(45);
        let description = "y".repeat(140);
        let content = text_with_keyword(100, 2, "audit");

        let result = validate_seo(&title, &description, &["audit"], &content);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_penalties_accumulate() {
        let content = text_with_keyword(100, 1, "audit");
        let result = validate_seo("short", "short", &["audit", "missing", "absent"], &content);

        assert_eq!(result.score, 100 - 15 - 10 - 5 - 5);
        assert_eq!(result.issues.len(), 4);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let keywords: Vec<String> = (0..30).map(|i| format!("kw{}", i)).collect();
        let result = validate_seo("", "", &keywords, "nothing here");
        assert_eq!(result.score, 0);
        assert_eq!(result.issues.len(), 32);
    }
}
