//! Years-of-experience extraction from free text.

use std::sync::LazyLock;

use regex::Regex;

/// Patterns for "N years of experience" phrasing. All matches across all
/// patterns are collected and the maximum wins.
static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(\d+)\+?\s*(?:years?|yrs?)\s+(?:of\s+)?experience",
        r"experience[:\s]+(\d+)\+?\s*(?:years?|yrs?)",
        r"(\d+)\+?\s*(?:years?|yrs?)\s+in",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("experience pattern compiles"))
    .collect()
});

/// Maximum number of years mentioned in `text`, or 0 when no pattern matches.
/// Numbers too large for `u32` are skipped.
pub fn extract_experience_years(text: &str) -> u32 {
    let text_lower = text.to_lowercase();
    EXPERIENCE_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(&text_lower))
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_years_of_experience() {
        assert_eq!(extract_experience_years("5+ years of experience required"), 5);
    }

    #[test]
    fn test_years_experience_without_of() {
        assert_eq!(extract_experience_years("3 years experience with Rust"), 3);
    }

    #[test]
    fn test_experience_colon_years() {
        assert_eq!(extract_experience_years("Experience: 4 years"), 4);
    }

    #[test]
    fn test_years_in_phrasing() {
        assert_eq!(extract_experience_years("2 yrs in backend development"), 2);
    }

    #[test]
    fn test_maximum_across_all_matches_wins() {
        let text = "3 years of experience overall, including 7 years in data engineering";
        assert_eq!(extract_experience_years(text), 7);
    }

    #[test]
    fn test_no_match_returns_zero() {
        assert_eq!(extract_experience_years("We value curiosity and ownership"), 0);
        assert_eq!(extract_experience_years(""), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_experience_years("10 YEARS OF EXPERIENCE"), 10);
    }

    #[test]
    fn test_absurdly_large_numbers_are_skipped() {
        assert_eq!(extract_experience_years("99999999999999 years of experience"), 0);
    }
}
