//! Text formatting helpers shared by the panels.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::NOT_AVAILABLE;

/// Groups the digits of `n` in threes with `,` (`1234567` → `1,234,567`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Population text. An unknown population renders as an empty string.
pub fn format_population(population: Option<u64>) -> String {
    population.map(group_thousands).unwrap_or_default()
}

/// `value`, or `N/A` when it is missing or empty.
pub fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Sort key that ignores case and diacritics (`Åland` sorts with `Aland`).
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compares names by collation key, falling back to the raw strings so the
/// order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(67_391_582), "67,391,582");
        assert_eq!(group_thousands(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn test_format_population_missing() {
        assert_eq!(format_population(None), "");
        assert_eq!(format_population(Some(38_005_238)), "38,005,238");
    }

    #[test]
    fn test_or_not_available() {
        assert_eq!(or_not_available(Some("Paris")), "Paris");
        assert_eq!(or_not_available(Some("")), "N/A");
        assert_eq!(or_not_available(None), "N/A");
    }

    #[test]
    fn test_compare_names_ignores_case_and_accents() {
        let mut names = vec!["Åland Islands", "Belgium", "albania", "Austria"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Åland Islands", "albania", "Austria", "Belgium"]);
    }
}
