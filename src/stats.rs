use std::collections::HashMap;

use colored::*;

use crate::utils::bytes_to_human;

/// One language's cut of the grand total.
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percent: f64,
}

/// Per-language byte counts accumulated across all repositories.
#[derive(Default)]
pub struct LanguageStats {
    totals: HashMap<String, u64>,
}

impl LanguageStats {
    pub fn new() -> LanguageStats {
        LanguageStats {
            totals: HashMap::new(),
        }
    }

    /// Merges one repository's language breakdown into the running total.
    pub fn register_repo(&mut self, languages: HashMap<String, u64>) {
        for (language, bytes) in languages {
            *self.totals.entry(language).or_insert(0) += bytes;
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.totals.values().sum()
    }

    /// Percentages of the grand total, sorted descending by byte count
    /// (ties broken by name so the order is deterministic). Empty when
    /// nothing was accumulated.
    pub fn shares(&self) -> Vec<LanguageShare> {
        let total = self.total_bytes();
        if total == 0 {
            return vec![];
        }

        let mut shares: Vec<LanguageShare> = self
            .totals
            .iter()
            .map(|(language, &bytes)| LanguageShare {
                language: language.clone(),
                bytes,
                percent: (bytes as f64 / total as f64) * 100.0,
            })
            .collect();

        shares.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.language.cmp(&b.language)));
        shares
    }
}

pub fn print_distribution(shares: &[LanguageShare]) {
    for share in shares {
        println!(
            "{}: {} ({})",
            share.language.bright_white(),
            format!("{:.2}%", share.percent).bold(),
            bytes_to_human(share.bytes)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(l, b)| (l.to_string(), *b)).collect()
    }

    #[test]
    fn accumulates_across_repositories() {
        let mut totals = LanguageStats::new();
        totals.register_repo(breakdown(&[("Python", 100)]));
        totals.register_repo(breakdown(&[("Python", 50), ("Go", 50)]));

        assert_eq!(totals.total_bytes(), 200);

        let shares = totals.shares();
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].language, "Python");
        assert_eq!(shares[0].bytes, 150);
        assert!((shares[0].percent - 75.0).abs() < 1e-9);
        assert_eq!(shares[1].language, "Go");
        assert!((shares[1].percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let mut totals = LanguageStats::new();
        totals.register_repo(breakdown(&[
            ("Rust", 123_457),
            ("C", 7),
            ("Shell", 991),
            ("TypeScript", 31_337),
        ]));

        let sum: f64 = totals.shares().iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn shares_are_sorted_descending() {
        let mut totals = LanguageStats::new();
        totals.register_repo(breakdown(&[
            ("A", 5),
            ("B", 500),
            ("C", 50),
            ("D", 5000),
        ]));

        let shares = totals.shares();
        for pair in shares.windows(2) {
            assert!(pair[0].percent >= pair[1].percent);
        }
        assert_eq!(shares[0].language, "D");
    }

    #[test]
    fn ties_break_on_name() {
        let mut totals = LanguageStats::new();
        totals.register_repo(breakdown(&[("Zig", 10), ("Ada", 10)]));

        let shares = totals.shares();
        assert_eq!(shares[0].language, "Ada");
        assert_eq!(shares[1].language, "Zig");
    }

    #[test]
    fn empty_totals_yield_no_shares() {
        let totals = LanguageStats::new();
        assert_eq!(totals.total_bytes(), 0);
        assert!(totals.shares().is_empty());
    }

    #[test]
    fn zero_byte_languages_do_not_divide_by_zero() {
        let mut totals = LanguageStats::new();
        totals.register_repo(breakdown(&[("Empty", 0)]));
        assert!(totals.shares().is_empty());
    }
}
