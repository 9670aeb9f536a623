// classifier.rs - Faculty prediction from three subject scores
//
// The highest of the three scores decides the category. Equal maxima resolve
// in subject order (A, then B, else C), so the lower-indexed subject wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category predicted for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Subject A (biology) scored highest.
    Medicine,
    /// Subject B (physics) scored highest.
    Engineering,
    /// Subject C (english) scored highest.
    Language,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Medicine, Category::Engineering, Category::Language];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medicine => "Medicine",
            Category::Engineering => "Engineering",
            Category::Language => "Language",
        }
    }

    /// Inverse of `as_str`. Unknown labels yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the category of the maximal score. Never fails.
pub fn classify(score_a: i64, score_b: i64, score_c: i64) -> Category {
    let top = score_a.max(score_b).max(score_c);
    if top == score_a {
        Category::Medicine
    } else if top == score_b {
        Category::Engineering
    } else {
        Category::Language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_maximum() {
        assert_eq!(classify(90, 85, 70), Category::Medicine);
        assert_eq!(classify(70, 95, 80), Category::Engineering);
        assert_eq!(classify(60, 70, 99), Category::Language);
    }

    #[test]
    fn test_ties_favor_lower_subject() {
        assert_eq!(classify(10, 10, 10), Category::Medicine);
        assert_eq!(classify(80, 80, 10), Category::Medicine);
        assert_eq!(classify(80, 10, 80), Category::Medicine);
        assert_eq!(classify(5, 9, 9), Category::Engineering);
    }

    #[test]
    fn test_extreme_and_negative_scores() {
        assert_eq!(classify(-5, -1, -3), Category::Engineering);
        assert_eq!(classify(i64::MIN, i64::MIN, i64::MAX), Category::Language);
        assert_eq!(classify(i64::MAX, i64::MAX, i64::MAX), Category::Medicine);
    }

    #[test]
    fn test_deterministic_over_grid() {
        for a in -3..=3 {
            for b in -3..=3 {
                for c in -3..=3 {
                    let first = classify(a, b, c);
                    assert_eq!(first, classify(a, b, c));
                    if a > b && a > c {
                        assert_eq!(first, Category::Medicine);
                    }
                    if b > a && b > c {
                        assert_eq!(first, Category::Engineering);
                    }
                    if c > a && c > b {
                        assert_eq!(first, Category::Language);
                    }
                }
            }
        }
    }

    #[test]
    fn test_label_parse() {
        for c in Category::ALL {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("Kedokteran"), None);
    }
}
