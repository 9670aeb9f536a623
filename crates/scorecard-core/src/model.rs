use crate::classifier::{classify, Category};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Scores {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }

    pub fn category(&self) -> Category {
        classify(self.a, self.b, self.c)
    }
}

/// Validated form contents, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub scores: Scores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub score_a: i64,
    pub score_b: i64,
    pub score_c: i64,
    pub predicted_category: String,
}

impl StudentRecord {
    pub fn scores(&self) -> Scores {
        Scores::new(self.score_a, self.score_b, self.score_c)
    }

    /// Stored label parsed back into a `Category`. `None` for labels written
    /// by something other than this crate.
    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.predicted_category)
    }
}
