// form.rs - Text-entry validation for the record form
//
// Every numeric field arrives as raw text. Nothing reaches the classifier or
// the store until all of them parse as integers.

use crate::errors::InputError;
use crate::model::{Scores, Submission};

pub const FIELD_ID: &str = "id";
pub const FIELD_SCORE_A: &str = "score_a";
pub const FIELD_SCORE_B: &str = "score_b";
pub const FIELD_SCORE_C: &str = "score_c";

pub fn parse_score(field: &str, text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| InputError::new(field, text))
}

pub fn parse_id(text: &str) -> Result<i64, InputError> {
    parse_score(FIELD_ID, text)
}

/// Raw contents of the name and score fields.
#[derive(Debug, Clone, Default)]
pub struct ScoreForm {
    pub name: String,
    pub score_a: String,
    pub score_b: String,
    pub score_c: String,
}

impl ScoreForm {
    pub fn new(name: &str, score_a: &str, score_b: &str, score_c: &str) -> Self {
        Self {
            name: name.to_string(),
            score_a: score_a.to_string(),
            score_b: score_b.to_string(),
            score_c: score_c.to_string(),
        }
    }

    /// Fields are checked in display order; the first bad one is reported.
    pub fn validate(&self) -> Result<Submission, InputError> {
        let a = parse_score(FIELD_SCORE_A, &self.score_a)?;
        let b = parse_score(FIELD_SCORE_B, &self.score_b)?;
        let c = parse_score(FIELD_SCORE_C, &self.score_c)?;
        Ok(Submission {
            name: self.name.clone(),
            scores: Scores::new(a, b, c),
        })
    }
}
