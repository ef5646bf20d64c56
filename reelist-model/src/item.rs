//! Lenient catalog entry types.
//!
//! The source file is hand-maintained JSON, so every field is optional and
//! the numeric-ish fields (`year`, the rating columns, the local `id`) may be
//! stored either as JSON numbers or as strings. Untagged enums absorb both
//! shapes at deserialization time; the accessor methods perform the single
//! normalization step every consumer goes through.

use serde::{Deserialize, Serialize};

/// A release year as stored in the source file: a bare integer or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    /// Stored as a JSON number, e.g. `2020`.
    Number(i64),
    /// Stored as text, e.g. `"2020"` or `"2020–2021"`.
    Text(String),
}

impl YearValue {
    /// The stringification used for filter comparison and display.
    ///
    /// Both sides of the year filter go through this, so an item stored as
    /// the number `2020` matches a requested `"2020"`.
    pub fn as_string(&self) -> String {
        match self {
            YearValue::Number(n) => n.to_string(),
            YearValue::Text(s) => s.clone(),
        }
    }

    /// Parse the year as an integer, taking the leading digit run of a text
    /// value so that ranges like `"2020–2021"` still yield a start year.
    /// Returns `None` when no leading integer exists.
    pub fn as_year(&self) -> Option<i32> {
        match self {
            YearValue::Number(n) => i32::try_from(*n).ok(),
            YearValue::Text(s) => parse_leading_int(s),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i32> {
    let trimmed = s.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i32, rest),
        None => (1i32, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    digits[..end].parse::<i32>().ok().map(|n| sign * n)
}

/// A rating value from one of the score sources, number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    /// Stored as a JSON number, e.g. `8.8`.
    Number(f64),
    /// Stored as text, e.g. `"88"`.
    Text(String),
}

impl ScoreValue {
    /// Numeric value for sort comparisons; anything unparseable is 0.
    pub fn as_f64(&self) -> f64 {
        match self {
            ScoreValue::Number(n) if n.is_finite() => *n,
            ScoreValue::Number(_) => 0.0,
            ScoreValue::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

/// Fallback local identifier, number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalId {
    /// Stored as a JSON number.
    Number(i64),
    /// Stored as text.
    Text(String),
}

impl LocalId {
    /// Stringified form used as a meta identifier.
    pub fn as_string(&self) -> String {
        match self {
            LocalId::Number(n) => n.to_string(),
            LocalId::Text(s) => s.clone(),
        }
    }
}

/// One catalog entry (movie or series) as read from the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemRecord {
    pub title: Option<String>,
    pub year: Option<YearValue>,
    pub poster: Option<String>,
    pub description: Option<String>,
    /// IMDb-style external identifier, e.g. `"tt0133093"`.
    pub imdb: Option<String>,
    /// Local fallback identifier.
    pub id: Option<LocalId>,
    pub cineselect_rating: Option<ScoreValue>,
    pub imdb_rating: Option<ScoreValue>,
    pub rt: Option<ScoreValue>,
}

impl ItemRecord {
    /// Year stringified for filter comparison, when present.
    pub fn year_string(&self) -> Option<String> {
        self.year.as_ref().map(YearValue::as_string)
    }

    /// Year parsed as an integer, when present and parseable.
    pub fn year_number(&self) -> Option<i32> {
        self.year.as_ref().and_then(YearValue::as_year)
    }
}
