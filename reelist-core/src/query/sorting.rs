//! Sort comparators for the catalog pipeline.
//!
//! Numeric fields sort stably descending with absent or unparseable values
//! coerced to 0; an ascending request reverses the whole descending result
//! instead of re-sorting, so ties keep the exact relative order the
//! descending pass produced, inverted as a block. Title fields sort on the
//! lower-cased title with their own natural direction and reverse for the
//! opposite order. `Default` never reorders.

use super::types::{SortField, SortOrder};
use reelist_model::{ItemRecord, ScoreValue, YearValue};
use std::cmp::Ordering;

fn score_or_zero(score: Option<&ScoreValue>) -> f64 {
    score.map(ScoreValue::as_f64).unwrap_or(0.0)
}

/// Derived numeric sort value for a record; 0 when absent or unparseable.
pub(crate) fn numeric_sort_value(item: &ItemRecord, field: SortField) -> f64 {
    match field {
        SortField::Cineselect => score_or_zero(item.cineselect_rating.as_ref()),
        SortField::Imdb => score_or_zero(item.imdb_rating.as_ref()),
        SortField::RottenTomatoes => score_or_zero(item.rt.as_ref()),
        SortField::Year => f64::from(
            item.year.as_ref().and_then(YearValue::as_year).unwrap_or(0),
        ),
        SortField::Default | SortField::TitleAz | SortField::TitleZa => 0.0,
    }
}

fn lowercase_title(item: &ItemRecord) -> String {
    item.title.as_deref().unwrap_or("").to_lowercase()
}

fn compare_numeric_desc(
    a: &ItemRecord,
    b: &ItemRecord,
    field: SortField,
) -> Ordering {
    numeric_sort_value(b, field)
        .partial_cmp(&numeric_sort_value(a, field))
        .unwrap_or(Ordering::Equal)
}

/// Sort a working slice in place according to the requested field/order.
pub fn sort_items(items: &mut [ItemRecord], field: SortField, order: SortOrder) {
    match field {
        SortField::Default => {
            // Insertion order is the contract here, for either sort order.
        }
        SortField::Cineselect
        | SortField::Imdb
        | SortField::RottenTomatoes
        | SortField::Year => {
            items.sort_by(|a, b| compare_numeric_desc(a, b, field));
            if order == SortOrder::Ascending {
                items.reverse();
            }
        }
        SortField::TitleAz => {
            items.sort_by(|a, b| lowercase_title(a).cmp(&lowercase_title(b)));
            if order == SortOrder::Descending {
                items.reverse();
            }
        }
        SortField::TitleZa => {
            items.sort_by(|a, b| lowercase_title(b).cmp(&lowercase_title(a)));
            if order == SortOrder::Ascending {
                items.reverse();
            }
        }
    }
}
