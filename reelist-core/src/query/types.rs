use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel year value meaning "do not filter".
pub const YEAR_SHOW_ALL: &str = "Top";

/// Internal maximum page size. The response adapter requests this so every
/// catalog response is a single page regardless of client-side paging.
pub const MAX_CATALOG_PAGE: usize = 10_000;

/// Request-scoped query parameters consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Pagination offset into the filtered+sorted sequence.
    pub skip: usize,
    /// Cap on returned records.
    pub limit: usize,
    /// Exact-match year filter; [`YEAR_SHOW_ALL`] and `None` disable it.
    pub year: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: MAX_CATALOG_PAGE,
            year: None,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl CatalogQuery {
    /// The effective year filter, with the sentinel and empty values
    /// treated as "show all".
    pub fn year_filter(&self) -> Option<&str> {
        self.year
            .as_deref()
            .filter(|y| !y.is_empty() && *y != YEAR_SHOW_ALL)
    }
}

/// Fields available for sorting.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Insertion order, never reordered.
    #[default]
    Default,
    /// The curator's own rating.
    Cineselect,
    /// IMDb rating.
    Imdb,
    /// Rotten Tomatoes score.
    RottenTomatoes,
    Year,
    TitleAz,
    TitleZa,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        use SortField::*;
        &[Default, Cineselect, Imdb, RottenTomatoes, Year, TitleAz, TitleZa]
    }

    /// Human-readable label shown to clients in the manifest options.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Default => "Default",
            SortField::Cineselect => "CineSelect",
            SortField::Imdb => "IMDb",
            SortField::RottenTomatoes => "RottenTomatoes",
            SortField::Year => "Year",
            SortField::TitleAz => "Title A-Z",
            SortField::TitleZa => "Title Z-A",
        }
    }

    /// Map a client-supplied label back to a field; unknown labels fall
    /// back to [`SortField::Default`] rather than rejecting the query.
    pub fn from_label(label: &str) -> SortField {
        SortField::all()
            .iter()
            .find(|field| field.label() == label)
            .copied()
            .unwrap_or_default()
    }

    /// Whether the field sorts on a derived numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SortField::Cineselect
                | SortField::Imdb
                | SortField::RottenTomatoes
                | SortField::Year
        )
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sort direction. Descending is the default: rating and year sorts show
/// "best first" unless the client asks otherwise.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[SortOrder::Descending, SortOrder::Ascending]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Descending => "Descending",
            SortOrder::Ascending => "Ascending",
        }
    }

    /// Only an exact `"Ascending"` selects ascending; anything else keeps
    /// the descending default.
    pub fn from_label(label: &str) -> SortOrder {
        if label == "Ascending" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
