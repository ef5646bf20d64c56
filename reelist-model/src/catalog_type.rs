use serde::{Deserialize, Serialize};
use std::fmt;

/// The two catalog kinds served by the addon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CatalogType {
    Movie,
    Series,
}

impl CatalogType {
    pub fn all() -> &'static [CatalogType] {
        &[CatalogType::Movie, CatalogType::Series]
    }

    /// The wire name used in catalog URLs and meta objects.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogType::Movie => "movie",
            CatalogType::Series => "series",
        }
    }

    /// Parse a URL path segment; anything but the two known kinds is `None`.
    pub fn from_path_segment(segment: &str) -> Option<CatalogType> {
        match segment {
            "movie" => Some(CatalogType::Movie),
            "series" => Some(CatalogType::Series),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
