use crate::catalog_type::CatalogType;
use serde::{Deserialize, Serialize};

/// The projected metadata record returned in catalog responses.
///
/// Optional fields are omitted from the wire form entirely rather than
/// serialized as `null`, matching what catalog clients expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: CatalogType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub poster: String,
    pub description: String,
    /// Stringified release year, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_info: Option<String>,
    /// Parsed release year, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}
