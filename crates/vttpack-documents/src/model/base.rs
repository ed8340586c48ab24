//! Records shared by every document variant.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the field's zero value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields common to every document except combats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRecord {
    /// Name of the pack the document was read from (never exported)
    #[serde(skip)]
    pub pack: String,
    /// Full store key of the document
    #[serde(rename = "_key", skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub key: String,
    /// Stable document id
    #[serde(rename = "_id", skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    /// Human label, may be empty
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// Document bookkeeping (`_stats`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentStats {
    pub core_version: Option<String>,
    pub system_id: Option<String>,
    pub system_version: Option<String>,
    pub created_time: Option<i64>,
    pub modified_time: Option<i64>,
    pub last_modified_by: Option<String>,
    pub compendium_source: Option<String>,
    pub duplicate_source: Option<String>,
}

/// Image reference with placement settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextureData {
    pub src: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub anchor_x: f64,
    #[serde(deserialize_with = "nullable")]
    pub anchor_y: f64,
    #[serde(deserialize_with = "nullable")]
    pub offset_x: f64,
    #[serde(deserialize_with = "nullable")]
    pub offset_y: f64,
    pub fit: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub scale_x: f64,
    #[serde(deserialize_with = "nullable")]
    pub scale_y: f64,
    #[serde(deserialize_with = "nullable")]
    pub rotation: f64,
    pub tint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub alpha_threshold: f64,
}

/// Per-user permission levels keyed by user id (`default` for everyone else).
pub type Ownership = std::collections::BTreeMap<String, i64>;
