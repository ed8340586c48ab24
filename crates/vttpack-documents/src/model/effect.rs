//! Active effect documents.

use serde::{Deserialize, Serialize};

use super::{base_document, nullable, BaseRecord, DocumentStats};

/// One attribute change applied by an effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectChange {
    #[serde(deserialize_with = "nullable")]
    pub key: String,
    #[serde(deserialize_with = "nullable")]
    pub value: String,
    #[serde(deserialize_with = "nullable")]
    pub mode: i64,
    pub priority: Option<f64>,
}

/// How long an effect lasts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectDuration {
    pub start_time: Option<f64>,
    pub seconds: Option<i64>,
    /// Combat id the duration is tracked in
    pub combat: Option<String>,
    pub rounds: Option<i64>,
    pub turns: Option<i64>,
    pub start_round: Option<i64>,
    pub start_turn: Option<i64>,
}

/// An effect modifying an actor or item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActiveEffectDocument {
    #[serde(flatten)]
    pub base: BaseRecord,
    pub img: Option<String>,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub doc_type: String,
    pub system: serde_json::Value,
    #[serde(deserialize_with = "nullable")]
    pub changes: Vec<EffectChange>,
    #[serde(deserialize_with = "nullable")]
    pub disabled: bool,
    pub duration: Option<EffectDuration>,
    pub description: Option<String>,
    /// UUID of the document the effect came from
    pub origin: Option<String>,
    pub tint: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub transfer: bool,
    #[serde(deserialize_with = "nullable")]
    pub statuses: Vec<String>,
    pub flags: serde_json::Value,
    #[serde(rename = "_stats")]
    pub stats: Option<DocumentStats>,
}

base_document!(ActiveEffectDocument, ActiveEffect);
