//! Scene documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    base_document, nullable, BaseRecord, DocumentStats, EmbeddedCollection, Ownership,
    TextureData, TokenDocument,
};

/// Initial camera position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneInitialView {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
}

/// Grid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneGrid {
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub grid_type: i64,
    #[serde(deserialize_with = "nullable")]
    pub size: i64,
    pub style: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub thickness: f64,
    pub color: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub alpha: f64,
    #[serde(deserialize_with = "nullable")]
    pub distance: f64,
    pub units: Option<String>,
}

/// A map with its placed objects.
///
/// Tokens are an embedded collection; the other placeables are kept as
/// opaque values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneDocument {
    #[serde(flatten)]
    pub base: BaseRecord,
    #[serde(deserialize_with = "nullable")]
    pub active: bool,
    #[serde(deserialize_with = "nullable")]
    pub navigation: bool,
    #[serde(deserialize_with = "nullable")]
    pub nav_order: i64,
    pub nav_name: Option<String>,
    pub background: Option<TextureData>,
    pub foreground: Option<String>,
    pub foreground_elevation: Option<f64>,
    pub thumb: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub width: i64,
    #[serde(deserialize_with = "nullable")]
    pub height: i64,
    #[serde(deserialize_with = "nullable")]
    pub padding: f64,
    pub initial: Option<SceneInitialView>,
    pub background_color: Option<String>,
    pub grid: Option<SceneGrid>,
    #[serde(deserialize_with = "nullable")]
    pub token_vision: bool,
    #[serde(deserialize_with = "nullable")]
    pub fog_exploration: bool,
    pub fog_reset: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub global_light: bool,
    pub global_light_threshold: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub darkness: f64,
    pub fog_overlay: Option<String>,
    pub fog_explored_color: Option<String>,
    pub fog_unexplored_color: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub drawings: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub tokens: EmbeddedCollection<TokenDocument>,
    #[serde(deserialize_with = "nullable")]
    pub lights: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub notes: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub sounds: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub templates: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub tiles: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub walls: Vec<Value>,
    pub playlist: Value,
    pub playlist_sound: Value,
    pub journal: Value,
    pub journal_entry_page: Value,
    pub weather: Option<String>,
    pub folder: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub sort: i64,
    pub ownership: Option<Ownership>,
    pub flags: Value,
    #[serde(rename = "_stats")]
    pub stats: Option<DocumentStats>,
}

base_document!(SceneDocument, Scene, embedded: [tokens]);
