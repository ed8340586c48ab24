//! Token documents.
//!
//! Placed tokens and the prototype token stored on an actor share the same
//! appearance block.

use serde::{Deserialize, Serialize};

use super::{base_document, nullable, BaseRecord, TextureData};

/// Resource bar bound to an actor attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenBar {
    pub attribute: Option<String>,
}

/// Vision settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenSight {
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    pub range: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub angle: f64,
    pub vision_mode: Option<String>,
    pub color: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub attenuation: f64,
    #[serde(deserialize_with = "nullable")]
    pub brightness: f64,
    #[serde(deserialize_with = "nullable")]
    pub saturation: f64,
    #[serde(deserialize_with = "nullable")]
    pub contrast: f64,
}

/// A special detection mode (tremorsense, see invisibility, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionMode {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    pub range: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenOcclusion {
    #[serde(deserialize_with = "nullable")]
    pub radius: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingColors {
    pub ring: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingSubject {
    #[serde(deserialize_with = "nullable")]
    pub scale: f64,
    pub texture: Option<String>,
}

/// Dynamic token ring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenRing {
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    pub colors: Option<RingColors>,
    #[serde(deserialize_with = "nullable")]
    pub effects: i64,
    pub subject: Option<RingSubject>,
}

/// Appearance and behaviour shared by placed and prototype tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenAppearance {
    #[serde(deserialize_with = "nullable")]
    pub display_name: i64,
    #[serde(deserialize_with = "nullable")]
    pub actor_link: bool,
    #[serde(deserialize_with = "nullable")]
    pub append_number: bool,
    #[serde(deserialize_with = "nullable")]
    pub prepend_adjective: bool,
    #[serde(deserialize_with = "nullable")]
    pub width: f64,
    #[serde(deserialize_with = "nullable")]
    pub height: f64,
    pub texture: Option<TextureData>,
    #[serde(deserialize_with = "nullable")]
    pub hexagonal_shape: i64,
    #[serde(deserialize_with = "nullable")]
    pub locked: bool,
    #[serde(deserialize_with = "nullable")]
    pub lock_rotation: bool,
    #[serde(deserialize_with = "nullable")]
    pub rotation: f64,
    #[serde(deserialize_with = "nullable")]
    pub alpha: f64,
    #[serde(deserialize_with = "nullable")]
    pub disposition: i64,
    #[serde(deserialize_with = "nullable")]
    pub display_bars: i64,
    pub bar1: Option<TokenBar>,
    pub bar2: Option<TokenBar>,
    pub light: serde_json::Value,
    pub sight: Option<TokenSight>,
    #[serde(deserialize_with = "nullable")]
    pub detection_modes: Vec<DetectionMode>,
    pub occludable: Option<TokenOcclusion>,
    pub ring: Option<TokenRing>,
    pub flags: serde_json::Value,
}

/// A token placed on a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenDocument {
    #[serde(flatten)]
    pub base: BaseRecord,
    pub actor_id: Option<String>,
    /// Overrides applied to an unlinked actor
    pub delta: serde_json::Value,
    #[serde(deserialize_with = "nullable")]
    pub x: f64,
    #[serde(deserialize_with = "nullable")]
    pub y: f64,
    #[serde(deserialize_with = "nullable")]
    pub elevation: f64,
    #[serde(deserialize_with = "nullable")]
    pub sort: i64,
    #[serde(deserialize_with = "nullable")]
    pub hidden: bool,
    #[serde(flatten)]
    pub appearance: TokenAppearance,
}

base_document!(TokenDocument, Token);

/// Token template stored on an actor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrototypeTokenDocument {
    #[serde(flatten)]
    pub base: BaseRecord,
    #[serde(deserialize_with = "nullable")]
    pub random_img: bool,
    #[serde(flatten)]
    pub appearance: TokenAppearance,
}

base_document!(PrototypeTokenDocument, PrototypeToken);
