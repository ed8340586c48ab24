//! Folder documents.

use serde::{Deserialize, Serialize};

use super::{base_document, nullable, BaseRecord, DocumentStats};

/// A folder grouping other documents of one type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolderDocument {
    #[serde(flatten)]
    pub base: BaseRecord,
    /// Document type the folder holds (`Actor`, `Item`, ...)
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub description: Option<String>,
    /// Parent folder id
    pub folder: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub sorting: String,
    #[serde(deserialize_with = "nullable")]
    pub sort: i64,
    pub color: Option<String>,
    pub flags: serde_json::Value,
    #[serde(rename = "_stats")]
    pub stats: Option<DocumentStats>,
}

base_document!(FolderDocument, Folder);
