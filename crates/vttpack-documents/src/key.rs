//! Store key codec.
//!
//! Pack keys are delimiter-encoded strings:
//!
//! ```text
//! !actors!A1                  primary document
//! !actors.items!A1.I1         item I1 embedded in actor A1
//! ```
//!
//! `!` separates the collection segment from the identifier segment and
//! `.` separates a parent from its embedded collection (and a parent id
//! from a child id).

use std::fmt;

use memchr::{memchr, memchr_iter};

const SEGMENT: u8 = b'!';
const NESTING: u8 = b'.';

/// A parsed pack key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    /// Top-level collection tag (`actors`, `items`, ...)
    pub collection: String,
    /// Embedded collection under the parent, for secondary records
    pub subcollection: Option<String>,
    /// Id of the owning document, for secondary records
    pub parent_id: Option<String>,
    /// Id of the addressed document
    pub id: String,
}

impl DocumentKey {
    /// Parse a raw store key.
    ///
    /// Returns `None` for keys that are not valid UTF-8 or have fewer than
    /// three `!`-delimited segments. Segments past the third are ignored.
    pub fn parse(raw: &[u8]) -> Option<Self> {
        let mut bounds = memchr_iter(SEGMENT, raw);
        let first = bounds.next()?;
        let second = bounds.next()?;
        let end = bounds.next().unwrap_or(raw.len());

        let collection = std::str::from_utf8(&raw[first + 1..second]).ok()?;
        let ids = std::str::from_utf8(&raw[second + 1..end]).ok()?;

        match memchr(NESTING, collection.as_bytes()) {
            None => Some(Self::primary(collection, ids)),
            Some(dot) => {
                let (parent_id, id) = match memchr(NESTING, ids.as_bytes()) {
                    Some(split) => (Some(ids[..split].to_string()), &ids[split + 1..]),
                    None => (None, ids),
                };

                Some(Self {
                    collection: collection[..dot].to_string(),
                    subcollection: Some(collection[dot + 1..].to_string()),
                    parent_id,
                    id: id.to_string(),
                })
            }
        }
    }

    /// Parse a raw key, keeping it only if it addresses a primary document.
    #[inline]
    pub fn parse_primary(raw: &[u8]) -> Option<Self> {
        Self::parse(raw).filter(Self::is_primary)
    }

    /// Key of a primary document.
    pub fn primary(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            subcollection: None,
            parent_id: None,
            id: id.into(),
        }
    }

    /// Key of a document embedded in a parent's collection.
    pub fn embedded(
        collection: impl Into<String>,
        subcollection: impl Into<String>,
        parent_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            subcollection: Some(subcollection.into()),
            parent_id: Some(parent_id.into()),
            id: id.into(),
        }
    }

    /// Whether this key addresses a primary document.
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.subcollection.is_none()
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", self.collection)?;
        if let Some(sub) = &self.subcollection {
            write!(f, ".{}", sub)?;
        }
        f.write_str("!")?;
        if let Some(parent) = &self.parent_id {
            write!(f, "{}.", parent)?;
        }
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primary() {
        let key = DocumentKey::parse(b"!folders!F1").unwrap();
        assert_eq!(key.collection, "folders");
        assert_eq!(key.id, "F1");
        assert!(key.is_primary());
        assert_eq!(key.to_string(), "!folders!F1");
    }

    #[test]
    fn test_parse_embedded() {
        let key = DocumentKey::parse(b"!actors.items!A1.I1").unwrap();
        assert_eq!(key.collection, "actors");
        assert_eq!(key.subcollection.as_deref(), Some("items"));
        assert_eq!(key.parent_id.as_deref(), Some("A1"));
        assert_eq!(key.id, "I1");
        assert!(!key.is_primary());
        assert!(DocumentKey::parse_primary(b"!actors.items!A1.I1").is_none());
        assert_eq!(key.to_string(), "!actors.items!A1.I1");
    }

    #[test]
    fn test_too_few_segments() {
        assert!(DocumentKey::parse(b"").is_none());
        assert!(DocumentKey::parse(b"actors").is_none());
        assert!(DocumentKey::parse(b"!actors").is_none());
    }

    #[test]
    fn test_trailing_segments_ignored() {
        let key = DocumentKey::parse(b"!items!I1!extra").unwrap();
        assert_eq!(key.collection, "items");
        assert_eq!(key.id, "I1");
    }

    #[test]
    fn test_invalid_utf8_skipped() {
        assert!(DocumentKey::parse(b"!act\xffors!A1").is_none());
    }

    #[test]
    fn test_embedded_display_matches_parse() {
        let key = DocumentKey::embedded("scenes", "tokens", "S1", "T1");
        assert_eq!(key.to_string(), "!scenes.tokens!S1.T1");
        assert_eq!(DocumentKey::parse(key.to_string().as_bytes()), Some(key));
    }
}
