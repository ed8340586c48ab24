//! Decoding primary store records into documents.

use crate::format::Format;
use crate::key::DocumentKey;
use crate::model::Document;
use crate::registry::constructor_for;
use crate::{Error, Result};

/// Decode the value of a primary record and attach its provenance.
///
/// The document's key is recomputed from the collection tag and the
/// decoded `_id`.
pub fn decode_primary(pack: &str, key: &DocumentKey, value: &[u8]) -> Result<Document> {
    if !key.is_primary() {
        return Err(Error::NotPrimary(key.to_string()));
    }

    let kind = constructor_for(&key.collection)?;
    let mut document = kind
        .decode(Format::Json, value)
        .map_err(|source| Error::Decode {
            key: key.to_string(),
            source,
        })?;

    document.set_pack(pack);
    let own_key = DocumentKey::primary(key.collection.as_str(), document.id());
    document.set_key(own_key.to_string());

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_stamps_provenance() {
        let key = DocumentKey::primary("folders", "F1");
        let doc = decode_primary("monsters", &key, br#"{"_id":"F1","name":"Monsters"}"#).unwrap();

        assert_eq!(doc.pack(), "monsters");
        assert_eq!(doc.key(), "!folders!F1");
        assert_eq!(doc.id(), "F1");
        assert_eq!(doc.name(), "Monsters");
    }

    #[test]
    fn test_missing_fields_take_zero_values() {
        let key = DocumentKey::primary("actors", "A1");
        let doc = decode_primary("pack", &key, br#"{"_id":"A1","folder":null,"sort":null}"#).unwrap();
        let actor = doc.as_actor().unwrap();

        assert_eq!(actor.base.name, "");
        assert_eq!(actor.folder, None);
        assert_eq!(actor.sort, 0);
        assert!(actor.items.is_empty());
    }

    #[test]
    fn test_secondary_key_rejected() {
        let key = DocumentKey::embedded("actors", "items", "A1", "I1");
        assert!(matches!(
            decode_primary("pack", &key, b"{}"),
            Err(Error::NotPrimary(_))
        ));
    }

    #[test]
    fn test_decode_error_names_key() {
        let key = DocumentKey::primary("items", "I1");
        match decode_primary("pack", &key, b"[1, 2") {
            Err(Error::Decode { key, .. }) => assert_eq!(key, "!items!I1"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
