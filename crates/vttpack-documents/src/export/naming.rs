//! Output file naming.

use std::sync::OnceLock;

use regex::Regex;

use crate::format::Format;
use crate::model::Document;

fn disallowed() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED.get_or_init(|| Regex::new(r"[^a-zA-Z0-9А-я]").expect("static pattern is valid"))
}

/// Replace every character outside ASCII alphanumerics and `А-я` with `_`.
///
/// One character in, one character out: runs of disallowed characters are
/// not collapsed.
pub fn sanitize(name: &str) -> String {
    disallowed().replace_all(name, "_").into_owned()
}

/// File name a document is exported under.
///
/// Named documents export as `<sanitized name>_<sanitized id>.<ext>`; the id
/// suffix keeps documents sharing a name apart. Unnamed documents fall back to
/// their full key.
pub fn export_name(document: &Document, format: Format) -> String {
    let extension = format.extension();

    if document.name().is_empty() {
        format!("{}.{}", document.key(), extension)
    } else {
        format!("{}_{}.{}", sanitize(document.name()), sanitize(document.id()), extension)
    }
}
