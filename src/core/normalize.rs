//! Identifier normalization
//!
//! MongoDB documents carry `ObjectId` values that have no native JSON
//! form. Before serialization every identifier in a document's tree is
//! rewritten to its 24-character lowercase hex string, at any nesting
//! depth, including identifiers that sit directly inside arrays.

use mongodb::bson::{Bson, Document};

/// Rewrite every ObjectId in the document tree to its hex string
///
/// Mutates the document in place; the caller must own the document
/// exclusively for the duration of the call. Normalizing an
/// already-normalized document is a no-op. Recursion depth is bounded only
/// by the document's own nesting.
pub fn normalize_document(doc: &mut Document) {
    for (_, value) in doc.iter_mut() {
        normalize_value(value);
    }
}

fn normalize_value(value: &mut Bson) {
    match value {
        Bson::ObjectId(oid) => *value = Bson::String(oid.to_hex()),
        Bson::Document(nested) => normalize_document(nested),
        Bson::Array(items) => {
            for item in items.iter_mut() {
                normalize_value(item);
            }
        }
        _ => {}
    }
}
