//! BSON to JSON line encoding
//!
//! Converts normalized BSON documents into compact, plain JSON without
//! extended-JSON wrappers like `{"$oid": ...}` or `{"$date": ...}`. Values
//! that have no faithful plain-JSON form are rejected rather than
//! degraded; the pipeline applies no schema validation, so a document that
//! cannot be represented fails the whole run.
//!
//! Non-ASCII characters are written unescaped (serde_json's default).

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Number, Value};

use crate::domain::errors::IngestaError;
use crate::domain::result::Result;

/// Encode one document as a single compact JSON line (no trailing newline)
pub fn to_json_line(doc: &Document) -> Result<String> {
    let value = document_to_value(doc)?;
    Ok(serde_json::to_string(&value)?)
}

fn document_to_value(doc: &Document) -> Result<Value> {
    let mut map = Map::with_capacity(doc.len());
    for (key, value) in doc.iter() {
        map.insert(key.clone(), bson_to_value(key, value)?);
    }
    Ok(Value::Object(map))
}

fn bson_to_value(key: &str, value: &Bson) -> Result<Value> {
    match value {
        Bson::Double(f) => Number::from_f64(*f).map(Value::Number).ok_or_else(|| {
            IngestaError::Serialization(format!(
                "non-finite double {f} at field '{key}' is not representable in JSON"
            ))
        }),
        Bson::String(s) => Ok(Value::String(s.clone())),
        Bson::Boolean(b) => Ok(Value::Bool(*b)),
        Bson::Null => Ok(Value::Null),
        Bson::Int32(n) => Ok(Value::Number((*n).into())),
        Bson::Int64(n) => Ok(Value::Number((*n).into())),
        Bson::Document(nested) => document_to_value(nested),
        Bson::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(bson_to_value(key, item)?);
            }
            Ok(Value::Array(out))
        }
        Bson::DateTime(dt) => {
            let iso = dt.try_to_rfc3339_string().map_err(|e| {
                IngestaError::Serialization(format!(
                    "datetime at field '{key}' is out of range: {e}"
                ))
            })?;
            Ok(Value::String(iso))
        }
        Bson::Decimal128(d) => Ok(Value::String(d.to_string())),
        // Normalization runs before encoding; an identifier reaching this
        // point means it leaked past the normalizer.
        Bson::ObjectId(oid) => Err(IngestaError::Serialization(format!(
            "unnormalized ObjectId {oid} at field '{key}'"
        ))),
        other => Err(IngestaError::Serialization(format!(
            "BSON type {:?} at field '{key}' is not representable in JSON",
            other.element_type()
        ))),
    }
}
