//! Smartpay wire format: nested request trees are flattened into dotted keys
//! (`card.number`, `amount.value`) and sent form-urlencoded; replies come back
//! as form-urlencoded key/value pairs.

use serde_json::Value;
use std::collections::BTreeMap;

/// Flatten a JSON object into `(dotted.key, value)` pairs
///
/// Nulls are dropped; strings are taken verbatim, other scalars use their JSON text.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    flatten_into(value, None, &mut pairs);
    pairs
}

fn flatten_into(value: &Value, prefix: Option<&str>, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let key = match prefix {
                    Some(prefix) => format!("{}.{}", prefix, key),
                    None => key.clone(),
                };
                flatten_into(nested, Some(&key), pairs);
            }
        }
        Value::Null => {}
        Value::String(s) => push(prefix, s.clone(), pairs),
        other => push(prefix, other.to_string(), pairs),
    }
}

fn push(prefix: Option<&str>, value: String, pairs: &mut Vec<(String, String)>) {
    if let Some(key) = prefix {
        pairs.push((key.to_string(), value));
    }
}

/// Encode pairs as an `application/x-www-form-urlencoded` body
pub fn encode_form(pairs: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Decode a form-urlencoded reply; later duplicates win
pub fn parse_reply(body: &str) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(body.trim().as_bytes())
        .into_owned()
        .collect()
}
