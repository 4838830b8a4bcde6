//! Shared proptest strategies for unit tests.

use proptest::prelude::*;
use serde_json::{Map, Value};

/// Strings mixing plain text, markup fragments and control characters.
pub(crate) fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,16}",
        "[a-z<>/&\"\\\\\t\n ]{0,24}",
        Just("<script>alert(1)</script>".to_string()),
        Just("<b>bold</b> and <i>italic</i>".to_string()),
        Just("<a href=\"https://example.com\">link</a>".to_string()),
    ]
}

/// Arbitrary JSON values up to a few levels deep.
///
/// Object keys are lowercase ASCII so sanitization leaves them intact and the
/// container shape can be compared key by key.
pub(crate) fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        arb_text().prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Replaces every string leaf with `""`, keeping keys and scalars.
pub(crate) fn shape(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            Value::Object(map.iter().map(|(k, v)| (k.clone(), shape(v))).collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(shape).collect()),
        Value::String(_) => Value::String(String::new()),
        other => other.clone(),
    }
}
