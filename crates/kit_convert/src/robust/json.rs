use alloc::string::{String, ToString};

use kit_reflect::Reflect;
use kit_reflect::info::ReflectKind;
use serde_json::{Map, Value};

use crate::SetError;

/// Parses `text` as JSON into a scratch copy of `to`, committing only when
/// the whole text decodes.
///
/// An object read into a struct or a map is laid over the current value:
/// struct fields and map keys absent from the text keep their values. Nested
/// objects merge inside structs only; map values and lists are replaced.
pub(super) fn assign_json(to: &mut dyn Reflect, text: &str) -> Result<(), SetError> {
    let mut scratch = to.reflect_clone();
    let parsed = serde_json::from_str::<Value>(text)
        .map_err(|e| e.to_string())
        .and_then(|incoming| {
            let merged = match to.reflect_kind() {
                ReflectKind::Struct => merge_into(to, incoming, true),
                ReflectKind::Map => merge_into(to, incoming, false),
                _ => incoming,
            };
            let mut erased = <dyn erased_serde::Deserializer>::erase(merged);
            scratch.deserialize_from(&mut erased).map_err(|e| e.to_string())
        });

    if let Err(message) = parsed {
        return Err(SetError::Json {
            target: to.reflect_type_path(),
            message,
            example: compact_json(to),
        });
    }

    to.try_apply(&*scratch)
        .map_err(|_| SetError::Mismatched {
            from_type: scratch.reflect_type_path(),
            to_type: to.reflect_type_path(),
        })
}

fn merge_into(current: &dyn Reflect, incoming: Value, deep: bool) -> Value {
    let Value::Object(patch) = incoming else {
        return incoming;
    };
    let base = current
        .as_serialize()
        .and_then(|ser| serde_json::to_value(ser).ok());
    match base {
        Some(Value::Object(mut base)) => {
            overlay(&mut base, patch, deep);
            Value::Object(base)
        }
        _ => Value::Object(patch),
    }
}

fn overlay(base: &mut Map<String, Value>, patch: Map<String, Value>, deep: bool) {
    for (key, value) in patch {
        let value = match (value, base.get_mut(&key)) {
            (Value::Object(inner), Some(Value::Object(existing))) if deep => {
                overlay(existing, inner, deep);
                continue;
            }
            (value, _) => value,
        };
        base.insert(key, value);
    }
}

fn compact_json(value: &dyn Reflect) -> String {
    value
        .as_serialize()
        .and_then(|ser| serde_json::to_string(ser).ok())
        .unwrap_or_default()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use kit_reflect::impl_reflect_struct;

    use super::assign_json;
    use crate::{SetError, set_robust_with};

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Margin {
        top: i32,
        left: i32,
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Panel {
        title: String,
        width: u32,
        margin: Margin,
        tags: Vec<String>,
    }

    impl_reflect_struct!(Panel);

    fn panel() -> Panel {
        Panel {
            title: String::from("main"),
            width: 640,
            margin: Margin { top: 4, left: 8 },
            tags: vec![String::from("a"), String::from("b")],
        }
    }

    #[test]
    fn partial_struct_update() {
        let mut errors: Vec<SetError> = Vec::new();
        let mut dst = panel();
        assert!(set_robust_with(&mut dst, &r#"{"width": 800}"#, &mut errors));
        assert!(errors.is_empty());
        assert_eq!(dst, Panel { width: 800, ..panel() });

        assign_json(&mut dst, r#"{"margin": {"left": 0}, "tags": ["c"]}"#).unwrap();
        assert_eq!(dst.margin, Margin { top: 4, left: 0 });
        assert_eq!(dst.tags, [String::from("c")]);
        assert_eq!(dst.title, "main");
    }

    #[test]
    fn map_keeps_existing_keys() {
        let mut errors: Vec<SetError> = Vec::new();
        let mut dst: HashMap<String, i32> = HashMap::from([(String::from("keep"), 1)]);
        assert!(set_robust_with(&mut dst, &r#"{"add": 2, "keep": 3}"#, &mut errors));
        assert!(errors.is_empty());
        assert_eq!(dst, HashMap::from([(String::from("keep"), 3), (String::from("add"), 2)]));

        let mut numbered: HashMap<u8, Vec<u8>> = HashMap::from([(1, vec![1, 1])]);
        assign_json(&mut numbered, r#"{"2": [2]}"#).unwrap();
        assert_eq!(numbered, HashMap::from([(1, vec![1, 1]), (2, vec![2])]));
    }

    #[test]
    fn lists_are_replaced() {
        let mut dst: Vec<u16> = vec![1, 2, 3];
        assign_json(&mut dst, "[9]").unwrap();
        assert_eq!(dst, [9]);
    }

    #[test]
    fn bad_text_leaves_destination() {
        let mut dst = panel();
        let err = assign_json(&mut dst, r#"{"width": "wide"}"#).unwrap_err();
        assert!(matches!(err, SetError::Json { .. }));
        assert!(assign_json(&mut dst, r#"{"width": 1} trailing"#).is_err());
        assert!(assign_json(&mut dst, "[1, 2]").is_err());
        assert_eq!(dst, panel());
    }
}
