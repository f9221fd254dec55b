use alloc::boxed::Box;
use alloc::vec::Vec;

use kit_reflect::Reflect;
use kit_reflect::info::TypeInfo;
use kit_reflect::ops::{Map, ReflectMut};

use super::try_set_robust;
use crate::{DiagnosticSink, LogSink, SetError, non_ptr, non_ptr_mut, to_string};

/// Replaces the content of `to` with the entries of the map `from`, keys
/// and values converted to the types of `to`.
///
/// Nothing is written unless every entry converts.
///
/// ```
/// use std::collections::{BTreeMap, HashMap};
/// use kit_convert::copy_map_robust;
///
/// let src = BTreeMap::from([(String::from("1"), 0.5_f64), (String::from("2"), 3.0)]);
/// let mut dst: HashMap<u8, String> = HashMap::new();
/// copy_map_robust(&mut dst, &src).unwrap();
///
/// assert_eq!(dst[&1], "0.5");
/// assert_eq!(dst[&2], "3");
/// ```
pub fn copy_map_robust(to: &mut dyn Map, from: &dyn Reflect) -> Result<(), SetError> {
    let source = non_ptr(from);
    let Ok(source_map) = source.reflect_ref().as_map() else {
        return Err(SetError::NotAMap {
            type_path: source.reflect_type_path(),
        });
    };

    let (key_info, value_info) = (to.key_info(), to.value_info());
    let mut entries = Vec::with_capacity(source_map.len());
    for (key, value) in source_map.iter() {
        let converted = convert_entry(&*to, key_info, key, |m| m.new_key()).and_then(|k| {
            let v = convert_entry(&*to, value_info, value, |m| m.new_value())?;
            Ok((k, v))
        });
        match converted {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                let key = to_string(key);
                log::debug!("kit::copy_map_robust: entry {key}: {err}");
                return Err(SetError::MapEntry {
                    key,
                    reason: Box::new(err),
                });
            }
        }
    }

    to.clear();
    for (key, value) in entries {
        to.try_insert(key, value).map_err(|(key, value)| mismatched(&*to, &*key, &*value))?;
    }
    Ok(())
}

/// Inserts `value` under `key` into the map `map`, converting either side
/// to the types of the map when they differ. Returns `true` on success.
///
/// Failures are logged through [`LogSink`].
///
/// ```
/// use std::collections::BTreeMap;
/// use kit_convert::set_map_robust;
///
/// let mut limits: BTreeMap<String, u32> = BTreeMap::new();
/// assert!(set_map_robust(&mut limits, &"depth", &"16"));
/// assert!(set_map_robust(&mut limits, &7_i32, &2.9_f64));
/// assert!(!set_map_robust(&mut limits, &"width", &"wide"));
///
/// assert_eq!(limits["depth"], 16);
/// assert_eq!(limits["7"], 2);
/// assert!(!limits.contains_key("width"));
/// ```
#[inline]
pub fn set_map_robust(map: &mut dyn Reflect, key: &dyn Reflect, value: &dyn Reflect) -> bool {
    set_map_robust_with(map, key, value, &mut LogSink)
}

/// Like [`set_map_robust`], reporting failures to `sink`.
pub fn set_map_robust_with(
    map: &mut dyn Reflect,
    key: &dyn Reflect,
    value: &dyn Reflect,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    match try_set_map_robust(map, key, value) {
        Ok(()) => true,
        Err(SetError::Nil) => false,
        Err(err) => {
            sink.report(err);
            false
        }
    }
}

/// Like [`set_map_robust`], returning the reason of a failure instead of
/// reporting it.
pub fn try_set_map_robust(
    map: &mut dyn Reflect,
    key: &dyn Reflect,
    value: &dyn Reflect,
) -> Result<(), SetError> {
    let map = non_ptr_mut(map)?;
    let type_path = map.reflect_type_path();
    let ReflectMut::Map(map) = map.reflect_mut() else {
        return Err(SetError::NotAMap { type_path });
    };

    let new_key = convert_entry(&*map, map.key_info(), non_ptr(key), |m| m.new_key())
        .map_err(|err| SetError::MapEntry {
            key: to_string(key),
            reason: Box::new(err),
        })?;
    let new_value = convert_entry(&*map, map.value_info(), non_ptr(value), |m| m.new_value())
        .map_err(|err| SetError::MapEntry {
            key: to_string(&*new_key),
            reason: Box::new(err),
        })?;

    map.try_insert(new_key, new_value)
        .map(|_| ())
        .map_err(|(key, value)| mismatched(&*map, &*key, &*value))
}

// Clones `src` when it already has the wanted type, converts a fresh
// default otherwise.
fn convert_entry(
    map: &dyn Map,
    info: &'static TypeInfo,
    src: &dyn Reflect,
    fresh: fn(&dyn Map) -> Box<dyn Reflect>,
) -> Result<Box<dyn Reflect>, SetError> {
    if src.ty_id() == info.ty_id() {
        return Ok(src.reflect_clone());
    }
    let mut dst = fresh(map);
    try_set_robust(&mut *dst, src)?;
    Ok(dst)
}

fn mismatched(map: &dyn Map, key: &dyn Reflect, value: &dyn Reflect) -> SetError {
    let (from_type, to_type) = if key.ty_id() != map.key_info().ty_id() {
        (key.reflect_type_path(), map.key_info().type_path())
    } else {
        (value.reflect_type_path(), map.value_info().type_path())
    };
    SetError::Mismatched { from_type, to_type }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use super::{copy_map_robust, set_map_robust_with, try_set_map_robust};
    use crate::{SetError, set_robust};

    #[test]
    fn copy_converts_entries() {
        let mut src: HashMap<String, String> = HashMap::new();
        src.insert(String::from("3"), String::from("true"));
        src.insert(String::from("0x10"), String::from("0"));

        let mut dst: BTreeMap<i64, bool> = BTreeMap::new();
        dst.insert(99, true);
        copy_map_robust(&mut dst, &Box::new(src)).unwrap();
        assert_eq!(dst, BTreeMap::from([(3, true), (16, false)]));
    }

    #[test]
    fn copy_failure_is_atomic() {
        let src = BTreeMap::from([(String::from("a"), 1_u8), (String::from("b"), 2)]);
        let mut dst: BTreeMap<i32, u8> = BTreeMap::from([(0, 0)]);

        let err = copy_map_robust(&mut dst, &src).unwrap_err();
        match err {
            SetError::MapEntry { key, .. } => assert_eq!(key, "a"),
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(dst, BTreeMap::from([(0, 0)]));

        assert_eq!(
            copy_map_robust(&mut dst, &String::from("{}")),
            Err(SetError::NotAMap { type_path: "String" })
        );
    }

    #[test]
    fn map_from_map_via_set_robust() {
        let src = BTreeMap::from([(1_u8, 1.5_f32)]);
        let mut dst: HashMap<String, f64> = HashMap::new();
        assert!(set_robust(&mut dst, &src));
        assert_eq!(dst.get("1"), Some(&1.5));
    }

    #[test]
    fn insert_converts_sides() {
        let mut map: HashMap<String, i16> = HashMap::new();
        try_set_map_robust(&mut map, &String::from("x"), &3_i16).unwrap();
        try_set_map_robust(&mut map, &Some(2.5_f64), &"-4").unwrap();

        assert_eq!(map.get("x"), Some(&3));
        assert_eq!(map.get("2.5"), Some(&-4));
    }

    #[test]
    fn insert_failures() {
        let mut errors: Vec<SetError> = Vec::new();

        let mut map: BTreeMap<u8, String> = BTreeMap::new();
        assert!(!set_map_robust_with(&mut map, &"key", &"v", &mut errors));
        assert!(map.is_empty());

        let mut not_a_map = 0_i32;
        assert!(!set_map_robust_with(&mut not_a_map, &1, &2, &mut errors));

        let mut none: Option<BTreeMap<u8, String>> = None;
        assert!(!set_map_robust_with(&mut none, &1, &"v", &mut errors));

        assert_eq!(errors.len(), 2);
        assert!(matches!(&errors[0], SetError::MapEntry { key, .. } if key == "key"));
        assert_eq!(errors[1], SetError::NotAMap { type_path: "i32" });
    }
}
