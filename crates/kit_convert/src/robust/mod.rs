//! Robust assignment between arbitrary values.
//!
//! [`set_robust`] writes any value into any settable destination, converting
//! along the way:
//!
//! | destination          | source                 | strategy                      |
//! |----------------------|------------------------|-------------------------------|
//! | integer, float, bool | anything               | [`to_int`], [`to_float`], [`to_bool`] |
//! | string               | anything               | [`to_string`]                 |
//! | struct, list, map    | text                   | parsed as JSON                |
//! | list                 | list                   | [`copy_list_robust`]          |
//! | map                  | map                    | [`copy_map_robust`]           |
//! | anything             | the same type          | cloned                        |
//!
//! Pointers on either side are followed first. An empty pointer on the
//! destination side fails quietly; one that only grants shared access, such
//! as a `&'static T` or a shared `Arc`, fails with a diagnostic.

use kit_reflect::Reflect;
use kit_reflect::info::ReflectKind;
use kit_reflect::ops::{ReflectMut, ReflectRef};

use crate::{
    DiagnosticSink, LogSink, SetError, non_ptr, non_ptr_mut, to_bool, to_float, to_int, to_string,
};

mod json;
mod list;
mod make;
mod map;

pub use list::copy_list_robust;
pub use make::{clone_to_type, make_of_type, string_json};
pub use map::{copy_map_robust, set_map_robust, set_map_robust_with, try_set_map_robust};

/// Sets `to` from `from`, converting as needed. Returns `true` on success.
///
/// Failures other than an empty destination are logged through [`LogSink`].
///
/// ```
/// use kit_convert::set_robust;
///
/// let mut port = 0_u16;
/// assert!(set_robust(&mut port, &"0x1F90"));
/// assert_eq!(port, 8080);
///
/// let mut weights: Vec<f32> = Vec::new();
/// assert!(set_robust(&mut weights, &vec![String::from("0.5"), String::from("2")]));
/// assert_eq!(weights, [0.5, 2.0]);
///
/// let mut nothing: Option<i32> = None;
/// assert!(!set_robust(&mut nothing, &1));
/// ```
#[inline]
pub fn set_robust(to: &mut dyn Reflect, from: &dyn Reflect) -> bool {
    set_robust_with(to, from, &mut LogSink)
}

/// Like [`set_robust`], reporting failures to `sink`.
pub fn set_robust_with(
    to: &mut dyn Reflect,
    from: &dyn Reflect,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    match try_set_robust(to, from) {
        Ok(()) => true,
        Err(SetError::Nil) => false,
        Err(err) => {
            sink.report(err);
            false
        }
    }
}

/// Like [`set_robust`], returning the reason of a failure instead of
/// reporting it.
///
/// The destination is left untouched on failure.
pub fn try_set_robust(to: &mut dyn Reflect, from: &dyn Reflect) -> Result<(), SetError> {
    let to = non_ptr_mut(to)?;
    let text = match non_ptr(from).reflect_ref() {
        ReflectRef::String(text) => Some(text),
        _ => None,
    };

    let kind = to.reflect_kind();
    match kind {
        ReflectKind::Nil => return Err(SetError::Nil),
        ReflectKind::Struct => {
            if let Some(text) = text {
                return json::assign_json(to, text);
            }
        }
        ReflectKind::List => {
            return match text {
                Some(text) => json::assign_json(to, text),
                None => {
                    let list = to.reflect_mut().as_list().map_err(|e| SetError::Unsupported {
                        kind: e.received,
                    })?;
                    copy_list_robust(list, from)
                }
            };
        }
        ReflectKind::Map => {
            return match text {
                Some(text) => json::assign_json(to, text),
                None => {
                    let map = to.reflect_mut().as_map().map_err(|e| SetError::Unsupported {
                        kind: e.received,
                    })?;
                    copy_map_robust(map, from)
                }
            };
        }
        ReflectKind::Complex => {}
        _ => {
            if assign_scalar(to, from) {
                return Ok(());
            }
        }
    }

    let source = non_ptr(from);
    match to.try_apply(source) {
        Ok(()) => Ok(()),
        Err(_) if kind == ReflectKind::Complex => Err(SetError::Unsupported { kind }),
        Err(_) => Err(SetError::Mismatched {
            from_type: source.reflect_type_path(),
            to_type: to.reflect_type_path(),
        }),
    }
}

fn assign_scalar(to: &mut dyn Reflect, from: &dyn Reflect) -> bool {
    match to.reflect_mut() {
        ReflectMut::Bool(dst) => match to_bool(from) {
            Some(v) => *dst = v,
            None => return false,
        },
        ReflectMut::Int(mut dst) => match to_int(from) {
            Some(v) => dst.set_i64(v),
            None => return false,
        },
        ReflectMut::Uint(mut dst) => match to_int(from) {
            Some(v) => dst.set_i64(v),
            None => return false,
        },
        ReflectMut::Float(mut dst) => match to_float(from) {
            Some(v) => dst.set_f64(v),
            None => return false,
        },
        ReflectMut::String(dst) => *dst = to_string(from),
        _ => return false,
    }
    true
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use kit_reflect::{Address, impl_reflect_opaque, impl_reflect_struct};
    use num_complex::Complex64;

    use super::{set_robust, set_robust_with, try_set_robust};
    use crate::SetError;

    static LIMIT: i32 = 10;

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Window {
        title: String,
        width: u32,
    }

    impl_reflect_struct!(Window);

    #[derive(Clone, Debug, PartialEq)]
    struct Handle(u32);

    impl_reflect_opaque!(Handle);

    #[test]
    fn scalars() {
        let mut i = 0_i8;
        assert!(set_robust(&mut i, &"-0x10"));
        assert_eq!(i, -16);
        assert!(set_robust(&mut i, &300_i64));
        assert_eq!(i, 44);

        let mut u = 0_u32;
        assert!(set_robust(&mut u, &-1_i32));
        assert_eq!(u, u32::MAX);

        let mut addr = Address(0);
        assert!(set_robust(&mut addr, &String::from("0xff")));
        assert_eq!(addr, Address(255));

        let mut b = false;
        assert!(set_robust(&mut b, &2.5_f64));
        assert!(b);
        assert!(!set_robust(&mut b, &"maybe"));
        assert!(b);

        let mut f = 0.0_f32;
        assert!(set_robust(&mut f, &"0.1"));
        assert_eq!(f, 0.1_f64 as f32);

        let mut s = String::new();
        assert!(set_robust(&mut s, &1e21_f64));
        assert_eq!(s, "1E+21");
        assert!(set_robust(&mut s, &None::<i32>));
        assert_eq!(s, "nil");
    }

    #[test]
    fn through_pointers() {
        let mut boxed = Box::new(0_i64);
        assert!(set_robust(&mut boxed, &Box::new("42")));
        assert_eq!(*boxed, 42);

        let mut some = Some(Box::new(String::new()));
        assert!(set_robust(&mut some, &Some(7_u8)));
        assert_eq!(some.as_deref().map(String::as_str), Some("7"));

        let mut unique = Arc::new(1.0_f64);
        assert!(set_robust(&mut unique, &"2.5"));
        assert_eq!(*unique, 2.5);
    }

    #[test]
    fn nil_destination_is_quiet() {
        let mut errors: Vec<SetError> = Vec::new();
        let mut none = None::<i32>;
        assert!(!set_robust_with(&mut none, &5, &mut errors));
        assert_eq!(none, None);

        let mut unit = ();
        assert!(!set_robust_with(&mut unit, &5, &mut errors));
        assert!(errors.is_empty());
    }

    #[test]
    fn unsettable_destination() {
        let mut errors: Vec<SetError> = Vec::new();

        let mut limit: &'static i32 = &LIMIT;
        assert!(!set_robust_with(&mut limit, &99, &mut errors));
        assert_eq!(*limit, 10);

        let shared = Arc::new(String::from("kept"));
        let mut alias = shared.clone();
        assert!(!set_robust_with(&mut alias, &"changed", &mut errors));
        assert_eq!(*shared, "kept");

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| matches!(e, SetError::NotSettable { .. })));
    }

    #[test]
    fn struct_from_json() {
        let mut window = Window::default();
        assert!(set_robust(&mut window, &r#"{"title":"main","width":640}"#));
        assert_eq!(window, Window { title: String::from("main"), width: 640 });

        let mut errors: Vec<SetError> = Vec::new();
        assert!(!set_robust_with(&mut window, &Box::new("{\"width\": -1}"), &mut errors));
        assert_eq!(window.width, 640);
        match &errors[0] {
            SetError::Json { target, example, .. } => {
                assert!(target.ends_with("Window"));
                assert_eq!(example, r#"{"title":"main","width":640}"#);
            }
            other => panic!("unexpected error {other:?}"),
        }

        // Trailing text fails the whole parse.
        assert!(try_set_robust(&mut window, &r#"{"title":"x","width":1} junk"#).is_err());
        assert_eq!(window.title, "main");
    }

    #[test]
    fn same_type_fallback() {
        let mut window = Window::default();
        let other = Window { title: String::from("b"), width: 2 };
        assert!(set_robust(&mut window, &Box::new(other.clone())));
        assert_eq!(window, other);

        let mut handle = Handle(1);
        assert!(set_robust(&mut handle, &Handle(2)));
        assert_eq!(handle, Handle(2));
        assert_eq!(
            try_set_robust(&mut handle, &3_u32),
            Err(SetError::Mismatched {
                from_type: "u32",
                to_type: "kit_convert::robust::tests::Handle",
            })
        );
    }

    #[test]
    fn complex_is_unsupported() {
        let mut c = Complex64::new(0.0, 0.0);
        assert!(matches!(
            try_set_robust(&mut c, &1.5_f64),
            Err(SetError::Unsupported { .. })
        ));
        assert!(try_set_robust(&mut c, &Complex64::new(1.0, 2.0)).is_ok());
        assert_eq!(c, Complex64::new(1.0, 2.0));
    }

    #[test]
    fn containers_from_text() {
        let mut list: Vec<u16> = vec![9];
        assert!(set_robust(&mut list, &"[1, 2, 3]"));
        assert_eq!(list, [1, 2, 3]);

        let mut map = std::collections::HashMap::<String, f64>::new();
        let text = r#"{"a": 1.5, "b": -2}"#;
        assert!(set_robust(&mut map, &text));
        let expected: std::collections::HashMap<String, f64> = serde_json::from_str(text).unwrap();
        assert_eq!(map, expected);
    }
}
