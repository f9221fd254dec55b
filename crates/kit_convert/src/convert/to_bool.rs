use alloc::string::String;

use kit_reflect::Reflect;
use kit_reflect::ops::ReflectRef;

use super::exact_cases;
use crate::parse::parse_bool;
use crate::{is_nil, non_ptr};

/// Converts anything to a `bool`.
///
/// Numbers are `true` when non-zero, complex numbers by their real part,
/// and text must be a boolean literal such as `true`, `F` or `1`.
///
/// ```
/// use kit_convert::to_bool;
///
/// assert_eq!(to_bool(&2.5_f32), Some(true));
/// assert_eq!(to_bool(&String::from("False")), Some(false));
/// assert_eq!(to_bool(&"yes"), None);
/// assert_eq!(to_bool(&None::<bool>), None);
/// ```
pub fn to_bool(value: &dyn Reflect) -> Option<bool> {
    exact_cases! { value;
        bool => |v| Some(*v);
        isize => |v| Some(*v != 0);
        i32 => |v| Some(*v != 0);
        i64 => |v| Some(*v != 0);
        u8 => |v| Some(*v != 0);
        f64 => |v| Some(*v != 0.0);
        f32 => |v| Some(*v != 0.0);
        String => |v| parse_bool(v);
        &'static str => |v| parse_bool(v);
    }

    if is_nil(value) {
        return None;
    }
    match non_ptr(value).reflect_ref() {
        ReflectRef::Bool(v) => Some(v),
        ReflectRef::Int(v) => Some(v != 0),
        ReflectRef::Uint(v) => Some(v != 0),
        ReflectRef::Float(v) => Some(v != 0.0),
        ReflectRef::Complex(v) => Some(v.re != 0.0),
        ReflectRef::String(v) => parse_bool(v),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Tests
