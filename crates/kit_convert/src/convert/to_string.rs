use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kit_reflect::ops::ReflectRef;
use kit_reflect::{Address, Reflect};

use super::exact_cases;
use crate::format::{format_g, format_g32};
use crate::{is_nil, non_ptr};

/// Converts anything to a `String`. Never fails.
///
/// Floats use the shortest `%G` form, see [`format`](crate::format). Byte
/// vectors are read as UTF-8 text, complex numbers are written as
/// `real,imag`, and values without a textual form fall back to their
/// debug rendering.
///
/// ```
/// use kit_convert::to_string;
///
/// assert_eq!(to_string(&1e6_f64), "1E+06");
/// assert_eq!(to_string(&b"raw".to_vec()), "raw");
/// assert_eq!(to_string(&None::<i32>), "nil");
/// assert_eq!(to_string(&vec![1, 2]), "[1, 2]");
/// ```
pub fn to_string(value: &dyn Reflect) -> String {
    exact_cases! { value;
        String => |v| v.clone();
        &'static str => |v| String::from(*v);
        bool => |v| String::from(kit_bools::to_str(*v));
        isize => |v| v.to_string();
        i32 => |v| v.to_string();
        i64 => |v| v.to_string();
        u8 => |v| v.to_string();
        f64 => |v| format_g(*v, None);
        f32 => |v| format_g32(*v, None);
        Address => |v| format!("{:#x}", v.0);
        Vec<u8> => |v| String::from_utf8_lossy(v).into_owned();
    }

    if let Some(display) = value.as_display() {
        return display.to_string();
    }
    if is_nil(value) {
        return String::from("nil");
    }
    reflect_to_string(value, None)
}

/// Like [`to_string`], but floats are written with `prec` significant
/// digits, which hides the noise of binary fractions.
///
/// ```
/// use kit_convert::to_string_prec;
///
/// assert_eq!(to_string_prec(&(0.1_f64 + 0.2), 6), "0.3");
/// assert_eq!(to_string_prec(&1234567.0_f64, 3), "1.23E+06");
/// ```
pub fn to_string_prec(value: &dyn Reflect, prec: usize) -> String {
    if is_nil(value) {
        return String::from("nil");
    }
    if let Some(display) = value.as_display() {
        return display.to_string();
    }
    reflect_to_string(value, Some(prec))
}

// Floats are formatted at 64 bits whatever their width.
fn reflect_to_string(value: &dyn Reflect, prec: Option<usize>) -> String {
    match non_ptr(value).reflect_ref() {
        ReflectRef::Int(v) => v.to_string(),
        ReflectRef::Uint(v) => v.to_string(),
        ReflectRef::Bool(v) => String::from(kit_bools::to_str(v)),
        ReflectRef::Float(v) => format_g(v, prec),
        ReflectRef::Complex(v) => format!("{},{}", format_g(v.re, prec), format_g(v.im, prec)),
        ReflectRef::String(v) => String::from(v),
        ReflectRef::List(list) => match list.as_bytes() {
            Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            None => format!("{value:?}"),
        },
        _ => format!("{value:?}"),
    }
}

// -----------------------------------------------------------------------------
// Tests
