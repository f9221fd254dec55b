use alloc::string::String;

use kit_reflect::Reflect;
use kit_reflect::ops::ReflectRef;

use super::exact_cases;
use crate::parse::{parse_f32, parse_f64};
use crate::{is_nil, non_ptr};

/// Converts anything to an `f64`.
///
/// Values implementing [`Floater`](kit_reflect::Floater) report their own
/// float, which takes priority over the nil check.
///
/// ```
/// use kit_convert::to_float;
///
/// assert_eq!(to_float(&"2.5e-1"), Some(0.25));
/// assert_eq!(to_float(&7_u32), Some(7.0));
/// assert_eq!(to_float(&"seven"), None);
/// ```
pub fn to_float(value: &dyn Reflect) -> Option<f64> {
    exact_cases! { value;
        bool => |v| Some(kit_bools::to_f64(*v));
        isize => |v| Some(*v as f64);
        i32 => |v| Some(*v as f64);
        i64 => |v| Some(*v as f64);
        u8 => |v| Some(*v as f64);
        f64 => |v| Some(*v);
        f32 => |v| Some(*v as f64);
        String => |v| parse_f64(v);
        &'static str => |v| parse_f64(v);
    }

    if let Some(floater) = value.as_floater() {
        return Some(floater.float());
    }
    if is_nil(value) {
        return None;
    }
    match non_ptr(value).reflect_ref() {
        ReflectRef::Int(v) => Some(v as f64),
        ReflectRef::Uint(v) => Some(v as f64),
        ReflectRef::Bool(v) => Some(kit_bools::to_f64(v)),
        ReflectRef::Float(v) => Some(v),
        ReflectRef::Complex(v) => Some(v.re),
        ReflectRef::String(v) => parse_f64(v),
        _ => None,
    }
}

/// Converts anything to an `f32`.
///
/// Integers and text round directly to 32 bits; text out of `f32` range
/// fails.
///
/// ```
/// use kit_convert::to_float32;
///
/// assert_eq!(to_float32(&3.14159265358979_f64), Some(3.14159265358979_f64 as f32));
/// assert_eq!(to_float32(&"0.1"), Some(0.1_f32));
/// assert_eq!(to_float32(&"1e39"), None);
/// ```
pub fn to_float32(value: &dyn Reflect) -> Option<f32> {
    exact_cases! { value;
        bool => |v| Some(kit_bools::to_f32(*v));
        isize => |v| Some(*v as f32);
        i32 => |v| Some(*v as f32);
        i64 => |v| Some(*v as f32);
        u8 => |v| Some(*v as f32);
        f64 => |v| Some(*v as f32);
        f32 => |v| Some(*v);
        String => |v| parse_f32(v);
        &'static str => |v| parse_f32(v);
    }

    if let Some(floater) = value.as_floater() {
        return Some(floater.float() as f32);
    }
    if is_nil(value) {
        return None;
    }
    match non_ptr(value).reflect_ref() {
        ReflectRef::Int(v) => Some(v as f32),
        ReflectRef::Uint(v) => Some(v as f32),
        ReflectRef::Bool(v) => Some(kit_bools::to_f32(v)),
        ReflectRef::Float(v) => Some(v as f32),
        ReflectRef::Complex(v) => Some(v.re as f32),
        ReflectRef::String(v) => parse_f32(v),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use kit_reflect::{Floater, impl_reflect_opaque};
    use num_complex::Complex32;

    use super::{to_float, to_float32};

    #[derive(Clone)]
    struct Ratio(i32, i32);

    impl Floater for Ratio {
        fn float(&self) -> f64 {
            self.0 as f64 / self.1 as f64
        }
    }

    impl_reflect_opaque!(Ratio, floater);

    #[test]
    fn fast_path() {
        assert_eq!(to_float(&true), Some(1.0));
        assert_eq!(to_float(&Box::new(-4_i32)), Some(-4.0));
        assert_eq!(to_float(&0.5_f32), Some(0.5));
        assert_eq!(to_float(&String::from("-1.25")), Some(-1.25));
        assert_eq!(to_float(&"inf"), Some(f64::INFINITY));
        assert_eq!(to_float(&"1e400"), None);

        assert_eq!(to_float32(&Box::new(0.1_f64)), Some(0.1_f32));
        assert_eq!(to_float32(&i64::MAX), Some(i64::MAX as f32));
        assert_eq!(to_float32(&String::from("2.5")), Some(2.5));
    }

    #[test]
    fn capability() {
        assert_eq!(to_float(&Ratio(1, 4)), Some(0.25));
        assert_eq!(to_float32(&Box::new(Ratio(3, 2))), Some(1.5));
    }

    #[test]
    fn reflective() {
        assert_eq!(to_float(&u64::MAX), Some(u64::MAX as f64));
        assert_eq!(to_float(&-3_i16), Some(-3.0));
        assert_eq!(to_float(&Complex32::new(1.5, 2.0)), Some(1.5));
        assert_eq!(to_float(&Some(String::from(".5"))), Some(0.5));
        assert_eq!(to_float32(&Some(1.0e-46_f64)), Some(0.0));
        assert_eq!(to_float32(&Some(String::from("1e39"))), None);
    }

    #[test]
    fn failures() {
        assert_eq!(to_float(&()), None);
        assert_eq!(to_float32(&None::<f32>), None);
        assert_eq!(to_float(&BTreeMap::<String, f64>::new()), None);
        assert_eq!(to_float(&"1,5"), None);
    }
}
