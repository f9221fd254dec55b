use alloc::string::String;

use kit_reflect::Reflect;
use kit_reflect::ops::ReflectRef;

use super::exact_cases;
use crate::parse::parse_int;
use crate::{is_nil, non_ptr};

/// Converts anything to an `i64`.
///
/// Floats are truncated toward zero, unsigned values are reinterpreted,
/// and text is parsed with [`parse_int`], so base prefixes such as `0x`
/// are understood. Values implementing [`Inter`](kit_reflect::Inter)
/// report their own integer.
///
/// ```
/// use kit_convert::to_int;
///
/// assert_eq!(to_int(&"0x1F"), Some(31));
/// assert_eq!(to_int(&-2.9_f64), Some(-2));
/// assert_eq!(to_int(&true), Some(1));
/// assert_eq!(to_int(&"not a number"), None);
/// ```
pub fn to_int(value: &dyn Reflect) -> Option<i64> {
    exact_cases! { value;
        bool => |v| Some(kit_bools::to_i64(*v));
        isize => |v| Some(*v as i64);
        i32 => |v| Some(*v as i64);
        i64 => |v| Some(*v);
        u8 => |v| Some(*v as i64);
        f64 => |v| Some(*v as i64);
        f32 => |v| Some(*v as i64);
        String => |v| parse_int(v);
        &'static str => |v| parse_int(v);
    }

    if is_nil(value) {
        return None;
    }
    if let Some(inter) = value.as_inter() {
        return Some(inter.int());
    }
    match non_ptr(value).reflect_ref() {
        ReflectRef::Int(v) => Some(v),
        ReflectRef::Uint(v) => Some(v as i64),
        ReflectRef::Bool(v) => Some(kit_bools::to_i64(v)),
        ReflectRef::Float(v) => Some(v as i64),
        ReflectRef::Complex(v) => Some(v.re as i64),
        ReflectRef::String(v) => parse_int(v),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;

    use kit_reflect::{Address, Inter, impl_reflect_value};
    use num_complex::Complex64;

    use super::to_int;

    #[derive(Clone, Debug, Default)]
    struct Percent(u8);

    impl Inter for Percent {
        fn int(&self) -> i64 {
            self.0 as i64 * 100
        }
    }

    impl_reflect_value!(Percent(u8), inter);

    #[test]
    fn fast_path() {
        assert_eq!(to_int(&false), Some(0));
        assert_eq!(to_int(&Box::new(12_isize)), Some(12));
        assert_eq!(to_int(&i64::MIN), Some(i64::MIN));
        assert_eq!(to_int(&255_u8), Some(255));
        assert_eq!(to_int(&Box::new(1e30_f32)), Some(i64::MAX));
        assert_eq!(to_int(&String::from("-017")), Some(-15));
        assert_eq!(to_int(&Box::new("1_000")), Some(1000));
        assert_eq!(to_int(&"12.5"), None);
    }

    #[test]
    fn capability() {
        assert_eq!(to_int(&Percent(3)), Some(300));
        assert_eq!(to_int(&Box::new(Percent(2))), Some(200));
        assert_eq!(to_int(&None::<Percent>), None);
    }

    #[test]
    fn reflective() {
        assert_eq!(to_int(&-5_i8), Some(-5));
        assert_eq!(to_int(&u64::MAX), Some(-1));
        assert_eq!(to_int(&Address(0x10)), Some(16));
        assert_eq!(to_int(&Complex64::new(4.7, 9.0)), Some(4));
        assert_eq!(to_int(&Some(Arc::new(String::from("0b11")))), Some(3));
        assert_eq!(to_int(&Some(Some(9_u16))), Some(9));
    }

    #[test]
    fn failures() {
        assert_eq!(to_int(&()), None);
        assert_eq!(to_int(&None::<i64>), None);
        assert_eq!(to_int(&String::from("9223372036854775808")), None);
        assert_eq!(to_int(&alloc::vec![1_i32]), None);
    }
}
