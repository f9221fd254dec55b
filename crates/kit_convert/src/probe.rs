//! Probes shared by every conversion path.

use kit_reflect::Reflect;
use kit_reflect::info::ReflectKind;
use kit_reflect::ops::{ReflectMut, ReflectRef};

use crate::SetError;

/// Returns `true` if the value is `()` or an empty pointer such as `None`.
///
/// Only the outermost level is inspected; numbers, strings and containers
/// are never nil.
///
/// ```
/// use kit_convert::is_nil;
///
/// assert!(is_nil(&()));
/// assert!(is_nil(&None::<i32>));
/// assert!(!is_nil(&Some(0)));
/// assert!(!is_nil(&Vec::<u8>::new()));
/// ```
pub fn is_nil(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Nil => true,
        ReflectRef::Pointer(ptr) => ptr.is_null(),
        _ => false,
    }
}

/// Returns `true` for `Bool`, `Int`, `Uint`, `Float`, `Complex` and `String`.
#[inline]
pub fn kind_is_basic(kind: ReflectKind) -> bool {
    kind.is_basic()
}

/// Returns `true` if the value is nil or holds nothing useful: a zero
/// number, `false`, or an empty string, list or map.
pub fn value_is_zero(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Nil => true,
        ReflectRef::Bool(v) => !v,
        ReflectRef::Int(v) => v == 0,
        ReflectRef::Uint(v) => v == 0,
        ReflectRef::Float(v) => v == 0.0,
        ReflectRef::Complex(v) => v.re == 0.0 && v.im == 0.0,
        ReflectRef::String(v) => v.is_empty(),
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Map(map) => map.is_empty(),
        ReflectRef::Pointer(ptr) => ptr.is_null(),
        ReflectRef::Struct(_) | ReflectRef::Opaque(_) => false,
    }
}

/// Follows pointers until a non-pointer or an empty pointer is reached.
pub fn non_ptr(value: &dyn Reflect) -> &dyn Reflect {
    let mut value = value;
    while let ReflectRef::Pointer(ptr) = value.reflect_ref() {
        match ptr.pointee() {
            Some(inner) => value = inner,
            None => break,
        }
    }
    value
}

/// Follows pointers to a writable non-pointer value.
///
/// Fails with [`SetError::Nil`] on an empty pointer and with
/// [`SetError::NotSettable`] on a pointer that only grants shared access.
pub fn non_ptr_mut(value: &mut dyn Reflect) -> Result<&mut dyn Reflect, SetError> {
    if value.reflect_kind() != ReflectKind::Pointer {
        return Ok(value);
    }
    let type_path = value.reflect_type_path();
    match value.reflect_mut() {
        ReflectMut::Pointer(ptr) => {
            if ptr.is_null() {
                return Err(SetError::Nil);
            }
            match ptr.pointee_mut() {
                Some(inner) => non_ptr_mut(inner),
                None => Err(SetError::NotSettable { type_path }),
            }
        }
        other => Err(SetError::Unsupported { kind: other.kind() }),
    }
}

// -----------------------------------------------------------------------------
// Tests
