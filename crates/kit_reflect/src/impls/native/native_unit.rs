use alloc::boxed::Box;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTyped, ReflectKind, TypeInfo, Typed};
use crate::ops::{ApplyError, ReflectMut, ReflectRef};

// `()` is the untyped nil value: every conversion treats it as absent.

impl Typed for () {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::new::<Self>(ReflectKind::Nil, "()", "()"))
    }
}

impl Reflect for () {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Nil
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Nil
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Nil
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(())
    }

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        if value.is::<()>() {
            Ok(())
        } else {
            Err(ApplyError::MismatchedTypes {
                from_type: value.reflect_type_path().into(),
                to_type: "()".into(),
            })
        }
    }
}
