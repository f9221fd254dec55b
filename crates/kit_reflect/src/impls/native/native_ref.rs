use alloc::boxed::Box;
use alloc::format;
use core::fmt;

use crate::impls::{GenericTypeInfoCell, pointer_debug};
use crate::info::{DynamicTyped, ReflectKind, TypeInfo, Typed};
use crate::ops::{ApplyError, Pointer, ReflectMut, ReflectRef};
use crate::{Floater, Inter, Reflect};

// A read-only pointer: the pointee is visible but never handed out mutably.

impl<T: Reflect + Typed> Typed for &'static T {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            let inner = T::type_info();
            TypeInfo::new::<Self>(
                ReflectKind::Pointer,
                format!("&{}", inner.type_path()),
                format!("&{}", inner.type_name()),
            )
        })
    }
}

impl<T: Reflect + Typed> Reflect for &'static T {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(*self)
    }

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        match value.downcast_ref::<Self>() {
            Some(value) => {
                *self = *value;
                Ok(())
            }
            None => Err(ApplyError::MismatchedTypes {
                from_type: value.reflect_type_path().into(),
                to_type: Self::type_info().type_path().into(),
            }),
        }
    }

    #[inline]
    fn as_inter(&self) -> Option<&dyn Inter> {
        (**self).as_inter()
    }

    #[inline]
    fn as_floater(&self) -> Option<&dyn Floater> {
        (**self).as_floater()
    }

    #[inline]
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        (**self).as_display()
    }

    #[inline]
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        (**self).as_serialize()
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed> Pointer for &'static T {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(*self)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }

    #[inline]
    fn pointee_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::{Pointer, ReflectMut};

    static LIMIT: i32 = 10;

    #[test]
    fn read_only() {
        let mut limit: &'static i32 = &LIMIT;
        // Method lookup on `limit` would pick the `i32` impl.
        assert_eq!(<&'static i32 as Reflect>::reflect_kind(&limit), ReflectKind::Pointer);
        assert_eq!(<&'static i32>::type_info().type_path(), "&i32");
        assert_eq!(<&'static i32>::type_info().module_path(), None);

        match limit.reflect_mut() {
            ReflectMut::Pointer(ptr) => assert!(ptr.pointee_mut().is_none()),
            _ => panic!("expected a pointer view"),
        }
        assert!(!<&'static i32 as Pointer>::is_null(&limit));
        assert_eq!(limit.reflect_kind(), ReflectKind::Int);
    }
}
