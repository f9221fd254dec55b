use alloc::boxed::Box;
use alloc::format;
use alloc::sync::Arc;
use core::fmt;

use crate::impls::{GenericTypeInfoCell, pointer_debug};
use crate::info::{DynamicTyped, ReflectKind, TypeInfo, Typed};
use crate::ops::{ApplyError, Pointer, ReflectMut, ReflectRef};
use crate::{Floater, Inter, Reflect};

// A shared pointer is writable only while it is the sole owner.

impl<T: Reflect + Typed> Typed for Arc<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            let inner = T::type_info();
            TypeInfo::new::<Self>(
                ReflectKind::Pointer,
                format!("alloc::sync::Arc<{}>", inner.type_path()),
                format!("Arc<{}>", inner.type_name()),
            )
        })
    }
}

impl<T: Reflect + Typed> Reflect for Arc<T> {
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
        Box::new(Arc::clone(self))
    }

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        match value.downcast_ref::<Self>() {
            Some(value) => {
                *self = Arc::clone(value);
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

impl<T: Reflect + Typed> Pointer for Arc<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Arc::get_mut(self).map(|val| val as &mut dyn Reflect)
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
    use alloc::sync::Arc;

    use crate::ops::Pointer;

    #[test]
    fn shared_is_read_only() {
        let mut unique = Arc::new(1_i32);
        assert!(unique.pointee_mut().is_some());

        let other = Arc::clone(&unique);
        assert!(unique.pointee_mut().is_none());
        assert!(unique.pointee().is_some());
        drop(other);
    }
}
