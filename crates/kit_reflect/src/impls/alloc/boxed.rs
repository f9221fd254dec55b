use alloc::boxed::Box;
use alloc::format;
use core::fmt;

use crate::impls::{GenericTypeInfoCell, pointer_debug};
use crate::info::{DynamicTyped, ReflectKind, TypeInfo, Typed};
use crate::ops::{ApplyError, Pointer, ReflectMut, ReflectRef};
use crate::{Floater, Inter, Reflect};

// An owned, never-nil pointer. Capabilities and serde pass through to the
// pointee, so `Box<T>` behaves like `T` to every conversion.

impl<T: Reflect + Typed + Clone> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            let inner = T::type_info();
            TypeInfo::new::<Self>(
                ReflectKind::Pointer,
                format!("alloc::boxed::Box<{}>", inner.type_path()),
                format!("Box<{}>", inner.type_name()),
            )
        })
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Box<T> {
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
        Box::new(Clone::clone(self))
    }

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        match value.downcast_ref::<Self>() {
            Some(value) => {
                Clone::clone_from(self, value);
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
    fn deserialize_from(
        &mut self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<(), erased_serde::Error> {
        (**self).deserialize_from(deserializer)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed + Clone> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }

    #[inline]
    fn pointee_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
