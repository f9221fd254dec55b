use alloc::boxed::Box;
use alloc::format;
use core::fmt;

use crate::impls::{GenericTypeInfoCell, pointer_debug};
use crate::info::{DynamicTyped, ReflectKind, TypeInfo, Typed};
use crate::ops::{ApplyError, Pointer, ReflectMut, ReflectRef};
use crate::{Floater, Inter, Reflect};

// `None` is the nil pointer.

impl<T: Reflect + Typed + Clone> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            let inner = T::type_info();
            TypeInfo::new::<Self>(
                ReflectKind::Pointer,
                format!("core::option::Option<{}>", inner.type_path()),
                format!("Option<{}>", inner.type_name()),
            )
        })
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Option<T> {
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
        self.as_ref()?.as_inter()
    }

    #[inline]
    fn as_floater(&self) -> Option<&dyn Floater> {
        self.as_ref()?.as_floater()
    }

    #[inline]
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        self.as_ref()?.as_display()
    }

    /// `None` serializes as a unit (`null` in JSON).
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        match self {
            Some(val) => val.as_serialize(),
            None => Some(&()),
        }
    }

    fn deserialize_from(
        &mut self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<(), erased_serde::Error> {
        match self {
            Some(val) => val.deserialize_from(deserializer),
            None => Err(<erased_serde::Error as serde_core::de::Error>::custom(
                format_args!("cannot deserialize through a nil `{}`", Self::type_info().type_path()),
            )),
        }
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed + Clone> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
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
    use alloc::boxed::Box;
    use alloc::format;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Pointer;

    #[test]
    fn nil_and_some() {
        let mut none: Option<u8> = None;
        assert!(none.is_null());
        assert!(none.pointee_mut().is_none());
        assert_eq!(format!("{:?}", none.as_reflect()), "nil");

        let mut some = Some(4_u8);
        assert!(!some.is_null());
        assert_eq!(some.reflect_kind(), ReflectKind::Pointer);
        *some.pointee_mut().unwrap().downcast_mut::<u8>().unwrap() = 5;
        assert_eq!(some, Some(5));
        assert_eq!(format!("{:?}", some.as_reflect()), "5");

        let boxed: Box<dyn Reflect> = Box::new(Some(Box::new(1.5_f64)));
        assert_eq!(format!("{boxed:?}"), "1.5");
    }

    #[test]
    fn serialize_nil() {
        let none: Option<u8> = None;
        let json = serde_json::to_string(none.as_serialize().unwrap()).unwrap();
        assert_eq!(json, "null");
    }
}
