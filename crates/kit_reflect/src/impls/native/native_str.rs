use crate::Reflect;
use crate::impls::{NonGenericTypeInfoCell, impl_simple_type_reflect};
use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

// Reads as a string, but cannot be written through: there is no storage to
// put a converted string into. Assigning another `&'static str` still works.

impl Typed for &'static str {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::new::<Self>(ReflectKind::String, "&str", "&str"))
    }
}

impl Reflect for &'static str {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::String
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::String(*self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Opaque(self)
    }

    impl_simple_type_reflect!(debug);

    #[inline]
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}
