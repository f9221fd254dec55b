use alloc::string::String;

use crate::Reflect;
use crate::impls::{NonGenericTypeInfoCell, impl_serde_reflect, impl_simple_type_reflect};
use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::new::<Self>(ReflectKind::String, "String", "String"))
    }
}

impl Reflect for String {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::String
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::String(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::String(self)
    }

    impl_simple_type_reflect!(debug);
    impl_serde_reflect!();
}
