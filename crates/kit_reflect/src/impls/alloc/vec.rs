use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use crate::Reflect;
use crate::impls::{
    GenericTypeInfoCell, ReflectElement, impl_serde_reflect, impl_simple_type_reflect, list_debug,
};
use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::ops::{List, ListItemIter, ReflectMut, ReflectRef};

impl<T: ReflectElement> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            let item = T::type_info();
            TypeInfo::new::<Self>(
                ReflectKind::List,
                format!("alloc::vec::Vec<{}>", item.type_path()),
                format!("Vec<{}>", item.type_name()),
            )
        })
    }
}

impl<T: ReflectElement> Reflect for Vec<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::List
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::List(self)
    }

    impl_simple_type_reflect!();
    impl_serde_reflect!();

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        list_debug(self, f)
    }
}

impl<T: ReflectElement> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }

    #[inline]
    fn item_info(&self) -> &'static TypeInfo {
        T::type_info()
    }

    #[inline]
    fn new_item(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }

    fn try_push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        self.push(value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        <dyn Any>::downcast_ref::<Vec<u8>>(self).map(Vec::as_slice)
    }
}

// -----------------------------------------------------------------------------
// Tests
