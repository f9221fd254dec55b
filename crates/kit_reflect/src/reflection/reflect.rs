use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ApplyError, ReflectMut, ReflectRef};
use crate::reflection::{Floater, Inter};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`kit_reflect`](crate).
///
/// A reflected value exposes its coarse [`ReflectKind`], a read view
/// ([`ReflectRef`]) and a write view ([`ReflectMut`]) over that kind, and a
/// few optional capabilities that conversion code probes before falling back
/// to the generic views.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the id of the box, not the
/// value. Use [`Reflect::ty_id`] instead:
///
/// ```
/// # use kit_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!((*x).type_id() == TypeId::of::<i32>()); // Dereferenced works
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Implementation
///
/// Implement it through one of the exported macros:
///
/// - [`impl_reflect_struct!`](crate::impl_reflect_struct) for plain data
///   structures that round-trip through serde,
/// - [`impl_reflect_value!`](crate::impl_reflect_value) for newtypes that
///   should behave like their inner value,
/// - [`impl_reflect_opaque!`](crate::impl_reflect_opaque) for everything else.
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// ```
    /// use kit_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// // Equal to this:
    /// // let r = Box::new(32) as Box<dyn Reflect>;
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the ["kind"](ReflectKind) of the value.
    ///
    /// ```
    /// # use kit_reflect::{Reflect, info::ReflectKind};
    /// let vec = vec![1, 2, 3].into_boxed_reflect();
    ///
    /// assert_eq!(vec.reflect_kind(), ReflectKind::List);
    /// ```
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }

    /// Returns an immutable view of the value, by kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the value, by kind.
    ///
    /// Read-only values (shared pointers, `&'static T`) expose their
    /// pointee through [`Pointer::pointee_mut`](crate::ops::Pointer::pointee_mut),
    /// which returns `None`.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clones the value into a new box of the same concrete type.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Assigns a value of the same concrete type to `self`.
    ///
    /// Fails with [`ApplyError::MismatchedTypes`] for any other type.
    ///
    /// ```
    /// # use kit_reflect::Reflect;
    /// let mut a = String::from("a");
    /// a.try_apply(&String::from("b")).unwrap();
    /// assert_eq!(a, "b");
    ///
    /// assert!(a.try_apply(&1_i32).is_err());
    /// ```
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError>;

    /// Returns the [`Inter`] capability of the value, if any.
    #[inline]
    fn as_inter(&self) -> Option<&dyn Inter> {
        None
    }

    /// Returns the [`Floater`] capability of the value, if any.
    #[inline]
    fn as_floater(&self) -> Option<&dyn Floater> {
        None
    }

    /// Returns the textual form of the value, if the type has one.
    ///
    /// Primitive scalars do not report this; their text is produced by the
    /// conversion routines directly.
    #[inline]
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }

    /// Returns a serializer view of the value, if the type supports serde.
    #[inline]
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        None
    }

    /// Replaces the value with one read from `deserializer`.
    ///
    /// On failure the value is left untouched.
    fn deserialize_from(
        &mut self,
        deserializer: &mut dyn erased_serde::Deserializer<'_>,
    ) -> Result<(), erased_serde::Error> {
        let _ = deserializer;
        Err(<erased_serde::Error as serde_core::de::Error>::custom(
            format_args!(
                "type `{}` does not support deserialization",
                self.reflect_type_path()
            ),
        ))
    }

    /// Debug formatter for the value.
    ///
    /// Scalars print their value, containers print their elements,
    /// everything else prints `Opaque(type_path)`.
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Nil => f.write_str("nil"),
            ReflectRef::Bool(v) => fmt::Debug::fmt(&v, f),
            ReflectRef::Int(v) => fmt::Debug::fmt(&v, f),
            ReflectRef::Uint(v) => fmt::Debug::fmt(&v, f),
            ReflectRef::Float(v) => fmt::Debug::fmt(&v, f),
            ReflectRef::Complex(v) => fmt::Debug::fmt(&v, f),
            ReflectRef::String(v) => fmt::Debug::fmt(v, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Struct(_) | ReflectRef::Opaque(_) => {
                write!(f, "Opaque({})", self.reflect_type_path())
            }
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// ```
    /// # use kit_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// ```
    /// # use kit_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x: Box<i32> = x.downcast::<i32>().unwrap();
    /// assert_eq!(*x, 10);
    /// ```
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            match any.downcast::<T>() {
                Ok(val) => Ok(val),
                Err(_) => unreachable!("type is already checked"),
            }
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|val| *val)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, format, string::String, vec};

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn downcast() {
        let x: Box<dyn Reflect> = 10_i64.into_boxed_reflect();
        assert!(x.is::<i64>());
        assert!(!x.is::<i32>());
        assert_eq!(x.downcast_ref::<i64>(), Some(&10));

        let x = x.downcast::<i32>().unwrap_err();
        assert_eq!(x.take::<i64>().unwrap(), 10);
    }

    #[test]
    fn kind_and_debug() {
        let list: Box<dyn Reflect> = vec![1_u8, 2].into_boxed_reflect();
        assert_eq!(list.reflect_kind(), ReflectKind::List);
        assert_eq!(format!("{list:?}"), "[1, 2]");

        let text: Box<dyn Reflect> = String::from("hi").into_boxed_reflect();
        assert_eq!(format!("{text:?}"), "\"hi\"");

        let nil: Box<dyn Reflect> = ().into_boxed_reflect();
        assert_eq!(nil.reflect_kind(), ReflectKind::Nil);
        assert_eq!(format!("{nil:?}"), "nil");
    }

    #[test]
    fn default_deserialize_fails() {
        let mut level = crate::Address(3);
        let mut de = serde_json::Deserializer::from_str("4");
        let mut erased = <dyn erased_serde::Deserializer>::erase(&mut de);
        // `Address` is serde-capable; `()` is not.
        assert!(level.deserialize_from(&mut erased).is_ok());
        assert_eq!(level.0, 4);

        let mut nil = ();
        let mut de = serde_json::Deserializer::from_str("null");
        let mut erased = <dyn erased_serde::Deserializer>::erase(&mut de);
        assert!(nil.deserialize_from(&mut erased).is_err());
    }
}
