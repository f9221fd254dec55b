use core::fmt;

use serde_core::Serialize;
use serde_core::de::DeserializeOwned;

use crate::Reflect;
use crate::info::Typed;
use crate::ops::{List, Map, Pointer};

// -----------------------------------------------------------------------------
// Element bounds

/// Bounds shared by the element types of reflected containers.
///
/// Containers create fresh elements from `Default`, clone them for
/// `reflect_clone`, and round-trip them through serde when the whole
/// container is read from or written as text.
pub trait ReflectElement:
    Reflect + Typed + Clone + Default + Serialize + DeserializeOwned
{
}

impl<T> ReflectElement for T where
    T: Reflect + Typed + Clone + Default + Serialize + DeserializeOwned
{
}

// -----------------------------------------------------------------------------
// Debug helpers

/// Debug formatter for [`List`], `[a, b, ..]`.
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(dyn_list.iter()).finish()
}

/// Debug formatter for [`Map`], `{k: v, ..}`.
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(dyn_map.iter()).finish()
}

/// Debug formatter for [`Pointer`]: the pointee, or `nil`.
pub fn pointer_debug(dyn_ptr: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_ptr.pointee() {
        Some(val) => val.reflect_debug(f),
        None => f.write_str("nil"),
    }
}

// -----------------------------------------------------------------------------
// Implementation macros

/// `reflect_clone` and `try_apply` through `Clone`, plus `reflect_debug`
/// through `Debug` with the `debug` flag.
macro_rules! impl_simple_type_reflect {
    (debug) => {
        $crate::impls::impl_simple_type_reflect!();

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
    () => {
        #[inline]
        fn reflect_clone(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
            ::alloc::boxed::Box::new(Clone::clone(self))
        }

        fn try_apply(&mut self, value: &dyn $crate::Reflect) -> Result<(), $crate::ops::ApplyError> {
            if let Some(value) = <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                Clone::clone_from(self, value);
                Ok(())
            } else {
                Err($crate::ops::ApplyError::MismatchedTypes {
                    from_type: ::alloc::borrow::Cow::Borrowed(
                        $crate::info::DynamicTyped::reflect_type_path(value),
                    ),
                    to_type: ::alloc::borrow::Cow::Borrowed(
                        <Self as $crate::info::Typed>::type_info().type_path(),
                    ),
                })
            }
        }
    };
}

/// `as_serialize` and `deserialize_from` through the type's own serde impls.
macro_rules! impl_serde_reflect {
    () => {
        #[inline]
        fn as_serialize(&self) -> Option<&dyn ::erased_serde::Serialize> {
            Some(self)
        }

        fn deserialize_from(
            &mut self,
            deserializer: &mut dyn ::erased_serde::Deserializer<'_>,
        ) -> Result<(), ::erased_serde::Error> {
            *self = <Self as ::serde_core::Deserialize>::deserialize(deserializer)?;
            Ok(())
        }
    };
}

/// `Typed`, `Reflect` and `Map` for a map type with `K, V` parameters.
macro_rules! impl_reflect_for_map {
    ($ty:ident, $path:literal, $name:literal, $($key_bound:path),+ $(,)?) => {
        impl<K, V> $crate::info::Typed for $ty<K, V>
        where
            K: $crate::impls::ReflectElement $(+ $key_bound)+,
            V: $crate::impls::ReflectElement,
        {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell = $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let key = K::type_info();
                    let value = V::type_info();
                    $crate::info::TypeInfo::new::<Self>(
                        $crate::info::ReflectKind::Map,
                        ::alloc::format!("{}<{}, {}>", $path, key.type_path(), value.type_path()),
                        ::alloc::format!("{}<{}, {}>", $name, key.type_name(), value.type_name()),
                    )
                })
            }
        }

        impl<K, V> $crate::Reflect for $ty<K, V>
        where
            K: $crate::impls::ReflectElement $(+ $key_bound)+,
            V: $crate::impls::ReflectElement,
        {
            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Map(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Map(self)
            }

            #[inline]
            fn reflect_clone(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
                ::alloc::boxed::Box::new(Clone::clone(self))
            }

            fn try_apply(&mut self, value: &dyn $crate::Reflect) -> Result<(), $crate::ops::ApplyError> {
                if let Some(value) = <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                    Clone::clone_from(self, value);
                    Ok(())
                } else {
                    Err($crate::ops::ApplyError::MismatchedTypes {
                        from_type: ::alloc::borrow::Cow::Borrowed(
                            $crate::info::DynamicTyped::reflect_type_path(value),
                        ),
                        to_type: ::alloc::borrow::Cow::Borrowed(
                            <Self as $crate::info::Typed>::type_info().type_path(),
                        ),
                    })
                }
            }

            $crate::impls::impl_serde_reflect!();

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::map_debug(self, f)
            }
        }

        impl<K, V> $crate::ops::Map for $ty<K, V>
        where
            K: $crate::impls::ReflectElement $(+ $key_bound)+,
            V: $crate::impls::ReflectElement,
        {
            fn get(&self, key: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                key.downcast_ref::<K>()
                    .and_then(|key| Self::get(self, key))
                    .map($crate::Reflect::as_reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> $crate::ops::MapIter<'_> {
                ::alloc::boxed::Box::new(
                    Self::iter(self).map(|(k, v)| (k as &dyn $crate::Reflect, v as &dyn $crate::Reflect)),
                )
            }

            #[inline]
            fn key_info(&self) -> &'static $crate::info::TypeInfo {
                K::type_info()
            }

            #[inline]
            fn value_info(&self) -> &'static $crate::info::TypeInfo {
                V::type_info()
            }

            #[inline]
            fn new_key(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
                ::alloc::boxed::Box::new(K::default())
            }

            #[inline]
            fn new_value(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
                ::alloc::boxed::Box::new(V::default())
            }

            fn try_insert(
                &mut self,
                key: ::alloc::boxed::Box<dyn $crate::Reflect>,
                value: ::alloc::boxed::Box<dyn $crate::Reflect>,
            ) -> Result<
                Option<::alloc::boxed::Box<dyn $crate::Reflect>>,
                (::alloc::boxed::Box<dyn $crate::Reflect>, ::alloc::boxed::Box<dyn $crate::Reflect>),
            > {
                if !key.is::<K>() || !value.is::<V>() {
                    return Err((key, value));
                }
                match (key.take::<K>(), value.take::<V>()) {
                    (Ok(key), Ok(value)) => {
                        Ok(Self::insert(self, key, value).map($crate::Reflect::into_boxed_reflect))
                    }
                    _ => unreachable!("types are already checked"),
                }
            }

            #[inline]
            fn clear(&mut self) {
                Self::clear(self);
            }
        }
    };
}

pub(crate) use impl_reflect_for_map;
pub(crate) use impl_serde_reflect;
pub(crate) use impl_simple_type_reflect;
