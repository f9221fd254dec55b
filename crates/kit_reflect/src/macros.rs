//! Exported macros implementing [`Typed`](crate::info::Typed) and
//! [`Reflect`](crate::Reflect) for user types.
//!
//! Each macro accepts trailing capability flags:
//!
//! - `inter`: the type implements [`Inter`](crate::Inter),
//! - `floater`: the type implements [`Floater`](crate::Floater),
//! - `display`: the type implements [`Display`](core::fmt::Display),
//! - `serde`: the type implements serde's `Serialize` and `Deserialize`
//!   (implied by `impl_reflect_struct!`, not accepted there).

/// Implements reflection for a plain data structure that round-trips
/// through serde.
///
/// The type must implement `Clone`, `Debug`, `Serialize` and
/// `DeserializeOwned`. It reflects as [`ReflectKind::Struct`], so robust
/// assignment from text parses the text as JSON.
///
/// ```
/// use kit_reflect::{Reflect, impl_reflect_struct, info::ReflectKind};
///
/// #[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl_reflect_struct!(Point);
///
/// let p = Point { x: 1, y: 2 };
/// assert_eq!(p.reflect_kind(), ReflectKind::Struct);
/// assert!(p.as_serialize().is_some());
/// ```
///
/// [`ReflectKind::Struct`]: crate::info::ReflectKind::Struct
#[macro_export]
macro_rules! impl_reflect_struct {
    ($ty:ident $(, $flag:ident)* $(,)?) => {
        $crate::__impl_typed!($ty, $crate::info::ReflectKind::Struct);

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Struct(self)
            }

            $crate::__reflect_clone_apply!();
            $crate::__reflect_capability!(serde);

            fn reflect_debug(
                &self,
                f: &mut $crate::__macro_exports::fmt::Formatter<'_>,
            ) -> $crate::__macro_exports::fmt::Result {
                $crate::__macro_exports::fmt::Debug::fmt(self, f)
            }

            $($crate::__reflect_capability!($flag);)*
        }
    };
}

/// Implements reflection for a newtype that behaves like its inner value.
///
/// Views, kind and serde are those of the inner value; `Typed` reports the
/// newtype's own name. The type must implement `Clone`.
///
/// ```
/// use kit_reflect::{Reflect, impl_reflect_value, info::{ReflectKind, Typed}};
///
/// #[derive(Clone, Debug, Default)]
/// struct Port(u16);
///
/// impl_reflect_value!(Port(u16));
///
/// assert_eq!(Port::type_info().kind(), ReflectKind::Uint);
/// assert_eq!(Port(80).reflect_kind(), ReflectKind::Uint);
/// ```
#[macro_export]
macro_rules! impl_reflect_value {
    ($ty:ident($inner:ty) $(, $flag:ident)* $(,)?) => {
        $crate::__impl_typed!(
            $ty,
            <$inner as $crate::info::Typed>::type_info().kind()
        );

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::Reflect::reflect_kind(&self.0)
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::Reflect::reflect_ref(&self.0)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::Reflect::reflect_mut(&mut self.0)
            }

            $crate::__reflect_clone_apply!();

            #[inline]
            fn as_serialize(&self) -> $crate::__macro_exports::Option<
                &dyn $crate::__macro_exports::erased_serde::Serialize,
            > {
                $crate::Reflect::as_serialize(&self.0)
            }

            #[inline]
            fn deserialize_from(
                &mut self,
                deserializer: &mut dyn $crate::__macro_exports::erased_serde::Deserializer<'_>,
            ) -> $crate::__macro_exports::Result<(), $crate::__macro_exports::erased_serde::Error> {
                $crate::Reflect::deserialize_from(&mut self.0, deserializer)
            }

            #[inline]
            fn reflect_debug(
                &self,
                f: &mut $crate::__macro_exports::fmt::Formatter<'_>,
            ) -> $crate::__macro_exports::fmt::Result {
                $crate::Reflect::reflect_debug(&self.0, f)
            }

            $($crate::__reflect_capability!($flag);)*
        }
    };
}

/// Implements reflection for a type with no structure visible to the
/// conversion engine.
///
/// The type must implement `Clone`. Without capability flags, such a value
/// converts to nothing but its own type and its debug form.
///
/// ```
/// use kit_reflect::{Reflect, impl_reflect_opaque, info::ReflectKind};
///
/// #[derive(Clone)]
/// struct Handle(u32);
///
/// impl std::fmt::Display for Handle {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "handle#{}", self.0)
///     }
/// }
///
/// impl_reflect_opaque!(Handle, display);
///
/// let h = Handle(7);
/// assert_eq!(h.reflect_kind(), ReflectKind::Opaque);
/// assert_eq!(h.as_display().unwrap().to_string(), "handle#7");
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($ty:ident $(, $flag:ident)* $(,)?) => {
        $crate::__impl_typed!($ty, $crate::info::ReflectKind::Opaque);

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Opaque(self)
            }

            $crate::__reflect_clone_apply!();

            $($crate::__reflect_capability!($flag);)*
        }
    };
}

// -----------------------------------------------------------------------------
// Internal

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_typed {
    ($ty:ident, $kind:expr) => {
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::new::<Self>(
                        $kind,
                        concat!(module_path!(), "::", stringify!($ty)),
                        stringify!($ty),
                    )
                })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_clone_apply {
    () => {
        #[inline]
        fn reflect_clone(&self) -> $crate::__macro_exports::Box<dyn $crate::Reflect> {
            $crate::__macro_exports::Box::new(Clone::clone(self))
        }

        fn try_apply(
            &mut self,
            value: &dyn $crate::Reflect,
        ) -> $crate::__macro_exports::Result<(), $crate::ops::ApplyError> {
            match <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                $crate::__macro_exports::Option::Some(value) => {
                    Clone::clone_from(self, value);
                    $crate::__macro_exports::Result::Ok(())
                }
                $crate::__macro_exports::Option::None => {
                    $crate::__macro_exports::Result::Err($crate::ops::ApplyError::MismatchedTypes {
                        from_type: $crate::info::DynamicTyped::reflect_type_path(value).into(),
                        to_type: <Self as $crate::info::Typed>::type_info().type_path().into(),
                    })
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_capability {
    (inter) => {
        #[inline]
        fn as_inter(&self) -> $crate::__macro_exports::Option<&dyn $crate::Inter> {
            $crate::__macro_exports::Option::Some(self)
        }
    };
    (floater) => {
        #[inline]
        fn as_floater(&self) -> $crate::__macro_exports::Option<&dyn $crate::Floater> {
            $crate::__macro_exports::Option::Some(self)
        }
    };
    (display) => {
        #[inline]
        fn as_display(
            &self,
        ) -> $crate::__macro_exports::Option<&dyn $crate::__macro_exports::fmt::Display> {
            $crate::__macro_exports::Option::Some(self)
        }
    };
    (serde) => {
        #[inline]
        fn as_serialize(
            &self,
        ) -> $crate::__macro_exports::Option<&dyn $crate::__macro_exports::erased_serde::Serialize>
        {
            $crate::__macro_exports::Option::Some(self)
        }

        fn deserialize_from(
            &mut self,
            deserializer: &mut dyn $crate::__macro_exports::erased_serde::Deserializer<'_>,
        ) -> $crate::__macro_exports::Result<(), $crate::__macro_exports::erased_serde::Error> {
            *self = <Self as $crate::__macro_exports::serde_core::Deserialize>::deserialize(
                deserializer,
            )?;
            $crate::__macro_exports::Result::Ok(())
        }
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use crate::info::{ReflectKind, Typed};
    use crate::ops::ReflectRef;
    use crate::{Floater, Inter, Reflect};

    #[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
    struct Pair {
        a: i32,
        b: String,
    }

    crate::impl_reflect_struct!(Pair);

    #[derive(Clone, Debug, Default)]
    struct Score(i16);

    impl Inter for Score {
        fn int(&self) -> i64 {
            self.0 as i64 * 2
        }
    }

    impl Floater for Score {
        fn float(&self) -> f64 {
            self.0 as f64 / 2.0
        }
    }

    crate::impl_reflect_value!(Score(i16), inter, floater);

    #[derive(Clone)]
    struct Token;

    crate::impl_reflect_opaque!(Token);

    #[test]
    fn struct_names_and_serde() {
        let info = Pair::type_info();
        assert_eq!(info.kind(), ReflectKind::Struct);
        assert_eq!(info.type_path(), "kit_reflect::macros::tests::Pair");
        assert_eq!(info.short_name(), "tests::Pair");

        let mut pair = Pair::default();
        let mut de = serde_json::Deserializer::from_str(r#"{"a":1,"b":"x"}"#);
        let mut erased = <dyn erased_serde::Deserializer>::erase(&mut de);
        pair.deserialize_from(&mut erased).unwrap();
        assert_eq!(pair, Pair { a: 1, b: String::from("x") });

        let json = serde_json::to_string(pair.as_serialize().unwrap()).unwrap();
        assert_eq!(json, r#"{"a":1,"b":"x"}"#);
    }

    #[test]
    fn value_capabilities() {
        let score = Score(3);
        assert_eq!(score.as_inter().unwrap().int(), 6);
        assert_eq!(score.as_floater().unwrap().float(), 1.5);
        assert!(score.as_display().is_none());
        assert!(matches!(score.reflect_ref(), ReflectRef::Int(3)));
        assert_eq!(Score::type_info().kind(), ReflectKind::Int);
        assert_eq!(format!("{:?}", score.as_reflect()), "3");
    }

    #[test]
    fn opaque() {
        let mut token = Token;
        assert_eq!(token.reflect_kind(), ReflectKind::Opaque);
        assert!(token.as_serialize().is_none());
        assert!(token.try_apply(&Token).is_ok());
        assert!(token.try_apply(&1_u8).is_err());
        assert_eq!(
            format!("{:?}", token.as_reflect()),
            "Opaque(kit_reflect::macros::tests::Token)"
        );
    }
}
