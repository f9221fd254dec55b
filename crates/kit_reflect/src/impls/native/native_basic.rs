use crate::Reflect;
use crate::impls::{NonGenericTypeInfoCell, impl_serde_reflect, impl_simple_type_reflect};
use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::ops::{FloatMut, IntMut, ReflectMut, ReflectRef, UintMut};

macro_rules! impl_typed {
    ($ty:ident, $kind:ident) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::new::<Self>(ReflectKind::$kind, stringify!($ty), stringify!($ty))
                })
            }
        }
    };
}

macro_rules! impl_reflect_number {
    ($($ty:ident => $kind:ident($read:ty), $writer:ident::$variant:ident;)*) => {$(
        impl_typed!($ty, $kind);

        impl Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::$kind
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::$kind(*self as $read)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::$kind($writer::$variant(self))
            }

            impl_simple_type_reflect!(debug);
            impl_serde_reflect!();
        }
    )*};
}

impl_reflect_number! {
    i8 => Int(i64), IntMut::I8;
    i16 => Int(i64), IntMut::I16;
    i32 => Int(i64), IntMut::I32;
    i64 => Int(i64), IntMut::I64;
    isize => Int(i64), IntMut::Isize;
    u8 => Uint(u64), UintMut::U8;
    u16 => Uint(u64), UintMut::U16;
    u32 => Uint(u64), UintMut::U32;
    u64 => Uint(u64), UintMut::U64;
    usize => Uint(u64), UintMut::Usize;
    f32 => Float(f64), FloatMut::F32;
    f64 => Float(f64), FloatMut::F64;
}

impl_typed!(bool, Bool);

impl Reflect for bool {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Bool
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Bool(*self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Bool(self)
    }

    impl_simple_type_reflect!(debug);
    impl_serde_reflect!();
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::{ReflectMut, ReflectRef};

    #[test]
    fn views() {
        assert!(matches!(7_u16.reflect_ref(), ReflectRef::Uint(7)));
        assert!(matches!((-7_i8).reflect_ref(), ReflectRef::Int(-7)));
        assert!(matches!(true.reflect_ref(), ReflectRef::Bool(true)));

        let mut x = 1.5_f32;
        match x.reflect_mut() {
            ReflectMut::Float(mut w) => w.set_f64(2.25),
            _ => panic!("expected a float view"),
        }
        assert_eq!(x, 2.25);
    }

    #[test]
    fn type_info() {
        let info = <u32 as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Uint);
        assert_eq!(info.type_path(), "u32");
        assert_eq!(info.short_name(), "u32");
        assert_eq!(info.module_path(), None);
    }

    #[test]
    fn apply_and_debug() {
        let mut x = 1_i32;
        x.try_apply(&5_i32).unwrap();
        assert_eq!(x, 5);

        let err = x.try_apply(&5_i64).unwrap_err();
        assert_eq!(format!("{err}"), "attempted to apply `i64` to `i32`");

        let boxed: alloc::boxed::Box<dyn Reflect> = 0.5_f64.into_boxed_reflect();
        assert_eq!(format!("{boxed:?}"), "0.5");
    }
}
