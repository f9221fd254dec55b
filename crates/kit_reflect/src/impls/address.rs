use core::fmt;

use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Reflect;
use crate::impls::{NonGenericTypeInfoCell, impl_serde_reflect, impl_simple_type_reflect};
use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef, UintMut};

/// An address-sized unsigned integer.
///
/// Reflects as an unsigned integer, but prints as lowercase hex with a `0x`
/// prefix.
///
/// ```
/// use kit_reflect::Address;
///
/// assert_eq!(Address(0xbeef).to_string(), "0xbeef");
/// assert_eq!(Address(0).to_string(), "0x0");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub usize);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0 as u64)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        usize::deserialize(deserializer).map(Address)
    }
}

impl Typed for Address {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::new::<Self>(ReflectKind::Uint, "kit_reflect::Address", "Address"))
    }
}

impl Reflect for Address {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Uint
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Uint(self.0 as u64)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Uint(UintMut::Usize(&mut self.0))
    }

    impl_simple_type_reflect!();
    impl_serde_reflect!();

    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
