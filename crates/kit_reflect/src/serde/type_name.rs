use core::fmt;

use serde_core::de::{self, DeserializeSeed, Visitor};
use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use super::TypeError;

use crate::Reflect;
use crate::info::{DynamicTyped, TypeInfo, Typed};
use crate::registry::{TypeRegistry, types};

// -----------------------------------------------------------------------------
// Type

/// A runtime type descriptor that serializes as its registry name.
///
/// `Type(None)` is the absent descriptor, written as `null`.
///
/// ```
/// use kit_reflect::serde::Type;
///
/// let ty = Type::of::<Vec<u8>>();
/// assert_eq!(serde_json::to_string(&ty).unwrap(), r#""vec::Vec<u8>""#);
/// assert_eq!(serde_json::from_str::<Type>(r#""vec::Vec<u8>""#).unwrap(), ty);
///
/// assert_eq!(serde_json::to_string(&Type::default()).unwrap(), "null");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Type(pub Option<&'static TypeInfo>);

impl Type {
    /// The absent descriptor.
    pub const NIL: Self = Self(None);

    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self(Some(T::type_info()))
    }

    /// Returns the descriptor of the value's concrete type.
    #[inline]
    pub fn of_val(value: &dyn Reflect) -> Self {
        Self(Some(value.reflect_type_info()))
    }

    #[inline]
    pub fn info(&self) -> Option<&'static TypeInfo> {
        self.0
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the registry name, `module::Ident` or a bare primitive name.
    #[inline]
    pub fn short_type_name(&self) -> Option<&'static str> {
        self.0.map(TypeInfo::short_name)
    }

    /// Resolves a serialized name against `registry`.
    ///
    /// `"null"` is the absent descriptor.
    pub fn from_name(name: &str, registry: &TypeRegistry) -> Result<Self, TypeError> {
        if name == "null" {
            return Ok(Self::NIL);
        }
        match registry.get_with_short_name(name) {
            Some(meta) => Ok(Self(Some(meta.type_info()))),
            None => Err(TypeError::NotFound { name: name.into() }),
        }
    }
}

impl From<&'static TypeInfo> for Type {
    #[inline]
    fn from(info: &'static TypeInfo) -> Self {
        Self(Some(info))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.short_type_name() {
            Some(name) => f.write_str(name),
            None => f.write_str("nil"),
        }
    }
}

// -----------------------------------------------------------------------------
// Serde

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.short_type_name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_none(),
        }
    }
}

/// Reads a [`Type`] by looking its name up in the given registry.
///
/// ```
/// use serde_core::de::DeserializeSeed;
/// use kit_reflect::{registry::TypeRegistry, serde::{Type, TypeSeed}};
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Vec<String>>();
///
/// let mut de = serde_json::Deserializer::from_str(r#""vec::Vec<String>""#);
/// let ty = TypeSeed::new(&registry).deserialize(&mut de).unwrap();
/// assert_eq!(ty, Type::of::<Vec<String>>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeSeed<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> TypeSeed<'a> {
    #[inline]
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }
}

impl<'de> DeserializeSeed<'de> for TypeSeed<'_> {
    type Value = Type;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_option(self)
    }
}

impl<'de> Visitor<'de> for TypeSeed<'_> {
    type Value = Type;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a registered type name or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Type::NIL)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Type::NIL)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Type::from_name(v.trim(), self.registry).map_err(E::custom)
    }
}

/// Resolves names through the process-wide registry.
impl<'de> Deserialize<'de> for Type {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let registry = types().read();
        TypeSeed::new(&registry).deserialize(deserializer)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::{String, ToString};

    use serde_core::de::DeserializeSeed;

    use super::{Type, TypeSeed};
    use crate::registry::TypeRegistry;
    use crate::serde::TypeError;

    #[test]
    fn json_round_trip() {
        let ty = Type::of::<f64>();
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, r#""f64""#);
        assert_eq!(serde_json::from_str::<Type>(&json).unwrap(), ty);

        let json = serde_json::to_string(&Type::NIL).unwrap();
        assert_eq!(json, "null");
        assert_eq!(serde_json::from_str::<Type>(&json).unwrap(), Type::NIL);

        // A quoted "null" is absent too.
        assert_eq!(serde_json::from_str::<Type>(r#""null""#).unwrap(), Type::NIL);
    }

    #[test]
    fn seed_uses_given_registry() {
        let mut registry = TypeRegistry::empty();
        registry.register::<BTreeMap<String, i32>>();

        let ty = Type::of::<BTreeMap<String, i32>>();
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, r#""btree_map::BTreeMap<String, i32>""#);

        let mut de = serde_json::Deserializer::from_str(&json);
        assert_eq!(TypeSeed::new(&registry).deserialize(&mut de).unwrap(), ty);

        let mut de = serde_json::Deserializer::from_str(r#""i32""#);
        let err = TypeSeed::new(&registry).deserialize(&mut de).unwrap_err();
        assert!(err.to_string().contains("type name not found: i32"));
    }

    #[test]
    fn unknown_name() {
        let err = serde_json::from_str::<Type>(r#""nowhere::Nothing""#).unwrap_err();
        assert!(err.to_string().contains("type name not found: nowhere::Nothing"));

        let registry = TypeRegistry::new();
        assert_eq!(
            Type::from_name("Nothing", &registry),
            Err(TypeError::NotFound { name: "Nothing".into() })
        );
    }

    #[test]
    fn display_and_of_val() {
        assert_eq!(format!("{}", Type::NIL), "nil");
        assert_eq!(Type::of::<u8>().to_string(), "u8");

        let value = String::from("x");
        assert_eq!(Type::of_val(&value), Type::of::<String>());
        assert!(!Type::of_val(&value).is_nil());
    }
}
