use alloc::string::String;

use num_complex::Complex64;

use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{FloatMut, IntMut, List, Map, Pointer, UintMut};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, by kind.
///
/// Scalars are read out by value, widened to 64 bits. Containers and
/// indirections are exposed through their trait objects.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(Complex64),
    String(&'a str),
    Struct(&'a dyn Reflect),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Nil => ReflectKind::Nil,
            Self::Bool(_) => ReflectKind::Bool,
            Self::Int(_) => ReflectKind::Int,
            Self::Uint(_) => ReflectKind::Uint,
            Self::Float(_) => ReflectKind::Float,
            Self::Complex(_) => ReflectKind::Complex,
            Self::String(_) => ReflectKind::String,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the list view, or the kind mismatch.
    pub fn as_list(self) -> Result<&'a dyn List, ReflectKindError> {
        match self {
            Self::List(list) => Ok(list),
            other => Err(ReflectKindError {
                expected: ReflectKind::List,
                received: other.kind(),
            }),
        }
    }

    /// Returns the map view, or the kind mismatch.
    pub fn as_map(self) -> Result<&'a dyn Map, ReflectKindError> {
        match self {
            Self::Map(map) => Ok(map),
            other => Err(ReflectKindError {
                expected: ReflectKind::Map,
                received: other.kind(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, by kind.
///
/// Scalars are exposed at their exact width so that writers can narrow
/// or widen as needed.
pub enum ReflectMut<'a> {
    Nil,
    Bool(&'a mut bool),
    Int(IntMut<'a>),
    Uint(UintMut<'a>),
    Float(FloatMut<'a>),
    Complex(&'a mut dyn Reflect),
    String(&'a mut String),
    Struct(&'a mut dyn Reflect),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Nil => ReflectKind::Nil,
            Self::Bool(_) => ReflectKind::Bool,
            Self::Int(_) => ReflectKind::Int,
            Self::Uint(_) => ReflectKind::Uint,
            Self::Float(_) => ReflectKind::Float,
            Self::Complex(_) => ReflectKind::Complex,
            Self::String(_) => ReflectKind::String,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the list view, or the kind mismatch.
    pub fn as_list(self) -> Result<&'a mut dyn List, ReflectKindError> {
        match self {
            Self::List(list) => Ok(list),
            other => Err(ReflectKindError {
                expected: ReflectKind::List,
                received: other.kind(),
            }),
        }
    }

    /// Returns the map view, or the kind mismatch.
    pub fn as_map(self) -> Result<&'a mut dyn Map, ReflectKindError> {
        match self {
            Self::Map(map) => Ok(map),
            other => Err(ReflectKindError {
                expected: ReflectKind::Map,
                received: other.kind(),
            }),
        }
    }
}
