use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::info::{ReflectKind, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// TypeMeta

/// A registry entry: the static descriptor of a type, plus a constructor
/// for its default value when the type has one.
///
/// ```
/// use kit_reflect::registry::TypeMeta;
///
/// let meta = TypeMeta::of_default::<Vec<u8>>();
/// let value = meta.new_value().unwrap();
/// assert_eq!(value.downcast_ref::<Vec<u8>>(), Some(&vec![]));
///
/// let meta = TypeMeta::of::<&'static str>();
/// assert!(meta.new_value().is_none());
/// ```
#[derive(Clone, Copy)]
pub struct TypeMeta {
    type_info: &'static TypeInfo,
    default: Option<fn() -> Box<dyn Reflect>>,
}

impl TypeMeta {
    /// Creates the entry of `T`, without a default constructor.
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self {
            type_info: T::type_info(),
            default: None,
        }
    }

    /// Creates the entry of `T`, with `T::default` as constructor.
    #[inline]
    pub fn of_default<T: Typed + Reflect + Default>() -> Self {
        Self {
            type_info: T::type_info(),
            default: Some(new_default::<T>),
        }
    }

    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.type_info.ty_id()
    }

    #[inline]
    pub fn kind(&self) -> ReflectKind {
        self.type_info.kind()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_info.type_path()
    }

    #[inline]
    pub fn short_name(&self) -> &'static str {
        self.type_info.short_name()
    }

    /// Returns `true` if [`new_value`](Self::new_value) can build a value.
    #[inline]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Creates the default value of the type, empty for containers.
    #[inline]
    pub fn new_value(&self) -> Option<Box<dyn Reflect>> {
        self.default.map(|f| f())
    }
}

fn new_default<T: Reflect + Default>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .field("has_default", &self.has_default())
            .finish()
    }
}
