use alloc::borrow::Cow;
use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a reflected type.
///
/// A `TypeInfo` contains:
///
/// - **id**: the [`TypeId`] of the type,
/// - **kind**: the [`ReflectKind`] its values report,
/// - **type path**: the full path, e.g. `alloc::vec::Vec<i32>`,
/// - **type name**: the path without modules, e.g. `Vec<i32>`,
/// - **short name**: the last module segment and the type name, e.g.
///   `vec::Vec<i32>`. This is the name used by the registry and by the
///   serialized form of [`Type`](crate::serde::Type).
///
/// Two descriptors are equal when they describe the same type.
pub struct TypeInfo {
    type_id: TypeId,
    kind: ReflectKind,
    type_path: Cow<'static, str>,
    type_name: Cow<'static, str>,
    module_len: Option<usize>,
    short_name: String,
}

impl TypeInfo {
    /// Creates the descriptor of `T`.
    ///
    /// The module path is everything in `type_path` before the last `::`
    /// that precedes any generic arguments. Paths not starting with an
    /// identifier have no module.
    ///
    /// ```
    /// use kit_reflect::info::{ReflectKind, TypeInfo};
    ///
    /// let info = TypeInfo::new::<Vec<u8>>(ReflectKind::List, "alloc::vec::Vec<u8>", "Vec<u8>");
    /// assert_eq!(info.module_path(), Some("alloc::vec"));
    /// assert_eq!(info.short_name(), "vec::Vec<u8>");
    ///
    /// let info = TypeInfo::new::<u8>(ReflectKind::Uint, "u8", "u8");
    /// assert_eq!(info.module_path(), None);
    /// assert_eq!(info.short_name(), "u8");
    /// ```
    pub fn new<T: ?Sized + 'static>(
        kind: ReflectKind,
        type_path: impl Into<Cow<'static, str>>,
        type_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        let type_path = type_path.into();
        let type_name = type_name.into();

        let head = match type_path.find('<') {
            Some(idx) => &type_path[..idx],
            None => &type_path[..],
        };
        // `&T`, `[T]` and `(A, B)` have no module of their own.
        let module_len = if head.starts_with(|c: char| c.is_alphabetic() || c == '_') {
            head.rfind("::")
        } else {
            None
        };

        let short_name = match module_len {
            Some(len) => {
                let module = &type_path[..len];
                let last = match module.rfind("::") {
                    Some(idx) => &module[idx + 2..],
                    None => module,
                };
                let mut name = String::with_capacity(last.len() + 2 + type_name.len());
                name.push_str(last);
                name.push_str("::");
                name.push_str(&type_name);
                name
            }
            None => String::from(&*type_name),
        };

        Self {
            type_id: TypeId::of::<T>(),
            kind,
            type_path,
            type_name,
            module_len,
            short_name,
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if the described type is `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns the kind every value of this type reports.
    ///
    /// Pointer-like types report [`ReflectKind::Pointer`] regardless of
    /// their pointee.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        self.kind
    }

    #[inline]
    pub fn type_path(&self) -> &str {
        &self.type_path
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the module the type is declared in, `None` for primitives.
    #[inline]
    pub fn module_path(&self) -> Option<&str> {
        self.module_len.map(|len| &self.type_path[..len])
    }

    /// Returns the registry name of the type.
    #[inline]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }
}

impl PartialEq for TypeInfo {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("kind", &self.kind)
            .field("type_path", &self.type_path)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
