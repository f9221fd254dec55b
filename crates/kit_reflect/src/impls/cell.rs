//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`], for types without generics.
//! - [`GenericTypeInfoCell`]: a type-id keyed map behind a [`RwLock`]. A
//!   `static` inside a generic function is shared by every instantiation,
//!   so the cell stores one descriptor per concrete type.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::hash::{FixedHashState, HashMap};
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// ```
/// use kit_reflect::{impls::NonGenericTypeInfoCell, info::{ReflectKind, TypeInfo, Typed}};
///
/// struct Celsius(f32);
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::new::<Self>(ReflectKind::Float, "demo::Celsius", "Celsius"))
///     }
/// }
///
/// assert!(core::ptr::eq(Celsius::type_info(), Celsius::type_info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, generating it with `f` on first use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// ```
/// use kit_reflect::{impls::GenericTypeInfoCell, info::{ReflectKind, TypeInfo, Typed}};
///
/// struct Wrapper<T>(T);
///
/// impl<T: Typed> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             let inner = T::type_info();
///             TypeInfo::new::<Self>(
///                 ReflectKind::Opaque,
///                 format!("demo::Wrapper<{}>", inner.type_path()),
///                 format!("Wrapper<{}>", inner.type_name()),
///             )
///         })
///     }
/// }
///
/// assert_eq!(Wrapper::<u8>::type_info().type_name(), "Wrapper<u8>");
/// assert_eq!(Wrapper::<i64>::type_info().type_name(), "Wrapper<i64>");
/// ```
pub struct GenericTypeInfoCell(OnceLock<RwLock<HashMap<TypeId, &'static TypeInfo>>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the info stored for `G`, generating it with `f` on first use.
    ///
    /// `f` runs without holding the lock, so it may query the info of
    /// other instantiations sharing this cell.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(always)]
    fn map(&self) -> &RwLock<HashMap<TypeId, &'static TypeInfo>> {
        self.0
            .get_or_init(|| RwLock::new(HashMap::with_hasher(FixedHashState)))
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.map()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // A concurrent caller may have inserted meanwhile; the first entry wins.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        let mut map = self.map().write().unwrap_or_else(PoisonError::into_inner);
        *map.entry(type_id).or_insert_with(|| {
            let info: &'static TypeInfo = Box::leak(Box::new(value));
            info
        })
    }
}
