use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use num_complex::{Complex32, Complex64};

use crate::Reflect;
use crate::hash::{FixedHashState, HashMap, HashSet};
use crate::impls::Address;
use crate::info::{TypeInfo, Typed};
use crate::registry::TypeMeta;

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of reflected types.
///
/// Types are looked up by [`TypeId`], by full type path, or by short name
/// (`module::Ident`). Two types from different modules can share a short
/// name only if their last module segment differs; when it does not, the
/// name becomes ambiguous and resolves to nothing.
///
/// ```
/// use kit_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Vec<String>>();
///
/// let meta = registry.get_with_short_name("vec::Vec<String>").unwrap();
/// assert_eq!(meta.type_path(), "alloc::vec::Vec<String>");
/// assert!(registry.get_with_short_name("i32").is_some());
/// ```
pub struct TypeRegistry {
    type_meta_table: HashMap<TypeId, TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    short_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry with no types at all.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: HashMap::with_hasher(FixedHashState),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            short_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry with the primitive types registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<Complex32>();
        registry.register::<Complex64>();
        registry.register::<String>();
        registry.register::<Address>();
        registry.register::<Vec<u8>>();
        registry
    }

    // The type must **not** already exist.
    fn add_new_type_indices(
        type_info: &'static TypeInfo,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        short_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let short_name = type_info.short_name();

        if !ambiguous_names.contains(short_name) {
            if short_name_to_id.contains_key(short_name) {
                short_name_to_id.remove(short_name);
                ambiguous_names.insert(short_name);
            } else {
                short_name_to_id.insert(short_name, type_info.ty_id());
            }
        }

        // For new type, assuming that the full path cannot be duplicated.
        type_path_to_id.insert(type_info.type_path(), type_info.ty_id());
    }

    /// Inserts an entry, replacing any previous entry of the same type.
    pub fn insert(&mut self, type_meta: TypeMeta) {
        let type_id = type_meta.ty_id();
        if !self.type_meta_table.contains_key(&type_id) {
            Self::add_new_type_indices(
                type_meta.type_info(),
                &mut self.type_path_to_id,
                &mut self.short_name_to_id,
                &mut self.ambiguous_names,
            );
        }
        self.type_meta_table.insert(type_id, type_meta);
    }

    /// Registers `T` with a default constructor.
    ///
    /// Registering a type twice does nothing.
    pub fn register<T: Typed + Reflect + Default>(&mut self) {
        if !self.contains(TypeId::of::<T>()) {
            self.insert(TypeMeta::of_default::<T>());
        }
    }

    /// Registers `T` by name only, for types without a default value.
    pub fn register_type<T: Typed>(&mut self) {
        if !self.contains(TypeId::of::<T>()) {
            self.insert(TypeMeta::of::<T>());
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains_key(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Looks a type up by its registry name.
    ///
    /// Returns `None` for unknown and ambiguous names.
    pub fn get_with_short_name(&self, short_name: &str) -> Option<&TypeMeta> {
        match self.short_name_to_id.get(short_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if more than one registered type has this short name.
    pub fn is_ambiguous(&self, short_name: &str) -> bool {
        self.ambiguous_names.contains(short_name)
    }

    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A shareable, poison-tolerant handle to a [`TypeRegistry`].
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Takes a read lock, ignoring poisoning.
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock, ignoring poisoning.
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read().short_name_to_id.keys().fmt(f)
    }
}

static TYPES: LazyLock<TypeRegistryArc> = LazyLock::new(TypeRegistryArc::default);

/// Returns the process-wide registry.
///
/// It starts with the primitive types of [`TypeRegistry::new`]; register
/// application types into it before deserializing their names.
///
/// ```
/// use kit_reflect::registry::types;
///
/// types().write().register::<Vec<i64>>();
/// assert!(types().read().get_with_short_name("vec::Vec<i64>").is_some());
/// ```
#[inline]
pub fn types() -> &'static TypeRegistryArc {
    &TYPES
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use core::any::TypeId;

    use super::{TypeRegistry, TypeRegistryArc};
    use crate::info::ReflectKind;

    mod first {
        #[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
        pub struct Item;
        crate::impl_reflect_struct!(Item);
    }

    mod second {
        pub mod first {
            #[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
            pub struct Item;
            crate::impl_reflect_struct!(Item);
        }
    }

    #[test]
    fn primitives() {
        let registry = TypeRegistry::new();
        let meta = registry.get_with_short_name("f64").unwrap();
        assert_eq!(meta.kind(), ReflectKind::Float);
        assert!(registry.get_with_type_path("String").is_some());
        assert!(registry.get_with_short_name("kit_reflect::Address").is_some());
        assert!(registry.get_with_short_name("Unknown").is_none());

        let empty = TypeRegistry::empty();
        assert_eq!(empty.iter().len(), 0);
    }

    #[test]
    fn register_and_construct() {
        let mut registry = TypeRegistry::empty();
        registry.register::<BTreeMap<String, i32>>();
        registry.register::<BTreeMap<String, i32>>();
        assert_eq!(registry.iter().len(), 1);

        let meta = registry.get(TypeId::of::<BTreeMap<String, i32>>()).unwrap();
        let value = meta.new_value().unwrap();
        assert!(value.is::<BTreeMap<String, i32>>());

        registry.register_type::<&'static str>();
        let meta = registry.get_with_short_name("&str").unwrap();
        assert!(!meta.has_default());
    }

    #[test]
    fn ambiguous_short_names() {
        let mut registry = TypeRegistry::empty();
        registry.register::<first::Item>();
        assert!(registry.get_with_short_name("first::Item").is_some());

        registry.register::<second::first::Item>();
        assert!(registry.is_ambiguous("first::Item"));
        assert!(registry.get_with_short_name("first::Item").is_none());

        let path = "kit_reflect::registry::type_registry::tests::second::first::Item";
        assert!(registry.get_with_type_path(path).is_some());
    }

    #[test]
    fn shared_handle_survives_poisoning() {
        let handle = TypeRegistryArc::default();
        let writer = handle.clone();
        let result = std::thread::spawn(move || {
            let mut registry = writer.write();
            registry.register::<first::Item>();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(result.is_err());

        assert!(handle.read().contains(TypeId::of::<first::Item>()));
        handle.write().register::<second::first::Item>();
        assert!(handle.read().is_ambiguous("first::Item"));
    }
}
