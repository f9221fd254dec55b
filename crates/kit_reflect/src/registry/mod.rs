//! The name → type registry.
//!
//! A [`TypeRegistry`] maps type ids, full type paths and short names to
//! [`TypeMeta`]. The short name (`module::Ident`) is the registry name of a
//! type and the serialized form of [`Type`](crate::serde::Type).
//!
//! A process-wide registry is available through [`types`].

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::TypeMeta;
pub use type_registry::{TypeRegistry, TypeRegistryArc, types};
