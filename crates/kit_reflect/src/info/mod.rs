//! Static type descriptors.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectKind, ReflectKindError};
pub use type_info::TypeInfo;
pub use typed::{DynamicTyped, Typed};
