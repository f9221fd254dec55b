//! Per-kind views over reflected values.

// -----------------------------------------------------------------------------
// Modules

mod apply_error;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use apply_error::ApplyError;
pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use pointer_ops::Pointer;
pub use scalar::{FloatMut, IntMut, UintMut};
