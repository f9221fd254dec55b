//! Reflection implementations for foreign types, and the helpers used to
//! write them.
//!
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`]: static storage for
//!   [`Typed`](crate::info::Typed) implementations.
//! - `xxx_debug`: used to implement [`Reflect::reflect_debug`](crate::Reflect::reflect_debug).
//! - [`Address`]: an address-sized unsigned integer that prints as hex.
//!
//! ## Implemented Menu
//!
//! - native:
//!     - `()` (the nil value), `bool`
//!     - `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//!     - `&'static str`, `&'static T`
//! - alloc:
//!     - `String`, `Vec<T>`, `BTreeMap<K, V>`
//!     - `Box<T>`, `Arc<T>`
//! - core:
//!     - `Option<T>`
//! - std:
//!     - `HashMap<K, V>`
//! - num-complex:
//!     - `Complex<f32>`, `Complex<f64>`

// -----------------------------------------------------------------------------
// Modules

mod address;
mod cell;
mod utils;

mod alloc;
mod complex;
mod core;
mod native;
mod std;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use utils::{impl_reflect_for_map, impl_serde_reflect, impl_simple_type_reflect};

// -----------------------------------------------------------------------------
// Exports

pub use address::Address;
pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
pub use utils::{ReflectElement, list_debug, map_debug, pointer_debug};
