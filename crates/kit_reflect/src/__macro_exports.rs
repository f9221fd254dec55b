//! Paths used by the exported `impl_reflect_*` macros.
//!
//! Downstream crates are not required to depend on `serde_core` or
//! `erased-serde` themselves.

pub use alloc::boxed::Box;
pub use core::{any::TypeId, fmt, option::Option, result::Result};

pub use erased_serde;
pub use serde_core;
