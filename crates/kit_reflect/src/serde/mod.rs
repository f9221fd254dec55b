//! Serialization of runtime type descriptors.
//!
//! [`Type`] wraps an optional [`TypeInfo`](crate::info::TypeInfo) and
//! serializes it as its registry short name, so a descriptor can travel
//! through JSON or XML and be restored by name lookup.
//!
//! - JSON (any serde format): a string, or `null` when absent. Reading goes
//!   through [`TypeSeed`] with an explicit registry, or through the plain
//!   `Deserialize` impl, which uses the process-wide
//!   [`types`](crate::registry::types) registry.
//! - XML (feature `xml`): a single element whose text is the name, see
//!   [`Type::to_xml`] and [`Type::from_xml`].

mod error;
mod type_name;

#[cfg(feature = "xml")]
mod xml;

pub use error::TypeError;
pub use type_name::{Type, TypeSeed};
