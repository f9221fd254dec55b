// -----------------------------------------------------------------------------
// Modules

mod capability;
mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use capability::{Floater, Inter};
pub use reflect::Reflect;
