#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod diagnostics;
mod error;
mod probe;
mod robust;

pub mod format;
pub mod parse;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use convert::{to_bool, to_float, to_float32, to_int, to_string, to_string_prec};
pub use diagnostics::{DiagnosticSink, FnSink, LogSink};
pub use error::SetError;
pub use probe::{is_nil, kind_is_basic, non_ptr, non_ptr_mut, value_is_zero};
pub use robust::{
    clone_to_type, copy_list_robust, copy_map_robust, make_of_type, set_map_robust,
    set_map_robust_with, set_robust, set_robust_with, string_json, try_set_map_robust,
    try_set_robust,
};
