use alloc::boxed::Box;
use alloc::string::String;

use kit_reflect::info::ReflectKind;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Why a robust assignment did not happen.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SetError {
    /// The destination, or a pointer on the way to it, holds no value.
    #[error("destination is nil")]
    Nil,

    #[error("destination `{type_path}` cannot be set, it is a shared or constant reference")]
    NotSettable { type_path: &'static str },

    #[error("`{type_path}` is not a map")]
    NotAMap { type_path: &'static str },

    #[error("`{type_path}` is not a list")]
    NotAList { type_path: &'static str },

    #[error("assignment into {kind} values is not supported")]
    Unsupported { kind: ReflectKind },

    /// Text could not be decoded as JSON into the destination.
    ///
    /// `example` is the destination's current value as JSON, empty if it
    /// has no serde support.
    #[error("cannot set `{target}` from text: {message}, for example: {example}")]
    Json {
        target: &'static str,
        message: String,
        example: String,
    },

    #[error("list element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<SetError>,
    },

    #[error("map entry {key}: {reason}")]
    MapEntry {
        key: String,
        #[source]
        reason: Box<SetError>,
    },

    #[error("cannot assign `{from_type}` to `{to_type}`")]
    Mismatched {
        from_type: &'static str,
        to_type: &'static str,
    },
}

impl SetError {
    /// Returns `true` for failures of structure rather than of value:
    /// unsettable destinations, container mismatches and bad JSON.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            Self::Nil | Self::Unsupported { .. } | Self::Mismatched { .. }
        )
    }
}

// -----------------------------------------------------------------------------
// Tests
