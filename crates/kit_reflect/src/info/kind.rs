use core::{error, fmt};

// -----------------------------------------------------------------------------
// ReflectKind

/// The closed set of value categories the conversion engine distinguishes.
///
/// Every integer width shares [`ReflectKind::Int`] (or [`ReflectKind::Uint`]),
/// both float widths share [`ReflectKind::Float`], and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// The untyped nil value.
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Complex,
    String,
    Struct,
    List,
    Map,
    /// Boxes, options and other indirections.
    Pointer,
    Opaque,
}

impl ReflectKind {
    /// Returns `true` for the scalar kinds: bool, numbers and strings.
    ///
    /// ```
    /// use kit_reflect::info::ReflectKind;
    ///
    /// assert!(ReflectKind::Complex.is_basic());
    /// assert!(!ReflectKind::Pointer.is_basic());
    /// ```
    #[inline]
    pub const fn is_basic(self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Int | Self::Uint | Self::Float | Self::Complex | Self::String
        )
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.pad("Nil"),
            Self::Bool => f.pad("Bool"),
            Self::Int => f.pad("Int"),
            Self::Uint => f.pad("Uint"),
            Self::Float => f.pad("Float"),
            Self::Complex => f.pad("Complex"),
            Self::String => f.pad("String"),
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a value is not the expected `ReflectKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}
