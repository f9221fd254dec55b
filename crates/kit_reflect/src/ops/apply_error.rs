use alloc::borrow::Cow;
use core::{error, fmt};

/// A enumeration of all error outcomes
/// that might happen when running [`try_apply`](crate::Reflect::try_apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Tried to apply incompatible types.
    MismatchedTypes {
        from_type: Cow<'static, str>,
        to_type: Cow<'static, str>,
    },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedTypes { from_type, to_type } => {
                write!(f, "attempted to apply `{from_type}` to `{to_type}`")
            }
        }
    }
}

impl error::Error for ApplyError {}
