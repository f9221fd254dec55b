use alloc::string::String;
use core::error::Error;
use core::fmt;

/// An error restoring a [`Type`](super::Type) from its serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The name is not in the registry, or is ambiguous.
    NotFound { name: String },
    /// The closing XML element does not match the opening one.
    MismatchedEnd { start: String, end: String },
    /// An XML token other than the expected one.
    UnexpectedToken(String),
    /// The XML input ended early.
    UnexpectedEof,
    /// The XML input is malformed.
    Xml(String),
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "type name not found: {name}"),
            Self::MismatchedEnd { start, end } => {
                write!(f, "end element `{end}` does not match start element `{start}`")
            }
            Self::UnexpectedToken(token) => {
                write!(f, "unexpected token `{token}`, expected the type name element")
            }
            Self::UnexpectedEof => f.write_str("unexpected end of input"),
            Self::Xml(msg) => write!(f, "malformed xml: {msg}"),
        }
    }
}

impl Error for TypeError {}
