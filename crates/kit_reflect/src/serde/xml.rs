use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::{Type, TypeError};

use crate::registry::TypeRegistry;

impl Type {
    /// Writes the descriptor as `<element>name</element>`.
    ///
    /// The absent descriptor is written as `null`.
    ///
    /// ```
    /// use kit_reflect::serde::Type;
    ///
    /// assert_eq!(Type::of::<i32>().to_xml("type").unwrap(), "<type>i32</type>");
    /// assert_eq!(Type::NIL.to_xml("type").unwrap(), "<type>null</type>");
    /// ```
    pub fn to_xml(&self, element: &str) -> Result<String, TypeError> {
        let name = self.short_type_name().unwrap_or("null");

        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Start(BytesStart::new(element)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Text(BytesText::new(name)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::End(BytesEnd::new(element)))
            .map_err(xml_error)?;

        String::from_utf8(writer.into_inner()).map_err(xml_error)
    }

    /// Reads a descriptor written by [`to_xml`](Self::to_xml).
    ///
    /// The element must hold the name as text and be closed by a matching
    /// end element. Surrounding whitespace is ignored.
    ///
    /// ```
    /// use kit_reflect::{registry::TypeRegistry, serde::{Type, TypeError}};
    ///
    /// let registry = TypeRegistry::new();
    /// let ty = Type::from_xml("<type> f32 </type>", &registry).unwrap();
    /// assert_eq!(ty, Type::of::<f32>());
    ///
    /// let err = Type::from_xml("<type>f32</kind>", &registry).unwrap_err();
    /// assert!(matches!(err, TypeError::MismatchedEnd { .. }));
    /// ```
    pub fn from_xml(text: &str, registry: &TypeRegistry) -> Result<Self, TypeError> {
        let mut reader = Reader::from_str(text);
        let config = reader.config_mut();
        config.trim_text(true);
        // Reported as `MismatchedEnd` below.
        config.check_end_names = false;

        let start = loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(e) => break lossy(e.name().into_inner()).into_owned(),
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
                Event::Eof => return Err(TypeError::UnexpectedEof),
                other => return Err(TypeError::UnexpectedToken(describe(&other))),
            }
        };

        let name = match reader.read_event().map_err(xml_error)? {
            Event::Text(e) => e.unescape().map_err(xml_error)?.trim().to_string(),
            Event::CData(e) => lossy(&e).trim().to_string(),
            Event::Eof => return Err(TypeError::UnexpectedEof),
            other => return Err(TypeError::UnexpectedToken(describe(&other))),
        };

        match reader.read_event().map_err(xml_error)? {
            Event::End(e) => {
                let end = lossy(e.name().into_inner());
                if *end != *start {
                    return Err(TypeError::MismatchedEnd {
                        start,
                        end: end.into_owned(),
                    });
                }
            }
            Event::Eof => return Err(TypeError::UnexpectedEof),
            other => return Err(TypeError::UnexpectedToken(describe(&other))),
        }

        Self::from_name(&name, registry)
    }
}

#[inline]
fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn xml_error(err: impl fmt::Display) -> TypeError {
    TypeError::Xml(err.to_string())
}

fn describe(event: &Event<'_>) -> String {
    match event {
        Event::Start(e) => format!("<{}>", lossy(e.name().into_inner())),
        Event::End(e) => format!("</{}>", lossy(e.name().into_inner())),
        Event::Empty(e) => format!("<{}/>", lossy(e.name().into_inner())),
        Event::Text(e) => lossy(e).into_owned(),
        other => format!("{other:?}"),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::registry::TypeRegistry;
    use crate::serde::{Type, TypeError};

    #[test]
    fn round_trip() {
        let mut registry = TypeRegistry::new();
        registry.register::<Vec<String>>();

        let ty = Type::of::<Vec<String>>();
        let xml = ty.to_xml("kind").unwrap();
        assert_eq!(xml, "<kind>vec::Vec&lt;String&gt;</kind>");
        assert_eq!(Type::from_xml(&xml, &registry).unwrap(), ty);

        let xml = Type::NIL.to_xml("kind").unwrap();
        assert_eq!(Type::from_xml(&xml, &registry).unwrap(), Type::NIL);
    }

    #[test]
    fn whitespace_and_prolog() {
        let registry = TypeRegistry::new();
        let text = "<?xml version=\"1.0\"?>\n<!-- saved -->\n<type>\n    bool\n</type>\n";
        assert_eq!(Type::from_xml(text, &registry).unwrap(), Type::of::<bool>());
    }

    #[test]
    fn malformed() {
        let registry = TypeRegistry::new();

        assert_eq!(
            Type::from_xml("<a>i32</b>", &registry),
            Err(TypeError::MismatchedEnd { start: "a".into(), end: "b".into() })
        );
        assert_eq!(
            Type::from_xml("<a></a>", &registry),
            Err(TypeError::UnexpectedToken("</a>".into()))
        );
        assert_eq!(
            Type::from_xml("<a><b>i32</b></a>", &registry),
            Err(TypeError::UnexpectedToken("<b>".into()))
        );
        assert_eq!(Type::from_xml("", &registry), Err(TypeError::UnexpectedEof));
        assert!(Type::from_xml("<a>i32", &registry).is_err());
        assert_eq!(
            Type::from_xml("<a>Missing</a>", &registry),
            Err(TypeError::NotFound { name: "Missing".into() })
        );
    }
}
