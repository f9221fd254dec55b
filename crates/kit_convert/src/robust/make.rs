use alloc::boxed::Box;
use alloc::string::String;

use kit_reflect::Reflect;
use kit_reflect::registry::TypeMeta;

use super::set_robust;

/// Creates a default value of the registered type and robustly sets `value`
/// into it.
///
/// The new value is returned even when the assignment fails, in which case
/// it keeps its default. `None` means the type has no default constructor.
///
/// ```
/// use kit_convert::clone_to_type;
/// use kit_reflect::registry::types;
///
/// let meta = types().read().get_with_short_name("u16").copied().unwrap();
/// let port = clone_to_type(&meta, &"8080").unwrap();
/// assert_eq!(port.downcast_ref::<u16>(), Some(&8080));
/// ```
pub fn clone_to_type(meta: &TypeMeta, value: &dyn Reflect) -> Option<Box<dyn Reflect>> {
    let mut dst = meta.new_value()?;
    set_robust(&mut *dst, value);
    Some(dst)
}

/// Creates a default value of the registered type, empty for lists and maps.
#[inline]
pub fn make_of_type(meta: &TypeMeta) -> Option<Box<dyn Reflect>> {
    meta.new_value()
}

/// Renders the value as indented JSON, or the empty string if the type has
/// no serde support.
///
/// ```
/// use kit_convert::string_json;
///
/// assert_eq!(string_json(&vec![1, 2]), "[\n  1,\n  2\n]");
/// assert_eq!(string_json(&()), "");
/// ```
pub fn string_json(value: &dyn Reflect) -> String {
    value
        .as_serialize()
        .and_then(|ser| serde_json::to_string_pretty(ser).ok())
        .unwrap_or_default()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use kit_reflect::impl_reflect_struct;
    use kit_reflect::registry::{TypeMeta, TypeRegistry};

    use super::{clone_to_type, make_of_type, string_json};

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Layer {
        name: String,
        opacity: f32,
    }

    impl_reflect_struct!(Layer);

    #[test]
    fn clone_into_registered_types() {
        let mut registry = TypeRegistry::new();
        registry.register::<Layer>();

        let meta = registry.get_with_short_name("f64").copied().unwrap();
        let value = clone_to_type(&meta, &String::from("1.25")).unwrap();
        assert_eq!(value.downcast_ref::<f64>(), Some(&1.25));

        // Failed sets keep the default.
        let value = clone_to_type(&meta, &"many").unwrap();
        assert_eq!(value.downcast_ref::<f64>(), Some(&0.0));

        let meta = registry.get_with_short_name("tests::Layer").copied().unwrap();
        let value = clone_to_type(&meta, &r#"{"name":"bg","opacity":0.5}"#).unwrap();
        assert_eq!(
            value.downcast_ref::<Layer>(),
            Some(&Layer { name: String::from("bg"), opacity: 0.5 })
        );

        assert!(clone_to_type(&TypeMeta::of::<&'static str>(), &1).is_none());
    }

    #[test]
    fn make_defaults() {
        let list = make_of_type(&TypeMeta::of_default::<Vec<u8>>()).unwrap();
        assert_eq!(list.downcast_ref::<Vec<u8>>(), Some(&Vec::new()));
        assert!(make_of_type(&TypeMeta::of::<Layer>()).is_none());
    }

    #[test]
    fn pretty_json() {
        let layer = Layer { name: String::from("fg"), opacity: 1.0 };
        assert_eq!(string_json(&layer), "{\n  \"name\": \"fg\",\n  \"opacity\": 1.0\n}");
        assert_eq!(string_json(&Some(3_u8)), "3");
    }
}
