use std::collections::HashMap;

crate::impls::impl_reflect_for_map!(HashMap, "std::collections::hash::map::HashMap", "HashMap", Eq, core::hash::Hash);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::info::Typed;
    use crate::ops::Map;

    #[test]
    fn fresh_entries() {
        let mut map: HashMap<String, f64> = HashMap::new();
        assert!(map.new_key().is::<String>());
        assert!(map.new_value().is::<f64>());
        assert!(map.key_info().is::<String>());
        assert!(map.value_info().is::<f64>());

        Map::try_insert(&mut map, Box::new(String::from("pi")), Box::new(2.5_f64)).unwrap();
        assert_eq!(Map::len(&map), 1);
        Map::clear(&mut map);
        assert!(Map::is_empty(&map));

        assert_eq!(
            <HashMap<String, f64> as Typed>::type_info().short_name(),
            "map::HashMap<String, f64>"
        );
    }
}
