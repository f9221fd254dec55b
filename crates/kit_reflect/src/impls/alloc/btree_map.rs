use alloc::collections::BTreeMap;

crate::impls::impl_reflect_for_map!(BTreeMap, "alloc::collections::btree_map::BTreeMap", "BTreeMap", Ord);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::Map;

    #[test]
    fn insert_and_iterate() {
        let mut map: BTreeMap<String, i32> = BTreeMap::new();
        assert!(Map::try_insert(&mut map, Box::new(String::from("b")), Box::new(2_i32)).unwrap().is_none());
        assert!(Map::try_insert(&mut map, Box::new(String::from("a")), Box::new(1_i32)).unwrap().is_none());

        let (key, value) = Map::try_insert(&mut map, Box::new(1_u8), Box::new(1_i32)).unwrap_err();
        assert!(key.is::<u8>() && value.is::<i32>());

        let old = Map::try_insert(&mut map, Box::new(String::from("a")), Box::new(3_i32)).unwrap();
        assert_eq!(old.unwrap().take::<i32>().unwrap(), 1);

        assert_eq!(format!("{:?}", map.as_reflect()), r#"{"a": 3, "b": 2}"#);
        assert_eq!(Map::get(&map, &String::from("b")).unwrap().downcast_ref::<i32>(), Some(&2));
        assert!(Map::get(&map, &1_i32).is_none());
    }

    #[test]
    fn type_info() {
        let info = <BTreeMap<String, u8> as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Map);
        assert_eq!(info.type_name(), "BTreeMap<String, u8>");
        assert_eq!(info.short_name(), "btree_map::BTreeMap<String, u8>");
    }
}
