use alloc::boxed::Box;
use alloc::vec::Vec;

use kit_reflect::Reflect;
use kit_reflect::ops::List;

use super::try_set_robust;
use crate::{SetError, non_ptr};

/// Replaces the content of `to` with the elements of the list `from`,
/// each converted to the element type of `to`.
///
/// Nothing is written unless every element converts.
///
/// ```
/// use kit_convert::copy_list_robust;
///
/// let mut dst: Vec<i64> = vec![7];
/// copy_list_robust(&mut dst, &vec![String::from("1"), String::from("0x10")]).unwrap();
/// assert_eq!(dst, [1, 16]);
///
/// assert!(copy_list_robust(&mut dst, &vec![String::from("x")]).is_err());
/// assert_eq!(dst, [1, 16]);
/// ```
pub fn copy_list_robust(to: &mut dyn List, from: &dyn Reflect) -> Result<(), SetError> {
    let source = non_ptr(from);
    let Ok(source_list) = source.reflect_ref().as_list() else {
        return Err(SetError::NotAList {
            type_path: source.reflect_type_path(),
        });
    };

    let item_info = to.item_info();
    let mut items: Vec<Box<dyn Reflect>> = Vec::with_capacity(source_list.len());
    for (index, elem) in source_list.iter().enumerate() {
        if elem.ty_id() == item_info.ty_id() {
            items.push(elem.reflect_clone());
            continue;
        }
        let mut item = to.new_item();
        if let Err(err) = try_set_robust(&mut *item, elem) {
            log::debug!("kit::copy_list_robust: element {index}: {err}");
            return Err(SetError::Element {
                index,
                source: Box::new(err),
            });
        }
        items.push(item);
    }

    to.clear();
    for item in items {
        if let Err(item) = to.try_push(item) {
            return Err(SetError::Mismatched {
                from_type: item.reflect_type_path(),
                to_type: item_info.type_path(),
            });
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::copy_list_robust;
    use crate::{SetError, set_robust, set_robust_with};

    #[test]
    fn converts_each_element() {
        let mut names: Vec<String> = Vec::new();
        copy_list_robust(&mut names, &vec![1.5_f64, 2.0]).unwrap();
        assert_eq!(names, ["1.5", "2"]);

        let mut flags: Vec<bool> = vec![true; 4];
        copy_list_robust(&mut flags, &Box::new(vec![0_u8, 3])).unwrap();
        assert_eq!(flags, [false, true]);

        let mut optional: Vec<Option<i32>> = Vec::new();
        copy_list_robust(&mut optional, &vec![Some(1), None]).unwrap();
        assert_eq!(optional, [Some(1), None]);
    }

    #[test]
    fn nested_lists() {
        let mut grid: Vec<Vec<u8>> = Vec::new();
        assert!(set_robust(&mut grid, &vec![vec![1_i64, 2], vec![3]]));
        assert_eq!(grid, [vec![1, 2], vec![3]]);
    }

    #[test]
    fn failure_is_atomic() {
        let mut dst: Vec<f32> = vec![9.0];
        let source = vec![String::from("1"), String::from("two"), String::from("3")];
        let err = copy_list_robust(&mut dst, &source).unwrap_err();
        assert!(matches!(err, SetError::Element { index: 1, .. }));
        assert_eq!(dst, [9.0]);

        assert_eq!(
            copy_list_robust(&mut dst, &5_i32),
            Err(SetError::NotAList { type_path: "i32" })
        );
    }

    #[test]
    fn through_set_robust() {
        let mut errors: Vec<SetError> = Vec::new();
        let mut dst: Vec<i32> = Vec::new();
        assert!(!set_robust_with(&mut dst, &vec![String::from("1"), String::from("x")], &mut errors));
        assert!(dst.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "list element 1: cannot assign `String` to `i32`");
    }
}
