use alloc::boxed::Box;

use crate::Reflect;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// List

/// A growable, ordered sequence of values of one element type.
///
/// ```
/// use kit_reflect::{Reflect, ops::List};
///
/// let mut list: Vec<i32> = vec![1, 2];
/// list.try_push(Box::new(3_i32)).unwrap();
/// assert!(list.try_push(Box::new("four")).is_err());
///
/// assert_eq!(List::len(&list), 3);
/// assert_eq!(list.get(2).unwrap().downcast_ref::<i32>(), Some(&3));
/// ```
pub trait List: Reflect {
    /// Returns the element at `index`, if it exists.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index` mutably, if it exists.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements.
    fn iter(&self) -> ListItemIter<'_>;

    /// Returns the descriptor of the element type.
    fn item_info(&self) -> &'static TypeInfo;

    /// Creates a default value of the element type.
    fn new_item(&self) -> Box<dyn Reflect>;

    /// Appends `value`, returning it back if its type is not the element type.
    fn try_push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns the raw bytes if this is a byte list.
    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
