use alloc::boxed::Box;

use crate::Reflect;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Map

/// An iterator over the entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// A key-value mapping with one key type and one value type.
///
/// Iteration order is the order of the underlying container.
pub trait Map: Reflect {
    /// Returns the value stored under a key of the exact key type.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the entries.
    fn iter(&self) -> MapIter<'_>;

    /// Returns the descriptor of the key type.
    fn key_info(&self) -> &'static TypeInfo;

    /// Returns the descriptor of the value type.
    fn value_info(&self) -> &'static TypeInfo;

    /// Creates a default value of the key type.
    fn new_key(&self) -> Box<dyn Reflect>;

    /// Creates a default value of the value type.
    fn new_value(&self) -> Box<dyn Reflect>;

    /// Inserts an entry, returning the previous value under that key.
    ///
    /// If either side has the wrong type, both are handed back untouched.
    fn try_insert(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<Option<Box<dyn Reflect>>, (Box<dyn Reflect>, Box<dyn Reflect>)>;

    /// Removes all entries.
    fn clear(&mut self);
}
