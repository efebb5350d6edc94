//! Traits shared by the list types of this crate

use crate::error::ListError;

/// An ordered, index-addressable sequence of items.
///
/// Valid indices are `0..self.size()`. Any other index makes the indexed operations return [`ListError::OutOfBounds`],
/// and leaves the list untouched.
pub trait OrderedList<T> {
    /// Append an item after the last one
    fn add_item(&mut self, item: T);

    /// Remove the item at `index`, shifting the following items one position to the left.
    /// Returns the removed item
    fn remove_item(&mut self, index: usize) -> Result<T, ListError>;

    /// Returns the item at `index`
    fn get_item(&self, index: usize) -> Result<&T, ListError>;

    /// Returns a mutable reference to the item at `index`
    fn get_item_mut(&mut self, index: usize) -> Result<&mut T, ListError>;

    /// Replace the item at `index`, and return the previous one
    fn set_item(&mut self, index: usize, item: T) -> Result<T, ListError>;

    /// Number of items currently in the list
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether an item equal to `item` is in the list.
    /// Equality is whatever `T`'s `PartialEq` says it is.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq;
}
