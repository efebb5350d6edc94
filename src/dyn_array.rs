//! A growable array, used as the storage of [`TaskList`](crate::task_list::TaskList)

use std::fmt::{Debug, Formatter};
use std::iter::FromIterator;

use crate::error::ListError;
use crate::traits::OrderedList;

/// Capacity of an array built by [`DynArray::new`]
pub const DEFAULT_CAPACITY: usize = 2;

/// A full array of size `n` grows to `n + n * GROWTH_FACTOR`
pub const GROWTH_FACTOR: usize = 2;

/// Iterator over the live items of a [`DynArray`]
pub type Iter<'a, T> = std::iter::Flatten<std::slice::Iter<'a, Option<T>>>;

/// An ordered sequence of items, stored contiguously in a buffer that grows when it is full.
///
/// * appending is amortized O(1), and O(n) when the buffer has to grow
/// * removing is O(n), since the following items are shifted to the left
/// * indexed reads and writes are O(1)
/// * the buffer never shrinks
#[derive(Clone)]
pub struct DynArray<T> {
    /// The buffer. Its length is the capacity.
    /// Slots `0..size` are always `Some`, the other ones are always `None`
    slots: Box<[Option<T>]>,
    size: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> DynArray<T> {
    /// Create an empty array, with room for [`DEFAULT_CAPACITY`] items
    pub fn new() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            size: 0,
        }
    }

    /// Create an empty array, with room for `capacity` items.
    ///
    /// Fails with [`ListError::InvalidArgument`] if `capacity` is 0
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        if capacity == 0 {
            return Err(ListError::InvalidArgument { capacity });
        }
        Ok(Self {
            slots: empty_slots(capacity),
            size: 0,
        })
    }

    /// Number of items this array can hold before it has to grow
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over the items, in order
    pub fn iter(&self) -> Iter<'_, T> {
        self.slots[..self.size].iter().flatten()
    }

    fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::OutOfBounds { index, size: self.size }
    }

    /// Move every item into a bigger buffer
    fn grow(&mut self) {
        // This also covers a size of 0, which would otherwise compute a capacity of 0
        let new_capacity = std::cmp::max(self.size + self.size * GROWTH_FACTOR, 1);

        let mut new_slots = empty_slots(new_capacity);
        for (new_slot, old_slot) in new_slots.iter_mut().zip(self.slots[..self.size].iter_mut()) {
            *new_slot = old_slot.take();
        }
        self.slots = new_slots;
    }
}

impl<T> OrderedList<T> for DynArray<T> {
    fn add_item(&mut self, item: T) {
        if self.size == self.capacity() {
            self.grow();
        }
        self.slots[self.size] = Some(item);
        self.size += 1;
    }

    fn remove_item(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.size {
            return Err(self.out_of_bounds(index));
        }
        let removed = match self.slots[index].take() {
            Some(item) => item,
            None => return Err(self.out_of_bounds(index)),
        };

        // The now-empty slot travels to the end of the live range
        self.slots[index..self.size].rotate_left(1);
        self.size -= 1;
        Ok(removed)
    }

    fn get_item(&self, index: usize) -> Result<&T, ListError> {
        self.slots[..self.size]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn get_item_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let size = self.size;
        self.slots[..size]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(ListError::OutOfBounds { index, size })
    }

    fn set_item(&mut self, index: usize, item: T) -> Result<T, ListError> {
        let slot = self.get_item_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    fn size(&self) -> usize {
        self.size
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|existing| existing == item)
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for item in iter {
            array.add_item(item);
        }
        array
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
