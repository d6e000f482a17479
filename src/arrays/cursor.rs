use std::iter::FusedIterator;

use crate::error::IndexOutOfBounds;

/// A type for bi-directional traversal of a slice. Unlike [`slice::Iter`](std::slice::Iter), the
/// cursor can step back over elements it has already yielded and remembers its position as an
/// index.
///
/// The cursor sits *between* elements: [`next`](Iterator::next) yields the element after it and
/// moves forward, [`previous`](ArrayCursor::previous) yields the element before it and moves back.
///
/// # Time Complexity
/// All operations are `O(1)`.
///
/// # Examples
/// ```
/// # use anenome::arrays::ArrayCursor;
/// let mut cursor = ArrayCursor::new(&[1, 2, 3]);
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.previous(), Some(&2));
/// assert_eq!(cursor.index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayCursor<'a, T> {
    pub(crate) data: &'a [T],
    pub(crate) index: usize,
}

impl<'a, T> ArrayCursor<'a, T> {
    /// Creates a new cursor positioned before the first element of `data`.
    pub const fn new(data: &'a [T]) -> ArrayCursor<'a, T> {
        ArrayCursor { data, index: 0 }
    }

    /// Creates a new cursor positioned before the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` doesn't refer to an element of `data`.
    pub const fn starting_at(
        data: &'a [T],
        index: usize,
    ) -> Result<ArrayCursor<'a, T>, IndexOutOfBounds> {
        if index >= data.len() {
            return Err(IndexOutOfBounds { index, len: data.len() });
        }

        Ok(ArrayCursor { data, index })
    }

    /// Returns the slice this cursor traverses.
    pub const fn backing(&self) -> &'a [T] {
        self.data
    }

    /// Returns the index of the element that the next call to [`next`](Iterator::next) would
    /// yield. This is equal to `len` once the cursor is exhausted.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns true if [`next`](Iterator::next) would yield an element.
    pub const fn has_next(&self) -> bool {
        self.index < self.data.len()
    }

    /// Returns true if [`previous`](ArrayCursor::previous) would yield an element.
    pub const fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Returns the element preceding the cursor, which is the element most recently yielded by
    /// [`next`](Iterator::next) if the cursor hasn't been moved since. Doesn't move the cursor.
    pub fn last_yielded(&self) -> Option<&'a T> {
        self.index.checked_sub(1).map(|i| &self.data[i])
    }

    /// Moves the cursor back by one, returning the element it stepped over.
    pub fn previous(&mut self) -> Option<&'a T> {
        let prev = self.index.checked_sub(1)?;
        self.index = prev;
        Some(&self.data[prev])
    }

    /// Moves the cursor forward by one without reading, returning the new index.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the cursor would move past the end of the slice.
    pub const fn advance(&mut self) -> Result<usize, IndexOutOfBounds> {
        if self.index >= self.data.len() {
            return Err(IndexOutOfBounds { index: self.index + 1, len: self.data.len() });
        }

        self.index += 1;
        Ok(self.index)
    }

    /// Moves the cursor back by one without reading, returning the new index.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if the cursor is already at the start of the slice. The index
    /// reported is [`usize::MAX`], standing in for `-1`.
    pub const fn retreat(&mut self) -> Result<usize, IndexOutOfBounds> {
        match self.index.checked_sub(1) {
            Some(prev) => {
                self.index = prev;
                Ok(prev)
            },
            None => Err(IndexOutOfBounds { index: usize::MAX, len: self.data.len() }),
        }
    }
}

impl<'a, T> Iterator for ArrayCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.data.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.data.len() - self.index;
        (rem, Some(rem))
    }
}

impl<T> ExactSizeIterator for ArrayCursor<'_, T> {}

impl<T> FusedIterator for ArrayCursor<'_, T> {}
