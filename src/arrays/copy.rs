/// Maps every present element of `data` with `mapper`. Missing elements stay missing and are
/// never passed to `mapper`.
///
/// # Examples
/// ```
/// # use anenome::arrays;
/// let lengths = arrays::map(&[Some("one"), None, Some("three")], |s| s.len());
/// assert_eq!(*lengths, [Some(3), None, Some(5)]);
/// ```
pub fn map<T, R, F>(data: &[Option<T>], mut mapper: F) -> Box<[Option<R>]>
where
    F: FnMut(&T) -> R,
{
    data.iter().map(|value| value.as_ref().map(&mut mapper)).collect()
}

/// Copies `data` into a new boxed slice of exactly `length` elements. If `length` is larger than
/// `data`, the remaining slots are filled with clones of `default`; if it is smaller, the copy is
/// truncated.
///
/// # Examples
/// ```
/// # use anenome::arrays;
/// assert_eq!(*arrays::copy_of(&[1, 2], 4, 0), [1, 2, 0, 0]);
/// assert_eq!(*arrays::copy_of(&[1, 2, 3], 2, 0), [1, 2]);
/// ```
pub fn copy_of<T: Clone>(data: &[T], length: usize, default: T) -> Box<[T]> {
    let kept = length.min(data.len());

    data[..kept]
        .iter()
        .cloned()
        .chain(std::iter::repeat_n(default, length - kept))
        .collect()
}

/// Returns the smallest value in `values`, or [`i32::MAX`] if there are none.
pub fn min_array(values: &[i32]) -> i32 {
    values.iter().copied().fold(i32::MAX, i32::min)
}
