use std::fmt::Display;

use super::ArrayCursor;

/// The text used in place of a missing element.
pub const NULL: &str = "null";

/// Joins the elements of `data` into a single string, separated by `delimiter`. Missing elements
/// are written as `"null"`.
///
/// # Examples
/// ```
/// # use anenome::arrays;
/// assert_eq!(arrays::join(&[Some(1), None, Some(3)], ", "), "1, null, 3");
/// ```
pub fn join<T: Display>(data: &[Option<T>], delimiter: &str) -> String {
    join_with(data, delimiter, |value| value.to_string())
}

/// Like [`join`], except that present elements are converted by `mapper` rather than their
/// [`Display`] implementation. `mapper` is never called for missing elements.
pub fn join_with<T, F>(data: &[Option<T>], delimiter: &str, mut mapper: F) -> String
where
    F: FnMut(&T) -> String,
{
    let mut joined = String::new();
    let mut cursor = ArrayCursor::new(data);

    while let Some(next) = cursor.next() {
        match next {
            Some(value) => joined.push_str(&mapper(value)),
            None => joined.push_str(NULL),
        }

        if cursor.has_next() {
            joined.push_str(delimiter);
        }
    }

    joined
}

/// Writes `value` the way the rest of this crate does, with a missing value becoming `"null"`.
pub(crate) fn render<T: Display + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => NULL.to_owned(),
    }
}
