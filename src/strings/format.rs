use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::{Align, Directive, FormatError, NoPreviousArgumentError};
use crate::arrays::{self, ArrayCursor};
use crate::error::IndexOutOfBounds;

/// Non-greedy, so a placeholder ends at the first `}` after its `{`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(.*?)\}").expect("placeholder pattern should compile")
});

/// A single value to be substituted into a template. [`None`] is written as `"null"`.
pub type Argument<'a> = Option<&'a dyn Display>;

/// Wraps a reference as a present [`Argument`].
pub fn arg<T: Display>(value: &T) -> Argument<'_> {
    Some(value)
}

/// Builds an array of [`Argument`]s from a list of expressions, each of which must implement
/// [`Display`].
///
/// # Examples
/// ```
/// # use anenome::{args, strings};
/// let name = "world";
/// assert_eq!(strings::format("hello {}!", &args![name]).unwrap(), "hello world!");
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::strings::arg(&$value)),*]
    };
}

/// Formats `template`, replacing each `{...}` placeholder with one of `arguments`.
///
/// Supported placeholders:
/// - `{}`: the next argument.
/// - `{n}`: the argument at index `n`. This doesn't affect which argument `{}` takes next.
/// - `{:n}`: the next argument, left aligned and padded with spaces to at least `n` chars.
/// - `{:[fill](<|>|^)n}`: the last argument taken by `{}` or `{:n}` again, left, right or center
///   aligned within `n` chars. `fill` defaults to a space and may be more than one char.
///
/// If `arguments` is empty, the template is returned untouched, placeholders included.
///
/// # Errors
/// Returns a [`FormatError`] if a placeholder can't be parsed, refers past the end of
/// `arguments`, aligns before any argument has been taken, or asks for a width too large to
/// allocate.
///
/// # Examples
/// ```
/// # use anenome::{args, strings};
/// assert_eq!(strings::format("{1} then {0}", &args!["a", "b"]).unwrap(), "b then a");
/// assert_eq!(strings::format("val={} as {:*^7}", &args!["hi"]).unwrap(), "val=hi as **hi***");
/// assert!(strings::format("{5}", &args!["a"]).is_err());
/// ```
pub fn format(template: &str, arguments: &[Argument<'_>]) -> Result<String, FormatError> {
    if arguments.is_empty() {
        return Ok(template.to_owned());
    }

    let mut resolver = Resolver::new(arguments);
    let mut formatted = String::with_capacity(template.len());
    let mut copied = 0;

    for captures in PLACEHOLDER.captures_iter(template) {
        let span = captures.get_match();
        let content = captures.get(1).map_or("", |m| m.as_str());

        formatted.push_str(&template[copied..span.start()]);
        formatted.push_str(&resolver.resolve(content)?);
        copied = span.end();
    }

    formatted.push_str(&template[copied..]);
    Ok(formatted)
}

/// Per-call state: which argument `{}` takes next, and which it took last.
struct Resolver<'a, 'b> {
    cursor: ArrayCursor<'a, Argument<'b>>,
}

impl<'a, 'b> Resolver<'a, 'b> {
    const fn new(arguments: &'a [Argument<'b>]) -> Resolver<'a, 'b> {
        Resolver {
            cursor: ArrayCursor::new(arguments),
        }
    }

    fn resolve(&mut self, content: &str) -> Result<String, FormatError> {
        let directive = Directive::parse(content)?;
        trace!(?directive, index = self.cursor.index(), "resolving placeholder");

        Ok(match directive {
            Directive::Next => arrays::render(self.next()?),
            Directive::Positional(index) => arrays::render(self.get(index)?),
            Directive::Width(width) => {
                Align::Left.pad(&arrays::render(self.next()?), " ", width)?
            },
            Directive::Aligned { fill, align, width } => {
                let last = self.cursor.last_yielded().ok_or(NoPreviousArgumentError)?;
                align.pad(&arrays::render(*last), fill, width)?
            },
        })
    }

    fn next(&mut self) -> Result<Argument<'b>, IndexOutOfBounds> {
        let index = self.cursor.index();
        let len = self.cursor.backing().len();
        self.cursor.next().copied().ok_or(IndexOutOfBounds { index, len })
    }

    fn get(&self, index: usize) -> Result<Argument<'b>, IndexOutOfBounds> {
        let arguments = self.cursor.backing();
        arguments.get(index).copied().ok_or(IndexOutOfBounds { index, len: arguments.len() })
    }
}
