use std::sync::LazyLock;

use regex::Regex;

use super::{FormatError, UnknownFormatError};

/// `:` directives. Either a bare width, or a fill followed by an alignment and a width. The fill
/// is greedy, so `{:<<4}` fills with `<`.
static FORMAT_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]+)|(.*)([<>^])([0-9]+))$")
        .expect("format spec pattern should compile")
});

const DEFAULT_FILL: &str = " ";

/// The parsed contents of a single placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'t> {
    /// `{}`: the next argument.
    Next,
    /// `{n}`: the argument at index `n`, regardless of how many have been consumed.
    Positional(usize),
    /// `{:n}`: the next argument, followed by spaces until it is at least `n` chars long.
    Width(usize),
    /// `{:[fill](<|>|^)n}`: the most recently consumed argument again, aligned within `width`
    /// chars.
    Aligned {
        fill: &'t str,
        align: Align,
        width: usize,
    },
}

/// Where a value sits within the width of an [`Aligned`](Directive::Aligned) directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl<'t> Directive<'t> {
    /// Parses the text between a placeholder's braces.
    ///
    /// # Errors
    /// Returns [`FormatError::UnknownFormat`] if `content` matches none of the directive forms,
    /// or [`FormatError::InvalidNumber`] if an index or width doesn't fit in a `usize`.
    ///
    /// # Examples
    /// ```
    /// # use anenome::strings::{Align, Directive};
    /// assert_eq!(Directive::parse(" ").unwrap(), Directive::Next);
    /// assert_eq!(Directive::parse("2").unwrap(), Directive::Positional(2));
    /// assert_eq!(
    ///     Directive::parse(":*^7").unwrap(),
    ///     Directive::Aligned { fill: "*", align: Align::Center, width: 7 }
    /// );
    /// ```
    pub fn parse(content: &'t str) -> Result<Directive<'t>, FormatError> {
        if content.trim().is_empty() {
            return Ok(Directive::Next);
        }

        if is_digits(content) {
            return Ok(Directive::Positional(content.parse()?));
        }

        let Some(spec) = content.strip_prefix(':') else {
            return Err(UnknownFormatError { directive: content.to_owned() }.into());
        };

        let Some(captures) = FORMAT_SPEC.captures(spec) else {
            return Err(UnknownFormatError { directive: spec.to_owned() }.into());
        };

        if let Some(width) = captures.get(1) {
            return Ok(Directive::Width(width.as_str().parse()?));
        }

        // Groups 2-4 always participate when group 1 doesn't.
        let group = |i| captures.get(i).map_or("", |m| m.as_str());

        let fill = match group(2) {
            "" => DEFAULT_FILL,
            fill => fill,
        };

        let align = match group(3) {
            "<" => Align::Left,
            ">" => Align::Right,
            _ => Align::Center,
        };

        Ok(Directive::Aligned {
            fill,
            align,
            width: group(4).parse()?,
        })
    }
}

impl Align {
    /// Places `value` within `width` chars, padding with `fill`. Each side's padding starts from
    /// the beginning of `fill`, which is repeated and cut short to fit. Values already `width`
    /// chars or longer are returned as is.
    ///
    /// Centering puts `value` at `width / 2 - ceil(len / 2)`, so any odd char of padding goes on
    /// the right.
    ///
    /// # Errors
    /// Returns [`FormatError::WidthTooLarge`] if the padded string can't be allocated.
    pub fn pad(self, value: &str, fill: &str, width: usize) -> Result<String, FormatError> {
        let len = value.chars().count();
        if len >= width {
            return Ok(value.to_owned());
        }

        let (left, right) = match self {
            Align::Left => (0, width - len),
            Align::Right => (width - len, 0),
            Align::Center => {
                let left = width / 2 - len.div_ceil(2);
                (left, width - len - left)
            },
        };

        let mut padded = String::new();
        padded.try_reserve(
            fill_bytes(fill, left)
                .saturating_add(value.len())
                .saturating_add(fill_bytes(fill, right)),
        )?;

        padded.extend(fill.chars().cycle().take(left));
        padded.push_str(value);
        padded.extend(fill.chars().cycle().take(right));
        Ok(padded)
    }
}

/// The number of bytes taken by the first `count` chars of `fill` repeated.
fn fill_bytes(fill: &str, count: usize) -> usize {
    let chars = fill.chars().count().max(1);
    let partial: usize = fill.chars().take(count % chars).map(char::len_utf8).sum();

    (count / chars).saturating_mul(fill.len()).saturating_add(partial)
}

fn is_digits(content: &str) -> bool {
    content.bytes().all(|b| b.is_ascii_digit())
}
