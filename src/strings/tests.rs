#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::args;
use crate::error::IndexOutOfBounds;

#[test]
fn test_implicit_and_positional() {
    assert_eq!(format("{} and {}", &args!["a", "b"]).unwrap(), "a and b");
    assert_eq!(
        format("{1} then {0}", &args!["a", "b"]).unwrap(),
        "b then a",
        "Positional placeholders should ignore the order of consumption."
    );
    assert_eq!(
        format("{1}{}{}", &args!["a", "b"]).unwrap(),
        "bab",
        "Positional placeholders shouldn't advance the cursor."
    );
    assert_eq!(format("{ }!", &args![42]).unwrap(), "42!", "Blank placeholders take the next argument.");

    let arguments: [Argument; 2] = [None, arg(&1.5)];
    assert_eq!(format("{} {}", &arguments).unwrap(), "null 1.5", "Missing arguments render as null.");
    assert_eq!(format("{0}", &arguments).unwrap(), "null");
}

#[test]
fn test_no_arguments() {
    assert_eq!(
        format("{}", &[]).unwrap(),
        "{}",
        "Without arguments, the template should be returned untouched."
    );
    assert_eq!(format("{:*^7} {nonsense}", &[]).unwrap(), "{:*^7} {nonsense}");
}

#[test]
fn test_literal_text() {
    assert_eq!(format("a { b", &args!["x"]).unwrap(), "a { b", "An unclosed brace is literal.");
    assert_eq!(format("} {}", &args!["x"]).unwrap(), "} x");
    assert_eq!(
        format("{{}", &args!["x"]),
        Err(UnknownFormatError { directive: String::from("{") }.into()),
        "A nested brace is part of the directive, which isn't valid."
    );
}

#[test]
fn test_width() {
    assert_eq!(format("{:5}", &args!["x"]).unwrap(), "x    ");
    assert_eq!(format("{:2}|", &args!["hello"]).unwrap(), "hello|", "Width shouldn't truncate.");
    assert_eq!(format("{:0}{:3}", &args!["a", "b"]).unwrap(), "ab  ", "Width consumes arguments.");
}

#[test]
fn test_alignment() {
    assert_eq!(format("val={} as {:*^7}", &args!["hi"]).unwrap(), "val=hi as **hi***");
    assert_eq!(format("{}|{:>5}", &args!["ab"]).unwrap(), "ab|   ab");
    assert_eq!(format("{}|{:-<5}", &args!["ab"]).unwrap(), "ab|ab---");
    assert_eq!(format("{}|{:^6}", &args!["ab"]).unwrap(), "ab|  ab  ", "Fill should default to a space.");
    assert_eq!(
        format("{}|{:.^6}", &args!["abc"]).unwrap(),
        "abc|.abc..",
        "Odd padding should lean right."
    );
    assert_eq!(
        format("{}|{:>2}", &args!["abcd"]).unwrap(),
        "abcd|abcd",
        "Values at least as wide as the width should be left alone."
    );
    assert_eq!(
        format("{:3}|{:>4}", &args!["ab"]).unwrap(),
        "ab |  ab",
        "Alignment should reuse the value consumed by a width placeholder."
    );
    assert_eq!(
        format("{}{}|{:>3}", &args!["a", "b"]).unwrap(),
        "ab|  b",
        "Alignment should reuse only the most recent value."
    );
    assert_eq!(format("{}|{:<<4}", &args!["a"]).unwrap(), "a|a<<<", "Fill is greedy.");
}

#[test]
fn test_multi_char_fill() {
    assert_eq!(format("{}|{:ab>5}", &args!["x"]).unwrap(), "x|ababx");
    assert_eq!(
        format("{}|{:ab<5}", &args!["x"]).unwrap(),
        "x|xabab",
        "Padding should start from the beginning of the fill."
    );
    assert_eq!(
        format("{}|{:xyz^7}", &args!["hi"]).unwrap(),
        "hi|xyhixyz",
        "Each side of a centered value should restart the fill."
    );
    assert_eq!(format("{}|{:é-^5}", &args!["ab"]).unwrap(), "ab|éabé-", "Fill chars may be multi-byte.");
}

#[test]
fn test_large_widths() {
    let formatted = format("{:70000}", &args!["x"]).unwrap();
    assert_eq!(formatted.len(), 70000, "Widths past u16::MAX should still pad.");
    assert!(formatted.starts_with("x "));

    let formatted = format("{}{:*>70000}", &args!["x"]).unwrap();
    assert_eq!(formatted.chars().count(), 70001);
    assert!(formatted.ends_with("**x"));

    assert!(
        format("{}{:*<18446744073709551615}", &args!["x"]).is_err_and(|e| e.is_width_too_large()),
        "A width that can't be allocated should be an error rather than a panic."
    );
    assert!(format("{:18446744073709551615}", &args!["x"]).is_err_and(|e| e.is_width_too_large()));
}

#[test]
fn test_errors() {
    assert_eq!(
        format("{5}", &args!["a"]),
        Err(IndexOutOfBounds { index: 5, len: 1 }.into())
    );
    assert_eq!(
        format("{}{}", &args!["a"]),
        Err(IndexOutOfBounds { index: 1, len: 1 }.into()),
        "Running out of arguments should fail."
    );
    assert_eq!(
        format("{:*^7}", &args!["a"]),
        Err(NoPreviousArgumentError.into()),
        "Aligning before anything is consumed should fail."
    );
    assert!(
        format("{0}{:>3}", &args!["a"]).is_err_and(|e| e.is_no_previous_argument()),
        "Positional placeholders don't count as consumed."
    );
    assert!(format("{99999999999999999999999}", &args!["a"]).is_err_and(|e| e.is_invalid_number()));

    let error = format("{x}", &args!["a"]).unwrap_err();
    assert_eq!(error.to_string(), "Unknown format \"x\"");
    let error = format("{}{:x}", &args!["a"]).unwrap_err();
    assert_eq!(error.to_string(), "Unknown format \"x\"", "The colon isn't part of the message.");
    assert!(format("{:<}", &args!["a"]).is_err_and(|e| e.is_unknown_format()), "Width is required.");
}

#[test]
fn test_parse_directive() {
    assert_eq!(Directive::parse("").unwrap(), Directive::Next);
    assert_eq!(Directive::parse("  ").unwrap(), Directive::Next);
    assert_eq!(Directive::parse("12").unwrap(), Directive::Positional(12));
    assert_eq!(Directive::parse(":12").unwrap(), Directive::Width(12));
    assert_eq!(
        Directive::parse(":>3").unwrap(),
        Directive::Aligned { fill: " ", align: Align::Right, width: 3 }
    );
    assert_eq!(
        Directive::parse(":=-<10").unwrap(),
        Directive::Aligned { fill: "=-", align: Align::Left, width: 10 }
    );
    assert!(Directive::parse("-1").is_err(), "Negative indices aren't a thing.");
    assert!(Directive::parse("+1").is_err());
    assert!(Directive::parse(":^").is_err());
}

#[test]
fn test_print() {
    let mut out = Vec::new();
    write_format(&mut out, "{}-{}", &args![1, 2]).unwrap();
    write_formatln(&mut out, "!{}{:>3}", &args!["z"]).unwrap();
    assert_eq!(out, b"1-2!z  z\n");

    let mut out = Vec::new();
    let result = write_formatln(&mut out, "{9}", &args!["z"]);
    assert!(result.is_err_and(|e| e.is_format()));
    assert!(out.is_empty(), "Nothing should be written when formatting fails.");
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("flaw", "lawn"), 2);
    assert_eq!(levenshtein("", ""), 0);
    assert_eq!(levenshtein("abc", ""), 3);
    assert_eq!(levenshtein("héllo", "hello"), 1, "Distance is counted in chars, not bytes.");
}

proptest! {
    #[test]
    fn format_without_placeholders_is_identity(
        template in "[a-z0-9 .:!]{0,32}",
        values in prop::collection::vec(any::<u16>(), 0..4),
    ) {
        let arguments: Vec<Argument> = values.iter().map(|v| arg(v)).collect();
        prop_assert_eq!(format(&template, &arguments).unwrap(), template);
    }

    #[test]
    fn aligned_output_is_at_least_width(
        value in "[a-z]{0,12}",
        width in 0_usize..20,
    ) {
        let template = std::format!("{{}}{{:*^{width}}}");
        let formatted = format(&template, &args![value]).unwrap();
        let aligned = &formatted[value.len()..];
        prop_assert_eq!(aligned.chars().count(), width.max(value.len()));
        prop_assert!(aligned.contains(value.as_str()));
    }

    #[test]
    fn levenshtein_identity(s in ".{0,16}") {
        prop_assert_eq!(levenshtein(&s, &s), 0);
    }

    #[test]
    fn levenshtein_symmetry(a in ".{0,12}", b in ".{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn levenshtein_bounds(a in "[ab]{0,10}", b in "[ab]{0,10}") {
        let distance = levenshtein(&a, &b);
        prop_assert!(distance >= a.len().abs_diff(b.len()));
        prop_assert!(distance <= a.len().max(b.len()));
    }
}
