//! String and sequence helpers.

use bench_core::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// `${name}` placeholders substituted by the harness before running a tool
static SUBSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{[^}]*\}").expect("Substitution regex should compile - this is a static pattern")
});

/// A line is a comment if it is empty or starts with `#` or `//`.
pub fn is_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with("//")
}

/// Whether a single line holds a `{` outside of any `${...}` placeholder.
pub fn is_code_line(line: &str) -> bool {
    !is_comment(line) && SUBSTITUTION_RE.replace_all(line, "").contains('{')
}

/// Returns true if any non-comment line of `filename` contains a code block brace.
///
/// Files consisting only of `${...}` placeholders and comments are templates,
/// not code.
pub fn is_code(filename: impl AsRef<Path>) -> Result<bool> {
    let reader = BufReader::new(File::open(filename.as_ref())?);
    for line in reader.lines() {
        if is_code_line(&line?) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns true iff any string in `list` is a substring of `text`.
pub fn contains_any<S: AsRef<str>>(text: &str, list: &[S]) -> bool {
    list.iter().any(|elem| text.contains(elem.as_ref()))
}

/// Every element of `list` except those equal to `elem_to_remove`.
pub fn remove_all<I, T>(list: I, elem_to_remove: &T) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    list.into_iter()
        .filter(|elem| elem != elem_to_remove)
        .collect()
}

/// Concatenate the inner sequences, dropping values that appear in `exclude`.
pub fn flatten<I, T>(nested: I, exclude: &[T]) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
    T: PartialEq,
{
    nested
        .into_iter()
        .flatten()
        .filter(|value| !exclude.contains(value))
        .collect()
}

/// Format `number` with exactly `digits` fractional digits, rounding or
/// padding with zeros. An absent number formats as the empty string.
pub fn format_number(number: Option<f64>, digits: usize) -> String {
    match number {
        Some(value) => format!("{:.*}", digits, value),
        None => String::new(),
    }
}
