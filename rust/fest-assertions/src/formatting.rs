//! Rendering of failure messages.
//!
//! Every failure message produced by this crate goes through [`format`], so
//! the description prefix and the rendering of values is the same for all
//! assertions.
//!
//! Values are rendered with their `Debug` text, not their `Display` text.
//! Text therefore appears quoted and escaped (`<"a,b">`), characters as
//! `<'a'>` and sequences as `<[1, 2]>`. Custom assertions that want text
//! rendered raw can wrap it in [`Unquoted`].
//!
//! ```
//! use fest_assertions::formatting::{format, Unquoted};
//!
//! assert_eq!(format(None, "<{}> and <{}>", &[&"a,b", &'a']), "<\"a,b\"> and <'a'>");
//! assert_eq!(format(None, "<{}>", &[&Unquoted("a,b")]), "<a,b>");
//! ```
use crate::description::Description;
use std::fmt::{self, Debug, Formatter, Write};

const PLACEHOLDER: &str = "{}";

/// Renders `template`, replacing each `{}` with the `Debug` text of the next
/// value, and prefixes the result with `[<description>] ` when a non-empty
/// description is given.
///
/// ```
/// use fest_assertions::{formatting::format, BasicDescription, Description};
///
/// let description = BasicDescription::new("A Test");
/// let message = format(Some(&description as &dyn Description), "expected:<{}> but was:<{}>", &[&2, &1]);
/// assert_eq!(message, "[A Test] expected:<2> but was:<1>");
///
/// let message = format(None, "expected:<{}> but was:<{}>", &[&vec![6], &vec![6, 8]]);
/// assert_eq!(message, "expected:<[6]> but was:<[6, 8]>");
/// ```
pub fn format(description: Option<&dyn Description>, template: &str, values: &[&dyn Debug]) -> String {
    let message = substitute(template, values);

    match description.map(|d| d.value()) {
        Some(label) if !label.is_empty() => std::format!("[{}] {}", label, message),
        _ => message,
    }
}

/// Positional substitution of `values` into `template`. Placeholders without
/// a value are kept verbatim and surplus values are ignored.
pub fn substitute(template: &str, values: &[&dyn Debug]) -> String {
    let mut values = values.iter();
    let mut pieces = template.split(PLACEHOLDER);
    let mut rendered = String::with_capacity(template.len());

    if let Some(first) = pieces.next() {
        rendered.push_str(first);
    }

    for piece in pieces {
        match values.next() {
            Some(value) => {
                let _ = write!(rendered, "{:?}", value);
            },
            None => rendered.push_str(PLACEHOLDER),
        }
        rendered.push_str(piece);
    }

    rendered
}

/// `<value>`
pub fn in_brackets(value: &dyn Debug) -> String {
    std::format!("<{:?}>", value)
}

/// Text of a possibly-null value.
pub fn to_string_of<T: Debug + ?Sized>(value: Option<&T>) -> String {
    std::format!("{:?}", Nullable(value))
}

/// Renders `None` as `null` and `Some(v)` as `v`.
pub struct Nullable<'a, T: ?Sized>(pub Option<&'a T>);

impl<T: Debug + ?Sized> Debug for Nullable<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

/// Renders text without the quotes `Debug` would add, for type names and
/// other identifiers.
pub struct Unquoted<'a>(pub &'a str);

impl Debug for Unquoted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
