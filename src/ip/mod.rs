//! Dot-separated rendering of integers, text, sequences and uniform tuples.
//!
//! Which rendering applies is decided by the type of the value: [`PrintIp`] is
//! implemented for exactly four shapes and nothing else, so printing a value of
//! any other type is rejected by the compiler.
//!
//! | shape    | types                                        | fields              |
//! |----------|----------------------------------------------|---------------------|
//! | integer  | `i8`..`i128`, `u8`..`u128`, `isize`, `usize` | bytes, MSB first    |
//! | text     | `String`, `str`                              | the text, verbatim  |
//! | sequence | `Vec<T>`, `LinkedList<T>`                    | elements, in order  |
//! | tuple    | `()`, `(T,)` .. `(T, T, ..., T)` (12 fields) | fields, in order    |

mod integer;
mod sequence;
mod text;
mod tuple;

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

/// Placed between two consecutive fields.
pub const SEPARATOR: &str = ".";

/// A value that can be rendered as a dot-separated line of fields.
pub trait PrintIp {
    /// Writes the fields of `self`, without the trailing line break.
    fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result;

    fn display_ip(&self) -> IpDisplay<'_, Self> {
        IpDisplay(self)
    }
}

impl<T: PrintIp + ?Sized> PrintIp for &T {
    fn fmt_ip(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).fmt_ip(f)
    }
}

/// [`Display`] adapter returned by [`PrintIp::display_ip`].
pub struct IpDisplay<'a, T: ?Sized>(&'a T);

impl<T: PrintIp + ?Sized> Display for IpDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt_ip(f)
    }
}

/// Writes `fields` to `f`, separated by [`SEPARATOR`].
///
/// Every field is rendered with its own `Display` implementation and the
/// caller's width/fill flags are not forwarded to it.
pub(crate) fn write_fields<I>(f: &mut Formatter<'_>, fields: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut first = true;
    for field in fields {
        if !first {
            f.write_str(SEPARATOR)?;
        }
        write!(f, "{}", field)?;
        first = false;
    }
    Ok(())
}

/// Renders the fields of `value` into a new string, without a line break.
pub fn to_ip_string<T: PrintIp>(value: T) -> String {
    value.display_ip().to_string()
}

/// Writes the fields of `value` followed by a line break to `out`.
pub fn write_ip<W, T>(out: &mut W, value: T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: PrintIp,
{
    writeln!(out, "{}", value.display_ip())
}

/// Prints the fields of `value` followed by a line break to standard output.
///
/// The whole line is rendered first and written with a single locked write.
/// Like [`println!`], this panics if standard output cannot be written to.
///
/// ```
/// use std::collections::LinkedList;
/// use print_ip::print_ip;
///
/// print_ip(2130706433);                            // 127.0.0.1
/// print_ip("Hello, World!");                       // Hello, World!
/// print_ip(vec![100, 200, 300, 400]);              // 100.200.300.400
/// print_ip(LinkedList::from([400, 300, 200]));     // 400.300.200
/// print_ip((123, 456, 789, 0));                    // 123.456.789.0
/// ```
pub fn print_ip<T: PrintIp>(value: T) {
    let line = format!("{}\n", value.display_ip());
    if let Err(e) = io::stdout().lock().write_all(line.as_bytes()) {
        panic!("failed printing to stdout: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_ip_appends_line_break() {
        let mut out = Vec::new();
        write_ip(&mut out, 2130706433i32).unwrap();
        write_ip(&mut out, "Hello, World!").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "127.0.0.1\nHello, World!\n");
    }

    #[test]
    fn printing_twice_gives_identical_lines() {
        let value = vec!["a", "b"];
        let mut out = Vec::new();
        write_ip(&mut out, &value).unwrap();
        write_ip(&mut out, &value).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a.b\na.b\n");
    }

    #[test]
    fn padding_flags_are_ignored() {
        assert_eq!(format!("{:>12}", vec![1, 2].display_ip()), "1.2");
    }

    #[test]
    fn references_dispatch_to_referent() {
        let s = String::from("10.0.0.1");
        assert_eq!(to_ip_string(&s), "10.0.0.1");
        assert_eq!(to_ip_string(&&7u8), "7");
    }

    #[test]
    fn print_ip_accepts_every_shape() {
        print_ip(-1i8);
        print_ip(String::new());
        print_ip(Vec::<u8>::new());
        print_ip(());
    }
}
