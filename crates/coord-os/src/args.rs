//! Argument quoting for process command lines

use std::borrow::Cow;

/// Whether `arg` must be wrapped in double quotes to survive tokenizing.
///
/// True for the empty string and for anything containing a space, tab or
/// double quote.
pub fn needs_quoting(arg: &str) -> bool {
    arg.is_empty() || arg.contains([' ', '\t', '"'])
}

/// Quote a single argument.
///
/// Arguments that do not need quoting are returned unchanged, including any
/// backslashes. Otherwise the argument is wrapped in double quotes, embedded
/// quotes are escaped, and backslash runs that precede a quote or the
/// closing quote are doubled.
pub fn quote_argument(arg: &str) -> Cow<'_, str> {
    if !needs_quoting(arg) {
        return Cow::Borrowed(arg);
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');

    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                push_backslashes(&mut quoted, backslashes * 2 + 1);
                quoted.push('"');
                backslashes = 0;
            }
            _ => {
                push_backslashes(&mut quoted, backslashes);
                quoted.push(c);
                backslashes = 0;
            }
        }
    }

    // A trailing run would otherwise escape the closing quote
    push_backslashes(&mut quoted, backslashes * 2);
    quoted.push('"');

    Cow::Owned(quoted)
}

fn push_backslashes(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('\\', count));
}

/// Combine arguments into one command-line string.
///
/// Each argument is quoted independently with [`quote_argument`] and the
/// results are joined by single spaces.
///
/// ```
/// use coord_os::combine_process_arguments;
///
/// assert_eq!(combine_process_arguments(["a", " b"]), r#"a " b""#);
/// assert_eq!(
///     combine_process_arguments([r"C:\Program Files\"]),
///     r#""C:\Program Files\\""#
/// );
/// ```
pub fn combine_process_arguments<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut combined = String::new();
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            combined.push(' ');
        }
        combined.push_str(&quote_argument(arg.as_ref()));
    }
    combined
}
