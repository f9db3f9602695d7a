//! Assertions with the message formats the workspace's tests rely on.

use std::error::Error;
use std::fmt::{Debug, Display};

/// Assert two values are equal, panicking with
/// `Assertion failure, expected {expected} but got {actual}`.
///
/// Values are rendered with `Display`, so booleans read `true` / `false`.
#[track_caller]
pub fn assert_equal<T>(expected: T, actual: T)
where
    T: PartialEq + Display,
{
    if expected != actual {
        panic!("Assertion failure, expected {expected} but got {actual}");
    }
}

/// Render an error followed by every error in its `source()` chain.
pub fn render_error_chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Assert that `result` is an error whose rendered chain contains `needle`.
#[track_caller]
pub fn assert_error_contains<T, E>(result: Result<T, E>, needle: &str)
where
    T: Debug,
    E: Error,
{
    match result {
        Ok(value) => panic!("expected an error containing {needle:?} but got Ok({value:?})"),
        Err(err) => {
            let rendered = render_error_chain(&err);
            if !rendered.contains(needle) {
                panic!("expected an error containing {needle:?} but got {rendered:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "outer failure")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    fn failing() -> Result<(), Outer> {
        Err(Outer(std::io::Error::other("test123")))
    }

    #[test]
    fn equal_values_pass() {
        assert_equal(1, 1);
        assert_equal("abcd", "abcd");
        assert_equal(true, true);
        assert_equal(false, false);
    }

    #[test]
    #[should_panic(expected = "Assertion failure, expected 1 but got 2")]
    fn unequal_ints_fail() {
        assert_equal(1, 2);
    }

    #[test]
    #[should_panic(expected = "expected abcd but got abce")]
    fn unequal_strings_fail() {
        assert_equal("abcd", "abce");
    }

    #[test]
    #[should_panic(expected = "expected true but got false")]
    fn unequal_bools_fail() {
        assert_equal(true, false);
    }

    #[test]
    fn error_chain_includes_sources() {
        let err = failing().unwrap_err();
        assert_eq!(render_error_chain(&err), "outer failure: test123");
    }

    #[test]
    fn error_contains_matches_source_message() {
        assert_error_contains(failing(), "test123");
    }

    #[test]
    #[should_panic(expected = "but got Ok")]
    fn error_contains_rejects_ok() {
        assert_error_contains(Ok::<u8, Outer>(1), "anything");
    }

    #[test]
    #[should_panic(expected = "missing text")]
    fn error_contains_rejects_other_message() {
        assert_error_contains(failing(), "missing text");
    }
}
