//! Quote and split commands

use std::io::Write;

use coord_os::{combine_process_arguments, split_command_line};

/// Print the combined command line for `args`.
pub fn run_quote(out: &mut impl Write, args: &[String]) -> std::io::Result<()> {
    writeln!(out, "{}", combine_process_arguments(args))
}

/// Print each argument of `line` on its own line.
pub fn run_split(out: &mut impl Write, line: &str) -> std::io::Result<()> {
    for arg in split_command_line(line) {
        writeln!(out, "{arg}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn quote_prints_combined_line() {
        let args = vec!["convert".to_string(), "in file.png".to_string()];
        assert_eq!(
            capture(|out| run_quote(out, &args)),
            "convert \"in file.png\"\n"
        );
    }

    #[test]
    fn split_prints_one_argument_per_line() {
        assert_eq!(
            capture(|out| run_split(out, r#"a "b c" d"#)),
            "a\nb c\nd\n"
        );
    }
}
