//! Command-line tokenizer following the Windows runtime rules
//!
//! Matches how `CommandLineToArgvW` and the MSVC runtime split the
//! arguments that follow the program name:
//!
//! - space and tab separate arguments outside quotes
//! - `2n` backslashes then `"` produce `n` backslashes and toggle quoting
//! - `2n + 1` backslashes then `"` produce `n` backslashes and a literal `"`
//! - backslashes not followed by `"` are literal

/// Split a command line into its arguments.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    // Distinguishes `""` (an empty argument) from no argument at all
    let mut in_token = false;
    let mut in_quotes = false;
    let mut backslashes = 0usize;

    for c in line.chars() {
        match c {
            '\\' => {
                backslashes += 1;
                in_token = true;
            }
            '"' => {
                current.extend(std::iter::repeat_n('\\', backslashes / 2));
                if backslashes % 2 == 1 {
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
                backslashes = 0;
                in_token = true;
            }
            ' ' | '\t' if !in_quotes => {
                current.extend(std::iter::repeat_n('\\', backslashes));
                backslashes = 0;
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            _ => {
                current.extend(std::iter::repeat_n('\\', backslashes));
                backslashes = 0;
                current.push(c);
                in_token = true;
            }
        }
    }

    current.extend(std::iter::repeat_n('\\', backslashes));
    if in_token {
        args.push(current);
    }

    args
}
