//! Shell quoting
//!
//! Everything that ends up inside a string handed to `sh -c` goes through
//! here. Argument vectors spawned directly never need it.

use std::borrow::Cow;

/// Quote one word for a POSIX shell.
///
/// Single quotes inside the word become `'\''`, so the result never leaves
/// a quote open and shell metacharacters stay literal.
pub fn quote(word: &str) -> Cow<'_, str> {
    shell_words::quote(word)
}

/// Join words into a command line that a POSIX shell splits back into
/// exactly the same words.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    shell_words::join(words)
}

/// Split a command line such as `$EDITOR` into words.
pub fn split(line: &str) -> Option<Vec<String>> {
    shell_words::split(line).ok()
}

/// True if every single quote in `line` is either part of a closed
/// single-quoted span or backslash-escaped outside one.
pub fn quotes_balanced(line: &str) -> bool {
    let mut in_single = false;
    let mut in_double = false;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '\\' if !in_single => {
                chars.next();
            }
            _ => {}
        }
    }
    !in_single && !in_double
}
