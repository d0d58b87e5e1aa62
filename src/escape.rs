//! Shell escaping for double-quoted arguments
//!
//! Every value placed between double quotes in a generated command goes
//! through [`escape`] so it cannot end the quoted token early or trigger
//! expansion.

/// Escape a string for use inside a double-quoted shell argument.
///
/// Backslashes must be doubled first; escaping quotes or `$` before that
/// would double the backslashes introduced by those later rules.
///
/// # Examples
/// ```
/// use curlgen::escape::escape;
/// assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape("$HOME"), r"\$HOME");
/// ```
pub fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('`', "\\`")
}

/// Wrap an already escaped value in double quotes
pub(crate) fn quoted(escaped: &str) -> String {
    format!("\"{}\"", escaped)
}
