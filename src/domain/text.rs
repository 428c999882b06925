// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text utilities used by the line parser.
//!
//! All functions here borrow from their input and return sub-slices, so they never
//! allocate.

/// The default set of characters removed by [`trim`].
pub const WHITESPACE: &str = " \t\n\r\x0C\x0B";

/// Removes all leading and trailing characters found in `charset`.
///
/// Returns the empty string if `s` consists only of characters from `charset`.
///
/// # Examples
///
/// ```
/// use inicfg::domain::text::{trim, WHITESPACE};
///
/// assert_eq!(trim("  key = value \r", WHITESPACE), "key = value");
/// assert_eq!(trim("--x--", "-"), "x");
/// assert_eq!(trim(" \t ", WHITESPACE), "");
/// ```
pub fn trim<'a>(s: &'a str, charset: &str) -> &'a str {
    s.trim_matches(|c: char| charset.contains(c))
}

/// Truncates `s` at the first occurrence of any character in `mark`.
///
/// # Examples
///
/// ```
/// use inicfg::domain::text::strip_comment;
///
/// assert_eq!(strip_comment("port = 80 # http", "#"), "port = 80 ");
/// assert_eq!(strip_comment("no comment", "#"), "no comment");
/// ```
pub fn strip_comment<'a>(s: &'a str, mark: &str) -> &'a str {
    match s.find(|c: char| mark.contains(c)) {
        Some(pos) => &s[..pos],
        None => s,
    }
}

/// Strips `#` comments, then `;` comments from what remains.
///
/// The two passes run in that order. Quotes are not special, so a value cannot
/// contain a literal `#` or `;`.
///
/// # Examples
///
/// ```
/// use inicfg::domain::text::strip_comments;
///
/// assert_eq!(strip_comments("abc ; def # ghi"), "abc ");
/// assert_eq!(strip_comments("k=1;2"), "k=1");
/// assert_eq!(strip_comments("\"a#b\""), "\"a");
/// ```
pub fn strip_comments(s: &str) -> &str {
    strip_comment(strip_comment(s, "#"), ";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_default_whitespace() {
        assert_eq!(trim(" \t\x0B\x0Cvalue\r\n", WHITESPACE), "value");
    }

    #[test]
    fn test_trim_keeps_inner_whitespace() {
        assert_eq!(trim("  a b  ", WHITESPACE), "a b");
    }

    #[test]
    fn test_trim_all_whitespace() {
        assert_eq!(trim(" \r\n\t", WHITESPACE), "");
        assert_eq!(trim("", WHITESPACE), "");
    }

    #[test]
    fn test_trim_custom_charset() {
        assert_eq!(trim("[name]", "[]"), "name");
        assert_eq!(trim("xxyxx", "x"), "y");
    }

    #[test]
    fn test_strip_comment_first_occurrence() {
        assert_eq!(strip_comment("a#b#c", "#"), "a");
    }

    #[test]
    fn test_strip_comment_charset() {
        assert_eq!(strip_comment("a;b#c", "#;"), "a");
    }

    #[test]
    fn test_strip_comment_at_start() {
        assert_eq!(strip_comment("# whole line", "#"), "");
    }

    #[test]
    fn test_strip_comments_hash_then_semicolon() {
        assert_eq!(strip_comments("k = v # x ; y"), "k = v ");
        assert_eq!(strip_comments("k = v ; x # y"), "k = v ");
    }

    #[test]
    fn test_strip_comments_none() {
        assert_eq!(strip_comments("key=value"), "key=value");
    }

    #[test]
    fn test_strip_comments_non_ascii() {
        assert_eq!(strip_comments("größe=λ;kommentar"), "größe=λ");
    }
}
