// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that the parser and the typed
//! accessors handle arbitrary inputs correctly.

use inicfg::domain::text::{strip_comments, trim, WHITESPACE};
use inicfg::domain::Ini;
use proptest::prelude::*;

// Keys and values free of delimiters, comment markers and surrounding whitespace
const TOKEN: &str = "[a-zA-Z0-9_.-]{1,12}";

// Test that parsing the same text twice gives the same store
proptest! {
    #[test]
    fn test_parse_deterministic(s in "\\PC*") {
        let first = Ini::parse(&s);
        let second = Ini::parse(&s);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "parse results differ"),
        }
    }
}

// Test that surrounding whitespace never reaches keys or values
proptest! {
    #[test]
    fn test_whitespace_insensitivity(
        key in TOKEN,
        value in TOKEN,
        pad in prop::collection::vec("[ \t]*", 4)
    ) {
        let line = format!("{}{}{}={}{}{}", pad[0], key, pad[1], pad[2], value, pad[3]);
        let ini = Ini::parse(&line).unwrap();
        prop_assert_eq!(ini.get_global(&key).unwrap(), value.as_str());
    }
}

// Test that the last assignment of a key wins
proptest! {
    #[test]
    fn test_last_write_wins(
        key in TOKEN,
        values in prop::collection::vec(TOKEN, 1..8)
    ) {
        let mut doc = String::from("[s]\n");
        for value in &values {
            doc.push_str(&format!("{} = {}\n", key, value));
        }
        let ini = Ini::parse(&doc).unwrap();
        prop_assert_eq!(ini.get("s", &key).unwrap(), values.last().unwrap().as_str());
    }
}

// Test integer round trips through the typed accessor
proptest! {
    #[test]
    fn test_i64_typed_roundtrip(n in prop::num::i64::ANY) {
        let ini = Ini::parse(&format!("[n]\nvalue = {}", n)).unwrap();
        prop_assert_eq!(ini.get_value("n", "value", 0i64), n);
    }
}

proptest! {
    #[test]
    fn test_u32_typed_roundtrip(n in prop::num::u32::ANY) {
        let ini = Ini::parse(&format!("value = {}", n)).unwrap();
        prop_assert_eq!(ini.get_global_value("value", 0u32), n);
    }
}

// Test that trailing garbage always falls back to the default
proptest! {
    #[test]
    fn test_trailing_garbage_falls_back(n in prop::num::i32::ANY, suffix in "[a-zA-Z]{1,5}") {
        let ini = Ini::parse(&format!("value = {}{}", n, suffix)).unwrap();
        prop_assert_eq!(ini.get_global_value("value", 7i32), 7);
    }
}

// Test that trim removes exactly the surrounding whitespace
proptest! {
    #[test]
    fn test_trim_strips_surrounding(
        leading in "[ \t\r\n]*",
        content in "[a-z]([a-z ]*[a-z])?",
        trailing in "[ \t\r\n]*"
    ) {
        let s = format!("{}{}{}", leading, content, trailing);
        prop_assert_eq!(trim(&s, WHITESPACE), content.as_str());
    }
}

// Test that stripped text never contains a comment marker
proptest! {
    #[test]
    fn test_strip_comments_removes_markers(s in "\\PC*") {
        let stripped = strip_comments(&s);
        prop_assert!(!stripped.contains('#'));
        prop_assert!(!stripped.contains(';'));
        prop_assert!(s.starts_with(stripped));
    }
}

// Test that section names are case-sensitive
proptest! {
    #[test]
    fn test_section_case_sensitivity(name in "[a-z]{1,8}") {
        let ini = Ini::parse(&format!("[{}]\nk = v", name)).unwrap();
        prop_assert!(ini.has_section(&name));
        prop_assert!(!ini.has_section(&name.to_uppercase()));
    }
}
