//! Flag scanning for the generator command line.
//!
//! Generators in a pipeline receive whatever parameters the runner forwards, so
//! this is a permissive scanner rather than a declared-option parser: every
//! `--name` token takes the next token as its value, unknown names are kept,
//! and bare tokens that are not consumed as values are skipped.
//!
//! Values stay `OsString` so a path that is not valid UTF-8 reaches the
//! filesystem unchanged.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

const FLAG_MARKER: &str = "--";

/// Flag name (without `--`) to its value. A flag given as the last token has no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    flags: BTreeMap<String, Option<OsString>>,
}

impl ArgMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a flag, replacing any earlier occurrence.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<OsString>) {
        self.flags.insert(name.into(), value);
    }

    /// The flag's value, or `None` when the flag is missing or was given without one.
    pub fn value(&self, name: &str) -> Option<&OsStr> {
        self.flags.get(name).and_then(|v| v.as_deref())
    }

    #[cfg(test)]
    fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Scans `tokens` (program name excluded) into an [`ArgMap`].
///
/// The token after a flag is always consumed as its value, even when it looks
/// like another flag: `--output --foo` sets `output` to `"--foo"`.
pub fn parse_args<I, S>(tokens: I) -> ArgMap
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut map = ArgMap::new();
    let mut tokens = tokens.into_iter().map(Into::into);

    while let Some(token) = tokens.next() {
        let text = token.to_string_lossy();
        if let Some(name) = text.strip_prefix(FLAG_MARKER) {
            let value = tokens.next();
            tracing::trace!(flag = name, value = ?value, "parsed flag");
            map.insert(name, value);
        } else {
            tracing::trace!(token = %text, "ignoring bare token");
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(s: &str) -> Option<&OsStr> {
        Some(OsStr::new(s))
    }

    #[test]
    fn test_empty_input() {
        let map = parse_args(Vec::<String>::new());
        assert!(map.is_empty());
    }

    #[test]
    fn test_flag_with_value() {
        let map = parse_args(["--output", "out.png"]);
        assert_eq!(map.value("output"), os("out.png"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_trailing_flag_has_no_value() {
        let map = parse_args(["--output"]);
        assert!(map.contains("output"));
        assert_eq!(map.value("output"), None);
    }

    #[test]
    fn test_value_that_looks_like_flag_is_consumed() {
        let map = parse_args(["--output", "--foo", "bar"]);
        assert_eq!(map.value("output"), os("--foo"));
        assert!(!map.contains("foo"));
    }

    #[test]
    fn test_bare_tokens_are_ignored() {
        let map = parse_args(["stray", "--turns", "10", "loose", "--radius", "400"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.value("turns"), os("10"));
        assert_eq!(map.value("radius"), os("400"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let map = parse_args(["--output", "a.png", "--output", "b.png"]);
        assert_eq!(map.value("output"), os("b.png"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_repeat_without_value_clears_earlier_value() {
        let map = parse_args(["--output", "a.png", "--output"]);
        assert_eq!(map.value("output"), None);
    }

    #[test]
    fn test_bare_marker_is_empty_name() {
        let map = parse_args(["--", "x"]);
        assert_eq!(map.value(""), os("x"));
    }

    #[test]
    fn test_single_dash_is_not_a_flag() {
        let map = parse_args(["-o", "out.png"]);
        assert!(map.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"sky\xff.png");
        let map = parse_args([OsStr::new("--output"), raw]);
        assert_eq!(map.value("output"), Some(raw));
    }
}
