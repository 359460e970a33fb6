//! Line-stripper: removes call statements from source text.
//!
//! Matching is purely textual. A match is the callee literal, `(`, the
//! shortest run of characters up to the first `)`, and an optional `;`.
//! Parenthesis depth, string literals and comments are not tracked, so
//! `console.log(f(1));` leaves `);` behind and a `console.log()` inside a
//! string is removed like any other.
//!
//! # Usage
//!
//! ```
//! use logstrip::strip::{strip, Pattern};
//!
//! let out = strip("let a = 1;\nconsole.log(a);\n", &Pattern::console_log());
//! assert_eq!(out.content, "let a = 1;\n\n");
//! assert_eq!(out.removed, 1);
//! ```

use crate::constants::{call_statement_source, get_console_log_re};
use regex::Regex;
use std::borrow::Cow;

/// Fixed matcher for one call statement.
#[derive(Debug, Clone)]
pub struct Pattern {
    re: Cow<'static, Regex>,
}

impl Pattern {
    /// The `console.log(...);` pattern the tool removes.
    #[must_use]
    pub fn console_log() -> Self {
        Self {
            re: Cow::Borrowed(get_console_log_re()),
        }
    }

    /// Same statement shape for another callee literal, e.g. `debug` or `logger.trace`.
    ///
    /// The callee is escaped, so `.` matches only a dot.
    ///
    /// # Errors
    ///
    /// Returns an error if the compiled regex exceeds the engine's size limit.
    pub fn for_callee(callee: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            re: Cow::Owned(Regex::new(&call_statement_source(callee))?),
        })
    }

    /// Regex source of this pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::console_log()
    }
}

/// Result of stripping one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// Text with every match deleted.
    pub content: String,
    /// Number of matches deleted.
    pub removed: usize,
}

impl Stripped {
    /// True when no match was found and `content` equals the input.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.removed == 0
    }
}

/// Deletes every non-overlapping match of `pattern`, scanning left to right once.
///
/// Text between matches is copied verbatim, so indentation and newlines that
/// surrounded a statement remain.
#[must_use]
pub fn strip(content: &str, pattern: &Pattern) -> Stripped {
    let mut out = String::with_capacity(content.len());
    let mut removed = 0;
    let mut last = 0;

    for m in pattern.re.find_iter(content) {
        out.push_str(&content[last..m.start()]);
        last = m.end();
        removed += 1;
    }
    out.push_str(&content[last..]);

    Stripped {
        content: out,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callee(name: &str) -> Pattern {
        Pattern::for_callee(name).unwrap()
    }

    #[test]
    fn test_removes_simple_statement() {
        let out = strip("console.log('hi');", &Pattern::console_log());
        assert_eq!(out.content, "");
        assert_eq!(out.removed, 1);
    }

    #[test]
    fn test_semicolon_is_optional() {
        let out = strip("console.log(x)\nfoo();", &Pattern::console_log());
        assert_eq!(out.content, "\nfoo();");
    }

    #[test]
    fn test_nested_call_truncates_at_first_paren() {
        let out = strip("foo(bar(1,2));", &callee("foo"));
        assert_eq!(out.content, ");");
        assert_eq!(out.removed, 1);

        let out = strip("console.log(JSON.stringify(x));", &Pattern::console_log());
        assert_eq!(out.content, ");");
    }

    #[test]
    fn test_multiple_matches_on_one_line() {
        let out = strip("a(); a();", &callee("a"));
        assert_eq!(out.content, " ");
        assert_eq!(out.removed, 2);
    }

    #[test]
    fn test_whitespace_and_newlines_preserved() {
        let out = strip("x();\n\n  x();\n", &callee("x"));
        assert_eq!(out.content, "\n\n  \n");
    }

    #[test]
    fn test_match_does_not_cross_lines() {
        let source = "console.log(\n  a\n);\n";
        let out = strip(source, &Pattern::console_log());
        assert!(out.is_unchanged());
        assert_eq!(out.content, source);
    }

    #[test]
    fn test_callee_is_escaped() {
        // `.` must not act as a wildcard
        let out = strip("consoleXlog(1);", &Pattern::console_log());
        assert!(out.is_unchanged());

        let out = strip("logger.trace(1);", &callee("logger.trace"));
        assert_eq!(out.content, "");
    }
}
