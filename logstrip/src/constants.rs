use regex::Regex;
use std::sync::OnceLock;

/// Name of the project configuration file.
pub const CONFIG_FILENAME: &str = ".logstrip.toml";

/// Root directory processed when neither the command line nor the config names one.
pub const DEFAULT_ROOT: &str = "src";

/// File-name suffixes accepted by the walker: TypeScript and its JSX flavor.
pub const DEFAULT_SUFFIXES: &[&str] = &[".ts", ".tsx"];

/// Callee removed by the tool.
pub const CONSOLE_LOG: &str = "console.log";

/// Non-greedy matcher for a `console.log(...)` statement with an optional `;`.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_console_log_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"console\.log\(.*?\);?").expect("Invalid console.log regex"))
}

/// Builds the statement regex source for an arbitrary callee literal.
#[must_use]
pub fn call_statement_source(callee: &str) -> String {
    format!(r"{}\(.*?\);?", regex::escape(callee))
}
