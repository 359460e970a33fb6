//! Library-crate binary for `logstrip`.
//!
//! Delegates to the shared `entry_point::run_with_args()` so every binary behaves the same.

use anyhow::Result;

fn main() -> Result<()> {
    let code = logstrip::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
