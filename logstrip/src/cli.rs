use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.logstrip.toml):
  Looked up from the current directory upward.

  [logstrip]
  root = \"src\"                   # Directory to process, relative to this file
  extensions = [\".ts\", \".tsx\"]   # File-name suffixes to rewrite
  exclude_folders = [\"vendor\"]   # Directory names to skip
  respect_gitignore = false      # Honor .gitignore / .ignore files
  atomic_write = false           # Write via temp file + rename
";

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Remove console.log statements from TypeScript sources, in place",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Directory to process. Defaults to the configured root, then `src`.
    pub root: Option<PathBuf>,

    /// Configuration file to use instead of searching for `.logstrip.toml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
