mod args;

pub use args::Args;
use chunky_shared_kernel::Result;
use clap::Parser;

use crate::config::Config;

/// Parse the process arguments into a validated [`Config`].
///
/// clap exits on its own for `--help`, `--version` and syntax errors.
pub fn load_config() -> Result<Config> {
    Config::try_from(Args::parse())
}
