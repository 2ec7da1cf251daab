//! # CLI Completions Command

use clap::Command;
use clap_complete::Shell;
use error::Result;

/// Writes shell completions for `cmd` to stdout.
pub fn completions(shell: Shell, cmd: &mut Command) -> Result<()> {
    let name = cmd.get_name().to_owned();
    clap_complete::generate(shell, cmd, name, &mut std::io::stdout());
    Ok(())
}
