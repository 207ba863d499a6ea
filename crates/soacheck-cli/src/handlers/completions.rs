//! Shell completions command handler

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::Result;
use clap::CommandFactory;
use std::io::{self, Write};
use tracing::debug;

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_completions(args.shell, &mut handle)?;
    handle.flush()?;
    Ok(())
}

/// Write the completion script for `shell` under the installed binary name
fn write_completions(shell: Shell, out: &mut dyn Write) -> io::Result<()> {
    let mut cmd = Cli::command();
    debug!(shell = ?shell, bin = env!("CARGO_BIN_NAME"), "Generating completions");
    clap_complete::generate(shell.to_clap_shell(), &mut cmd, env!("CARGO_BIN_NAME"), out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let mut buffer = Vec::new();
        write_completions(Shell::Bash, &mut buffer).unwrap();
        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("soacheck"));
        assert!(script.contains("validate"));
        assert!(script.contains("schemas"));
    }

    #[test]
    fn test_fish_completions_use_binary_name() {
        let mut buffer = Vec::new();
        write_completions(Shell::Fish, &mut buffer).unwrap();
        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("complete -c soacheck"));
    }
}
