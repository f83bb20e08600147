//! Shell completions command handler

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io::{self, Write};
use tracing::debug;

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_completions(args, &mut handle)?;
    handle.flush()?;
    Ok(())
}

fn write_completions(args: CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    debug!(shell = ?args.shell, bin = %name, "Generating completions");

    generate(args.shell, &mut cmd, name, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut buffer = Vec::new();
        write_completions(CompletionsArgs { shell: Shell::Bash }, &mut buffer).unwrap();

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("apidoc"));
        assert!(script.contains("render"));
        assert!(script.contains("inspect"));
    }
}
