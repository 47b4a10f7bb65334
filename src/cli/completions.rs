//! Shell completion generation

use anyhow::Result;
use clap::{Args, Command};
use clap_complete::{generate, Shell};

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs, cmd: &mut Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(args.shell, cmd, name, &mut std::io::stdout());
    Ok(())
}
