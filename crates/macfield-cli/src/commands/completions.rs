use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    pub shell: Shell,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    generate(args.shell, &mut cmd, "macfield", &mut io::stdout());
    Ok(())
}
