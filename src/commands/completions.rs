use clap::CommandFactory;
use clap_complete::generate;
use eyre::Result;
use std::io;

use crate::cli::Cli;

pub fn run(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    log::debug!("Generating {} completions for {}", shell, bin_name);
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
