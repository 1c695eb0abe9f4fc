//! `funurl completions <shell>` – print a completion script.

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::Cli;

pub fn run_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "funurl", out);
}
