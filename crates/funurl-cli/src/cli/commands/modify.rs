//! `funurl modify <url>` – replace URL components.

use anyhow::Result;
use clap::CommandFactory;
use funurl_core::input::first_candidate;
use funurl_core::modify::{self, Modification};
use funurl_core::StructuredUrl;
use std::io::{BufRead, Write};

use crate::cli::Cli;

/// Prints the command help instead when `change` is empty.
pub fn run_modify<R: BufRead, W: Write>(
    flag: Option<&str>,
    arg: Option<&str>,
    change: &Modification,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    if change.is_empty() {
        let mut cmd = Cli::command();
        if let Some(sub) = cmd.find_subcommand_mut("modify") {
            sub.write_help(out)?;
        }
        return Ok(());
    }

    let input = first_candidate(flag, arg, stdin)?;
    let url = StructuredUrl::parse(&input)?;
    let modified = modify::apply(&url, change)?;
    writeln!(out, "{modified}")?;
    Ok(())
}
