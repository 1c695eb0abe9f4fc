//! `funurl parse <url>` – show URL components as a table.

use anyhow::Result;
use funurl_core::config::FunUrlConfig;
use funurl_core::input::first_candidate;
use funurl_core::inspect::{inspect, Component, ComponentSelection};
use funurl_core::StructuredUrl;
use std::io::{BufRead, Write};

/// Component switches from the command line; none set means all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseFlags {
    pub protocol: bool,
    pub subdomain: bool,
    pub tld: bool,
    pub hostname: bool,
    pub path: bool,
    pub query: bool,
    pub fragments: bool,
}

impl ParseFlags {
    fn selection(&self) -> ComponentSelection {
        ComponentSelection::default()
            .with(Component::Protocol, self.protocol)
            .with(Component::Subdomain, self.subdomain)
            .with(Component::Tld, self.tld)
            .with(Component::Hostname, self.hostname)
            .with(Component::Path, self.path)
            .with(Component::Query, self.query)
            .with(Component::Fragment, self.fragments)
    }
}

pub fn run_parse<R: BufRead, W: Write>(
    flag: Option<&str>,
    arg: Option<&str>,
    flags: &ParseFlags,
    cfg: &FunUrlConfig,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let input = first_candidate(flag, arg, stdin)?;
    let url = StructuredUrl::parse(&input)?;
    let report = inspect(&url, &flags.selection(), &cfg.missing_value);

    writeln!(out, "{:<14} {}", "COMPONENT", "VALUE")?;
    for (label, value) in &report.components {
        writeln!(out, "{:<14} {}", label, value)?;
    }

    if !report.query.is_empty() {
        writeln!(out)?;
        writeln!(out, "{:<14} {}", "QUERY", "VALUE")?;
        for (name, value) in &report.query {
            writeln!(out, "{:<14} {}", name, value)?;
        }
    }
    Ok(())
}
