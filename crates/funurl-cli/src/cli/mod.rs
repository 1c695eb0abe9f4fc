//! CLI for funurl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use funurl_core::config::{self, FunUrlConfig};
use funurl_core::logging;
use std::io;
use std::path::PathBuf;

use commands::{run_completions, run_decode, run_dedupe, run_encode, run_modify, run_parse};

/// Top-level CLI for funurl.
#[derive(Debug, Parser)]
#[command(name = "funurl", version)]
#[command(about = "funurl: a swiss army knife for URLs")]
#[command(
    long_about = "funurl takes URLs from arguments, flags or stdin and parses, modifies, \
                  encodes, decodes or deduplicates them."
)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/funurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract protocol, domain, path, query parameters and fragments.
    Parse {
        /// URL to parse (read from stdin when omitted).
        url: Option<String>,
        /// URL to parse; takes precedence over the positional argument.
        #[arg(short = 'u', long = "url", value_name = "URL")]
        url_flag: Option<String>,
        /// Show scheme / protocol.
        #[arg(short = 'c', long)]
        protocol: bool,
        /// Show subdomain.
        #[arg(short = 's', long)]
        subdomain: bool,
        /// Show top level domain.
        #[arg(short = 't', long)]
        tld: bool,
        /// Show hostname.
        #[arg(short = 'n', long)]
        hostname: bool,
        /// Show path.
        #[arg(short = 'p', long)]
        path: bool,
        /// Show query parameters.
        #[arg(short = 'q', long)]
        query: bool,
        /// Show fragment.
        #[arg(short = 'f', long)]
        fragments: bool,
    },

    /// Change the scheme, path, query string or fragment of a URL.
    Modify {
        /// URL to modify (read from stdin when omitted).
        url: Option<String>,
        /// URL to modify; takes precedence over the positional argument.
        #[arg(short = 'u', long = "url", value_name = "URL")]
        url_flag: Option<String>,
        /// New scheme / protocol.
        #[arg(short = 'c', long, value_name = "SCHEME")]
        protocol: Option<String>,
        /// New path.
        #[arg(short = 'p', long)]
        path: Option<String>,
        /// New raw query string.
        #[arg(short = 'q', long)]
        query: Option<String>,
        /// New fragment.
        #[arg(short = 'f', long)]
        fragments: Option<String>,
    },

    /// URL-encode a string.
    Encode {
        /// Text to encode (read from stdin when omitted).
        input: Option<String>,
        /// Text to encode; takes precedence over the positional argument.
        #[arg(short = 'u', long = "url", value_name = "TEXT")]
        url_flag: Option<String>,
        /// Escape as a query component (spaces become '+').
        #[arg(short = 'c', long)]
        component: bool,
        /// Apply query-component escaping twice.
        #[arg(short = 'd', long)]
        double: bool,
    },

    /// URL-decode a string.
    Decode {
        /// Text to decode (read from stdin when omitted).
        input: Option<String>,
        /// Text to decode; takes precedence over the positional argument.
        #[arg(short = 'u', long = "url", value_name = "TEXT")]
        url_flag: Option<String>,
        /// Unescape as a query component ('+' becomes a space).
        #[arg(short = 'c', long)]
        component: bool,
        /// Apply query-component unescaping twice.
        #[arg(short = 'd', long)]
        double: bool,
    },

    /// Drop URLs that share scheme, host, path shape and query parameter names.
    Dedupe {
        /// URLs to deduplicate (one per line on stdin when omitted).
        urls: Vec<String>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        };
        init_logging(&cfg);
        tracing::debug!("loaded config: {:?}", cfg);

        let stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();

        match self.command {
            CliCommand::Parse {
                url,
                url_flag,
                protocol,
                subdomain,
                tld,
                hostname,
                path,
                query,
                fragments,
            } => {
                let flags = commands::ParseFlags {
                    protocol,
                    subdomain,
                    tld,
                    hostname,
                    path,
                    query,
                    fragments,
                };
                run_parse(
                    url_flag.as_deref(),
                    url.as_deref(),
                    &flags,
                    &cfg,
                    stdin,
                    &mut stdout,
                )?
            }
            CliCommand::Modify {
                url,
                url_flag,
                protocol,
                path,
                query,
                fragments,
            } => {
                let change = funurl_core::modify::Modification {
                    scheme: protocol,
                    path,
                    query,
                    fragment: fragments,
                };
                run_modify(url_flag.as_deref(), url.as_deref(), &change, stdin, &mut stdout)?
            }
            CliCommand::Encode {
                input,
                url_flag,
                component,
                double,
            } => run_encode(
                url_flag.as_deref(),
                input.as_deref(),
                component,
                double,
                stdin,
                &mut stdout,
            )?,
            CliCommand::Decode {
                input,
                url_flag,
                component,
                double,
            } => run_decode(
                url_flag.as_deref(),
                input.as_deref(),
                component,
                double,
                stdin,
                &mut stdout,
            )?,
            CliCommand::Dedupe { urls } => run_dedupe(&urls, stdin, &mut stdout)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut stdout),
        }

        Ok(())
    }
}

/// File logging under the XDG state dir, or stderr when that is unavailable.
fn init_logging(cfg: &FunUrlConfig) {
    let filter = cfg.log_filter.as_deref();
    if let Err(err) = logging::init_logging(filter) {
        logging::init_logging_stderr(filter);
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }
}

#[cfg(test)]
mod tests;
