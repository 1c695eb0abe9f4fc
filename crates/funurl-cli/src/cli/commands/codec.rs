//! `funurl encode` / `funurl decode` – percent-escaping.

use anyhow::{Context, Result};
use funurl_core::codec::{self, DecodeMode, EncodeMode};
use funurl_core::input::first_candidate;
use std::io::{BufRead, Write};

pub fn run_encode<R: BufRead, W: Write>(
    flag: Option<&str>,
    arg: Option<&str>,
    component: bool,
    double: bool,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let input = first_candidate(flag, arg, stdin)?;
    let encoded = codec::encode(&input, EncodeMode::from_flags(component, double));
    writeln!(out, "{encoded}")?;
    Ok(())
}

pub fn run_decode<R: BufRead, W: Write>(
    flag: Option<&str>,
    arg: Option<&str>,
    component: bool,
    double: bool,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let input = first_candidate(flag, arg, stdin)?;
    let mode = DecodeMode::from_flags(component, double);
    let decoded = codec::decode(&input, mode).with_context(|| format!("decode ({mode:?})"))?;
    writeln!(out, "{decoded}")?;
    Ok(())
}
