//! `funurl dedupe [urls...]` – keep one URL per structural signature.

use anyhow::{Context, Result};
use funurl_core::input::{collect_candidates, parse_batch};
use funurl_core::DedupeExt;
use std::io::{BufRead, Write};

pub fn run_dedupe<R: BufRead, W: Write>(urls: &[String], stdin: R, out: &mut W) -> Result<()> {
    let candidates = collect_candidates(urls, stdin)?;
    let batch = parse_batch(candidates)?;
    let total = batch.len();

    let mut unique = batch.into_iter().dedupe_by_signature();
    for url in unique.by_ref() {
        writeln!(out, "{url}").context("write output")?;
    }
    tracing::info!(total, unique = unique.unique_count(), "dedupe finished");
    Ok(())
}
