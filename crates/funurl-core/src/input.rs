//! Batch assembly: turns command-line arguments or stdin lines into the
//! candidate strings and parsed URLs the commands consume.

use std::collections::HashSet;
use std::io::BufRead;

use crate::error::DedupeError;
use crate::url_model::StructuredUrl;

/// Collects non-blank, trimmed candidates.
///
/// Arguments win when any are given; otherwise every line of `reader` is read
/// until EOF.
pub fn collect_candidates<R: BufRead>(
    args: &[String],
    reader: R,
) -> Result<Vec<String>, DedupeError> {
    if !args.is_empty() {
        return Ok(args
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect());
    }

    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            out.push(line.to_string());
        }
    }
    Ok(out)
}

/// Parses every candidate and drops exact repeats of the same rendered URL.
///
/// The first malformed candidate aborts the batch. An empty result is
/// reported as [`DedupeError::NoInput`] so callers never run the engine on
/// nothing.
pub fn parse_batch<I, S>(candidates: I) -> Result<Vec<StructuredUrl>, DedupeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.trim().is_empty() {
            continue;
        }
        let url = StructuredUrl::parse(candidate)?;
        if seen.insert(url.to_string()) {
            urls.push(url);
        }
    }
    if urls.is_empty() {
        return Err(DedupeError::NoInput);
    }
    tracing::debug!(count = urls.len(), "assembled url batch");
    Ok(urls)
}

/// Picks the single input for one-shot commands: `--url` flag first, then the
/// positional argument, then the first line of `reader`.
pub fn first_candidate<R: BufRead>(
    flag: Option<&str>,
    arg: Option<&str>,
    mut reader: R,
) -> Result<String, DedupeError> {
    if let Some(value) = flag.filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }
    if let Some(value) = arg {
        return Ok(value.to_string());
    }
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(DedupeError::NoInput);
    }
    Ok(line.trim().to_string())
}
