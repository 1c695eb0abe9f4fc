//! Structural deduplication of URL batches.
//!
//! [`Dedupe`] is a lazy, single-pass filter: it pulls URLs from the inner
//! iterator, computes each [`Signature`], and yields only the first URL seen
//! for every signature. Input order is preserved.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::signature::Signature;
use crate::url_model::StructuredUrl;

/// Iterator adapter yielding first occurrences per signature.
///
/// The seen-set lives and dies with the adapter; nothing is shared between
/// runs.
#[derive(Debug)]
pub struct Dedupe<I> {
    inner: I,
    seen: HashSet<Signature>,
}

impl<I> Dedupe<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }

    /// Number of distinct signatures emitted so far.
    pub fn unique_count(&self) -> usize {
        self.seen.len()
    }
}

impl<I> Iterator for Dedupe<I>
where
    I: Iterator<Item = StructuredUrl>,
{
    type Item = StructuredUrl;

    fn next(&mut self) -> Option<Self::Item> {
        for url in self.inner.by_ref() {
            let signature = Signature::of(&url);
            if self.seen.insert(signature) {
                return Some(url);
            }
            tracing::trace!(url = %url, "dropping structural duplicate");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

impl<I> FusedIterator for Dedupe<I> where I: FusedIterator<Item = StructuredUrl> {}

/// Filters `urls` down to one representative per signature.
pub fn dedupe<I>(urls: I) -> Dedupe<I::IntoIter>
where
    I: IntoIterator<Item = StructuredUrl>,
{
    Dedupe::new(urls.into_iter())
}

/// `.dedupe_by_signature()` on any iterator of [`StructuredUrl`].
pub trait DedupeExt: Iterator<Item = StructuredUrl> + Sized {
    fn dedupe_by_signature(self) -> Dedupe<Self> {
        Dedupe::new(self)
    }
}

impl<I> DedupeExt for I where I: Iterator<Item = StructuredUrl> {}
