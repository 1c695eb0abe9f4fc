//! Core of funurl: URL parsing, escaping, component editing and structural
//! deduplication. Everything here is synchronous and free of stdout I/O; the
//! CLI crate owns argument handling and rendering.

pub mod config;
pub mod error;
pub mod logging;

pub mod codec;
pub mod dedupe;
pub mod input;
pub mod inspect;
pub mod modify;
pub mod signature;
pub mod url_model;

pub use dedupe::{dedupe, Dedupe, DedupeExt};
pub use error::{CodecError, DedupeError, UrlError};
pub use signature::Signature;
pub use url_model::StructuredUrl;
