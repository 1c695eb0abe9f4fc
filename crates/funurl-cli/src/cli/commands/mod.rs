//! CLI command handlers. Each command is in its own file.
//!
//! Handlers take their input reader and output writer as parameters so tests
//! can drive them without a terminal.

mod codec;
mod completions;
mod dedupe;
mod modify;
mod parse;

pub use codec::{run_decode, run_encode};
pub use completions::run_completions;
pub use dedupe::run_dedupe;
pub use modify::run_modify;
pub use parse::{run_parse, ParseFlags};
