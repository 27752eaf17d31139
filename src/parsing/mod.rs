//! Turning raw export text into entries.
//!
//! - [`line`] splits input and decides header vs. continuation per line
//! - [`entry`] folds classified lines into multi-line [`Entry`] values

pub mod entry;
pub mod line;

pub use entry::{Entry, EntryKind, LineSpan, reconstruct, reconstruct_lines};
pub use line::{LineClass, RawLine, classify, split_lines};
