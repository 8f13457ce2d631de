//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `token` - String comparison and normalization

pub mod io;
pub mod token;
