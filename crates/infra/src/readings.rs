// crates/infra/src/readings.rs
//! JSON-lines reading source.
//!
//! Each line is one object whose members are `timestamp: value` pairs:
//!
//! ```text
//! {"2014-02-13T12:00:00": "21.5"}
//! {"2014-02-13T18:00:00": 19, "2014-02-14T00:00:00": ""}
//! ```
mod parser;
mod source;

pub use parser::{LineError, parse_line};
pub use source::{JsonLinesSource, read_lines};
