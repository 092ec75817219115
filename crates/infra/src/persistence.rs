// crates/infra/src/persistence.rs
mod file_reader;
mod file_writer;

pub use file_reader::{FileReader, STDIN_MARKER};
pub use file_writer::FileWriter;
