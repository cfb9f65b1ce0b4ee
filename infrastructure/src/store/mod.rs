//! Tool definition file storage

mod json_file;

pub use json_file::{JsonFileToolStore, write_indented};
