pub mod file_writer;
pub mod generator;
pub mod templates;

pub use file_writer::JavaFileWriter;
pub use generator::{generate, java_type_name};
