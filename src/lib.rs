pub mod cli;
pub mod convert;
pub mod document;
pub mod emit;
pub mod error;

// Convenience re-exports (optional, but nice)
pub use convert::{convert, Conversion};
pub use document::{ConfigDocument, Section, VariableEntry, SOURCE_FILE_NAME};
pub use emit::{env_file_name, Emitter};
pub use error::{Error, WriteFailure};
