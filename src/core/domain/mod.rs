//! Domain types.

mod entry;
mod env_file;

pub use entry::{Entry, EntryValue};
pub use env_file::EnvFile;
