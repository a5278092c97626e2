//! Input records for the inventory GraphQL API
//!
//! One module per record, re-exported here for convenient imports.

mod file_input;
mod file_type;

pub use file_input::{FileInput, FileInputBuilder};
pub use file_type::FileType;
