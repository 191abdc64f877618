pub mod snippet;

pub use snippet::{file_name_of, Snippet};
