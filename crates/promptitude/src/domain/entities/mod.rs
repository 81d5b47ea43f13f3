//! Domain Entities

mod prompt;

pub use prompt::*;
