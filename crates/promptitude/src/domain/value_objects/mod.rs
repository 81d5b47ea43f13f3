//! Value Objects
//!
//! Immutable value types shared across the domain.

mod draft;
mod field;
mod prompt_id;

pub use draft::*;
pub use field::*;
pub use prompt_id::*;
