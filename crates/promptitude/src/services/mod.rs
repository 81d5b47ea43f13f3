//! Service Adapters
//!
//! Infrastructure implementations of the ports.

mod graphql;

pub use graphql::*;
