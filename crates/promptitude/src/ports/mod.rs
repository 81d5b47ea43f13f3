//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the controller interacts with
//! external collaborators (the remote store, the identity provider).
//!
//! Implementations live in the `services` layer or in the front-end.

mod auth;
mod store;

pub use auth::*;
pub use store::*;
