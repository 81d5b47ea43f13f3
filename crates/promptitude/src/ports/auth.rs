//! Auth Session Port
//!
//! The identity provider itself is external; the only capability this
//! component consumes is ending the session.

use async_trait::async_trait;

/// Session surface of the external authentication collaborator.
#[async_trait]
pub trait AuthSession: Send + Sync {
    /// End the current session. Takes no arguments; no result is observed.
    async fn sign_out(&self);
}
