//! Config-backed auth session
//!
//! Signing out of the managed API here just means forgetting the stored
//! app key; the identity provider itself is not contacted.

use async_trait::async_trait;
use promptitude::AuthSession;
use tracing::warn;

use crate::config::Config;

pub struct ConfigSession;

#[async_trait]
impl AuthSession for ConfigSession {
    async fn sign_out(&self) {
        let result = Config::load().and_then(|mut config| {
            config.api_key = None;
            config.save()
        });
        if let Err(err) = result {
            warn!(error = %err, "failed to clear stored credentials");
        }
    }
}
