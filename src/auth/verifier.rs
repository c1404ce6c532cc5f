use super::password::Password;
use async_trait::async_trait;
use std::fmt;

/// The host's own password verification path.
///
/// The two-step authentication flow settles account existence with a provider
/// backend and then turns the actual password check over to the host, which
/// verifies it through whatever mechanism local policy dictates. The answer
/// is a plain yes or no; the verifier owns any detail about why a check
/// failed.
#[async_trait]
pub trait PasswordVerifier: fmt::Debug + Send + Sync {
    /// Returns `true` when `password` is correct for `username`.
    async fn verify(&self, username: &str, password: &Password) -> bool;
}
