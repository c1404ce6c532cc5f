//! Contains the [`AuthProvider`] trait and the [`ProviderChain`] that are used
//! to extend an FTP(S) server's account lookup and authentication capabilities.
//!
//! Providers answer a closed set of operations ([`AuthOp`]): account and group
//! lookups, group set resolution, credential checks and id/name translations.
//! A provider registers the operations it implements through
//! [`AuthProvider::provides`] and answers each request with an [`Outcome`]:
//! handle it, reject it, or decline so the next provider in the chain gets a
//! shot. For example, a provider that only resolves account names:
//!
//! ```
//! use async_trait::async_trait;
//! use unftp_auth_winbind::auth::{AuthOp, AuthProvider, Outcome, User};
//!
//! #[derive(Debug)]
//! struct StaticDirectory;
//!
//! #[async_trait]
//! impl AuthProvider for StaticDirectory {
//!     fn provides(&self) -> &'static [AuthOp] {
//!         &[AuthOp::UserByName]
//!     }
//!
//!     async fn user_by_name(&self, _name: &str) -> Outcome<User> {
//!         Outcome::Declined
//!     }
//! }
//! ```
//!
//! All other operations keep their default implementation and decline, so the
//! chain never routes them here in the first place.

mod chain;
pub use chain::ProviderChain;

mod password;
pub use password::Password;

mod provider;
pub use provider::{AuthGrant, AuthOp, AuthProvider, DenyReason, Outcome};

mod user;
pub use user::{Gid, Group, GroupMembership, Uid, User};

mod verifier;
pub use verifier::PasswordVerifier;
