use super::password::Password;
use super::user::{Gid, Group, GroupMembership, Uid, User};
use async_trait::async_trait;
use derive_more::Display;
use std::fmt;

/// The closed set of operations a provider can register for.
///
/// The [`ProviderChain`](super::ProviderChain) consults
/// [`AuthProvider::provides`] before dispatching: an operation a provider
/// does not list is never routed to it, not even to collect a decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthOp {
    /// Resolve an account name to a [`User`] record.
    UserByName,
    /// Resolve a numeric user id to a [`User`] record.
    UserById,
    /// Resolve a group name to a [`Group`] record.
    GroupByName,
    /// Resolve a numeric group id to a [`Group`] record.
    GroupById,
    /// Resolve a user's effective group set.
    Groups,
    /// Establish that an account exists and have the host check its password.
    Authenticate,
    /// Check a password directly against the provider's own backend.
    Check,
    /// Translate a user id to an account name.
    UidToName,
    /// Translate a group id to a group name.
    GidToName,
    /// Translate an account name to a user id.
    NameToUid,
    /// Translate a group name to a group id.
    NameToGid,
}

impl AuthOp {
    /// All operations, in dispatch-table order.
    pub const ALL: [AuthOp; 11] = [
        AuthOp::UserByName,
        AuthOp::UserById,
        AuthOp::GroupByName,
        AuthOp::GroupById,
        AuthOp::Groups,
        AuthOp::Authenticate,
        AuthOp::Check,
        AuthOp::UidToName,
        AuthOp::GidToName,
        AuthOp::NameToUid,
        AuthOp::NameToGid,
    ];
}

/// A provider's answer to a single operation.
///
/// `Declined` is not an error: it means "no opinion, ask the next provider".
/// Only `Handled` and `Failed` settle a request, and only `Failed` carries a
/// reason the host may relay to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The provider answered the request authoritatively.
    Handled(T),
    /// The provider owns the verdict and rejects the request.
    Failed(DenyReason),
    /// The provider has no opinion on this request.
    Declined,
}

impl<T> Outcome<T> {
    /// Whether this is a decline.
    pub fn is_declined(&self) -> bool {
        matches!(self, Outcome::Declined)
    }

    /// The payload of a handled request, if there is one.
    pub fn handled(self) -> Option<T> {
        match self {
            Outcome::Handled(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Why a provider returned [`Outcome::Failed`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display)]
pub enum DenyReason {
    /// The password does not match the account.
    #[display("bad password")]
    BadPassword,
    /// The provider's backend failed while the provider owned the verdict.
    #[display("backend error")]
    BackendError,
}

/// Payload of a successful credential verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    /// Identifier of the mechanism that verified the credentials, recorded
    /// on the session for audit.
    pub mechanism: &'static str,
    /// The domain controller that accepted the logon, when the backend
    /// reports one.
    pub logon_server: Option<String>,
}

/// A single source of identity and authentication answers.
///
/// Implementations register with a [`ProviderChain`](super::ProviderChain);
/// the chain walks its providers in registration order and the first
/// non-declined [`Outcome`] settles the request. Every operation defaults to
/// a decline, so an implementation only writes the handlers it lists in
/// [`provides`](AuthProvider::provides).
#[async_trait]
pub trait AuthProvider: fmt::Debug + Send + Sync {
    /// Name of the provider, used in host logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The operations this provider wants dispatched to it.
    fn provides(&self) -> &'static [AuthOp];

    /// Resolves an account name to a full user record.
    async fn user_by_name(&self, _name: &str) -> Outcome<User> {
        Outcome::Declined
    }

    /// Resolves a numeric user id to a full user record.
    async fn user_by_id(&self, _uid: Uid) -> Outcome<User> {
        Outcome::Declined
    }

    /// Resolves a group name to a full group record.
    async fn group_by_name(&self, _name: &str) -> Outcome<Group> {
        Outcome::Declined
    }

    /// Resolves a numeric group id to a full group record.
    async fn group_by_id(&self, _gid: Gid) -> Outcome<Group> {
        Outcome::Declined
    }

    /// Resolves the ordered effective group set of an account.
    async fn groups(&self, _name: &str) -> Outcome<Vec<GroupMembership>> {
        Outcome::Declined
    }

    /// Establishes that the account exists here, then leaves the password
    /// check to the host's own verification path.
    async fn authenticate(&self, _name: &str, _password: &Password) -> Outcome<AuthGrant> {
        Outcome::Declined
    }

    /// Checks the password directly against this provider's backend.
    async fn check(&self, _name: &str, _password: &Password) -> Outcome<AuthGrant> {
        Outcome::Declined
    }

    /// Translates a user id to an account name.
    async fn uid_to_name(&self, _uid: Uid) -> Outcome<String> {
        Outcome::Declined
    }

    /// Translates a group id to a group name.
    async fn gid_to_name(&self, _gid: Gid) -> Outcome<String> {
        Outcome::Declined
    }

    /// Translates an account name to a user id.
    async fn name_to_uid(&self, _name: &str) -> Outcome<Uid> {
        Outcome::Declined
    }

    /// Translates a group name to a group id.
    async fn name_to_gid(&self, _name: &str) -> Outcome<Gid> {
        Outcome::Declined
    }
}
