use super::password::Password;
use super::provider::{AuthGrant, AuthOp, AuthProvider, Outcome};
use super::user::{Gid, Group, GroupMembership, Uid, User};
use std::sync::Arc;

// Walks the registered providers in order and settles on the first verdict
// that is not a decline. Providers that did not register the operation are
// passed over entirely.
macro_rules! dispatch {
    ($self:ident, $op:expr, $call:ident($($arg:expr),*)) => {{
        for provider in &$self.providers {
            if !provider.provides().contains(&$op) {
                continue;
            }
            match provider.$call($($arg),*).await {
                Outcome::Declined => continue,
                verdict => return verdict,
            }
        }
        Outcome::Declined
    }};
}

/// An ordered list of [`AuthProvider`]s consulted until one has an opinion.
///
/// Registration order is priority order. A decline is the only verdict that
/// moves a request on to the next provider; a handled answer or a rejection
/// settles it on the spot. A chain with no providers declines everything.
#[derive(Debug, Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn AuthProvider>>,
}

impl ProviderChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        ProviderChain::default()
    }

    /// Appends a provider at the lowest-priority position.
    pub fn register(&mut self, provider: Arc<dyn AuthProvider>) {
        self.providers.push(provider);
    }

    /// Names of the registered providers, in consultation order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }

    /// Resolves an account name to a user record.
    pub async fn user_by_name(&self, name: &str) -> Outcome<User> {
        dispatch!(self, AuthOp::UserByName, user_by_name(name))
    }

    /// Resolves a numeric user id to a user record.
    pub async fn user_by_id(&self, uid: Uid) -> Outcome<User> {
        dispatch!(self, AuthOp::UserById, user_by_id(uid))
    }

    /// Resolves a group name to a group record.
    pub async fn group_by_name(&self, name: &str) -> Outcome<Group> {
        dispatch!(self, AuthOp::GroupByName, group_by_name(name))
    }

    /// Resolves a numeric group id to a group record.
    pub async fn group_by_id(&self, gid: Gid) -> Outcome<Group> {
        dispatch!(self, AuthOp::GroupById, group_by_id(gid))
    }

    /// Resolves the ordered effective group set of an account.
    pub async fn groups(&self, name: &str) -> Outcome<Vec<GroupMembership>> {
        dispatch!(self, AuthOp::Groups, groups(name))
    }

    /// Authenticates through provider-side account resolution plus the
    /// host's password verification path.
    pub async fn authenticate(&self, name: &str, password: &Password) -> Outcome<AuthGrant> {
        dispatch!(self, AuthOp::Authenticate, authenticate(name, password))
    }

    /// Checks a password directly against a provider backend.
    pub async fn check(&self, name: &str, password: &Password) -> Outcome<AuthGrant> {
        dispatch!(self, AuthOp::Check, check(name, password))
    }

    /// Translates a user id to an account name.
    pub async fn uid_to_name(&self, uid: Uid) -> Outcome<String> {
        dispatch!(self, AuthOp::UidToName, uid_to_name(uid))
    }

    /// Translates a group id to a group name.
    pub async fn gid_to_name(&self, gid: Gid) -> Outcome<String> {
        dispatch!(self, AuthOp::GidToName, gid_to_name(gid))
    }

    /// Translates an account name to a user id.
    pub async fn name_to_uid(&self, name: &str) -> Outcome<Uid> {
        dispatch!(self, AuthOp::NameToUid, name_to_uid(name))
    }

    /// Translates a group name to a group id.
    pub async fn name_to_gid(&self, name: &str) -> Outcome<Gid> {
        dispatch!(self, AuthOp::NameToGid, name_to_gid(name))
    }
}
