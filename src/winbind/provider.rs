use super::client::{ClientErrorKind, ErrorClass, WinbindClient};
use super::config::Config;
use crate::auth::{AuthGrant, AuthOp, AuthProvider, DenyReason, Gid, Group, GroupMembership, Outcome, Password, PasswordVerifier, Uid, User};
use async_trait::async_trait;
use slog::Logger;
use std::fmt;
use std::sync::Arc;

/// Authentication mechanism identifier carried in an [`AuthGrant`] when
/// winbind verified the credentials. Hosts typically record it on the
/// session for audit.
pub const MECHANISM: &str = "winbind";

/// Identity and authentication provider backed by a winbindd-compatible
/// domain identity service.
///
/// The provider registers every operation in [`AuthOp::ALL`] and keeps each
/// handler to the same small shape: gate on [`Config::engine`], make one or
/// more client calls, copy the reply into host-owned records and translate
/// failures through [`ErrorClass`]. Unknown subjects and backend outages
/// both end in a decline for lookups; the difference is that an outage gets
/// reported at error severity first, so a dead daemon never reads as "user
/// does not exist" in the logs.
pub struct WinbindProvider {
    pub(super) client: Arc<dyn WinbindClient>,
    verifier: Arc<dyn PasswordVerifier>,
    config: Config,
    pub(super) logger: Logger,
}

impl WinbindProvider {
    /// Creates a provider that talks to the daemon through `client` and
    /// hands two-step password checks to `verifier`.
    pub fn new(client: Arc<dyn WinbindClient>, verifier: Arc<dyn PasswordVerifier>, config: Config, logger: Logger) -> WinbindProvider {
        WinbindProvider {
            client,
            verifier,
            config,
            logger,
        }
    }

    /// Asks the daemon to identify itself and logs the answer.
    ///
    /// Runs once per worker at startup. A failure here is an error-severity
    /// log line and nothing more; whether the daemon is genuinely down gets
    /// settled per request.
    pub async fn probe(&self) {
        match self.client.interface_details().await {
            Ok(details) => {
                slog::debug!(
                    self.logger,
                    "winbindd version {}, NetBIOS name {}, NetBIOS domain {}, DNS domain {}",
                    details.version,
                    details.netbios_name,
                    details.netbios_domain,
                    details.dns_domain
                );
            }
            Err(err) => {
                slog::error!(self.logger, "unable to contact winbindd: {}", err);
            }
        }
    }
}

impl fmt::Debug for WinbindProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WinbindProvider")
            .field("client", &self.client)
            .field("verifier", &self.verifier)
            .field("engine", &self.config.engine)
            .finish()
    }
}

#[async_trait]
impl AuthProvider for WinbindProvider {
    fn name(&self) -> &str {
        "winbind"
    }

    fn provides(&self) -> &'static [AuthOp] {
        &AuthOp::ALL
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn user_by_name(&self, name: &str) -> Outcome<User> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.user_by_name(name).await {
            Ok(entry) => Outcome::Handled(User::from(&entry)),
            Err(err) => {
                if err.class() != ErrorClass::NotFound {
                    slog::error!(self.logger, "unable to look up user {}: {}", name, err);
                }
                Outcome::Declined
            }
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn user_by_id(&self, uid: Uid) -> Outcome<User> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.user_by_id(uid).await {
            Ok(entry) => Outcome::Handled(User::from(&entry)),
            Err(err) => {
                if err.class() != ErrorClass::NotFound {
                    slog::error!(self.logger, "unable to look up UID {}: {}", uid, err);
                }
                Outcome::Declined
            }
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn group_by_name(&self, name: &str) -> Outcome<Group> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.group_by_name(name).await {
            Ok(entry) => Outcome::Handled(Group::from(&entry)),
            Err(err) => {
                if err.class() != ErrorClass::NotFound {
                    slog::error!(self.logger, "unable to look up group {}: {}", name, err);
                }
                Outcome::Declined
            }
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn group_by_id(&self, gid: Gid) -> Outcome<Group> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.group_by_id(gid).await {
            Ok(entry) => Outcome::Handled(Group::from(&entry)),
            Err(err) => {
                if err.class() != ErrorClass::NotFound {
                    slog::error!(self.logger, "unable to look up group with GID {}: {}", gid, err);
                }
                Outcome::Declined
            }
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn groups(&self, name: &str) -> Outcome<Vec<GroupMembership>> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        self.effective_groups(name).await
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn authenticate(&self, name: &str, password: &Password) -> Outcome<AuthGrant> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        if let Err(err) = self.client.user_by_name(name).await {
            if err.class() != ErrorClass::NotFound {
                slog::error!(self.logger, "unable to look up user {}: {}", name, err);
            }
            return Outcome::Declined;
        }
        if self.verifier.verify(name, password).await {
            Outcome::Handled(AuthGrant {
                mechanism: MECHANISM,
                logon_server: None,
            })
        } else {
            Outcome::Failed(DenyReason::BadPassword)
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn check(&self, name: &str, password: &Password) -> Outcome<AuthGrant> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.authenticate(name, password).await {
            Ok(info) => {
                slog::debug!(self.logger, "successful authentication for {} to domain controller {}", name, info.logon_server);
                Outcome::Handled(AuthGrant {
                    mechanism: MECHANISM,
                    logon_server: Some(info.logon_server),
                })
            }
            Err(err) if err.class() == ErrorClass::AuthRejected => {
                match err.rejection() {
                    Some(rejection) => {
                        slog::debug!(self.logger, "authentication for {} failed: {}", name, rejection);
                    }
                    None => {
                        slog::debug!(self.logger, "authentication for {} failed: {}", name, err);
                    }
                }
                Outcome::Failed(DenyReason::BadPassword)
            }
            Err(err) => {
                slog::error!(self.logger, "authentication call failed for user {}: {}", name, err);
                Outcome::Failed(DenyReason::BackendError)
            }
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn uid_to_name(&self, uid: Uid) -> Outcome<String> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.user_by_id(uid).await {
            Ok(entry) => Outcome::Handled(entry.name),
            Err(err) => {
                // Ids outside the domain ranges come back as domain-not-found;
                // local system accounts are routine here, not an outage.
                if err.class() != ErrorClass::NotFound && err.kind() != ClientErrorKind::DomainNotFound {
                    slog::error!(self.logger, "unable to look up user with UID {}: {}", uid, err);
                }
                Outcome::Declined
            }
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn gid_to_name(&self, gid: Gid) -> Outcome<String> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.group_by_id(gid).await {
            Ok(entry) => Outcome::Handled(entry.name),
            Err(err) => {
                if err.class() != ErrorClass::NotFound {
                    slog::error!(self.logger, "unable to look up group with GID {}: {}", gid, err);
                }
                Outcome::Declined
            }
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn name_to_uid(&self, name: &str) -> Outcome<Uid> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.user_by_name(name).await {
            Ok(entry) => Outcome::Handled(entry.uid),
            Err(err) => {
                if err.class() != ErrorClass::NotFound {
                    slog::error!(self.logger, "unable to look up user {}: {}", name, err);
                }
                Outcome::Declined
            }
        }
    }

    #[allow(clippy::type_complexity)]
    #[tracing_attributes::instrument]
    async fn name_to_gid(&self, name: &str) -> Outcome<Gid> {
        if !self.config.engine {
            return Outcome::Declined;
        }
        match self.client.group_by_name(name).await {
            Ok(entry) => Outcome::Handled(entry.gid),
            Err(err) => {
                if err.class() != ErrorClass::NotFound {
                    slog::error!(self.logger, "unable to look up group {}: {}", name, err);
                }
                Outcome::Declined
            }
        }
    }
}
