use crate::BoxError;
use crate::auth::{Gid, Group, Password, Uid, User};
use async_trait::async_trait;
use derive_more::Display;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One account entry, in the shape the daemon's passwd-style replies carry.
///
/// An entry is a snapshot of a reply buffer. The provider copies what it
/// keeps into [`User`] records before anything crosses the SPI boundary, so
/// no host-facing value ever aliases client memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswdEntry {
    /// Qualified account name, domain separator included.
    pub name: String,
    /// User id assigned by the domain id mapping.
    pub uid: Uid,
    /// Primary group id assigned by the domain id mapping.
    pub gid: Gid,
    /// GECOS field, typically the account's display name.
    pub gecos: String,
    /// Home directory, as expanded from the daemon's template.
    pub dir: PathBuf,
    /// Login shell, as expanded from the daemon's template.
    pub shell: PathBuf,
}

impl From<&PasswdEntry> for User {
    fn from(entry: &PasswdEntry) -> User {
        User {
            name: entry.name.clone(),
            uid: entry.uid,
            primary_gid: entry.gid,
            gecos: entry.gecos.clone(),
            home: entry.dir.clone(),
            shell: entry.shell.clone(),
        }
    }
}

/// One group entry, in the shape the daemon's group-style replies carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    /// Qualified group name.
    pub name: String,
    /// Group id assigned by the domain id mapping.
    pub gid: Gid,
    /// Member account names.
    pub members: Vec<String>,
}

impl From<&GroupEntry> for Group {
    fn from(entry: &GroupEntry) -> Group {
        Group {
            name: entry.name.clone(),
            gid: entry.gid,
            members: entry.members.clone(),
        }
    }
}

/// Details reported alongside a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthInfo {
    /// Name of the domain controller that performed the logon.
    pub logon_server: String,
}

/// Identity of the daemon behind the socket, fetched once at startup for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDetails {
    /// Daemon version string.
    pub version: String,
    /// NetBIOS name of this member server.
    pub netbios_name: String,
    /// NetBIOS name of the joined domain.
    pub netbios_domain: String,
    /// DNS name of the joined domain.
    pub dns_domain: String,
}

/// Capability contract for one winbindd conversation channel.
///
/// Calls are independent request/response exchanges; implementations hold the
/// calling task for the duration of one exchange and never overlap requests
/// on behalf of the provider. Name arguments pass through verbatim, domain
/// separator included, and id arguments are host-order integers.
#[async_trait]
pub trait WinbindClient: fmt::Debug + Send + Sync {
    /// Looks up an account by qualified name.
    async fn user_by_name(&self, name: &str) -> Result<PasswdEntry, ClientError>;

    /// Looks up an account by user id.
    async fn user_by_id(&self, uid: Uid) -> Result<PasswdEntry, ClientError>;

    /// Looks up a group by qualified name.
    async fn group_by_name(&self, name: &str) -> Result<GroupEntry, ClientError>;

    /// Looks up a group by group id.
    async fn group_by_id(&self, gid: Gid) -> Result<GroupEntry, ClientError>;

    /// Lists the group ids the daemon records for an account. The primary
    /// group may or may not be listed again; callers get the list as-is.
    async fn group_ids(&self, name: &str) -> Result<Vec<Gid>, ClientError>;

    /// Submits a plain logon for `account` to a domain controller.
    async fn authenticate(&self, account: &str, password: &Password) -> Result<AuthInfo, ClientError>;

    /// Fetches the daemon's interface details, used for startup diagnostics.
    async fn interface_details(&self) -> Result<InterfaceDetails, ClientError>;
}

/// The error returned by [`WinbindClient`] calls.
///
/// The kind decides how the provider treats a failure, see [`ErrorClass`];
/// anything the transport wants to preserve beyond that rides along as the
/// error source.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ClientError {
    kind: ClientErrorKind,
    #[source]
    source: Option<BoxError>,
}

impl ClientError {
    /// Creates a new client error with an underlying cause.
    pub fn new<E>(kind: ClientErrorKind, error: E) -> ClientError
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ClientError {
            kind,
            source: Some(error.into()),
        }
    }

    /// The condition this error reports.
    pub fn kind(&self) -> ClientErrorKind {
        self.kind
    }

    /// How the provider should treat this error.
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// Attempts to get the domain controller's detail for a rejected logon,
    /// if this error carried one.
    pub fn rejection(&self) -> Option<&Rejection> {
        self.source.as_ref()?.downcast_ref::<Rejection>()
    }
}

impl From<ClientErrorKind> for ClientError {
    fn from(kind: ClientErrorKind) -> ClientError {
        ClientError { kind, source: None }
    }
}

/// The `ClientErrorKind` variants that [`WinbindClient`] implementations can
/// produce. Implementations should choose the kind carefully since it decides
/// whether the provider stays quiet, rejects a logon or reports an outage.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display)]
pub enum ClientErrorKind {
    /// No joined domain knows the account.
    #[display("unknown user")]
    UnknownUser,
    /// No joined domain knows the group.
    #[display("unknown group")]
    UnknownGroup,
    /// The id or name maps to a domain the daemon is not joined to. Local
    /// system accounts come back this way.
    #[display("domain not found")]
    DomainNotFound,
    /// A domain controller rejected the credentials.
    #[display("authentication rejected")]
    AuthRejected,
    /// The daemon did not answer the socket.
    #[display("winbind daemon unreachable")]
    Unreachable,
    /// The daemon answered with something the client could not parse.
    #[display("invalid response from winbind daemon")]
    InvalidResponse,
    /// Any other client-side failure.
    #[display("winbind client failure")]
    Other,
}

impl ClientErrorKind {
    /// Maps the kind onto the provider's handling policy.
    pub fn class(self) -> ErrorClass {
        match self {
            ClientErrorKind::UnknownUser | ClientErrorKind::UnknownGroup => ErrorClass::NotFound,
            ClientErrorKind::AuthRejected => ErrorClass::AuthRejected,
            ClientErrorKind::DomainNotFound | ClientErrorKind::Unreachable | ClientErrorKind::InvalidResponse | ClientErrorKind::Other => {
                ErrorClass::Infrastructure
            }
        }
    }
}

/// How the provider treats a [`ClientError`].
///
/// `NotFound` declines without a trace so another provider can answer.
/// `AuthRejected` is an authoritative "wrong credentials". `Infrastructure`
/// marks an unhealthy backend: the provider logs it at error severity and
/// never converts it into a not-found answer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorClass {
    /// The subject does not exist in any joined domain.
    NotFound,
    /// The backend authoritatively rejected the credentials.
    AuthRejected,
    /// The backend itself failed.
    Infrastructure,
}

/// A domain controller's detail for a rejected logon, carried as the source
/// of a [`ClientErrorKind::AuthRejected`] error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{display} ({nt_status})")]
pub struct Rejection {
    /// Human-readable reason, as the controller displays it.
    pub display: String,
    /// The NT status code, in its symbolic form.
    pub nt_status: String,
}
