//! An [`AuthProvider`](crate::auth::AuthProvider) backed by [Samba]'s
//! `winbindd` daemon.
//!
//! Winbind makes a Unix host a member of a Windows domain: the daemon maps
//! domain accounts and groups into the host's uid/gid space and relays
//! credential checks to a domain controller. This module talks to the daemon
//! through the [`WinbindClient`] capability trait and turns its replies into
//! chain verdicts: domain users become host [`User`](crate::auth::User)
//! records, domain logons become [`AuthGrant`](crate::auth::AuthGrant)s, and
//! a daemon outage becomes a logged decline instead of a phantom "unknown
//! user".
//!
//! The provider stays inert until a `WinbindEngine on` directive opens the
//! [`Config::engine`] gate.
//!
//! [Samba]: https://www.samba.org/

mod client;
pub use client::{AuthInfo, ClientError, ClientErrorKind, ErrorClass, GroupEntry, InterfaceDetails, PasswdEntry, Rejection, WinbindClient};

mod config;
pub use config::{Config, ConfigError};

mod groups;

mod provider;
pub use provider::{MECHANISM, WinbindProvider};
