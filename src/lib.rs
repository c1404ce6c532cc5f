//! Identity resolution and credential verification for FTP(S) servers that
//! are members of a Windows domain.
//!
//! The [`auth`] module defines a small provider SPI: an ordered
//! [`ProviderChain`](auth::ProviderChain) dispatches account lookups, group
//! resolution, credential checks and id/name translations to pluggable
//! [`AuthProvider`](auth::AuthProvider)s, and the first provider with an
//! opinion settles each request.
//!
//! The [`winbind`] module implements that SPI on top of Samba's `winbindd`
//! daemon through the [`WinbindClient`](winbind::WinbindClient) capability
//! trait, turning domain accounts into host-native users and groups and
//! relaying plain logons to a domain controller.
//!
//! ```no_run
//! use std::sync::Arc;
//! use unftp_auth_winbind::auth::{Password, PasswordVerifier, ProviderChain};
//! use unftp_auth_winbind::winbind::{Config, WinbindProvider};
//! # use async_trait::async_trait;
//! # use unftp_auth_winbind::auth::{Gid, Uid};
//! # use unftp_auth_winbind::winbind::{AuthInfo, ClientError, ClientErrorKind, GroupEntry, InterfaceDetails, PasswdEntry, WinbindClient};
//! # #[derive(Debug)]
//! # struct Socket; // your winbindd transport
//! # #[async_trait]
//! # impl WinbindClient for Socket {
//! #     async fn user_by_name(&self, _name: &str) -> Result<PasswdEntry, ClientError> { Err(ClientErrorKind::Unreachable.into()) }
//! #     async fn user_by_id(&self, _uid: Uid) -> Result<PasswdEntry, ClientError> { Err(ClientErrorKind::Unreachable.into()) }
//! #     async fn group_by_name(&self, _name: &str) -> Result<GroupEntry, ClientError> { Err(ClientErrorKind::Unreachable.into()) }
//! #     async fn group_by_id(&self, _gid: Gid) -> Result<GroupEntry, ClientError> { Err(ClientErrorKind::Unreachable.into()) }
//! #     async fn group_ids(&self, _name: &str) -> Result<Vec<Gid>, ClientError> { Err(ClientErrorKind::Unreachable.into()) }
//! #     async fn authenticate(&self, _account: &str, _password: &Password) -> Result<AuthInfo, ClientError> { Err(ClientErrorKind::Unreachable.into()) }
//! #     async fn interface_details(&self) -> Result<InterfaceDetails, ClientError> { Err(ClientErrorKind::Unreachable.into()) }
//! # }
//! # #[derive(Debug)]
//! # struct HostPasswd;
//! # #[async_trait]
//! # impl PasswordVerifier for HostPasswd {
//! #     async fn verify(&self, _username: &str, _password: &Password) -> bool { false }
//! # }
//! #
//! # async fn example() {
//! let logger = slog::Logger::root(slog::Discard, slog::o!());
//! let config = Config::from_directive("on").unwrap();
//! let winbind = WinbindProvider::new(Arc::new(Socket), Arc::new(HostPasswd), config, logger);
//! winbind.probe().await;
//!
//! let mut chain = ProviderChain::new();
//! chain.register(Arc::new(winbind));
//!
//! let verdict = chain.user_by_name("ACME+alice").await;
//! # let _ = verdict;
//! # }
//! ```

pub mod auth;
pub mod winbind;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
