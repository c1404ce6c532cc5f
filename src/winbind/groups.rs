use super::client::ErrorClass;
use super::provider::WinbindProvider;
use crate::auth::{GroupMembership, Outcome};

impl WinbindProvider {
    /// Builds the ordered effective group set for `name`.
    ///
    /// The primary group comes first when it resolves; an unresolvable
    /// primary is skipped so one odd group cannot hide the rest of the
    /// memberships. The secondary pass is all-or-nothing: once the daemon
    /// has listed the secondary gids, every one of them must resolve to a
    /// name or the whole request declines rather than hand out a partial
    /// set. Nothing is deduplicated, the set reads exactly as the daemon
    /// reported it.
    pub(super) async fn effective_groups(&self, name: &str) -> Outcome<Vec<GroupMembership>> {
        let pw = match self.client.user_by_name(name).await {
            Ok(entry) => entry,
            Err(err) => {
                if err.class() != ErrorClass::NotFound {
                    slog::error!(self.logger, "unable to look up user {} to determine primary group membership: {}", name, err);
                }
                return Outcome::Declined;
            }
        };

        let mut memberships: Vec<GroupMembership> = Vec::new();

        match self.client.group_by_id(pw.gid).await {
            Ok(group) => {
                slog::debug!(self.logger, "adding user {} primary group {}/{}", pw.name, group.name, pw.gid);
                memberships.push(GroupMembership {
                    gid: pw.gid,
                    name: group.name,
                });
            }
            Err(_) => {
                slog::debug!(self.logger, "couldn't determine group name for user {} primary group {}, skipping.", pw.name, pw.gid);
            }
        }

        let secondaries = match self.client.group_ids(name).await {
            Ok(gids) => gids,
            Err(err) => {
                match err.class() {
                    ErrorClass::Infrastructure => {
                        slog::error!(self.logger, "unable to list secondary groups for user {}: {}", pw.name, err);
                    }
                    _ => {
                        slog::debug!(self.logger, "unable to list secondary groups for user {}: {}", pw.name, err);
                    }
                }
                return Outcome::Declined;
            }
        };

        slog::debug!(self.logger, "user {} has {} secondary groups", pw.name, secondaries.len());
        for gid in secondaries {
            let group = match self.client.group_by_id(gid).await {
                Ok(group) => group,
                Err(err) => {
                    match err.class() {
                        ErrorClass::Infrastructure => {
                            slog::error!(self.logger, "unable to resolve secondary group {} for user {}: {}", gid, pw.name, err);
                        }
                        _ => {
                            slog::debug!(self.logger, "unable to resolve secondary group {} for user {}: {}", gid, pw.name, err);
                        }
                    }
                    return Outcome::Declined;
                }
            };
            slog::debug!(self.logger, "added user {} secondary group {}/{}", pw.name, group.name, gid);
            memberships.push(GroupMembership {
                gid,
                name: group.name,
            });
        }

        if memberships.is_empty() {
            // Let other providers have a shot.
            return Outcome::Declined;
        }
        Outcome::Handled(memberships)
    }
}
