use std::fmt;
use std::path::PathBuf;

/// Numeric user id, as mapped into the host's id space.
pub type Uid = u32;

/// Numeric group id, as mapped into the host's id space.
pub type Gid = u32;

/// A fully resolved user account.
///
/// Providers hand these out by value: a record stays valid for as long as the
/// caller keeps it, independent of whatever backend buffer it was copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Account name, qualified the way the backend reports it.
    pub name: String,
    /// The user's id.
    pub uid: Uid,
    /// Id of the user's primary group.
    pub primary_gid: Gid,
    /// Free-form description (GECOS) field.
    pub gecos: String,
    /// Home directory to drop the user in after login.
    pub home: PathBuf,
    /// Login shell.
    pub shell: PathBuf,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A fully resolved group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group name, qualified the way the backend reports it.
    pub name: String,
    /// The group's id.
    pub gid: Gid,
    /// Member account names as the backend lists them. Carried for hosts
    /// that render group listings; membership checks don't consult it.
    pub members: Vec<String>,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One entry in a user's effective group set, see
/// [`AuthProvider::groups`](super::AuthProvider::groups).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMembership {
    /// Id of the group.
    pub gid: Gid,
    /// Resolved name of the group.
    pub name: String,
}
