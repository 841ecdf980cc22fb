/*!
shared.rs - shared helpers for subcommands.

Focus:
  - Remote: blocking facade over the async Zoom client
  - find_user: id-or-email resolution against a fetched directory
  - licensed_users: license-holder scan used by assign's strict mode
*/

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use crate::creds::Credentials;
use crate::error::ZoomctlError;
use crate::zoom::ZoomClient;
use crate::zoom::types::{Meeting, User, UserType};

/// Blocking facade over the async Zoom client.
///
/// Commands are synchronous single-shot flows; the Tokio runtime lives here
/// so one process drives exactly one reactor and remote calls stay strictly
/// sequential.
pub struct Remote {
    rt: Runtime,
    client: ZoomClient,
}

impl Remote {
    pub fn connect(creds: &Credentials) -> Result<Self> {
        let rt = Runtime::new().context("failed to create Tokio runtime")?;
        let client = ZoomClient::new(&creds.api_key, &creds.api_secret)?;
        Ok(Self { rt, client })
    }

    pub fn list_users(&self) -> Result<Vec<User>, ZoomctlError> {
        self.rt.block_on(self.client.list_users())
    }

    pub fn get_user(&self, key: &str) -> Result<User, ZoomctlError> {
        self.rt.block_on(self.client.get_user(key))
    }

    pub fn set_user_type(&self, key: &str, user_type: UserType) -> Result<(), ZoomctlError> {
        self.rt.block_on(self.client.update_user_type(key, user_type))
    }

    pub fn upcoming_meetings(&self, key: &str) -> Result<Vec<Meeting>, ZoomctlError> {
        self.rt.block_on(self.client.list_upcoming_meetings(key))
    }
}

/* ---- Directory Helpers ---- */

/// Resolve a user within an already-fetched directory by id or email.
pub fn find_user<'a>(users: &'a [User], key: &str) -> Result<&'a User, ZoomctlError> {
    users
        .iter()
        .find(|u| u.matches(key))
        .ok_or_else(|| ZoomctlError::UserNotFound(key.to_string()))
}

/// All current license holders, in directory order.
pub fn licensed_users(users: &[User]) -> Vec<&User> {
    users.iter().filter(|u| u.user_type.is_licensed()).collect()
}

#[cfg(test)]
pub(crate) fn test_user(id: &str, email: &str, user_type: UserType) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: id.to_string(),
        user_type,
    }
}
