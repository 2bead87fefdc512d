use serde::Serialize;
use std::fmt;

use super::UserId;

/// A row of the application's user table. Only the columns this tool reads or writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Encoded credential (`bcrypt$<hash>`). Never printed.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl UserRecord {
    /// Active, staff and superuser all set.
    pub fn is_admin(&self) -> bool {
        self.is_active && self.is_staff && self.is_superuser
    }

    /// Set the three admin flags. Does not persist.
    pub fn grant_admin(&mut self) {
        self.is_active = true;
        self.is_staff = true;
        self.is_superuser = true;
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> (id {})", self.username, self.email, self.id)
    }
}
