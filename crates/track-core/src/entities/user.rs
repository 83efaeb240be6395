//! User entity - a person who leaves comments on media

use chrono::{DateTime, Utc};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Login handle shown next to the display name
    pub account: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub account: String,
    pub avatar_url: String,
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub account: Option<String>,
    pub avatar_url: Option<String>,
}

impl User {
    /// Apply a partial update, returning whether anything changed
    pub fn apply(&mut self, changes: UserChanges) -> bool {
        let mut changed = false;

        if let Some(name) = changes.name {
            if name != self.name {
                self.name = name;
                changed = true;
            }
        }
        if let Some(account) = changes.account {
            if account != self.account {
                self.account = account;
                changed = true;
            }
        }
        if let Some(avatar_url) = changes.avatar_url {
            if avatar_url != self.avatar_url {
                self.avatar_url = avatar_url;
                changed = true;
            }
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}
