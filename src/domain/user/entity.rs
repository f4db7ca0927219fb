// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};

/// Peer entity referenced by articles. Only its identity matters to them.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub created_at: DateTime<Utc>,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: Username, created_at: DateTime<Utc>) -> Self {
        Self {
            username,
            created_at,
        }
    }
}
