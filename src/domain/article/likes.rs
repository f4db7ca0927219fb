// src/domain/article/likes.rs
use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};

/// Timestamps carried by the join row itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikePivot {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Liker {
    pub user: User,
    pub pivot: LikePivot,
}

/// Resolved snapshot of the users who liked one article, in like order.
#[derive(Debug, Clone, Default)]
pub struct LikedBy {
    likers: Vec<Liker>,
}

impl LikedBy {
    /// Builds a snapshot, keeping the first entry for any repeated user.
    pub fn new(likers: Vec<Liker>) -> Self {
        let mut unique: Vec<Liker> = Vec::with_capacity(likers.len());
        for liker in likers {
            if !unique.iter().any(|seen| seen.user.id == liker.user.id) {
                unique.push(liker);
            }
        }
        Self { likers: unique }
    }

    pub fn count(&self) -> usize {
        self.likers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.likers.is_empty()
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.likers
            .iter()
            .filter(|liker| liker.user.id == user_id)
            .count()
            > 0
    }

    pub fn get(&self, user_id: UserId) -> Option<&Liker> {
        self.likers.iter().find(|liker| liker.user.id == user_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Liker> {
        self.likers.iter()
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.likers.iter().map(|liker| &liker.user)
    }
}

impl IntoIterator for LikedBy {
    type Item = Liker;
    type IntoIter = std::vec::IntoIter<Liker>;

    fn into_iter(self) -> Self::IntoIter {
        self.likers.into_iter()
    }
}

impl<'a> IntoIterator for &'a LikedBy {
    type Item = &'a Liker;
    type IntoIter = std::slice::Iter<'a, Liker>;

    fn into_iter(self) -> Self::IntoIter {
        self.likers.iter()
    }
}
