//! In-memory store implementation for testing
//!
//! One `MemoryStore` serves all three store traits. Entities live in plain
//! vectors in insertion order so listings behave like the Postgres store's
//! `ORDER BY created_at, id`. Locks are only held across synchronous
//! sections, never across an await.
//!
//! The store also records every batched `find_by_ids` call it receives,
//! which is what lets tests assert the N+1 avoidance guarantee: one batched
//! lookup per request, deduplicated keys, no re-fetch of an id already
//! resolved in the same request.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Link, LinkFilter, NewLink, NewUser, NewVote, User, Vote};
use crate::repositories::{LinkStore, UserStore, VoteStore};

/// In-memory implementation of all entity stores
#[derive(Default)]
pub struct MemoryStore {
    links: RwLock<Vec<Link>>,
    users: RwLock<Vec<User>>,
    votes: RwLock<Vec<Vote>>,

    /// Key lists of every batched user lookup, in call order
    user_batches: Mutex<Vec<Vec<Uuid>>>,
    /// Key lists of every batched link lookup, in call order
    link_batches: Mutex<Vec<Vec<Uuid>>>,

    /// When set, batched user lookups fail with `StoreError::Unavailable`
    fail_user_batches: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key lists of all batched user lookups made so far
    pub fn user_batches(&self) -> Vec<Vec<Uuid>> {
        self.user_batches.lock().unwrap().clone()
    }

    /// The key lists of all batched link lookups made so far
    pub fn link_batches(&self) -> Vec<Vec<Uuid>> {
        self.link_batches.lock().unwrap().clone()
    }

    /// Forget recorded batch calls, keeping the stored entities
    pub fn clear_recorded_batches(&self) {
        self.user_batches.lock().unwrap().clear();
        self.link_batches.lock().unwrap().clear();
    }

    /// Make subsequent batched user lookups fail, simulating a store outage
    pub fn set_fail_user_batches(&self, fail: bool) {
        self.fail_user_batches.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, User>, StoreError> {
        self.user_batches.lock().unwrap().push(ids.to_vec());
        if self.fail_user_batches.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("user store outage".to_string()));
        }
        let users = self.users.read().unwrap();
        Ok(users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(|u| (u.id, u.clone()))
            .collect())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let email = email.to_lowercase();
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email.to_lowercase(),
            password_hash: user.password_hash,
        };
        self.users.write().unwrap().push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, StoreError> {
        Ok(self.links.read().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Link>, StoreError> {
        self.link_batches.lock().unwrap().push(ids.to_vec());
        let links = self.links.read().unwrap();
        Ok(links
            .iter()
            .filter(|l| ids.contains(&l.id))
            .map(|l| (l.id, l.clone()))
            .collect())
    }

    async fn find_all(
        &self,
        filter: Option<&LinkFilter>,
        skip: i64,
        first: Option<i64>,
    ) -> Result<Vec<Link>, StoreError> {
        let links = self.links.read().unwrap();
        let filtered = links
            .iter()
            .filter(|l| filter.is_none_or(|f| f.matches(l)))
            .skip(skip.max(0) as usize);
        let links = match first {
            Some(first) => filtered.take(first.max(0) as usize).cloned().collect(),
            None => filtered.cloned().collect(),
        };
        Ok(links)
    }

    async fn insert(&self, link: NewLink) -> Result<Link, StoreError> {
        let link = Link {
            id: Uuid::new_v4(),
            url: link.url,
            description: link.description,
            posted_by: link.posted_by,
        };
        self.links.write().unwrap().push(link.clone());
        Ok(link)
    }
}

#[async_trait]
impl VoteStore for MemoryStore {
    async fn find_by_link_ids(
        &self,
        link_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Vote>>, StoreError> {
        let votes = self.votes.read().unwrap();
        let mut result: HashMap<Uuid, Vec<Vote>> = link_ids
            .iter()
            .map(|id| (*id, Vec::new()))
            .collect();
        for vote in votes.iter() {
            if let Some(entry) = result.get_mut(&vote.link_id) {
                entry.push(vote.clone());
            }
        }
        Ok(result)
    }

    async fn insert(&self, vote: NewVote) -> Result<Vote, StoreError> {
        let vote = Vote {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            user_id: vote.user_id,
            link_id: vote.link_id,
        };
        self.votes.write().unwrap().push(vote.clone());
        Ok(vote)
    }
}
