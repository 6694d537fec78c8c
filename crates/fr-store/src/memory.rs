//! In-memory registration store.
//!
//! This is a reference implementation standing in for a real database: one
//! `Vec` in insertion order (newest first), mutated synchronously with no
//! internal locking. Single serving process, single writer. A durable
//! replacement must add its own concurrency control.

use crate::store::RegistrationStore;

use fr_core::{
    AcceptedCredentials, IdGenerator, RandomIdGenerator, Registration, RegistrationInput,
    derive_username,
};

use chrono::Utc;
use uuid::Uuid;

/// Actor recorded on soft-deleted registrations when none is configured.
pub const DEFAULT_TRASH_ACTOR: &str = "admin";

pub struct MemoryRegistrationStore {
    records: Vec<Registration>,
    ids: Box<dyn IdGenerator>,
    trash_actor: String,
}

impl MemoryRegistrationStore {
    pub fn new() -> Self {
        Self::with_ids(Box::new(RandomIdGenerator))
    }

    /// Build a store around an injected id source. Tests use this with a
    /// deterministic generator.
    pub fn with_ids(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            records: Vec::new(),
            ids,
            trash_actor: DEFAULT_TRASH_ACTOR.to_string(),
        }
    }

    pub fn with_trash_actor(mut self, actor: impl Into<String>) -> Self {
        self.trash_actor = actor.into();
        self
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut Registration> {
        self.records.iter_mut().find(|r| r.id == id)
    }
}

impl Default for MemoryRegistrationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationStore for MemoryRegistrationStore {
    fn create(&mut self, input: RegistrationInput) -> Registration {
        let reg = Registration::from_input(input, self.ids.as_ref());
        log::info!("Created registration {}", reg.id);

        // Newest first.
        self.records.insert(0, reg.clone());
        reg
    }

    fn list(&self) -> Vec<Registration> {
        self.records.clone()
    }

    fn get(&self, id: Uuid) -> Option<Registration> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn accept(&mut self, id: Uuid) -> Option<AcceptedCredentials> {
        let user_id = self.ids.generate();
        let reg = self.find_mut(id)?;

        if reg.is_accepted {
            log::warn!("Re-accepting registration {id}; user identity regenerated");
        }

        reg.is_accepted = true;
        reg.user_id = Some(user_id);

        let username = derive_username(&reg.who_you_are.full_name);
        log::info!("Accepted registration {id} as {username}");

        Some(AcceptedCredentials {
            user_id,
            username,
            email: reg.who_you_are.email.clone(),
        })
    }

    fn trash(&mut self, id: Uuid) -> bool {
        let actor = self.trash_actor.clone();
        match self.find_mut(id) {
            Some(reg) => {
                // Re-trashing overwrites the timestamp.
                reg.trashed_at = Some(Utc::now());
                reg.trashed_by = Some(actor);
                true
            }
            None => false,
        }
    }

    fn untrash(&mut self, id: Uuid) -> bool {
        match self.find_mut(id) {
            Some(reg) => {
                reg.trashed_at = None;
                reg.trashed_by = None;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < before
    }
}
