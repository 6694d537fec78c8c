//! Registration lifecycle store capability.
//!
//! Call sites depend on this trait rather than a process-wide collection,
//! so a durable backend can replace the in-memory store without touching
//! the handlers.

use fr_core::{AcceptedCredentials, Registration, RegistrationInput};

use uuid::Uuid;

/// Owns the ordered collection of registrations and applies lifecycle
/// commands to it.
///
/// Absence is a value here, never an error: operations on an unknown id
/// return `None` or `false`, and callers must check.
pub trait RegistrationStore: Send + Sync {
    /// Build a complete registration from the intake payload and insert it
    /// at the front of the collection.
    fn create(&mut self, input: RegistrationInput) -> Registration;

    /// All registrations in store order (most recent first), trashed ones
    /// included.
    fn list(&self) -> Vec<Registration>;

    /// Look up one registration by id.
    fn get(&self, id: Uuid) -> Option<Registration>;

    /// Mark the registration accepted and grant it a user identity.
    ///
    /// Accepting an already-accepted registration regenerates the user id
    /// and username.
    fn accept(&mut self, id: Uuid) -> Option<AcceptedCredentials>;

    /// Soft-delete: stamp the trash marker pair. Re-trashing overwrites the
    /// timestamp and still reports success.
    fn trash(&mut self, id: Uuid) -> bool;

    /// Clear the trash marker pair.
    fn untrash(&mut self, id: Uuid) -> bool;

    /// Permanently delete the registration regardless of acceptance or
    /// trash state. Reports whether anything was removed.
    fn remove(&mut self, id: Uuid) -> bool;
}
