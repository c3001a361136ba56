//! # Storage Layer
//!
//! The [`TutorialStore`] trait is the seam between the command layer and
//! whatever holds the records. Today that is only [`memory::InMemoryStore`]:
//! the catalog lives and dies with the process, which is the contract of the
//! whole application.
//!
//! The trait still returns `Result` everywhere because this is also where a
//! server-backed catalog would plug in later — an `HttpStore` implementing
//! the same methods against `POST /tutorials`, `PUT /tutorials/{id}` and
//! friends, moving records as serde_json payloads. Nothing like that exists
//! yet; no method here performs I/O.
//!
//! ## Ordering
//!
//! The store keeps records in insertion order with the newest first.
//! `insert_front` prepends, and `list` returns that order unchanged — the
//! listing layer filters but never re-sorts.
//!
//! ## Identifier minting
//!
//! Identifiers are opaque strings minted by the store at creation time from
//! a millisecond timestamp. Two creations in the same millisecond get
//! strictly increasing values, so ids stay unique within the store.

use crate::error::Result;
use crate::model::{NewTutorial, Tutorial};

pub mod memory;

/// Abstract interface for tutorial storage.
pub trait TutorialStore {
    /// Mint an id and creation timestamp for the candidate record and
    /// prepend it to the collection.
    fn insert_front(&mut self, draft: NewTutorial) -> Result<Tutorial>;

    /// Get a record by id.
    fn get(&self, id: &str) -> Result<Tutorial>;

    /// All records in store order, newest first.
    fn list(&self) -> Result<Vec<Tutorial>>;

    /// Replace the record with the same id, in place.
    fn replace(&mut self, record: &Tutorial) -> Result<()>;

    /// Remove a record by id, returning it.
    fn remove(&mut self, id: &str) -> Result<Tutorial>;

    /// Whether the collection currently holds no records.
    fn is_empty(&self) -> Result<bool>;
}
