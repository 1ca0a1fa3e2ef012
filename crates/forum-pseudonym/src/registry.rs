//! Set of pseudonyms already handed out.
//!
//! A registry lives as long as the process that created it; nothing here
//! persists it. Callers construct one explicitly and share it (usually via
//! `Arc`) with every generator that must avoid its names.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct PseudonymRegistry {
    issued: Mutex<HashSet<String>>,
}

impl PseudonymRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that already holds `names`, e.g. pseudonyms found in seed data.
    #[must_use]
    pub fn with_issued<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            issued: Mutex::new(names.into_iter().map(Into::into).collect()),
        }
    }

    // A panic while holding the lock cannot leave the set half-updated.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.issued.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `name` if unused. Returns `false` when it was already issued.
    ///
    /// The check and the insert happen under one lock, so two concurrent
    /// callers can never both claim the same name.
    pub fn claim(&self, name: &str) -> bool {
        let mut issued = self.lock();
        if issued.contains(name) {
            return false;
        }
        issued.insert(name.to_string())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget every issued name. Only ever called explicitly by the owner.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Sorted copy of the issued names.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().iter().cloned().collect();
        names.sort();
        names
    }
}
