use std::cell::RefCell;

use crate::StarredIds;

/// Durable storage for the set of starred repository ids.
///
/// Implementations must never fail a read: missing or corrupt data loads as
/// an empty set. Writes are fire-and-forget and report problems through logs.
pub trait StarredStore {
    fn load_starred_ids(&self) -> StarredIds;
    fn save_starred_ids(&self, ids: &StarredIds);
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStarredStore {
    ids: RefCell<StarredIds>,
    loads: RefCell<usize>,
    saves: RefCell<usize>,
}

impl MemoryStarredStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: impl IntoIterator<Item = crate::RepoId>) -> Self {
        Self {
            ids: RefCell::new(ids.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn ids(&self) -> StarredIds {
        self.ids.borrow().clone()
    }

    pub fn load_count(&self) -> usize {
        *self.loads.borrow()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl StarredStore for MemoryStarredStore {
    fn load_starred_ids(&self) -> StarredIds {
        *self.loads.borrow_mut() += 1;
        self.ids.borrow().clone()
    }

    fn save_starred_ids(&self, ids: &StarredIds) {
        *self.saves.borrow_mut() += 1;
        *self.ids.borrow_mut() = ids.clone();
    }
}

impl<S: StarredStore + ?Sized> StarredStore for &S {
    fn load_starred_ids(&self) -> StarredIds {
        (**self).load_starred_ids()
    }

    fn save_starred_ids(&self, ids: &StarredIds) {
        (**self).save_starred_ids(ids)
    }
}
