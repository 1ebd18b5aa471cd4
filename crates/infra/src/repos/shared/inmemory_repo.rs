//! Useful functions for creating inmemory repositories.
//!
//! Every function holds the lock for its whole operation, so readers never
//! observe a half applied change.

use calendar_reminders_domain::ID;
use std::collections::{hash_map::Entry, HashMap};
use std::sync::RwLock;

pub type Collection<T> = RwLock<HashMap<ID, T>>;

/// Inserts the value unless the id is already taken. Returns whether it was inserted.
pub fn insert<T: Clone>(val_id: &ID, val: &T, collection: &Collection<T>) -> bool {
    let mut collection = collection.write().unwrap();
    match collection.entry(val_id.clone()) {
        Entry::Occupied(_) => false,
        Entry::Vacant(entry) => {
            entry.insert(val.clone());
            true
        }
    }
}

/// Replaces the value stored at the id. Returns false when there is nothing to replace.
pub fn save<T: Clone>(val_id: &ID, val: &T, collection: &Collection<T>) -> bool {
    let mut collection = collection.write().unwrap();
    match collection.get_mut(val_id) {
        Some(stored) => {
            *stored = val.clone();
            true
        }
        None => false,
    }
}

/// Replaces the value stored at the id by `edit` applied to it, without
/// releasing the lock in between. Returns `None` when there is nothing to edit.
pub fn update_with<T: Clone, E, F: FnOnce(&T) -> Result<T, E>>(
    val_id: &ID,
    collection: &Collection<T>,
    edit: F,
) -> Option<Result<T, E>> {
    let mut collection = collection.write().unwrap();
    let stored = collection.get_mut(val_id)?;
    Some(edit(stored).map(|val| {
        *stored = val.clone();
        val
    }))
}

pub fn find<T: Clone>(val_id: &ID, collection: &Collection<T>) -> Option<T> {
    let collection = collection.read().unwrap();
    collection.get(val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Collection<T>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.read().unwrap();
    let mut items = Vec::new();
    for item in collection.values() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn delete<T>(val_id: &ID, collection: &Collection<T>) -> Option<T> {
    let mut collection = collection.write().unwrap();
    collection.remove(val_id)
}
