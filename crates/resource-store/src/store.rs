//! # Generic Resource Store
//!
//! This module defines the `ResourceStore`, the component that owns the records of one
//! entity type. It keeps records keyed by id and remembers the order in which each id was
//! first stored.

use crate::entity::ResourceEntity;
use crate::error::StoreError;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
struct Slot<T> {
    seq: u64,
    item: T,
}

/// A keyed collection of entities with stable first-insertion ordering.
///
/// ## Operations
///
/// * **Insert**: stores a new record, refusing ids that are already present.
/// * **Upsert**: stores a new record or replaces an existing one in full, after the
///   entity's [`on_replace`](ResourceEntity::on_replace) hook accepts the replacement.
///   A replaced record keeps its original position.
/// * **Get / Remove**: lookup and deletion by id. Removing an absent id is not an error.
/// * **Iterate**: records come out in first-insertion order.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: ResourceEntity> {
    store: HashMap<T::Id, Slot<T>>,
    /// Sequence number to id, kept in step with `store`.
    order: BTreeMap<u64, T::Id>,
    next_seq: u64,
}

impl<T: ResourceEntity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ResourceEntity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Stores `item` under its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if a record with the same id is present.
    pub fn insert(&mut self, item: T) -> Result<(), StoreError> {
        let id = item.id();
        if self.store.contains_key(&id) {
            warn!(entity_type = entity_type::<T>(), %id, "Already exists");
            return Err(StoreError::AlreadyExists(id.to_string()));
        }
        debug!(entity_type = entity_type::<T>(), ?item, "Create");
        self.put_new(id, item);
        info!(entity_type = entity_type::<T>(), %id, size = self.store.len(), "Created");
        Ok(())
    }

    /// Stores `item`, replacing any record with the same id in full.
    ///
    /// Returns the replaced record, if there was one.
    pub fn upsert(&mut self, item: T) -> Result<Option<T>, T::Error> {
        let id = item.id();
        debug!(entity_type = entity_type::<T>(), ?item, "Upsert");
        match self.store.get_mut(&id) {
            Some(slot) => {
                if let Err(e) = item.on_replace(&slot.item) {
                    warn!(entity_type = entity_type::<T>(), %id, error = %e, "Replace rejected");
                    return Err(e);
                }
                let previous = std::mem::replace(&mut slot.item, item);
                info!(entity_type = entity_type::<T>(), %id, "Replaced");
                Ok(Some(previous))
            }
            None => {
                self.put_new(id, item);
                info!(entity_type = entity_type::<T>(), %id, size = self.store.len(), "Created");
                Ok(None)
            }
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.store.get(&id).map(|slot| &slot.item)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.store.get_mut(&id).map(|slot| &mut slot.item)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.store.contains_key(&id)
    }

    /// Removes and returns the record stored under `id`, if any.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let removed = self.store.remove(&id).map(|slot| {
            self.order.remove(&slot.seq);
            slot.item
        });
        match &removed {
            Some(_) => info!(entity_type = entity_type::<T>(), %id, size = self.store.len(), "Deleted"),
            None => debug!(entity_type = entity_type::<T>(), %id, "Delete of absent id"),
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Records in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter_sequenced().map(|(_, item)| item)
    }

    /// Records in first-insertion order, paired with their sequence number.
    pub fn iter_sequenced(&self) -> impl Iterator<Item = (u64, &T)> + '_ {
        self.order
            .iter()
            .filter_map(|(seq, id)| self.store.get(id).map(|slot| (*seq, &slot.item)))
    }

    fn put_new(&mut self, id: T::Id, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, id);
        self.store.insert(id, Slot { seq, item });
    }
}

/// Short type name for log fields, e.g. `Product` instead of `matamazon::model::Product`.
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
