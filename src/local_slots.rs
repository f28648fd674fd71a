use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::backend::{SlotStore, StoreError};
use crate::types::{NewSlot, Slot};

/// In-memory slot store. Slots do not survive a restart; start the
/// server with a database URL for persistent storage.
#[derive(Debug, Clone, Default)]
pub struct LocalSlots {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    // Monotonic so ids are never reused, also not after deletion.
    next_id: i32,
    slots: HashMap<i32, Slot>,
}

fn sorted_by_id(mut slots: Vec<Slot>) -> Vec<Slot> {
    slots.sort_unstable_by_key(|slot| slot.id);
    slots
}

impl SlotStore for LocalSlots {
    fn insert(&self, new_slot: NewSlot) -> Result<Slot, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let occupied = inner
            .slots
            .values()
            .any(|slot| slot.date == new_slot.date && slot.time == new_slot.time);
        if occupied {
            return Err(StoreError::Duplicate);
        }

        inner.next_id += 1;
        let slot = Slot {
            id: inner.next_id,
            date: new_slot.date,
            time: new_slot.time,
            is_booked: new_slot.is_booked,
            client: new_slot.client,
        };
        inner.slots.insert(slot.id, slot.clone());
        Ok(slot)
    }

    fn find_by_date_time(
        &self,
        slot_date: &str,
        slot_time: &str,
    ) -> Result<Option<Slot>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .slots
            .values()
            .find(|slot| slot.date == slot_date && slot.time == slot_time)
            .cloned())
    }

    fn find_by_id(&self, slot_id: i32) -> Result<Option<Slot>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.slots.get(&slot_id).cloned())
    }

    fn list_all(&self) -> Result<Vec<Slot>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(sorted_by_id(inner.slots.values().cloned().collect()))
    }

    fn list_by_date(&self, slot_date: &str) -> Result<Vec<Slot>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(sorted_by_id(
            inner
                .slots
                .values()
                .filter(|slot| slot.date == slot_date)
                .cloned()
                .collect(),
        ))
    }

    fn delete_by_id(&self, slot_id: i32) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.slots.remove(&slot_id).is_some())
    }

    fn delete_all(&self) -> Result<usize, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let deleted = inner.slots.len();
        inner.slots.clear();
        Ok(deleted)
    }

    fn update(&self, slot: &Slot) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        // Updating a missing row changes nothing, matching the
        // database backend's zero-rows-affected behavior.
        if let Some(entry) = inner.slots.get_mut(&slot.id) {
            *entry = slot.clone();
        }
        Ok(())
    }
}
