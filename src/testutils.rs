use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicI32, AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use crate::backend::{SlotStore, StoreError};
use crate::configuration::Configuration;
use crate::types::{NewSlot, Slot};

pub struct MockSlotStoreInner {
    pub success: AtomicBool,
    pub calls_to_insert: AtomicU64,
    pub calls_to_find_by_date_time: AtomicU64,
    pub calls_to_find_by_id: AtomicU64,
    pub calls_to_list_all: AtomicU64,
    pub calls_to_list_by_date: AtomicU64,
    pub calls_to_delete_by_id: AtomicU64,
    pub calls_to_delete_all: AtomicU64,
    pub calls_to_update: AtomicU64,
    pub slots: Mutex<HashMap<i32, Slot>>,
    next_id: AtomicI32,
}

#[derive(Clone)]
pub struct MockSlotStore(pub Arc<MockSlotStoreInner>);

impl MockSlotStore {
    pub fn new() -> Self {
        Self(Arc::new(MockSlotStoreInner {
            success: AtomicBool::new(true),
            calls_to_insert: AtomicU64::default(),
            calls_to_find_by_date_time: AtomicU64::default(),
            calls_to_find_by_id: AtomicU64::default(),
            calls_to_list_all: AtomicU64::default(),
            calls_to_list_by_date: AtomicU64::default(),
            calls_to_delete_by_id: AtomicU64::default(),
            calls_to_delete_all: AtomicU64::default(),
            calls_to_update: AtomicU64::default(),
            slots: Mutex::default(),
            next_id: AtomicI32::default(),
        }))
    }

    fn check_success(&self) -> Result<(), StoreError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(StoreError::Failure("supposed to fail".into())),
        }
    }
}

impl SlotStore for MockSlotStore {
    fn insert(&self, new_slot: NewSlot) -> Result<Slot, StoreError> {
        self.0.calls_to_insert.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;

        let slot = Slot {
            id: self.0.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            date: new_slot.date,
            time: new_slot.time,
            is_booked: new_slot.is_booked,
            client: new_slot.client,
        };
        self.0.slots.lock().unwrap().insert(slot.id, slot.clone());
        Ok(slot)
    }

    fn find_by_date_time(
        &self,
        slot_date: &str,
        slot_time: &str,
    ) -> Result<Option<Slot>, StoreError> {
        self.0
            .calls_to_find_by_date_time
            .fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        Ok(self
            .0
            .slots
            .lock()
            .unwrap()
            .values()
            .find(|slot| slot.date == slot_date && slot.time == slot_time)
            .cloned())
    }

    fn find_by_id(&self, slot_id: i32) -> Result<Option<Slot>, StoreError> {
        self.0.calls_to_find_by_id.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        Ok(self.0.slots.lock().unwrap().get(&slot_id).cloned())
    }

    fn list_all(&self) -> Result<Vec<Slot>, StoreError> {
        self.0.calls_to_list_all.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        Ok(self.0.slots.lock().unwrap().values().cloned().collect())
    }

    fn list_by_date(&self, slot_date: &str) -> Result<Vec<Slot>, StoreError> {
        self.0.calls_to_list_by_date.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        Ok(self
            .0
            .slots
            .lock()
            .unwrap()
            .values()
            .filter(|slot| slot.date == slot_date)
            .cloned()
            .collect())
    }

    fn delete_by_id(&self, slot_id: i32) -> Result<bool, StoreError> {
        self.0.calls_to_delete_by_id.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        Ok(self.0.slots.lock().unwrap().remove(&slot_id).is_some())
    }

    fn delete_all(&self) -> Result<usize, StoreError> {
        self.0.calls_to_delete_all.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        let mut slots = self.0.slots.lock().unwrap();
        let deleted = slots.len();
        slots.clear();
        Ok(deleted)
    }

    fn update(&self, slot: &Slot) -> Result<(), StoreError> {
        self.0.calls_to_update.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        if let Some(entry) = self.0.slots.lock().unwrap().get_mut(&slot.id) {
            *entry = slot.clone();
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn port(&self) -> String {
        "0".into()
    }

    fn database_url(&self) -> Option<String> {
        None
    }

    fn admin_username(&self) -> String {
        "admin".into()
    }

    fn admin_password(&self) -> String {
        "admin".into()
    }

    fn access_token(&self) -> String {
        "test-token".into()
    }
}
