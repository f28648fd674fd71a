use tracing::info;

use crate::backend::SlotStore;
use crate::error::SlotError;
use crate::notifications::{BookingNotice, ChangeEvent, NotificationHub};
use crate::types::{ClientDetails, NewSlot, Slot};

/// Business logic over a slot store. Holds no slot state of its own;
/// every operation re-reads the store.
#[derive(Debug, Clone)]
pub struct SlotService<S: SlotStore> {
    store: S,
    hub: NotificationHub,
}

impl<S: SlotStore> SlotService<S> {
    pub fn new(store: S, hub: NotificationHub) -> Self {
        Self { store, hub }
    }

    /// Create a slot, rejecting a second slot on the same date and
    /// time. The store enforces the same uniqueness on insert, so the
    /// window between check and insert cannot produce two records.
    pub fn create_slot(&self, new_slot: NewSlot) -> Result<Slot, SlotError> {
        if self
            .store
            .find_by_date_time(&new_slot.date, &new_slot.time)?
            .is_some()
        {
            return Err(SlotError::Duplicate);
        }

        let slot = self.store.insert(new_slot)?;
        info!(id = slot.id, date = %slot.date, time = %slot.time, "slot created");
        self.hub.notify(ChangeEvent::Refresh);
        Ok(slot)
    }

    /// List slots for one date, or the whole collection. Read-only,
    /// so no notification.
    pub fn list_slots(&self, slot_date: Option<&str>) -> Result<Vec<Slot>, SlotError> {
        let slots = match slot_date {
            Some(slot_date) => self.store.list_by_date(slot_date)?,
            None => self.store.list_all()?,
        };
        Ok(slots)
    }

    pub fn delete_slot(&self, slot_id: i32) -> Result<(), SlotError> {
        if !self.store.delete_by_id(slot_id)? {
            return Err(SlotError::NotFound);
        }
        info!(id = slot_id, "slot deleted");
        self.hub.notify(ChangeEvent::Refresh);
        Ok(())
    }

    /// Delete every slot. Notifies even when the store was already
    /// empty, since callers asked for a collection change.
    pub fn delete_all_slots(&self) -> Result<usize, SlotError> {
        let deleted = self.store.delete_all()?;
        info!(deleted, "all slots deleted");
        self.hub.notify(ChangeEvent::Refresh);
        Ok(deleted)
    }

    /// Book an open slot. A slot is booked at most once; there is no
    /// way back to open short of deleting it.
    pub fn book_slot(&self, slot_id: i32, client: ClientDetails) -> Result<Slot, SlotError> {
        let mut slot = self.store.find_by_id(slot_id)?.ok_or(SlotError::NotFound)?;
        if slot.is_booked {
            return Err(SlotError::AlreadyBooked);
        }

        slot.is_booked = true;
        slot.client = Some(client.clone());
        self.store.update(&slot)?;
        info!(id = slot.id, client = %client.client_name, "slot booked");

        self.hub.notify(ChangeEvent::NewBooking(BookingNotice {
            date: slot.date.clone(),
            time: slot.time.clone(),
            client_name: client.client_name,
            client_email: client.client_email,
        }));
        Ok(slot)
    }
}
