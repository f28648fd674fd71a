use thiserror::Error;

use crate::types::{NewSlot, Slot};

/// Failures surfaced by a slot store. Everything except a duplicate
/// insert is reported as a generic storage failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("another slot already occupies this date and time")]
    Duplicate,
    #[error("{0}")]
    Failure(String),
}

/// Access contract of the slot collection. Implementations assign ids
/// on insert and never hand one out twice, even after deletion.
pub trait SlotStore: Clone + Send + Sync + 'static {
    fn insert(&self, new_slot: NewSlot) -> Result<Slot, StoreError>;
    fn find_by_date_time(
        &self,
        slot_date: &str,
        slot_time: &str,
    ) -> Result<Option<Slot>, StoreError>;
    fn find_by_id(&self, slot_id: i32) -> Result<Option<Slot>, StoreError>;
    fn list_all(&self) -> Result<Vec<Slot>, StoreError>;
    fn list_by_date(&self, slot_date: &str) -> Result<Vec<Slot>, StoreError>;
    /// Returns whether a slot with that id existed.
    fn delete_by_id(&self, slot_id: i32) -> Result<bool, StoreError>;
    /// Returns the number of deleted slots.
    fn delete_all(&self) -> Result<usize, StoreError>;
    fn update(&self, slot: &Slot) -> Result<(), StoreError>;
}
