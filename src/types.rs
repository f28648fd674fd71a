use serde::{Deserialize, Serialize};

/// A bookable appointment slot. `date` and `time` are opaque strings
/// ("2024-01-01" / "10:00" by convention); the server attaches no
/// calendar semantics to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: i32,
    pub date: String,
    pub time: String,
    pub is_booked: bool,
    #[serde(flatten)]
    pub client: Option<ClientDetails>,
}

/// Identity recorded when a slot is booked. The two fields only ever
/// appear together; an open slot carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub client_name: String,
    pub client_email: String,
}

/// A slot as handed to the store for insertion, before an id exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSlot {
    pub date: String,
    pub time: String,
    pub is_booked: bool,
    pub client: Option<ClientDetails>,
}
