//! Observer plumbing between the core and its presentation collaborators.
//!
//! Components own an [`EventBus`] per event type. Consumers register closures
//! and receive events synchronously, in publish order, on the caller's thread.

mod bus;
mod types;

pub use bus::{EventBus, EventRecorder, ListenerId};
pub use types::{GameEvent, InventoryEvent};
