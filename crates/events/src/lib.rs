//! `plantshop-events` — event mechanics shared by the domain crates.
//!
//! Events describe accepted state changes; the bus fans them out to readers
//! that want to re-render after a change. Nothing here is persisted.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod handler;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
