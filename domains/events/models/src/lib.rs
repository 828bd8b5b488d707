pub mod criteria;
pub mod events;
pub mod store;

pub use criteria::EventCriteria;
pub use events::{Event, EventChanges, NewEvent};
pub use store::EventStore;
