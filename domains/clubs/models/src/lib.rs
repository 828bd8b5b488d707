pub mod clubs;
pub mod criteria;
pub mod store;

pub use clubs::{Club, ClubChanges, NewClub};
pub use criteria::ClubCriteria;
pub use store::ClubStore;
