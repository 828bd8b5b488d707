pub mod clubs;
pub mod discover;
pub mod events;
pub mod trending;

pub use clubs::{GetClubQueryHandler, ListClubsQueryHandler};
pub use discover::DiscoverQueryHandler;
pub use events::{GetEventQueryHandler, ListEventsQueryHandler};
pub use trending::{TRENDING_LIMIT, TrendingQueryHandler};
