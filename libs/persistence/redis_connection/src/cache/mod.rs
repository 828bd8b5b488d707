pub mod memory;
pub mod redis_cache;
pub mod r#trait;

pub use memory::Memory;
pub use r#trait::{CacheError, CachePatternTrait, CacheResult, CacheTrait};
pub use redis_cache::RedisCache;
