pub mod backend;
pub mod key;
pub mod type_bind;
pub mod value;

// Re-export commonly used items
pub use backend::CacheBackend;
pub use key::{CacheKey, CacheKeyAutoConstruct};
pub use type_bind::{Bound, CacheTypeBind};
pub use value::Json;
