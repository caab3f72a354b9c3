pub mod cache;

mod macros;

pub use cache::CacheKey;
pub use cache::DetailCache;
