mod cache;

pub use cache::CacheError;
pub use cache::PhaseCacheManager;
pub use cache::parse_record;
pub use cache::render_record;
