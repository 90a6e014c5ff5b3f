//! Shared constants for the trivia API.

/// Fixed page size for every paginated question listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page served when the caller omits `page`.
pub const DEFAULT_PAGE: u32 = 1;

/// Quiz category id meaning "draw from every category".
pub const ALL_CATEGORIES_ID: i64 = 0;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Env var overriding [`PG_POOL_MAX_CONNECTIONS`].
pub const PG_MAX_CONNECTIONS_ENV: &str = "TRIVIA_PG_MAX_CONNECTIONS";

/// Env var overriding [`PG_POOL_ACQUIRE_TIMEOUT_SECS`].
pub const PG_ACQUIRE_TIMEOUT_ENV: &str = "TRIVIA_PG_ACQUIRE_TIMEOUT_SECS";
