mod pg_pool;
mod repositories;

pub use pg_pool::create_pool;
pub use repositories::{InMemoryProjectRepository, PgProjectRepository};
