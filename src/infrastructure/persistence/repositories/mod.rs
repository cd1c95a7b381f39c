mod in_memory_project_repository;
mod pg_project_repository;

pub use in_memory_project_repository::InMemoryProjectRepository;
pub use pg_project_repository::PgProjectRepository;
