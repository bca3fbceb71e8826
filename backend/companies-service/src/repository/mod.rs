mod postgres_repository;
mod r#trait;

pub use postgres_repository::PostgresCompanyRepository;
pub use r#trait::CompanyRepositoryTrait;
