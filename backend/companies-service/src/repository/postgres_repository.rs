use super::CompanyRepositoryTrait;
use crate::domain::CompanyRecord;
use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::debug;

/// Repository for company reads backed by Postgres
#[derive(Clone)]
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CompanyRepositoryTrait for PostgresCompanyRepository {
    async fn scan_companies(&self) -> Result<Vec<CompanyRecord>> {
        let companies = sqlx::query_as::<_, CompanyRecord>(
            "SELECT company_id, company_name, boycott_count FROM companies",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to scan companies")?;

        debug!(rows = companies.len(), "Scanned companies table");
        Ok(companies)
    }
}
