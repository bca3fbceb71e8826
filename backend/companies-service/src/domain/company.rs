use serde::{Deserialize, Serialize};

/// Raw company row as stored, projected down to the three columns the
/// ranking pipeline reads. `boycott_count` is nullable: legacy rows were
/// created before counting existed and carry no counter at all.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CompanyRecord {
    pub company_id: String,
    pub company_name: String,
    pub boycott_count: Option<i64>,
}

/// One leaderboard entry. Request-scoped; built fresh per request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCompany {
    pub id: String,
    pub name: String,
    pub count: i64,
    pub rank: u32,
}
