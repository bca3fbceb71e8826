/// Company leaderboard handlers - HTTP endpoints for ranked company reads
use std::sync::Arc;
use std::time::Instant;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{debug, error, warn};

use crate::error::{AppError, Result};
use crate::repository::CompanyRepositoryTrait;
use crate::services::rank_top_companies;
use jwt_claims::SubjectResolver;

/// Top-N companies by boycott count.
///
/// The subject and the `limit` path parameter are checked before the
/// store is touched; `limit` must parse as an integer >= 1.
pub async fn get_top_companies(
    req: HttpRequest,
    path: web::Path<String>,
    resolver: web::Data<Arc<dyn SubjectResolver>>,
    repository: web::Data<Arc<dyn CompanyRepositoryTrait>>,
) -> Result<HttpResponse> {
    let sub = match resolver.resolve_subject(&req) {
        Some(sub) => sub,
        None => {
            warn!("user is Unauthorized");
            return Err(AppError::Unauthorized);
        }
    };

    let limit = path
        .into_inner()
        .parse::<i64>()
        .ok()
        .filter(|limit| *limit >= 1)
        .ok_or_else(|| {
            error!(subject = %sub, "no usable limit in path");
            AppError::BadRequest("Missing limit in path".to_string())
        })?;

    let scan_started = Instant::now();
    let records = repository.scan_companies().await.map_err(|e| {
        error!(subject = %sub, "companies scan failed: {:#}", e);
        AppError::Database(e.to_string())
    })?;
    let scan_ms = scan_started.elapsed().as_millis() as u64;
    debug!(
        subject = %sub,
        rows = records.len(),
        elapsed_ms = scan_ms,
        "companies scan finished"
    );

    let rank_started = Instant::now();
    let ranked = rank_top_companies(records, limit as usize);
    let rank_ms = rank_started.elapsed().as_millis() as u64;
    debug!(
        subject = %sub,
        returned = ranked.len(),
        elapsed_ms = rank_ms,
        "ranked and truncated"
    );

    let body = serde_json::to_string(&ranked)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}
