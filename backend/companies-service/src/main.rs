/// Companies Service - HTTP Server
///
/// Serves the boycott leaderboard read API.
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::{anyhow, Context, Result};
use companies_service::handlers;
use companies_service::repository::{CompanyRepositoryTrait, PostgresCompanyRepository};
use companies_service::Config;
use jwt_claims::{JwtSubjectResolver, SubjectResolver};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "companies_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Companies Service");

    // Load configuration
    dotenvy::dotenv().ok();
    let config =
        Config::from_env().map_err(|e| anyhow!("Failed to load configuration: {e}"))?;

    let bind_address = format!("{}:{}", config.app.host, config.app.port);

    // Validation-only JWT setup; this service never signs tokens
    let public_key = std::env::var("JWT_PUBLIC_KEY_PEM")
        .context("JWT_PUBLIC_KEY_PEM not set; the service cannot authenticate requests")?;
    let resolver: Arc<dyn SubjectResolver> = Arc::new(
        JwtSubjectResolver::from_public_key_pem(&public_key)
            .context("Failed to initialize JWT validation")?,
    );

    // Initialize database connection pool
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    let repository: Arc<dyn CompanyRepositoryTrait> =
        Arc::new(PostgresCompanyRepository::new(db_pool));

    info!(env = %config.app.env, "Companies service listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(resolver.clone()))
            .app_data(web::Data::new(repository.clone()))
            .wrap(TracingLogger::default())
            .route(
                "/api/v1/health",
                web::get()
                    .to(|| async { HttpResponse::Ok().json(serde_json::json!({"status": "ok"})) }),
            )
            .route(
                "/api/v1/health/ready",
                web::get().to(|| async { HttpResponse::Ok().finish() }),
            )
            .route(
                "/api/v1/health/live",
                web::get().to(|| async { HttpResponse::Ok().finish() }),
            )
            .route(
                "/api/v1/companies/top/{limit}",
                web::get().to(handlers::get_top_companies),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
    .context("HTTP server failed")
}
