//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging of the HTTP surface (with OpenAPI/Swagger UI). The
//! workspace's main `oheng-run` binary serves the same router.

use api_rest::{router, AppState};
use oheng_core::config::{
    balance_from_env_value, outlook_year_from_env_value, resolve_knowledge_base_path,
};
use oheng_core::{AssessmentService, CoreConfig, KnowledgeBase};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Oheng REST API server
///
/// # Environment Variables
/// - `OHENG_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `OHENG_KNOWLEDGE_BASE`: Knowledge base JSON file (default: bundled data file)
/// - `OHENG_OUTLOOK_YEAR`: First year of the report outlook (default: 2025)
/// - `OHENG_BALANCE`: Knowledge base balance state to query (default: deficient)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration or the knowledge base is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("oheng_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("OHENG_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let kb_override = std::env::var("OHENG_KNOWLEDGE_BASE").ok().map(PathBuf::from);
    let kb_path = resolve_knowledge_base_path(kb_override)?;
    let outlook_year = outlook_year_from_env_value(std::env::var("OHENG_OUTLOOK_YEAR").ok())?;
    let balance = balance_from_env_value(std::env::var("OHENG_BALANCE").ok())?;

    let cfg = CoreConfig::new(kb_path, outlook_year, balance)?;
    let kb = Arc::new(KnowledgeBase::load(cfg.knowledge_base_path())?);
    let state = AppState::new(Arc::new(AssessmentService::new(kb, cfg)));

    tracing::info!("-- Starting Oheng REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
