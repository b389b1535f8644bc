use api_rest::{router, AppState};
use oheng_core::config::{
    balance_from_env_value, outlook_year_from_env_value, resolve_knowledge_base_path,
};
use oheng_core::{AssessmentService, CoreConfig, KnowledgeBase};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Oheng application
///
/// Resolves configuration once, loads the knowledge base, and serves the REST API until
/// Ctrl-C is received.
///
/// # Environment Variables
/// - `OHENG_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `OHENG_KNOWLEDGE_BASE`: Knowledge base JSON file (default: bundled data file)
/// - `OHENG_OUTLOOK_YEAR`: First year of the report outlook (default: 2025)
/// - `OHENG_BALANCE`: Knowledge base balance state to query (default: deficient)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, knowledge base loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("oheng_run=info".parse()?)
                .add_directive("oheng_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("OHENG_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let kb_override = std::env::var("OHENG_KNOWLEDGE_BASE").ok().map(PathBuf::from);
    let cfg = CoreConfig::new(
        resolve_knowledge_base_path(kb_override)?,
        outlook_year_from_env_value(std::env::var("OHENG_OUTLOOK_YEAR").ok())?,
        balance_from_env_value(std::env::var("OHENG_BALANCE").ok())?,
    )?;
    let kb = Arc::new(KnowledgeBase::load(cfg.knowledge_base_path())?);

    tracing::info!(
        outlook_year = cfg.outlook_year(),
        balance = %cfg.balance(),
        "++ Configuration resolved"
    );
    tracing::info!("++ Starting Oheng REST on {}", rest_addr);

    let app = router(AppState::new(Arc::new(AssessmentService::new(kb, cfg))));
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Oheng REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
