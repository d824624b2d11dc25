//! Course RAG server binary.
//!
//! Loads configuration from the environment, indexes the course catalog and
//! serves the query API.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use course_rag::adapters::http::{app_router, QueryAppState};
use course_rag::adapters::{
    AnthropicConfig, AnthropicProvider, InMemoryCourseIndex, InMemorySessionStore,
};
use course_rag::application::{
    AnswerQuestionHandler, GetCourseAnalyticsHandler, ListToolDefinitionsHandler,
};
use course_rag::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use course_rag::domain::answer_engine::{AnswerEngine, EngineConfig};
use course_rag::domain::catalog::CatalogError;
use course_rag::domain::tools::{CourseOutlineTool, CourseSearchTool, ToolError, ToolRegistry};
use course_rag::ports::{AIError, CourseIndex, SessionStore};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to register tool: {0}")]
    Tools(#[from] ToolError),

    #[error("Failed to build AI provider: {0}")]
    Provider(#[from] AIError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

fn init_logging(server: &ServerConfig) -> Result<(), StartupError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if server.log_json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };
    result.map_err(|e| StartupError::Logging(e.to_string()))
}

async fn build_state(config: &AppConfig) -> Result<QueryAppState, StartupError> {
    let catalog =
        InMemoryCourseIndex::load(&config.catalog.path, config.catalog.max_results).await?;
    info!(passages = catalog.passage_count(), "course catalog indexed");
    let index: Arc<dyn CourseIndex> = Arc::new(catalog);

    let mut registry = ToolRegistry::new();
    registry.register(CourseSearchTool::new(index.clone()))?;
    registry.register(CourseOutlineTool::new(index.clone()))?;
    info!(tools = registry.tool_count(), "tools registered");
    let registry = Arc::new(registry);

    let api_key = config
        .ai
        .anthropic_api_key
        .as_ref()
        .map(|key| secrecy::ExposeSecret::expose_secret(key).clone())
        .ok_or(ValidationError::MissingRequired("ANTHROPIC_API_KEY"))?;
    let provider = AnthropicProvider::new(
        AnthropicConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?;

    let engine = AnswerEngine::new(
        Arc::new(provider),
        EngineConfig {
            max_tool_rounds: config.ai.max_tool_rounds,
            temperature: config.ai.temperature,
            max_tokens: config.ai.max_tokens,
        },
    );

    let sessions: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(config.session.max_history));

    Ok(QueryAppState {
        answer_handler: Arc::new(AnswerQuestionHandler::new(
            engine,
            registry.clone(),
            sessions.clone(),
        )),
        analytics_handler: Arc::new(GetCourseAnalyticsHandler::new(index)),
        tools_handler: Arc::new(ListToolDefinitionsHandler::new(registry)),
        sessions,
    })
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_logging(&config.server)?;
    config.validate()?;

    let state = build_state(&config).await?;
    let app = app_router(state, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        catalog = %config.catalog.path.display(),
        model = %config.ai.model,
        "course-rag listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("course-rag: {}", err);
        std::process::exit(1);
    }
}
