//! Hackernews-style GraphQL API server
//!
//! Bootstraps configuration, the database pool, the entity stores and the
//! GraphQL schema, then serves `POST /graphql`. Authentication happens once
//! per request in `graphql_handler` before execution starts.

use std::net::SocketAddr;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    http::{header, HeaderMap, Method},
    routing::{get, post},
    Extension, Router,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use hackernews_api::config::Config;
use hackernews_api::graphql::{attach_request_loaders, build_schema, HackerNewsSchema};
use hackernews_api::repositories::Stores;
use hackernews_api::routes::{health_router, HealthState};
use hackernews_api::services::{AuthService, CurrentUser};

/// GraphQL handler that executes queries against the schema
///
/// This is where the per-request execution context is assembled: fresh
/// DataLoaders for this request, plus the authenticated caller when the
/// Authorization header carries a resolvable bearer token. A token that
/// does not resolve downgrades the request to unauthenticated rather than
/// rejecting it, since unauthenticated queries are valid.
async fn graphql_handler(
    Extension(schema): Extension<HackerNewsSchema>,
    Extension(auth_service): Extension<AuthService>,
    Extension(stores): Extension<Stores>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = attach_request_loaders(req.into_inner(), &stores);

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if let Some(user) = auth_service.resolve_bearer(authorization).await {
        tracing::debug!(user_id = %user.id, "GraphQL request authenticated");
        request = request.data(CurrentUser(user));
    }

    schema.execute(request).await.into()
}

/// GraphQL Playground handler for development
async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

/// Build the CORS layer from configuration
fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect();
            tracing::info!(
                "CORS configured with {} allowed origin(s)",
                allowed_origins.len()
            );
            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        }
        None => {
            tracing::warn!(
                "Using permissive CORS. Set CORS_ORIGINS for production-like behavior."
            );
            CorsLayer::permissive()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hackernews_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Starting hackernews API server on port {}", config.port);

    // Initialize database pool
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database connection established");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations completed");

    // Wire stores and services
    let stores = Stores::postgres(pool.clone());
    let auth_service = AuthService::new(stores.users.clone());
    let schema = build_schema(stores.clone(), auth_service.clone());
    tracing::info!("GraphQL schema built");

    let cors_layer = build_cors_layer(&config);

    // Build the router
    let app = Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_playground))
        .nest("/health", health_router(HealthState::new(pool)))
        .layer(Extension(schema))
        .layer(Extension(auth_service))
        .layer(Extension(stores))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
