//! # HTTP Server
//!
//! Axum-based HTTP server exposing the grid query endpoint and the expense
//! mutations, with CORS configured from `ServerConfig`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::model::{ExpensePayload, ExpenseRecord};
use crate::observability::{Logger, Severity};
use crate::query::{QueryDescriptor, QueryExecutor};
use crate::store::{ExpenseStore, MutationNormalizer};

use super::errors::ApiResult;
use super::response::{DeleteResponse, InsertResponse, QueryResponse};

/// Shared application state
pub struct AppState {
    pub store: ExpenseStore,
}

type SharedState = Arc<AppState>;

/// HTTP server for the expense grid API
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// Create a new server over the given store with default configuration
    pub fn new(store: ExpenseStore) -> Self {
        Self::with_config(ServerConfig::default(), store)
    }

    /// Create a new server with custom configuration
    pub fn with_config(config: ServerConfig, store: ExpenseStore) -> Self {
        let state = Arc::new(AppState { store });
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(config: &ServerConfig, state: SharedState) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // Permissive for development when no origins configured
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .route("/expenses/query", post(query_handler))
            .route("/expenses", post(insert_handler))
            .route("/expenses/:key", put(update_handler))
            .route("/expenses/:key", delete(delete_handler))
            .layer(cors)
            .with_state(state)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        Logger::log(
            Severity::Info,
            "server_listening",
            &[("addr", &addr.to_string())],
        );

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Liveness probe
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Grid query handler: filter → search → sort → count → page
async fn query_handler(
    State(state): State<SharedState>,
    Json(descriptor): Json<QueryDescriptor>,
) -> ApiResult<Json<QueryResponse>> {
    let records = state.store.list();
    let result = QueryExecutor::execute(&records, &descriptor)?;
    Ok(Json(QueryResponse::from(result)))
}

/// Insert handler; responds 201 with the freshly generated key
async fn insert_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ExpensePayload>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    let record = MutationNormalizer::insert(&payload)?;
    let key = record.expense_id.clone();
    state.store.insert(record)?;

    Logger::log(Severity::Info, "expense_inserted", &[("key", &key)]);
    Ok((StatusCode::CREATED, Json(InsertResponse::new(key))))
}

/// Update handler; merges the payload into the existing record
async fn update_handler(
    State(state): State<SharedState>,
    Path(key): Path<String>,
    Json(payload): Json<ExpensePayload>,
) -> ApiResult<Json<ExpenseRecord>> {
    let updated = state.store.update(&key, &payload)?;

    Logger::log(Severity::Info, "expense_updated", &[("key", &key)]);
    Ok(Json(updated))
}

/// Delete handler; missing keys are a 404, not a silent no-op
async fn delete_handler(
    State(state): State<SharedState>,
    Path(key): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    state.store.remove(&key)?;

    Logger::log(Severity::Info, "expense_deleted", &[("key", &key)]);
    Ok(Json(DeleteResponse::success()))
}
