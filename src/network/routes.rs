//! HTTP routes
//!
//! Each handler decodes its request into a [`Command`], runs it on the
//! blocking pool and renders the [`Reply`].

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put, MethodRouter};
use axum::{Json, Router};

use crate::character::{Character, CharacterPatch};
use crate::engine::Engine;
use crate::protocol::{BattleRequest, Command, Reply};
use crate::store::{CharacterQuery, QueryParams};

use super::ApiError;

/// Plain-text banner served at `/`
pub const BANNER: &str = "Multiverse API is running! 🌌";

/// Build the router over `engine`
pub fn routes(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/characters", get(list_characters).post(create_character))
        .route(
            "/characters/random",
            get(random_character).merge(fixed_id_writes("random")),
        )
        .route(
            "/characters/search",
            get(search_characters).merge(fixed_id_writes("search")),
        )
        .route(
            "/characters/auto",
            post(generate_character)
                .merge(fixed_id_writes("auto"))
                .get(|State(engine): State<Arc<Engine>>| get_by_id(engine, "auto".to_string())),
        )
        .route(
            "/characters/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route("/statistics", get(statistics))
        .route("/battle", post(battle))
        .with_state(engine)
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = if self.is_created() {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        (status, Json(self)).into_response()
    }
}

/// Update and delete for a character whose id matches a static path segment
///
/// `/characters/{id}` never sees these ids, so the static route has to
/// carry the writes itself.
fn fixed_id_writes(id: &'static str) -> MethodRouter<Arc<Engine>> {
    put(
        move |State(engine): State<Arc<Engine>>,
              payload: Result<Json<CharacterPatch>, JsonRejection>| {
            update_by_id(engine, id.to_string(), payload)
        },
    )
    .delete(move |State(engine): State<Arc<Engine>>| delete_by_id(engine, id.to_string()))
}

/// Run `command` off the async workers (persistence is blocking file I/O)
async fn dispatch(engine: Arc<Engine>, command: Command) -> Result<Reply, ApiError> {
    let kind = command.command_type();

    tokio::task::spawn_blocking(move || engine.execute(command))
        .await
        .map_err(|e| ApiError::Internal(format!("Worker task failed: {}", e)))?
        .map_err(|e| ApiError::from_engine(kind, e))
}

// =============================================================================
// Service
// =============================================================================

async fn banner() -> &'static str {
    BANNER
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Characters
// =============================================================================

async fn list_characters(State(engine): State<Arc<Engine>>) -> Result<Reply, ApiError> {
    dispatch(engine, Command::List).await
}

async fn random_character(State(engine): State<Arc<Engine>>) -> Result<Reply, ApiError> {
    dispatch(engine, Command::Random).await
}

async fn search_characters(
    State(engine): State<Arc<Engine>>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Reply, ApiError> {
    let Query(params) = params?;
    let query = CharacterQuery::from_params(&params)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    dispatch(engine, Command::Query { query }).await
}

async fn get_character(
    State(engine): State<Arc<Engine>>,
    Path(id): Path<String>,
) -> Result<Reply, ApiError> {
    get_by_id(engine, id).await
}

async fn get_by_id(engine: Arc<Engine>, id: String) -> Result<Reply, ApiError> {
    dispatch(engine, Command::Get { id }).await
}

async fn create_character(
    State(engine): State<Arc<Engine>>,
    payload: Result<Json<Character>, JsonRejection>,
) -> Result<Reply, ApiError> {
    let Json(character) = payload?;
    dispatch(engine, Command::Create { character }).await
}

async fn generate_character(State(engine): State<Arc<Engine>>) -> Result<Reply, ApiError> {
    dispatch(engine, Command::Generate).await
}

async fn update_character(
    State(engine): State<Arc<Engine>>,
    Path(id): Path<String>,
    payload: Result<Json<CharacterPatch>, JsonRejection>,
) -> Result<Reply, ApiError> {
    update_by_id(engine, id, payload).await
}

async fn update_by_id(
    engine: Arc<Engine>,
    id: String,
    payload: Result<Json<CharacterPatch>, JsonRejection>,
) -> Result<Reply, ApiError> {
    let Json(patch) = payload?;
    dispatch(engine, Command::Update { id, patch }).await
}

async fn delete_character(
    State(engine): State<Arc<Engine>>,
    Path(id): Path<String>,
) -> Result<Reply, ApiError> {
    delete_by_id(engine, id).await
}

async fn delete_by_id(engine: Arc<Engine>, id: String) -> Result<Reply, ApiError> {
    dispatch(engine, Command::Delete { id }).await
}

// =============================================================================
// Statistics & Battle
// =============================================================================

async fn statistics(State(engine): State<Arc<Engine>>) -> Result<Reply, ApiError> {
    dispatch(engine, Command::Stats).await
}

async fn battle(
    State(engine): State<Arc<Engine>>,
    payload: Result<Json<BattleRequest>, JsonRejection>,
) -> Result<Reply, ApiError> {
    let Json(request) = payload?;
    dispatch(engine, request.into()).await
}
