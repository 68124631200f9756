//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use gamegraph_domain::{Game, User};

use crate::api::auth;
use crate::app::App;
use crate::infrastructure::neo4j::RECOMMENDATION_LIMIT;
use crate::infrastructure::ports::{RepoError, SearchFilter};

/// Result cap when a search request doesn't specify one.
const DEFAULT_SEARCH_LIMIT: i64 = 30;
/// Result cap for the full catalog listing.
const DEFAULT_LIST_LIMIT: i64 = 1000;

/// Create the full application router.
///
/// Everything under `/api/games` sits behind the shared-secret gate;
/// the health endpoint is exempt.
pub fn router(app: Arc<App>) -> Router {
    let games = Router::new()
        .route("/search", get(search_games))
        .route("/all", get(list_games))
        .route("/filters", get(get_filters))
        .route("/users", get(list_users))
        .route("/users/{username}/likes", get(list_user_likes))
        .route("/recommendations/{username}", get(get_recommendations))
        .route("/create", post(create_game))
        .route(
            "/wishlist/{game_id}",
            post(add_to_wishlist).delete(remove_from_wishlist),
        )
        .route("/{id}", get(get_game).put(update_game).delete(delete_game))
        .route_layer(middleware::from_fn_with_state(
            app.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/games", games)
        .with_state(app)
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams {
    search_text: Option<String>,
    /// Comma-separated attribute name lists.
    genres: Option<String>,
    developers: Option<String>,
    mechanics: Option<String>,
    max_results: Option<i64>,
}

fn split_csv(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn validated_limit(requested: Option<i64>, default: i64) -> Result<i64, ApiError> {
    let limit = requested.unwrap_or(default);
    if limit < 1 {
        return Err(ApiError::BadRequest(
            "maxResults must be at least 1".to_string(),
        ));
    }
    Ok(limit)
}

async fn search_games(
    State(app): State<Arc<App>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let limit = validated_limit(params.max_results, DEFAULT_SEARCH_LIMIT)?;
    let filter = SearchFilter {
        text: params.search_text,
        genres: split_csv(params.genres),
        developers: split_csv(params.developers),
        mechanics: split_csv(params.mechanics),
    };

    let games = app.games.search(filter, limit).await?;
    Ok(Json(games))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    max_results: Option<i64>,
}

async fn list_games(
    State(app): State<Arc<App>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let limit = validated_limit(params.max_results, DEFAULT_LIST_LIMIT)?;
    let games = app.games.list(limit).await?;
    Ok(Json(games))
}

async fn get_game(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<Json<Game>, ApiError> {
    let game = app.games.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(game))
}

async fn get_filters(State(app): State<Arc<App>>) -> Result<Json<serde_json::Value>, ApiError> {
    let genres = app.taxonomy.list_genres().await?;
    let mechanics = app.taxonomy.list_mechanics().await?;
    let developers = app.taxonomy.list_developers().await?;

    Ok(Json(serde_json::json!({
        "genres": genres,
        "mechanics": mechanics,
        "developers": developers,
    })))
}

// =============================================================================
// Write path
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PerformedBy {
    performed_by: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateGameRequest {
    game: Game,
    #[serde(default)]
    developer_name: Option<String>,
    #[serde(default)]
    genre_names: Vec<String>,
    #[serde(default)]
    mechanic_names: Vec<String>,
}

async fn create_game(
    State(app): State<Arc<App>>,
    Query(PerformedBy { performed_by }): Query<PerformedBy>,
    Json(request): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let created = app
        .games
        .upsert(
            &request.game,
            request.developer_name,
            request.genre_names,
            request.mechanic_names,
            &performed_by,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update runs the identical upsert procedure with the target id. The
/// body's attribute lists are the new edge sets; omitted lists mean
/// "replace with empty".
async fn update_game(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Query(PerformedBy { performed_by }): Query<PerformedBy>,
    Json(update): Json<Game>,
) -> Result<Json<Game>, ApiError> {
    let developer_name = update.developers.first().cloned();
    let genre_names = update.genres.clone();
    let mechanic_names = update.mechanics.clone();

    let mut game = update;
    game.id = id;

    let updated = app
        .games
        .upsert(
            &game,
            developer_name,
            genre_names,
            mechanic_names,
            &performed_by,
        )
        .await?;

    Ok(Json(updated))
}

async fn delete_game(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
    Query(PerformedBy { performed_by }): Query<PerformedBy>,
) -> Result<StatusCode, ApiError> {
    app.games.delete(id, &performed_by).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Users & likes
// =============================================================================

async fn list_users(State(app): State<Arc<App>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = app.users.list_users().await?;
    Ok(Json(users))
}

async fn list_user_likes(
    State(app): State<Arc<App>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<i64>>, ApiError> {
    let likes = app.users.list_likes(&username).await?;
    Ok(Json(likes))
}

async fn get_recommendations(
    State(app): State<Arc<App>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let games = app
        .recommendations
        .recommend(&username, RECOMMENDATION_LIMIT)
        .await?;
    Ok(Json(games))
}

#[derive(Debug, Deserialize)]
struct UsernameParam {
    username: String,
}

async fn add_to_wishlist(
    State(app): State<Arc<App>>,
    Path(game_id): Path<i64>,
    Query(UsernameParam { username }): Query<UsernameParam>,
) -> Result<StatusCode, ApiError> {
    app.users.add_like(&username, game_id).await?;
    Ok(StatusCode::OK)
}

async fn remove_from_wishlist(
    State(app): State<Arc<App>>,
    Path(game_id): Path<i64>,
    Query(UsernameParam { username }): Query<UsernameParam>,
) -> Result<StatusCode, ApiError> {
    app.users.remove_like(&username, game_id).await?;
    Ok(StatusCode::OK)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Forbidden(String),
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error serving request: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound => ApiError::NotFound,
            RepoError::Forbidden(msg) => ApiError::Forbidden(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
