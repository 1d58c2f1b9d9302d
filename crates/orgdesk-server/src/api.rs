//! Router, handlers and error mapping.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use orgdesk_auth::AuthService;
use orgdesk_core::error::ConsoleError;
use orgdesk_core::models::organization::{CreateOrganization, Organization, UpdateOrganization};
use orgdesk_core::models::session::LoginOutput;
use orgdesk_core::models::user::User;
use orgdesk_core::repository::{Authenticator, OrganizationRepository, SlotStore};
use orgdesk_store::repository::SlotOrganizationRepository;
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

/// Shared handler state.
pub struct AppState<S: SlotStore> {
    pub registry: Arc<SlotOrganizationRepository<S>>,
    pub auth: Arc<AuthService>,
}

impl<S: SlotStore> AppState<S> {
    pub fn new(registry: SlotOrganizationRepository<S>, auth: AuthService) -> Self {
        Self {
            registry: Arc::new(registry),
            auth: Arc::new(auth),
        }
    }
}

impl<S: SlotStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            auth: self.auth.clone(),
        }
    }
}

pub fn router<S: SlotStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/login", post(login::<S>))
        .route(
            "/organizations",
            get(list_organizations::<S>).post(create_organization::<S>),
        )
        .route(
            "/organizations/{id}",
            get(get_organization::<S>)
                .put(update_organization::<S>)
                .delete(delete_organization::<S>),
        )
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A [`ConsoleError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ConsoleError);

impl From<ConsoleError> for ApiError {
    fn from(err: ConsoleError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ConsoleError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ConsoleError::AlreadyExists { .. } => StatusCode::CONFLICT,
            ConsoleError::NotFound { .. } => StatusCode::NOT_FOUND,
            ConsoleError::Validation { .. } => StatusCode::BAD_REQUEST,
            ConsoleError::Storage(_) | ConsoleError::Operation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status.is_server_error() {
            error!(error = %self.0, kind = self.0.kind(), "Request failed");
            "Operation failed".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ConsoleError::Validation {
            message: rejection.body_text(),
        })
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(ConsoleError::Validation {
            message: rejection.body_text(),
        })
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// JSON request body whose rejections render as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
struct ApiJson<T>(T);

/// Path parameters whose rejections render as [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
struct ApiPath<T>(T);

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn login<S: SlotStore>(
    State(state): State<AppState<S>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginOutput>> {
    let output = state.auth.login(&body.email, &body.password).await?;
    Ok(Json(output))
}

/// Resolve the bearer token on the request to a user.
async fn authorize(auth: &AuthService, headers: &HeaderMap) -> ApiResult<User> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ConsoleError::AuthenticationFailed {
            reason: "missing bearer token".into(),
        })?;
    Ok(auth.validate_token(token).await?)
}

async fn list_organizations<S: SlotStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Organization>>> {
    authorize(&state.auth, &headers).await?;
    Ok(Json(state.registry.list().await?))
}

async fn create_organization<S: SlotStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    ApiJson(body): ApiJson<CreateOrganization>,
) -> ApiResult<(StatusCode, Json<Organization>)> {
    authorize(&state.auth, &headers).await?;
    let org = state.registry.create(body).await?;
    Ok((StatusCode::CREATED, Json(org)))
}

async fn get_organization<S: SlotStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Organization>> {
    authorize(&state.auth, &headers).await?;
    Ok(Json(state.registry.get_by_id(id).await?))
}

async fn update_organization<S: SlotStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<UpdateOrganization>,
) -> ApiResult<Json<Organization>> {
    authorize(&state.auth, &headers).await?;
    Ok(Json(state.registry.update(id, body).await?))
}

async fn delete_organization<S: SlotStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<StatusCode> {
    authorize(&state.auth, &headers).await?;
    state.registry.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
