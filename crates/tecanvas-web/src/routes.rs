//! HTTP routes of the connection page.
//!
//! Every edit endpoint answers with a `302 Found` back to `/`, so the browser
//! re-reads the backend and shows its real state.

use std::sync::Arc;

use axum::extract::{Form, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tecanvas_application::ConnectionUseCase;
use tecanvas_core::TecanvasError;

use crate::render::PageRenderer;

/// State shared by every route.
#[derive(Clone)]
pub struct AppState {
    usecase: ConnectionUseCase,
    renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(usecase: ConnectionUseCase) -> Result<Self, minijinja::Error> {
        Ok(Self {
            usecase,
            renderer: Arc::new(PageRenderer::new()?),
        })
    }
}

/// Errors a route turns into an error response.
#[derive(Debug)]
pub enum RouteError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        match self {
            RouteError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            RouteError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct TypeForm {
    #[serde(rename = "type", default)]
    group_type: String,
}

/// Submitted form as (name, value) pairs. Only names carry meaning.
type FieldForm = Form<Vec<(String, String)>>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(view))
        .route("/type", post(select_type))
        .route("/add", post(add_connection))
        .route("/delete", post(delete_connections))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

fn redirect_to_view() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

fn field_names(fields: Vec<(String, String)>) -> impl Iterator<Item = String> {
    fields.into_iter().map(|(name, _)| name)
}

/// How a rejected add submission is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddFailure {
    /// The form does not match the template that produced it.
    Fatal,
    BadRequest,
}

impl AddFailure {
    fn of(err: &TecanvasError) -> Self {
        if err.is_invariant_violation() {
            AddFailure::Fatal
        } else {
            AddFailure::BadRequest
        }
    }
}

/// Stops the process. Used when a form does not match the template that
/// produced it, which means the deployed template and interpreter disagree.
fn abort_on_invariant_violation(err: &TecanvasError) -> ! {
    tracing::error!("[Web] Fatal: {}", err);
    std::process::exit(1)
}

async fn view(State(state): State<AppState>) -> Result<Html<String>, RouteError> {
    let snapshot = state.usecase.snapshot().await;
    state.renderer.render(&snapshot).map(Html).map_err(|e| {
        tracing::error!("[Web] Failed to render page: {}", e);
        RouteError::Internal("failed to render page".to_string())
    })
}

async fn select_type(State(state): State<AppState>, Form(form): Form<TypeForm>) -> Response {
    state.usecase.select_type(&form.group_type).await;
    redirect_to_view()
}

async fn add_connection(State(state): State<AppState>, Form(fields): FieldForm) -> Response {
    match state.usecase.add_connection(field_names(fields)).await {
        Ok(_) => redirect_to_view(),
        Err(e) => match AddFailure::of(&e) {
            AddFailure::Fatal => abort_on_invariant_violation(&e),
            AddFailure::BadRequest => RouteError::BadRequest(e.to_string()).into_response(),
        },
    }
}

async fn delete_connections(
    State(state): State<AppState>,
    Form(fields): FieldForm,
) -> Result<Response, RouteError> {
    state
        .usecase
        .delete_connections(field_names(fields))
        .await
        .map_err(|e| {
            tracing::warn!("[Web] Rejected delete submission: {}", e);
            RouteError::BadRequest(e.to_string())
        })?;
    Ok(redirect_to_view())
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    tracing::info!(
        "[Web] Method: {}, Status: {}, URL: {}",
        method,
        response.status().as_u16(),
        uri
    );
    response
}

#[cfg(test)]
mod tests {
    use tecanvas_core::parse_add_intent;

    use super::*;

    fn add_failure(fields: &[&str]) -> AddFailure {
        AddFailure::of(&parse_add_intent(fields).unwrap_err())
    }

    #[test]
    fn test_foreign_add_field_is_fatal() {
        assert_eq!(add_failure(&["te:G1", "ca:C7", "submit"]), AddFailure::Fatal);
    }

    #[test]
    fn test_missing_add_side_is_fatal() {
        assert_eq!(add_failure(&["te:G1"]), AddFailure::Fatal);
        assert_eq!(add_failure(&["ca:C7"]), AddFailure::Fatal);
    }

    #[test]
    fn test_other_add_errors_are_bad_requests() {
        assert_eq!(
            AddFailure::of(&TecanvasError::malformed_token("G1")),
            AddFailure::BadRequest
        );
        assert_eq!(
            AddFailure::of(&TecanvasError::transport("refused")),
            AddFailure::BadRequest
        );
    }
}
