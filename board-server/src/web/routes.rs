//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::board::{SelectedTrip, select_catchable};
use crate::domain::{RouteConfig, TimeError};
use crate::rejseplanen::{RejseplanenError, TripQuery};

use super::dto::*;
use super::session::BoardSession;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/health", get(health))
        .route("/api/next", get(next_train))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The departure board for the selected route.
///
/// Every render fetches fresh trips; toggling a route is just another render
/// with a different `route` query parameter.
async fn board_page(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, PageError> {
    let routes = &state.settings.routes;
    let session = BoardSession::from_request(query.route.as_deref(), routes);

    let trip = next_catchable(&state, session.route(routes)).await?;

    let template = BoardTemplate::new(&session, routes, state.settings.walk(), trip.as_ref());
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;

    Ok(Html(html))
}

/// The next catchable train for a route, as JSON.
async fn next_train(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<NextTrainResponse>, AppError> {
    let routes = &state.settings.routes;
    let session = BoardSession::from_request(query.route.as_deref(), routes);
    let route = session.route(routes);

    let trip = next_catchable(&state, route).await?;

    Ok(Json(NextTrainResponse::new(
        route,
        state.settings.walk(),
        trip.as_ref(),
    )))
}

/// Fetch trips for a route and pick the first one the user can walk to.
async fn next_catchable(
    state: &AppState,
    route: &RouteConfig,
) -> Result<Option<SelectedTrip>, AppError> {
    let query = TripQuery::new(
        route.origin.clone(),
        route.destination.clone(),
        state.settings.num_results,
    );

    let trips = state.trips.search_trips(&query).await?;
    let now = state.clock.now();

    Ok(select_catchable(&trips, state.settings.walk(), now)?)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The trip planner could not be reached or answered with an error
    Upstream { message: String },
    /// The trip planner answered with a time we cannot read
    UpstreamFormat { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::UpstreamFormat { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::Upstream { message }
            | AppError::UpstreamFormat { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl From<RejseplanenError> for AppError {
    fn from(e: RejseplanenError) -> Self {
        if let RejseplanenError::Json {
            body: Some(body), ..
        } = &e
        {
            error!(body = %body, "undecodable trip response");
        }
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<TimeError> for AppError {
    fn from(e: TimeError) -> Self {
        AppError::UpstreamFormat {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message().to_string();

        error!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// An [`AppError`] rendered as an HTML page.
#[derive(Debug)]
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        PageError(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.message().to_string();

        error!(%status, "{message}");

        let (title, summary) = match self.0 {
            AppError::Upstream { .. } => (
                "Could not reach Rejseplanen",
                "The trip search failed. Reload to try again.",
            ),
            AppError::UpstreamFormat { .. } => (
                "Unexpected answer from Rejseplanen",
                "Rejseplanen sent a departure time this board cannot read.",
            ),
            AppError::Internal { .. } => ("Something went wrong", "The page could not be rendered."),
        };

        let page = ErrorTemplate {
            title: title.to_string(),
            message: summary.to_string(),
            details: Some(message),
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (status, format!("Template error: {e}")).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_clock_time;

    #[test]
    fn time_error_is_bad_gateway() {
        let err: AppError = parse_clock_time("8.20").unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.message().contains("8.20"));
    }

    #[test]
    fn upstream_error_is_internal() {
        let err: AppError = RejseplanenError::Unauthorized.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "unauthorized: check REJSEPLANEN_API_KEY");
    }

    #[test]
    fn page_error_renders_html() {
        let response = PageError::from(AppError::UpstreamFormat {
            message: "unexpected time format".into(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
    }
}
