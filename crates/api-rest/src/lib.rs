//! # API REST
//!
//! REST API implementation for the reminders service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON rejections, CORS, status mapping)
//!
//! Uses `api-shared` for wire types and validation, and `reminders-core` for the reminder
//! lifecycle.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;

use api_shared::response::{REMINDERS_FOUND, REMINDER_CREATED, REMINDER_FOUND};
use api_shared::{
    ApiResponse, CreateReminderReq, ErrorApiRes, HealthRes, HealthService, HttpStatus,
    ReminderApiRes, ReminderListApiRes, ReminderRes, ValidationApiRes,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use reminders_core::{ReminderId, ReminderService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::RestConfig;
pub use error::ApiError;

/// Application state for the REST API server
///
/// Holds the reminder lifecycle service. Every clone shares the same underlying store.
#[derive(Clone, Debug)]
pub struct AppState {
    reminder_service: ReminderService,
}

impl AppState {
    pub fn new(reminder_service: ReminderService) -> Self {
        Self { reminder_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reminders API",
        version = "1.0.0",
        description = "Create and retrieve reminders"
    ),
    paths(health, list_reminders, create_reminder, get_reminder),
    components(schemas(
        HealthRes,
        HttpStatus,
        CreateReminderReq,
        ReminderRes,
        ReminderApiRes,
        ReminderListApiRes,
        ValidationApiRes,
        ErrorApiRes,
    )),
    tags((name = "Reminders", description = "Reminders Management API"))
)]
pub struct ApiDoc;

/// Build the REST router.
///
/// Mounts the reminder and health endpoints. When `swagger_ui` is set, also serves the
/// OpenAPI document at `/api-docs/openapi.json` and Swagger UI at `/swagger-ui`.
pub fn router(state: AppState, swagger_ui: bool) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route(
            "/api/reminders",
            get(list_reminders).post(create_reminder),
        )
        .route("/api/reminders/:id", get(get_reminder));

    if swagger_ui {
        app = app
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app.layer(CorsLayer::permissive()).with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. Does not touch the store.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/reminders",
    tag = "Reminders",
    responses(
        (status = 200, description = "All stored reminders", body = ReminderListApiRes)
    )
)]
/// List every reminder
///
/// An empty store yields an empty `data` array, never an error.
#[axum::debug_handler]
async fn list_reminders(State(state): State<AppState>) -> Json<ReminderListApiRes> {
    let reminders = state
        .reminder_service
        .find_all()
        .into_iter()
        .map(ReminderRes::from)
        .collect();

    Json(ApiResponse::new(REMINDERS_FOUND, HttpStatus::Ok, reminders))
}

#[utoipa::path(
    post,
    path = "/api/reminders",
    tag = "Reminders",
    request_body = CreateReminderReq,
    responses(
        (status = 201, description = "Reminder created successfully", body = ReminderApiRes),
        (status = 400, description = "Invalid request", body = ValidationApiRes)
    )
)]
/// Create a new reminder
///
/// Validates the payload, then hands it to the lifecycle service, which fills creation time,
/// `PENDING` status and the deletion flag before the store assigns an identifier.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not valid JSON or `priority` is not a known value,
/// - `title` or `description` is blank, or `priority` is missing.
#[axum::debug_handler]
async fn create_reminder(
    State(state): State<AppState>,
    payload: Result<Json<CreateReminderReq>, JsonRejection>,
) -> Result<(StatusCode, Json<ReminderApiRes>), ApiError> {
    let Json(req) = payload.inspect_err(|e| {
        tracing::warn!("Rejected create reminder body: {}", e.body_text());
    })?;

    let draft = req.into_draft().map_err(|errors| {
        tracing::warn!(fields = ?errors.keys().collect::<Vec<_>>(), "Invalid create reminder request");
        ApiError::Validation(errors)
    })?;

    let reminder = state.reminder_service.create(draft);
    tracing::info!(reminder_id = reminder.id(), "Reminder created");

    Ok((
        error::status_code(HttpStatus::Created),
        Json(ApiResponse::new(
            REMINDER_CREATED,
            HttpStatus::Created,
            ReminderRes::from(reminder),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reminders/{id}",
    tag = "Reminders",
    params(
        ("id" = u64, Path, description = "Reminder identifier")
    ),
    responses(
        (status = 200, description = "Reminder found", body = ReminderApiRes),
        (status = 400, description = "Identifier is not a positive integer", body = ErrorApiRes),
        (status = 404, description = "Reminder not found", body = ErrorApiRes)
    )
)]
/// Read a reminder by identifier
///
/// # Errors
/// Returns:
/// - `400 Bad Request` if the identifier is not an unsigned integer,
/// - `404 Not Found` if no reminder has that identifier.
#[axum::debug_handler]
async fn get_reminder(
    State(state): State<AppState>,
    id: Result<Path<ReminderId>, PathRejection>,
) -> Result<Json<ReminderApiRes>, ApiError> {
    let Path(id) = id?;
    let reminder = state.reminder_service.find_by_id(id)?;

    Ok(Json(ApiResponse::new(
        REMINDER_FOUND,
        HttpStatus::Ok,
        ReminderRes::from(reminder),
    )))
}
