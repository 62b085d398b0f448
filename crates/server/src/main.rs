// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use meet_roster::{AthleteTransition, ImportReport, SeasonData};
use meet_roster_api::{
    ApiError, BulkTransitionReport, BulkTransitionRequest, ImportOutcome, ImportRequest,
    RosterStatusResponse, SetGraduationYearRequest, SetSeasonRequest, advance_all_athletes,
    archive_season, get_current_season, get_season_data, graduate_all_seniors, import_results,
    list_archived_seasons, preview_import, resolve_reference_date, roster_status,
    set_current_season, set_graduation_year,
};
use meet_roster_domain::{ArchivedSeason, Season};
use meet_roster_persistence::SqliteStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tracing::{error, info};

/// Meet Roster Server - HTTP admin surface for result imports and roster lifecycle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The document store every operation runs against.
    store: Arc<SqliteStore>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always true.
    error: bool,
    /// A human-readable description of the failure.
    message: String,
}

/// An API error mapped to an HTTP status.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PersistenceFailure { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Query string of GET `/athletes/status`.
#[derive(Debug, Deserialize)]
struct StatusQuery {
    /// `YYYY-MM-DD`; today when absent.
    date: Option<String>,
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for POST `/imports`.
async fn handle_import(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportOutcome>, HttpError> {
    info!(meet = %request.meet.slug, "Handling import request");
    let outcome: ImportOutcome = import_results(app_state.store.as_ref(), &request).await?;
    Ok(Json(outcome))
}

/// Handler for POST `/imports/preview`.
///
/// Validates the file and reports per-row outcomes without writing.
async fn handle_preview_import(
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportReport>, HttpError> {
    let report: ImportReport = preview_import(&request)?;
    Ok(Json(report))
}

/// Handler for POST `/athletes/advance`.
async fn handle_advance(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<BulkTransitionRequest>,
) -> Result<Json<BulkTransitionReport>, HttpError> {
    let reference_date: Date = resolve_reference_date(request.reference_date.as_deref(), today())?;
    info!(%reference_date, "Handling advance request");
    let report: BulkTransitionReport = advance_all_athletes(
        app_state.store.as_ref(),
        reference_date,
        OffsetDateTime::now_utc(),
    )
    .await?;
    Ok(Json(report))
}

/// Handler for POST `/athletes/graduate`.
async fn handle_graduate(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<BulkTransitionRequest>,
) -> Result<Json<BulkTransitionReport>, HttpError> {
    let reference_date: Date = resolve_reference_date(request.reference_date.as_deref(), today())?;
    info!(%reference_date, "Handling graduate request");
    let report: BulkTransitionReport = graduate_all_seniors(
        app_state.store.as_ref(),
        reference_date,
        OffsetDateTime::now_utc(),
    )
    .await?;
    Ok(Json(report))
}

/// Handler for GET `/athletes/status`.
async fn handle_roster_status(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<RosterStatusResponse>, HttpError> {
    let reference_date: Date = resolve_reference_date(query.date.as_deref(), today())?;
    let response: RosterStatusResponse =
        roster_status(app_state.store.as_ref(), reference_date).await?;
    Ok(Json(response))
}

/// Handler for PUT `/athletes/{slug}/graduation-year`.
async fn handle_set_graduation_year(
    AxumState(app_state): AxumState<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<SetGraduationYearRequest>,
) -> Result<Json<AthleteTransition>, HttpError> {
    info!(athlete = %slug, year = request.graduation_year, "Handling graduation year correction");
    let transition: AthleteTransition = set_graduation_year(
        app_state.store.as_ref(),
        &slug,
        request.graduation_year,
        today(),
        OffsetDateTime::now_utc(),
    )
    .await?;
    Ok(Json(transition))
}

/// Handler for GET `/seasons/current`.
async fn handle_get_current_season(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Season>, HttpError> {
    Ok(Json(get_current_season(app_state.store.as_ref()).await?))
}

/// Handler for PUT `/seasons/current`.
async fn handle_set_current_season(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SetSeasonRequest>,
) -> Result<Json<Season>, HttpError> {
    Ok(Json(
        set_current_season(app_state.store.as_ref(), request).await?,
    ))
}

/// Handler for POST `/seasons/{year}/archive`.
async fn handle_archive_season(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<ArchivedSeason>, HttpError> {
    info!(year, "Handling archive request");
    let archived: ArchivedSeason =
        archive_season(app_state.store.as_ref(), year, OffsetDateTime::now_utc()).await?;
    Ok(Json(archived))
}

/// Handler for GET `/seasons/archived`.
async fn handle_list_archived_seasons(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<ArchivedSeason>>, HttpError> {
    Ok(Json(list_archived_seasons(app_state.store.as_ref()).await?))
}

/// Handler for GET `/seasons/{year}/data`.
async fn handle_get_season_data(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<SeasonData>, HttpError> {
    Ok(Json(get_season_data(app_state.store.as_ref(), year).await?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/imports", post(handle_import))
        .route("/imports/preview", post(handle_preview_import))
        .route("/athletes/advance", post(handle_advance))
        .route("/athletes/graduate", post(handle_graduate))
        .route("/athletes/status", get(handle_roster_status))
        .route(
            "/athletes/{slug}/graduation-year",
            put(handle_set_graduation_year),
        )
        .route(
            "/seasons/current",
            get(handle_get_current_season).put(handle_set_current_season),
        )
        .route("/seasons/archived", get(handle_list_archived_seasons))
        .route("/seasons/{year}/archive", post(handle_archive_season))
        .route("/seasons/{year}/data", get(handle_get_season_data))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("Initializing Meet Roster Server");

    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(store),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
