//! Solmar Server - Hotel Reservation Management System

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solmar_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("solmar_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Solmar Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Password gate
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Rooms
        .route("/rooms", get(api::rooms::list_rooms))
        .route("/rooms", post(api::rooms::create_room))
        .route("/rooms/:id", delete(api::rooms::delete_room))
        .route("/rooms/:id/reservations", get(api::rooms::list_room_reservations))
        // Reservations
        .route("/availability", get(api::reservations::check_availability))
        .route("/reservations", post(api::reservations::create_reservation))
        .route("/reservations/:id", get(api::reservations::get_reservation))
        .route("/reservations/:id", put(api::reservations::update_reservation))
        .route("/reservations/:id", delete(api::reservations::delete_reservation))
        .route("/reservations/:id/details", put(api::reservations::save_details))
        // Occupancy, reports, calendar
        .route("/occupancy", get(api::occupancy::get_occupancy))
        .route("/reports/daily", get(api::occupancy::get_daily_report))
        .route("/calendar/:year/:month", get(api::occupancy::get_calendar))
        // Blackouts
        .route("/blackouts", get(api::blackouts::list_blackouts))
        .route("/blackouts", post(api::blackouts::create_blackout))
        .route("/blackouts/:id", delete(api::blackouts::delete_blackout))
        // Guests
        .route("/guests", get(api::guests::search_guests))
        .route("/guests/:name", get(api::guests::get_guest))
        .route("/guests/:name", put(api::guests::upsert_guest))
        .route("/guests/:name/history", get(api::guests::get_guest_history))
        // Tariffs
        .route("/tariffs", get(api::tariffs::get_tariffs))
        .route("/tariffs", put(api::tariffs::set_tariffs))
        // Settings
        .route("/settings", get(api::settings::get_settings))
        .route("/settings", put(api::settings::update_settings))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
