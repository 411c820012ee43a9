//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, blackouts, guests, health, occupancy, reservations, rooms, settings, tariffs};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Solmar API",
        version = "1.0.0",
        description = "Hotel Reservation Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Solmar Team")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Rooms
        rooms::list_rooms,
        rooms::create_room,
        rooms::delete_room,
        rooms::list_room_reservations,
        // Reservations
        reservations::check_availability,
        reservations::create_reservation,
        reservations::update_reservation,
        reservations::get_reservation,
        reservations::delete_reservation,
        reservations::save_details,
        // Occupancy
        occupancy::get_occupancy,
        occupancy::get_daily_report,
        occupancy::get_calendar,
        // Blackouts
        blackouts::list_blackouts,
        blackouts::create_blackout,
        blackouts::delete_blackout,
        // Guests
        guests::search_guests,
        guests::get_guest,
        guests::upsert_guest,
        guests::get_guest_history,
        // Tariffs
        tariffs::get_tariffs,
        tariffs::set_tariffs,
        // Settings
        settings::get_settings,
        settings::update_settings,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::SessionInfo,
            crate::models::claims::StaffRole,
            // Rooms
            crate::models::room::Room,
            crate::models::room::CreateRoom,
            crate::models::room::RoomStatus,
            // Reservations
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationStatus,
            crate::models::reservation::ReservationDetails,
            crate::models::reservation::ReservationWithRoom,
            crate::models::reservation::DetailsInput,
            crate::models::reservation::ReservationView,
            reservations::AvailabilityResponse,
            reservations::ReservationRequest,
            reservations::ReservationIdResponse,
            // Occupancy
            crate::models::report::DayRow,
            crate::models::report::CalendarCell,
            occupancy::OccupancyMode,
            // Blackouts
            crate::models::blackout::Blackout,
            crate::models::blackout::CreateBlackout,
            // Guests
            crate::models::guest::Guest,
            crate::models::guest::UpsertGuest,
            // Tariffs
            crate::models::tariff::Tariff,
            crate::models::tariff::SetTariffs,
            // Settings
            settings::UpdateSettingsRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Password gate"),
        (name = "rooms", description = "Room management"),
        (name = "reservations", description = "Reservation lifecycle and availability"),
        (name = "occupancy", description = "Occupancy queries, reports and calendar"),
        (name = "blackouts", description = "Hotel-wide blocked periods"),
        (name = "guests", description = "Guest profiles"),
        (name = "tariffs", description = "Nightly rates"),
        (name = "settings", description = "System settings")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
