//! Business logic services

pub mod auth;
pub mod blackouts;
pub mod guests;
pub mod occupancy;
pub mod reservations;
pub mod rooms;
pub mod settings;
pub mod tariffs;

use crate::{config::AuthConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub rooms: rooms::RoomsService,
    pub reservations: reservations::ReservationsService,
    pub occupancy: occupancy::OccupancyService,
    pub blackouts: blackouts::BlackoutsService,
    pub tariffs: tariffs::TariffsService,
    pub guests: guests::GuestsService,
    pub settings: settings::SettingsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(auth_config),
            rooms: rooms::RoomsService::new(repository.clone()),
            reservations: reservations::ReservationsService::new(repository.clone()),
            occupancy: occupancy::OccupancyService::new(repository.clone()),
            blackouts: blackouts::BlackoutsService::new(repository.clone()),
            tariffs: tariffs::TariffsService::new(repository.clone()),
            guests: guests::GuestsService::new(repository.clone()),
            settings: settings::SettingsService::new(repository.clone()),
            repository,
        }
    }

    /// Readiness probe against the database
    pub async fn db_ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.repository.pool)
            .await?;
        Ok(())
    }
}
