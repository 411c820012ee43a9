//! Repository layer for database operations

pub mod blackouts;
pub mod guests;
pub mod reservations;
pub mod rooms;
pub mod settings;
pub mod tariffs;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub rooms: rooms::RoomsRepository,
    pub reservations: reservations::ReservationsRepository,
    pub blackouts: blackouts::BlackoutsRepository,
    pub guests: guests::GuestsRepository,
    pub tariffs: tariffs::TariffsRepository,
    pub settings: settings::SettingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            rooms: rooms::RoomsRepository::new(pool.clone()),
            reservations: reservations::ReservationsRepository::new(pool.clone()),
            blackouts: blackouts::BlackoutsRepository::new(pool.clone()),
            guests: guests::GuestsRepository::new(pool.clone()),
            tariffs: tariffs::TariffsRepository::new(pool.clone()),
            settings: settings::SettingsRepository::new(pool.clone()),
            pool,
        }
    }
}
