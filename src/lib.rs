//! Solmar Hotel Reservation Management System
//!
//! A Rust implementation of the Solmar single-property reservation
//! manager, providing a REST JSON API for rooms, reservations, blackout
//! periods, tariffs and guest profiles.

use std::sync::Arc;

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
