//! Guest profile service

use crate::{
    error::{AppError, AppResult},
    models::guest::{normalize_name, Guest, UpsertGuest},
    repository::Repository,
};

const DEFAULT_SEARCH_LIMIT: i64 = 20;
const MAX_SEARCH_LIMIT: i64 = 100;

#[derive(Clone)]
pub struct GuestsService {
    repository: Repository,
}

impl GuestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a guest profile by name (normalized before lookup)
    pub async fn get(&self, name: &str) -> AppResult<Guest> {
        let name = normalize_name(name);
        self.repository.guests.get_by_name(&name).await
    }

    /// Upsert a guest profile. Idempotent for identical input; blank
    /// incoming fields never erase stored ones.
    pub async fn upsert(&self, name: &str, data: &UpsertGuest) -> AppResult<Guest> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(AppError::Validation("Guest name is required".to_string()));
        }
        self.repository.guests.upsert(&name, data).await
    }

    /// Name search for the guest picker
    pub async fn search_names(&self, query: &str, limit: Option<i64>) -> AppResult<Vec<String>> {
        let limit = limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);
        self.repository.guests.search_names(query.trim(), limit).await
    }
}
