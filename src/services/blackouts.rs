//! Blackout period service

use chrono::NaiveDate;

use crate::{
    calendar,
    error::{AppError, AppResult},
    models::blackout::{Blackout, CreateBlackout},
    repository::Repository,
};

#[derive(Clone)]
pub struct BlackoutsService {
    repository: Repository,
}

impl BlackoutsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a blackout period; the end date is exclusive and must follow
    /// the start date
    pub async fn create(&self, mut data: CreateBlackout) -> AppResult<Blackout> {
        data.title = data.title.trim().to_string();
        if data.title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        if calendar::nights(data.start_date, data.end_date) <= 0 {
            return Err(AppError::Range("End must be after start".to_string()));
        }
        self.repository.blackouts.create(&data).await
    }

    /// Remove a blackout period
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.blackouts.delete(id).await
    }

    /// All blackout periods, most recent first
    pub async fn list(&self) -> AppResult<Vec<Blackout>> {
        self.repository.blackouts.list().await
    }

    /// Blackouts intersecting a display window
    pub async fn in_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Blackout>> {
        self.repository.blackouts.in_range(start, end).await
    }

    /// Does `[start, end)` intersect any stored blackout?
    pub async fn intersects_any(&self, start: NaiveDate, end: NaiveDate) -> AppResult<bool> {
        self.repository.blackouts.intersects_any(start, end).await
    }
}
