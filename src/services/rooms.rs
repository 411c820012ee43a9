//! Room management service

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::room::{Room, RoomStatus},
    repository::Repository,
};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all rooms
    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.repository.rooms.list().await
    }

    /// Room-status view: each room with its occupant on `day`, if any
    pub async fn list_with_status(&self, day: NaiveDate) -> AppResult<Vec<RoomStatus>> {
        self.repository.rooms.list_with_status(day).await
    }

    /// Create a room with a unique display number
    pub async fn create(&self, number: &str) -> AppResult<Room> {
        let number = number.trim();
        if number.is_empty() {
            return Err(AppError::Validation("Room number is required".to_string()));
        }
        self.repository.rooms.create(number).await
    }

    /// Delete a room and every reservation that belongs to it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.rooms.delete(id).await
    }
}
