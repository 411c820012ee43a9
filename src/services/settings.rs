//! Key/value settings service (language choice, simplified-view toggle)

use std::collections::HashMap;

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All settings as a map
    pub async fn get_all(&self) -> AppResult<HashMap<String, String>> {
        self.repository.settings.get_all().await
    }

    /// Upsert the given entries and return the resulting map
    pub async fn update(
        &self,
        entries: &HashMap<String, String>,
    ) -> AppResult<HashMap<String, String>> {
        for (key, value) in entries {
            self.repository.settings.set(key, value).await?;
        }
        self.repository.settings.get_all().await
    }
}
