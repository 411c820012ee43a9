//! Password gate for staff sessions
//!
//! Two shared passwords from configuration, no user directory. The admin
//! password additionally unlocks payment details.

use chrono::{Duration, Utc};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::claims::{StaffClaims, StaffRole},
};

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Open a session for the given password; the admin password wins when
    /// both match.
    pub fn login(&self, password: &str) -> AppResult<(String, StaffRole)> {
        let role = if password == self.config.admin_password {
            StaffRole::Admin
        } else if password == self.config.staff_password {
            StaffRole::Staff
        } else {
            return Err(AppError::Authentication("Invalid password".to_string()));
        };

        let now = Utc::now();
        let claims = StaffClaims {
            sub: "staff".to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.jwt_expiration_hours as i64)).timestamp(),
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Token creation failed: {}", e)))?;
        Ok((token, role))
    }
}
