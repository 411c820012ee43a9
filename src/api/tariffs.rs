//! Tariff endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::tariff::{SetTariffs, Tariff},
};

use super::AuthenticatedStaff;

/// Nightly rates by room type
#[utoipa::path(
    get,
    path = "/tariffs",
    tag = "tariffs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tariffs", body = Vec<Tariff>)
    )
)]
pub async fn get_tariffs(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<Vec<Tariff>>> {
    let tariffs = state.services.tariffs.list().await?;
    Ok(Json(tariffs))
}

/// Update nightly rates
#[utoipa::path(
    put,
    path = "/tariffs",
    tag = "tariffs",
    security(("bearer_auth" = [])),
    request_body = SetTariffs,
    responses(
        (status = 200, description = "Updated tariffs", body = Vec<Tariff>)
    )
)]
pub async fn set_tariffs(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(request): Json<SetTariffs>,
) -> AppResult<Json<Vec<Tariff>>> {
    let tariffs = state.services.tariffs.set(&request.tariffs).await?;
    Ok(Json(tariffs))
}
