//! HTTP routes for the judo plan simulator.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::models::PlanRequest;
use super::requests::QuotePlanRequest;
use super::responses::{QuotePlanResponse, RateCardResponse};

/// Pricing API routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/judo-plan/quote", post(quote_plan))
        .route("/api/pricing/judo-plan/rates", get(rate_card))
}

/// Quote a plan for the simulator's current inputs
pub async fn quote_plan(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuotePlanRequest>, JsonRejection>,
) -> Result<Json<QuotePlanResponse>> {
    let Json(payload) = payload?;
    let request = PlanRequest::from(payload);
    let quote = state.calculator.quote(&request);

    tracing::debug!(
        days = request.days.as_days(),
        site_tier = request.site_tier.sites(),
        participant = ?request.participant,
        selling_price = ?quote.outcome.selling_price(),
        "Quoted judo plan"
    );

    Ok(Json(QuotePlanResponse::from(&quote)))
}

/// Rate card used by the calculator
pub async fn rate_card(State(state): State<AppState>) -> Json<RateCardResponse> {
    Json(RateCardResponse::from(&state.calculator))
}
