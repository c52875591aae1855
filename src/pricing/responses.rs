//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::PlanCalculator;
use super::format::{site_tier_label, QuoteDisplay};
use super::models::{ParticipantCategory, PlanQuote, SiteTier};
use super::tables::tier_rates;

/// Response for a plan quote.
///
/// When `computable` is false, `selling_price` is `null` and every amount is
/// zero; none of them may be shown as a price.
#[derive(Debug, Serialize)]
pub struct QuotePlanResponse {
    pub insurance_fee: i64,
    pub labor_cost: i64,
    pub facility_fee: i64,
    pub total_cost: i64,
    pub selling_price: Option<i64>,
    pub profit: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub margin_ratio: Decimal,
    pub computable: bool,
    pub days: i64,
    pub site_tier: SiteTier,
    pub participant: ParticipantCategory,
    pub display: QuoteDisplay,
}

impl From<&PlanQuote> for QuotePlanResponse {
    fn from(quote: &PlanQuote) -> Self {
        let breakdown = quote.outcome.breakdown();

        Self {
            insurance_fee: breakdown.insurance_fee,
            labor_cost: breakdown.labor_cost,
            facility_fee: breakdown.facility_fee,
            total_cost: breakdown.total_cost,
            selling_price: quote.outcome.selling_price(),
            profit: breakdown.profit,
            margin_ratio: breakdown.margin_ratio,
            computable: quote.outcome.is_computable(),
            days: quote.days.as_days(),
            site_tier: quote.site_tier,
            participant: quote.participant,
            display: QuoteDisplay::from(quote),
        }
    }
}

/// Per-tier rates in the rate card
#[derive(Debug, Serialize)]
pub struct TierRateResponse {
    pub site_tier: SiteTier,
    pub label: &'static str,
    pub labor_per_day: i64,
    pub facility_per_day: i64,
}

/// One insurance table row
#[derive(Debug, Serialize)]
pub struct InsuranceFeeResponse {
    pub days: i64,
    pub fee: i64,
}

/// Response for the rate card
#[derive(Debug, Serialize)]
pub struct RateCardResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub profit_margin: Decimal,
    pub price_increment: i64,
    pub tiers: Vec<TierRateResponse>,
    pub insurance: Vec<InsuranceFeeResponse>,
}

impl From<&PlanCalculator> for RateCardResponse {
    fn from(calculator: &PlanCalculator) -> Self {
        let tiers = SiteTier::ALL
            .iter()
            .map(|&tier| {
                let rates = tier_rates(tier);
                TierRateResponse {
                    site_tier: tier,
                    label: site_tier_label(tier),
                    labor_per_day: rates.labor_per_day,
                    facility_per_day: rates.facility_per_day,
                }
            })
            .collect();

        let insurance = calculator
            .insurance_table()
            .entries()
            .iter()
            .map(|&(days, fee)| InsuranceFeeResponse { days, fee })
            .collect();

        Self {
            profit_margin: calculator.policy().profit_margin(),
            price_increment: calculator.policy().price_increment(),
            tiers,
            insurance,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
