//! Domain types for judo plan quotes.
//!
//! Inputs are closed enumerations so an unknown tier or category cannot
//! reach the calculator. Outputs are plain values built once per request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of training sites visited per day of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SiteTier {
    #[default]
    OneSite,
    TwoSites,
    ThreeSites,
}

impl SiteTier {
    pub const ALL: [SiteTier; 3] = [SiteTier::OneSite, SiteTier::TwoSites, SiteTier::ThreeSites];

    /// Sites visited per day (1, 2 or 3)
    pub const fn sites(self) -> u8 {
        match self {
            SiteTier::OneSite => 1,
            SiteTier::TwoSites => 2,
            SiteTier::ThreeSites => 3,
        }
    }
}

/// Rejected wire value for a site tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("site tier must be 1, 2 or 3, got {0}")]
pub struct InvalidSiteTier(pub u8);

impl TryFrom<u8> for SiteTier {
    type Error = InvalidSiteTier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SiteTier::OneSite),
            2 => Ok(SiteTier::TwoSites),
            3 => Ok(SiteTier::ThreeSites),
            other => Err(InvalidSiteTier(other)),
        }
    }
}

impl From<SiteTier> for u8 {
    fn from(tier: SiteTier) -> Self {
        tier.sites()
    }
}

/// Participant category.
///
/// Both categories are priced identically today. The value is carried
/// through the request and echoed on the quote so differential pricing can
/// be added without changing the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParticipantCategory {
    #[default]
    #[serde(rename = "u18")]
    Under18,
    #[serde(rename = "adult")]
    Adult,
}

/// Day count as entered in the simulator.
///
/// A blank field or `0` is `NoSelection`. Any other integer is kept as-is;
/// whether it has a price is decided by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DaySelection {
    #[default]
    NoSelection,
    Days(i64),
}

impl DaySelection {
    /// Map a raw (possibly blank) input into a selection
    pub fn from_input(raw: Option<i64>) -> Self {
        match raw {
            None | Some(0) => DaySelection::NoSelection,
            Some(days) => DaySelection::Days(days),
        }
    }

    /// Numeric day count, `0` for no selection
    pub fn as_days(self) -> i64 {
        match self {
            DaySelection::NoSelection => 0,
            DaySelection::Days(days) => days,
        }
    }
}

/// Everything the simulator sends for one quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanRequest {
    pub days: DaySelection,
    pub site_tier: SiteTier,
    pub participant: ParticipantCategory,
}

/// Cost side of a plan, in yen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostBreakdown {
    pub insurance_fee: i64,
    pub labor_cost: i64,
    pub facility_fee: i64,
    pub total_cost: i64,
}

/// Full price breakdown for a priced plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceBreakdown {
    pub insurance_fee: i64,
    pub labor_cost: i64,
    pub facility_fee: i64,
    pub total_cost: i64,
    pub selling_price: i64,
    pub profit: i64,
    /// `profit / selling_price`, or zero when nothing is sold
    pub margin_ratio: Decimal,
}

impl PriceBreakdown {
    /// Combine a cost breakdown with its rounded selling price
    pub fn from_cost(cost: CostBreakdown, selling_price: i64) -> Self {
        let profit = selling_price - cost.total_cost;
        let margin_ratio = if selling_price > 0 {
            Decimal::from(profit) / Decimal::from(selling_price)
        } else {
            Decimal::ZERO
        };

        Self {
            insurance_fee: cost.insurance_fee,
            labor_cost: cost.labor_cost,
            facility_fee: cost.facility_fee,
            total_cost: cost.total_cost,
            selling_price,
            profit,
            margin_ratio,
        }
    }
}

/// Outcome of pricing a day count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteOutcome {
    /// Nothing selected yet; every amount is zero
    ZeroPlan,
    /// Priced plan
    Priced(PriceBreakdown),
    /// No insurance data for this day count; no price may be shown
    NotComputable { days: i64 },
}

impl QuoteOutcome {
    pub fn is_computable(&self) -> bool {
        !matches!(self, QuoteOutcome::NotComputable { .. })
    }

    /// Selling price, `Some(0)` for the zero plan and `None` when not computable
    pub fn selling_price(&self) -> Option<i64> {
        match self {
            QuoteOutcome::ZeroPlan => Some(0),
            QuoteOutcome::Priced(breakdown) => Some(breakdown.selling_price),
            QuoteOutcome::NotComputable { .. } => None,
        }
    }

    /// Breakdown to report. Zero plan and not-computable outcomes report zeros.
    pub fn breakdown(&self) -> PriceBreakdown {
        match self {
            QuoteOutcome::Priced(breakdown) => *breakdown,
            QuoteOutcome::ZeroPlan | QuoteOutcome::NotComputable { .. } => {
                PriceBreakdown::default()
            }
        }
    }
}

/// Quote for one request, with the request's inputs echoed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanQuote {
    pub days: DaySelection,
    pub site_tier: SiteTier,
    pub participant: ParticipantCategory,
    pub outcome: QuoteOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_site_tier_from_wire_value() {
        assert_eq!(SiteTier::try_from(1u8), Ok(SiteTier::OneSite));
        assert_eq!(SiteTier::try_from(2u8), Ok(SiteTier::TwoSites));
        assert_eq!(SiteTier::try_from(3u8), Ok(SiteTier::ThreeSites));
        assert_eq!(SiteTier::try_from(0u8), Err(InvalidSiteTier(0)));
        assert_eq!(SiteTier::try_from(4u8), Err(InvalidSiteTier(4)));
    }

    #[test]
    fn test_site_tier_serde() {
        let tier: SiteTier = serde_json::from_str("2").unwrap();
        assert_eq!(tier, SiteTier::TwoSites);
        assert_eq!(serde_json::to_string(&SiteTier::ThreeSites).unwrap(), "3");
        assert!(serde_json::from_str::<SiteTier>("7").is_err());
    }

    #[test]
    fn test_participant_category_serde() {
        let category: ParticipantCategory = serde_json::from_str("\"u18\"").unwrap();
        assert_eq!(category, ParticipantCategory::Under18);
        let category: ParticipantCategory = serde_json::from_str("\"adult\"").unwrap();
        assert_eq!(category, ParticipantCategory::Adult);
        assert!(serde_json::from_str::<ParticipantCategory>("\"senior\"").is_err());
    }

    #[test]
    fn test_day_selection_blank_and_zero() {
        assert_eq!(DaySelection::from_input(None), DaySelection::NoSelection);
        assert_eq!(DaySelection::from_input(Some(0)), DaySelection::NoSelection);
        assert_eq!(DaySelection::from_input(Some(12)), DaySelection::Days(12));
        assert_eq!(DaySelection::from_input(Some(-3)), DaySelection::Days(-3));
        assert_eq!(DaySelection::NoSelection.as_days(), 0);
    }

    #[test]
    fn test_price_breakdown_from_cost() {
        let cost = CostBreakdown {
            insurance_fee: 800,
            labor_cost: 6000,
            facility_fee: 1000,
            total_cost: 7800,
        };
        let breakdown = PriceBreakdown::from_cost(cost, 11140);
        assert_eq!(breakdown.profit, 3340);
        assert_eq!(breakdown.margin_ratio, dec!(3340) / dec!(11140));
    }

    #[test]
    fn test_price_breakdown_zero_selling_price() {
        let breakdown = PriceBreakdown::from_cost(CostBreakdown::default(), 0);
        assert_eq!(breakdown.margin_ratio, Decimal::ZERO);
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(QuoteOutcome::ZeroPlan.is_computable());
        assert_eq!(QuoteOutcome::ZeroPlan.selling_price(), Some(0));

        let missing = QuoteOutcome::NotComputable { days: 32 };
        assert!(!missing.is_computable());
        assert_eq!(missing.selling_price(), None);
        assert_eq!(missing.breakdown(), PriceBreakdown::default());
    }
}
