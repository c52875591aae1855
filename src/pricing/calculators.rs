//! Core pricing calculation functions.
//!
//! Pure functions for judo plan pricing - no I/O and no shared state.
//! Money is kept in whole yen; the markup and rounding run on `Decimal`
//! so no binary floating point touches a price.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::models::{
    CostBreakdown, DaySelection, PlanQuote, PlanRequest, PriceBreakdown, QuoteOutcome, SiteTier,
};
use super::tables::{tier_rates, InsuranceTable};

/// Share of the selling price kept as profit
pub const DEFAULT_PROFIT_MARGIN: Decimal = dec!(0.30);

/// Selling prices are quoted in multiples of this many yen
pub const DEFAULT_PRICE_INCREMENT: i64 = 10;

/// Round half-up (away from zero) to the given number of decimal places.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use jroad_web::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_half_up(dec!(3.5), 0), dec!(4));
/// assert_eq!(round_half_up(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_half_up(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Round `amount` to the nearest multiple of `increment`, half-up.
///
/// Returns `None` if `increment` is zero or the division overflows.
pub fn round_to_increment(amount: Decimal, increment: Decimal) -> Option<Decimal> {
    let steps = amount.checked_div(increment)?;
    round_half_up(steps, 0).checked_mul(increment)
}

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    InvalidProfitMargin { margin: Decimal },
    InvalidPriceIncrement { increment: i64 },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidProfitMargin { margin } => {
                write!(f, "Profit margin must be at least 0 and below 1, got {}", margin)
            }
            PricingError::InvalidPriceIncrement { increment } => {
                write!(f, "Price increment must be positive, got {}", increment)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Markup policy shared by every quote in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    profit_margin: Decimal,
    price_increment: i64,
}

impl PricingPolicy {
    /// Build a policy, rejecting margins outside `[0, 1)` and non-positive increments.
    pub fn new(profit_margin: Decimal, price_increment: i64) -> Result<Self, PricingError> {
        if profit_margin < Decimal::ZERO || profit_margin >= Decimal::ONE {
            return Err(PricingError::InvalidProfitMargin {
                margin: profit_margin,
            });
        }
        if price_increment <= 0 {
            return Err(PricingError::InvalidPriceIncrement {
                increment: price_increment,
            });
        }

        Ok(Self {
            profit_margin,
            price_increment,
        })
    }

    pub fn profit_margin(&self) -> Decimal {
        self.profit_margin
    }

    pub fn price_increment(&self) -> i64 {
        self.price_increment
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            profit_margin: DEFAULT_PROFIT_MARGIN,
            price_increment: DEFAULT_PRICE_INCREMENT,
        }
    }
}

/// Judo plan calculator.
///
/// Holds only immutable configuration, so a single value can be copied
/// into every request handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanCalculator {
    policy: PricingPolicy,
    insurance: InsuranceTable,
}

impl PlanCalculator {
    /// Calculator using the standard insurance schedule
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            policy,
            insurance: InsuranceTable::STANDARD,
        }
    }

    /// Replace the insurance schedule
    pub fn with_insurance_table(mut self, insurance: InsuranceTable) -> Self {
        self.insurance = insurance;
        self
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    pub fn insurance_table(&self) -> &InsuranceTable {
        &self.insurance
    }

    /// Cost of a plan.
    ///
    /// Insurance is a flat fee for the whole plan; labor and facility usage
    /// are charged per day. A day count without an insurance entry gets a
    /// zero insurance fee here; `compute_price` is what refuses to price it.
    pub fn compute_cost(&self, days: i64, tier: SiteTier) -> CostBreakdown {
        let rates = tier_rates(tier);
        let insurance_fee = self.insurance.fee_for(days).unwrap_or(0);
        let labor_cost = rates.labor_per_day.saturating_mul(days);
        let facility_fee = rates.facility_per_day.saturating_mul(days);

        CostBreakdown {
            insurance_fee,
            labor_cost,
            facility_fee,
            total_cost: insurance_fee
                .saturating_add(labor_cost)
                .saturating_add(facility_fee),
        }
    }

    /// Price a plan.
    ///
    /// No selection, or an explicit zero day count, yields the zero plan.
    /// A day count with no insurance entry (above 31 or negative) is not
    /// computable. Otherwise the selling price is `total_cost / (1 - margin)`
    /// rounded half-up to the policy's increment.
    pub fn compute_price(&self, days: DaySelection, tier: SiteTier) -> QuoteOutcome {
        let days = match days {
            DaySelection::NoSelection | DaySelection::Days(0) => return QuoteOutcome::ZeroPlan,
            DaySelection::Days(days) => days,
        };

        if self.insurance.fee_for(days).is_none() {
            tracing::debug!(days, "No insurance data for day count");
            return QuoteOutcome::NotComputable { days };
        }

        let cost = self.compute_cost(days, tier);
        match self.selling_price(cost.total_cost) {
            Some(selling_price) => {
                QuoteOutcome::Priced(PriceBreakdown::from_cost(cost, selling_price))
            }
            None => {
                tracing::warn!(
                    days,
                    total_cost = cost.total_cost,
                    "Selling price out of range"
                );
                QuoteOutcome::NotComputable { days }
            }
        }
    }

    /// Quote a full simulator request.
    ///
    /// The participant category is echoed on the quote but does not enter
    /// the calculation.
    pub fn quote(&self, request: &PlanRequest) -> PlanQuote {
        PlanQuote {
            days: request.days,
            site_tier: request.site_tier,
            participant: request.participant,
            outcome: self.compute_price(request.days, request.site_tier),
        }
    }

    /// Selling price with the policy margin applied, in whole yen
    fn selling_price(&self, total_cost: i64) -> Option<i64> {
        let raw_price =
            Decimal::from(total_cost).checked_div(Decimal::ONE - self.policy.profit_margin)?;
        round_to_increment(raw_price, Decimal::from(self.policy.price_increment))?.to_i64()
    }
}
