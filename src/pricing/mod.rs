//! Pricing engine module for the judo plan simulator.
//!
//! Turns a day count, a site tier and a participant category into a price
//! breakdown. The calculation is pure; the HTTP layer only translates JSON.

pub mod calculators;
pub mod format;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod tables;

// Re-export commonly used items
pub use calculators::{round_half_up, PlanCalculator, PricingError, PricingPolicy};
pub use format::{format_percent, format_yen, PlanSummary, QuoteDisplay};
pub use models::{
    DaySelection, ParticipantCategory, PlanQuote, PlanRequest, PriceBreakdown, QuoteOutcome,
    SiteTier,
};
pub use routes::router;
