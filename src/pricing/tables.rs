//! Fixed rate card for judo plans.
//!
//! The insurance column comes straight from the insurer's rate card. The
//! repeated 9420 entries between day 16 and day 31 are kept exactly as
//! published; do not smooth them into a progression.

use super::models::SiteTier;

/// Insurance fee (yen, whole plan) for each supported day count.
const STANDARD_INSURANCE_FEES: &[(i64, i64)] = &[
    (1, 800),
    (2, 1220),
    (3, 1620),
    (4, 1950),
    (5, 2300),
    (6, 2650),
    (7, 2960),
    (8, 3260),
    (9, 3520),
    (10, 3790),
    (11, 4060),
    (12, 4330),
    (13, 4620),
    (14, 4870),
    (15, 5090),
    (16, 9420),
    (17, 5450),
    (18, 9420),
    (19, 5950),
    (20, 9420),
    (21, 6470),
    (22, 9420),
    (23, 7010),
    (24, 9420),
    (25, 7580),
    (26, 9420),
    (27, 8140),
    (28, 9420),
    (29, 8720),
    (30, 9420),
    (31, 9420),
];

/// Hourly rate paid to the on-site coordinator.
pub const LABOR_RATE_PER_HOUR: i64 = 2000;

/// Coordinator hours needed per site visited in a day.
pub const HOURS_PER_SITE: i64 = 3;

/// Lookup table from day count to flat insurance fee.
///
/// Entries are `(days, fee)` pairs. A day count missing from the table has
/// no insurance data and must not be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceTable {
    entries: &'static [(i64, i64)],
}

impl InsuranceTable {
    /// The published schedule covering 1 to 31 days.
    pub const STANDARD: InsuranceTable = InsuranceTable {
        entries: STANDARD_INSURANCE_FEES,
    };

    /// Build a table from explicit `(days, fee)` pairs.
    pub const fn new(entries: &'static [(i64, i64)]) -> Self {
        Self { entries }
    }

    /// Flat insurance fee for `days`, or `None` when the table has no entry.
    pub fn fee_for(&self, days: i64) -> Option<i64> {
        self.entries
            .iter()
            .find(|(d, _)| *d == days)
            .map(|(_, fee)| *fee)
    }

    /// All `(days, fee)` pairs in table order.
    pub fn entries(&self) -> &'static [(i64, i64)] {
        self.entries
    }
}

impl Default for InsuranceTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Per-day labor and facility rates for a site tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRates {
    pub labor_per_day: i64,
    pub facility_per_day: i64,
}

/// Rates for `tier`. Labor is three coordinator hours per site; facility
/// usage is 1,000 yen per site.
pub const fn tier_rates(tier: SiteTier) -> TierRates {
    match tier {
        SiteTier::OneSite => TierRates {
            labor_per_day: 6000,
            facility_per_day: 1000,
        },
        SiteTier::TwoSites => TierRates {
            labor_per_day: 12000,
            facility_per_day: 2000,
        },
        SiteTier::ThreeSites => TierRates {
            labor_per_day: 18000,
            facility_per_day: 3000,
        },
    }
}
