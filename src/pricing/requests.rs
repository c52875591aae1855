//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::models::{DaySelection, ParticipantCategory, PlanRequest, SiteTier};

/// Request to quote a judo plan.
///
/// Every field may be omitted; omitted fields take the simulator's initial
/// state (no day count, one site, under-18).
#[derive(Debug, Default, Deserialize)]
pub struct QuotePlanRequest {
    /// Day count; `null` or missing means the field was left blank
    #[serde(default)]
    pub days: Option<i64>,
    #[serde(default)]
    pub site_tier: SiteTier,
    #[serde(default)]
    pub participant: ParticipantCategory,
}

impl From<QuotePlanRequest> for PlanRequest {
    fn from(request: QuotePlanRequest) -> Self {
        PlanRequest {
            days: DaySelection::from_input(request.days),
            site_tier: request.site_tier,
            participant: request.participant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_request() {
        let request: QuotePlanRequest =
            serde_json::from_str(r#"{"days": 5, "site_tier": 2, "participant": "adult"}"#).unwrap();
        let plan = PlanRequest::from(request);
        assert_eq!(plan.days, DaySelection::Days(5));
        assert_eq!(plan.site_tier, SiteTier::TwoSites);
        assert_eq!(plan.participant, ParticipantCategory::Adult);
    }

    #[test]
    fn test_blank_days() {
        let request: QuotePlanRequest =
            serde_json::from_str(r#"{"days": null, "site_tier": 1}"#).unwrap();
        assert_eq!(PlanRequest::from(request).days, DaySelection::NoSelection);

        let request: QuotePlanRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(PlanRequest::from(request), PlanRequest::default());
    }

    #[test]
    fn test_rejects_unknown_tier() {
        let result = serde_json::from_str::<QuotePlanRequest>(r#"{"days": 3, "site_tier": 4}"#);
        assert!(result.is_err());
    }
}
