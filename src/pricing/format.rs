//! Display formatting for the simulator's result panel.
//!
//! Formatting only ever reads computed values; nothing here is parsed back
//! into a number.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::calculators::round_half_up;
use super::models::{DaySelection, ParticipantCategory, PlanQuote, QuoteOutcome, SiteTier};

pub const AWAITING_INPUT_NOTE: &str = "日数を入力してください";
pub const NO_DATA_MESSAGE: &str = "この日数に対応する保険料データが見つかりません。";
pub const BLANK_DAYS_LABEL: &str = "（未入力）";

/// Format whole yen with `,` thousands separators and a `円` suffix.
///
/// ```
/// use jroad_web::pricing::format_yen;
///
/// assert_eq!(format_yen(11140), "11,140円");
/// assert_eq!(format_yen(0), "0円");
/// ```
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('円');
    grouped
}

/// Format a ratio as a percentage with one decimal place (`0.2998` -> `30.0%`)
pub fn format_percent(ratio: Decimal) -> String {
    let mut percent = round_half_up(ratio * dec!(100), 1);
    percent.rescale(1);
    format!("{}%", percent)
}

/// Day count as shown in the plan summary (`5日`, or `（未入力）` when blank)
pub fn days_label(days: DaySelection) -> String {
    match days {
        DaySelection::NoSelection => BLANK_DAYS_LABEL.to_string(),
        DaySelection::Days(days) => format!("{}日", days),
    }
}

pub fn site_tier_label(tier: SiteTier) -> &'static str {
    match tier {
        SiteTier::OneSite => "1拠点",
        SiteTier::TwoSites => "2拠点",
        SiteTier::ThreeSites => "3拠点",
    }
}

pub fn participant_label(participant: ParticipantCategory) -> &'static str {
    match participant {
        ParticipantCategory::Under18 => "U18（18歳未満）",
        ParticipantCategory::Adult => "大人",
    }
}

/// Which of the result panel's three states to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    AwaitingInput,
    NoData,
    Price,
}

/// Summary of the current selection, shown next to the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub days: String,
    pub site_tier: &'static str,
    pub participant: &'static str,
}

impl From<&PlanQuote> for PlanSummary {
    fn from(quote: &PlanQuote) -> Self {
        Self {
            days: days_label(quote.days),
            site_tier: site_tier_label(quote.site_tier),
            participant: participant_label(quote.participant),
        }
    }
}

/// Rendered text for the result panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDisplay {
    pub state: DisplayState,
    /// Large price line; absent when there is no price to show
    pub headline: Option<String>,
    pub note: Option<String>,
    pub summary: PlanSummary,
}

impl From<&PlanQuote> for QuoteDisplay {
    fn from(quote: &PlanQuote) -> Self {
        let summary = PlanSummary::from(quote);

        match quote.outcome {
            QuoteOutcome::ZeroPlan => QuoteDisplay {
                state: DisplayState::AwaitingInput,
                headline: Some(format_yen(0)),
                note: Some(AWAITING_INPUT_NOTE.to_string()),
                summary,
            },
            QuoteOutcome::NotComputable { .. } => QuoteDisplay {
                state: DisplayState::NoData,
                headline: None,
                note: Some(NO_DATA_MESSAGE.to_string()),
                summary,
            },
            QuoteOutcome::Priced(breakdown) => QuoteDisplay {
                state: DisplayState::Price,
                headline: Some(format_yen(breakdown.selling_price)),
                note: None,
                summary,
            },
        }
    }
}
