//! Response DTOs for quote API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{
    format_count, format_currency, format_hours_fixed, format_range, hours_unit,
};
use super::models::QuoteInput;
use super::services::QuoteResult;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    /// Customer-facing text, e.g. `$1,250`
    pub display: String,
}

impl MoneyResponse {
    pub fn usd(amount: Decimal) -> Self {
        Self {
            amount,
            currency: "USD".to_string(),
            display: format_currency(amount),
        }
    }
}

/// Human-readable strings for the quote summary
#[derive(Debug, Clone, Serialize)]
pub struct QuoteDisplay {
    /// `$518` or `$450–$518`
    pub price: String,
    /// `1,800 sq ft` or `1,200–1,800 sq ft`
    pub sqft: String,
    /// Billable person-hours, `6.0 hours` or `4.0–6.0 hours`
    pub hours: String,
    /// `Estimated range based on …` sentence under the price
    pub basis: String,
    /// `~6 hours`; absent for large jobs
    pub on_site: Option<String>,
    /// `1 cleaner` / `2 cleaners`; absent for large jobs
    pub crew: Option<String>,
    /// `6 hours`; absent for large jobs
    pub reserved_window: Option<String>,
    /// Advisory promo text, if a code was entered
    pub promo_message: Option<String>,
}

impl QuoteDisplay {
    pub fn new(result: &QuoteResult) -> Self {
        let sqft = format!(
            "{} sq ft",
            format_range(result.sqft_low, result.sqft_high, format_count)
        );
        let hours = format!(
            "{} {}",
            format_range(
                result.billable_hours_low,
                result.billable_hours_high,
                format_hours_fixed
            ),
            hours_unit(result.billable_hours_high)
        );
        let lead = if result.has_sqft_range() || result.has_hour_range() {
            "Estimated range"
        } else {
            "Estimated"
        };

        let (on_site, crew, reserved_window) = if result.is_large_job {
            (None, None, None)
        } else {
            let cleaners = result.time.cleaners;
            let reserved = Decimal::from(result.reserved_window_hours);
            (
                Some(result.time.display_text.clone()),
                Some(format!(
                    "{} {}",
                    cleaners,
                    if cleaners == 1 { "cleaner" } else { "cleaners" }
                )),
                Some(format!(
                    "{} {}",
                    result.reserved_window_hours,
                    hours_unit(reserved)
                )),
            )
        };

        Self {
            price: format_range(
                result.total_after_promo_low,
                result.total_after_promo_high,
                format_currency,
            ),
            basis: format!("{} based on {} and {}", lead, sqft, hours),
            sqft,
            hours,
            on_site,
            crew,
            reserved_window,
            promo_message: result.promo.message(),
        }
    }
}

/// Response for a quote calculation
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub input: QuoteInput,
    pub quote: QuoteResult,
    pub total_low: MoneyResponse,
    pub total_high: MoneyResponse,
    pub deposit: MoneyResponse,
    pub display: QuoteDisplay,
}

impl QuoteResponse {
    pub fn new(input: QuoteInput, quote: QuoteResult) -> Self {
        Self {
            total_low: MoneyResponse::usd(quote.total_after_promo_low),
            total_high: MoneyResponse::usd(quote.total_after_promo_high),
            deposit: MoneyResponse::usd(quote.booking_deposit),
            display: QuoteDisplay::new(&quote),
            input,
            quote,
        }
    }
}

/// Where the customer goes next
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingHandoffResponse {
    /// Self-service booking in the external scheduler
    Schedule {
        url: String,
        reserved_window_hours: u32,
        deposit: MoneyResponse,
    },
    /// Job too large to self-schedule
    CallToBook { tel: String, phone_display: String },
}
