//! Booking deep link into the external scheduler.
//!
//! The link carries the quote as tracking parameters so the booking can be
//! matched back to the estimate the customer saw.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::warn;
use url::Url;

use super::models::QuoteInput;
use super::services::QuoteResult;

pub const UTM_SOURCE: &str = "quote_calculator";
pub const UTM_MEDIUM: &str = "website";
pub const UTM_CAMPAIGN: &str = "cleaning_quote";

const UTM_KEYS: [&str; 4] = ["utm_source", "utm_medium", "utm_campaign", "utm_content"];

fn plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// `~`-joined quote summary stored in `utm_content`
pub fn tracking_content(input: &QuoteInput, result: &QuoteResult, now: NaiveDateTime) -> String {
    let promo = result.promo.applied_code().unwrap_or("none");

    [
        format!("type={}", input.tier.as_str()),
        format!("bed={}", input.bedrooms),
        format!("ba={}", input.bathrooms),
        format!("sf_heur={}", plain(result.heuristic_sqft)),
        format!("sf_ent={}", plain(result.entered_sqft)),
        format!("sf_low={}", plain(result.sqft_low)),
        format!("sf_high={}", plain(result.sqft_high)),
        format!(
            "hours_est={}-{}",
            plain(result.billable_hours_low),
            plain(result.billable_hours_high)
        ),
        format!("freq={}", input.frequency.as_str()),
        format!("use_eco={}", if input.eco_products { "yes" } else { "no" }),
        format!("add={}", input.addons.code()),
        format!("promo={}", promo),
        format!(
            "est_after_promo={}-{}",
            plain(result.total_after_promo_low),
            plain(result.total_after_promo_high)
        ),
        format!("ts={}", now.format("%m-%d-%y|%H:%M")),
    ]
    .join("~")
}

/// Attach tracking parameters to a scheduler URL.
///
/// Existing query parameters survive; `utm_*` keys are overwritten. A base
/// that does not parse as an absolute URL is returned unchanged.
pub fn build_booking_url(
    base: &str,
    input: &QuoteInput,
    result: &QuoteResult,
    now: NaiveDateTime,
) -> String {
    let mut url = match Url::parse(base) {
        Ok(url) => url,
        Err(e) => {
            warn!("Invalid booking base url {:?}: {}", base, e);
            return base.to_string();
        }
    };

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !UTM_KEYS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let content = tracking_content(input, result, now);

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs
            .append_pair("utm_source", UTM_SOURCE)
            .append_pair("utm_medium", UTM_MEDIUM)
            .append_pair("utm_campaign", UTM_CAMPAIGN)
            .append_pair("utm_content", &content);
    }

    url.to_string()
}
