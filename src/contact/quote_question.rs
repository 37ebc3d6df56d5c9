//! "Questions about my quote" hand-off.
//!
//! Builds a plain-text summary of the current quote and wraps it in
//! call/text/email links so the team sees the customer's numbers.

use serde::Serialize;

use crate::config::ContactInfo;
use crate::pricing::calculators::{format_count, format_currency, format_range};
use crate::pricing::{QuoteInput, QuoteResult};

use super::links::{build_mailto, build_sms_link, format_phone, tel_link};

/// Links offered in the contact popover
#[derive(Debug, Clone, Serialize)]
pub struct ContactLinksResponse {
    pub tel: String,
    pub sms: String,
    pub mailto: String,
    pub phone_display: String,
    pub email: String,
    pub summary: String,
}

/// Message body describing the quote the customer is looking at
pub fn quote_summary(input: &QuoteInput, result: &QuoteResult) -> String {
    let mut summary = String::from("Hello Golden Hour — I have a question about my quote.\n");
    summary.push_str(&format!("Service: {}\n", input.tier.label()));
    summary.push_str(&format!("Bedrooms: {}\n", input.bedrooms));
    summary.push_str(&format!("Bathrooms: {}\n", input.bathrooms));
    summary.push_str(&format!(
        "Home size used for estimate: {} sq ft\n",
        format_range(result.sqft_low, result.sqft_high, format_count)
    ));
    summary.push_str(&format!("Cleaning frequency: {}\n", input.frequency.label()));
    summary.push_str(&format!(
        "Eco-friendly products: {}\n",
        if input.eco_products { "Yes" } else { "No" }
    ));
    if let Some(code) = result.promo.applied_code() {
        summary.push_str(&format!(
            "Promo applied: {} (−{})\n",
            code,
            format_currency(result.breakdown.promo_discount)
        ));
    }
    summary.push_str(&format!(
        "Estimated total: {}\n",
        format_range(
            result.total_after_promo_low,
            result.total_after_promo_high,
            format_currency
        )
    ));
    summary.push_str("\nMy question: ");
    summary
}

pub fn quote_subject(input: &QuoteInput) -> String {
    format!("Question about my quote — {}", input.tier.label())
}

pub fn contact_links(
    contact: &ContactInfo,
    input: &QuoteInput,
    result: &QuoteResult,
) -> ContactLinksResponse {
    let summary = quote_summary(input, result);

    ContactLinksResponse {
        tel: tel_link(&contact.phone),
        sms: build_sms_link(&contact.sms, &summary),
        mailto: build_mailto(&contact.email, &quote_subject(input), &summary),
        phone_display: format_phone(&contact.phone),
        email: contact.email.clone(),
        summary,
    }
}
