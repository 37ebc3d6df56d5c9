//! Residential quote page

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Local;
use rust_decimal::Decimal;

use crate::contact::quote_question::contact_links;
use crate::error::Result;
use crate::pricing::calculators::format_currency;
use crate::pricing::handoff::build_booking_url;
use crate::pricing::models::{Frequency, QuoteInput, ServiceTier};
use crate::pricing::requests::QuoteRequest;
use crate::pricing::responses::QuoteDisplay;
use crate::pricing::QuoteResult;
use crate::AppState;

/// `<option>` entry for a select box
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// One line of the price breakdown
pub struct BreakdownRow {
    pub label: &'static str,
    pub amount: String,
}

/// Quote page template
#[derive(Template)]
#[template(path = "quote/page.html")]
struct QuotePageTemplate {
    bedrooms: u32,
    bathrooms: u32,
    sqft: String,
    tiers: Vec<SelectOption>,
    frequencies: Vec<SelectOption>,
    eco_products: bool,
    fridge: bool,
    oven: bool,
    second_kitchen: bool,
    promo_code: String,
    price: String,
    basis: String,
    promo_message: String,
    promo_applied: bool,
    on_site: String,
    crew: String,
    reserved_window: String,
    breakdown: Vec<BreakdownRow>,
    is_large_job: bool,
    booking_url: String,
    deposit: String,
    tel: String,
    sms: String,
    mailto: String,
    phone_display: String,
}

/// GET /residential/quote?bedrooms=3&level=deep&...
pub async fn quote_page(
    State(state): State<AppState>,
    Query(request): Query<QuoteRequest>,
) -> Result<Html<String>> {
    let input = request.into_input();
    let result = state.cache.quote(&input, &state.config.pricing).await;
    let links = contact_links(&state.config.contact, &input, &result);
    let display = QuoteDisplay::new(&result);

    let booking_url = if result.is_large_job {
        String::new()
    } else {
        build_booking_url(&result.booking_url, &input, &result, Local::now().naive_local())
    };

    let template = QuotePageTemplate {
        bedrooms: input.bedrooms,
        bathrooms: input.bathrooms,
        sqft: if input.entered_sqft.is_zero() {
            String::new()
        } else {
            input.entered_sqft.normalize().to_string()
        },
        tiers: tier_options(input.tier),
        frequencies: frequency_options(input.frequency),
        eco_products: input.eco_products,
        fridge: input.addons.fridge,
        oven: input.addons.oven,
        second_kitchen: input.addons.second_kitchen,
        price: display.price,
        basis: display.basis,
        promo_message: display.promo_message.unwrap_or_default(),
        on_site: display.on_site.unwrap_or_default(),
        crew: display.crew.unwrap_or_default(),
        reserved_window: display.reserved_window.unwrap_or_default(),
        promo_applied: result.promo.is_applied(),
        breakdown: breakdown_rows(&input, &result),
        is_large_job: result.is_large_job,
        booking_url,
        deposit: format_currency(result.booking_deposit),
        tel: links.tel,
        sms: links.sms,
        mailto: links.mailto,
        phone_display: links.phone_display,
        promo_code: input.promo_code,
    };

    Ok(Html(template.render()?))
}

fn tier_options(current: ServiceTier) -> Vec<SelectOption> {
    ServiceTier::ALL
        .into_iter()
        .map(|tier| SelectOption {
            value: tier.as_str(),
            label: tier.option_label(),
            selected: tier == current,
        })
        .collect()
}

fn frequency_options(current: Frequency) -> Vec<SelectOption> {
    Frequency::ALL
        .into_iter()
        .map(|frequency| SelectOption {
            value: frequency.as_str(),
            label: frequency.label(),
            selected: frequency == current,
        })
        .collect()
}

/// High-end line items; zero-value adjustments are left out
fn breakdown_rows(input: &QuoteInput, result: &QuoteResult) -> Vec<BreakdownRow> {
    let b = &result.breakdown;
    let mut rows = vec![BreakdownRow {
        label: "Labor",
        amount: format_currency(b.base_labor_core),
    }];

    if b.addon_flat_total > Decimal::ZERO {
        rows.push(BreakdownRow {
            label: "Add-ons",
            amount: format_currency(b.addon_flat_total),
        });
    }
    if b.frequency_discount > Decimal::ZERO {
        rows.push(BreakdownRow {
            label: input.frequency.label(),
            amount: format!("−{}", format_currency(b.frequency_discount)),
        });
    }
    if input.eco_products {
        rows.push(BreakdownRow {
            label: "Eco-friendly products",
            amount: format!("+{}", format_currency(b.eco_upcharge)),
        });
    }
    if b.promo_discount > Decimal::ZERO {
        rows.push(BreakdownRow {
            label: "Promo",
            amount: format!("−{}", format_currency(b.promo_discount)),
        });
    }
    rows
}
