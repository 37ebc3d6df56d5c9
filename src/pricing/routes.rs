//! Quote API routes.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;

use crate::contact::links::{format_phone, tel_link};
use crate::AppState;

use super::handoff::build_booking_url;
use super::requests::QuoteRequest;
use super::responses::{BookingHandoffResponse, MoneyResponse, QuoteResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quote", get(quote_from_query).post(quote_from_json))
        .route("/api/quote/booking", post(booking_handoff))
}

/// GET /api/quote?bedrooms=3&bathrooms=2&...
async fn quote_from_query(
    State(state): State<AppState>,
    Query(request): Query<QuoteRequest>,
) -> Json<QuoteResponse> {
    Json(quote(&state, request).await)
}

/// POST /api/quote
async fn quote_from_json(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    Json(quote(&state, request).await)
}

async fn quote(state: &AppState, request: QuoteRequest) -> QuoteResponse {
    let input = request.into_input();
    let result = state.cache.quote(&input, &state.config.pricing).await;
    QuoteResponse::new(input, (*result).clone())
}

/// POST /api/quote/booking
///
/// Returns the scheduler link for normal jobs and a call-to-book hand-off
/// for large ones.
async fn booking_handoff(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Json<BookingHandoffResponse> {
    let input = request.into_input();
    let result = state.cache.quote(&input, &state.config.pricing).await;

    if result.is_large_job {
        tracing::info!(
            "Large job ({} person-hours), handing off to phone booking",
            result.billable_hours_high
        );
        let phone = &state.config.contact.phone;
        return Json(BookingHandoffResponse::CallToBook {
            tel: tel_link(phone),
            phone_display: format_phone(phone),
        });
    }

    let url = build_booking_url(
        &result.booking_url,
        &input,
        &result,
        Local::now().naive_local(),
    );
    tracing::debug!("Booking hand-off for {}h window", result.reserved_window_hours);

    Json(BookingHandoffResponse::Schedule {
        url,
        reserved_window_hours: result.reserved_window_hours,
        deposit: MoneyResponse::usd(result.booking_deposit),
    })
}
