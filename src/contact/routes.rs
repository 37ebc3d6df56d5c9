//! Contact and lead hand-off routes.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::{AppError, Result};
use crate::pricing::requests::QuoteRequest;
use crate::AppState;

use super::commercial::{CommercialLead, LeadHandoffResponse};
use super::quote_question::{contact_links, ContactLinksResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quote/contact", post(quote_contact))
        .route("/api/leads/commercial", post(commercial_lead))
}

/// POST /api/quote/contact
///
/// Call/text/email links pre-filled with a summary of the posted quote.
async fn quote_contact(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Json<ContactLinksResponse> {
    let input = request.into_input();
    let result = state.cache.quote(&input, &state.config.pricing).await;
    Json(contact_links(&state.config.contact, &input, &result))
}

/// POST /api/leads/commercial
async fn commercial_lead(
    State(state): State<AppState>,
    Json(lead): Json<CommercialLead>,
) -> Result<Json<LeadHandoffResponse>> {
    let missing = lead.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }

    tracing::info!("Commercial lead hand-off for {}", lead.business_name);

    Ok(Json(LeadHandoffResponse {
        mailto: lead.mailto(&state.config.contact.email),
        subject: lead.subject(),
        body: lead.email_body(),
    }))
}
