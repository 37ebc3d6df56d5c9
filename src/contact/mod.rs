//! Contact hand-offs: quote questions and commercial leads.
//!
//! Nothing here is persisted; every hand-off ends in a link the visitor's
//! own phone or mail client opens.

pub mod commercial;
pub mod links;
pub mod quote_question;
pub mod routes;

pub use routes::router;
