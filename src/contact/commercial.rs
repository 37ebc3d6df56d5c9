//! Commercial lead form.
//!
//! The form is never stored; submitting it produces a `mailto:` link that
//! opens the visitor's own mail client.

use serde::{Deserialize, Serialize};

use super::links::build_mailto;

pub const SPACE_TYPES: [&str; 5] = [
    "Office",
    "Wellness studio",
    "Retail",
    "Property / common areas",
    "Other",
];

pub const SQFT_RANGES: [&str; 5] = [
    "Under 1,000",
    "1,000–3,000",
    "3,000–7,500",
    "7,500–15,000",
    "15,000+",
];

pub const FREQUENCIES: [&str; 5] = ["Weekly", "2× per week", "Bi-weekly", "Monthly", "Unsure"];

pub const START_TIMINGS: [&str; 4] = [
    "Within 2 weeks",
    "2–4 weeks",
    "1–2 months",
    "Just gathering options",
];

/// Commercial quote request as typed by the visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialLead {
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub space_type: String,
    pub sqft_range: String,
    pub frequency: String,
    pub start_timing: String,
    pub notes: String,
    pub referral: String,
}

impl Default for CommercialLead {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            contact_name: String::new(),
            email: String::new(),
            phone: String::new(),
            space_type: SPACE_TYPES[0].to_string(),
            sqft_range: SQFT_RANGES[1].to_string(),
            frequency: FREQUENCIES[0].to_string(),
            start_timing: START_TIMINGS[0].to_string(),
            notes: String::new(),
            referral: String::new(),
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

impl CommercialLead {
    /// Required fields left blank, by form field name
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("business_name", &self.business_name),
            ("contact_name", &self.contact_name),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn subject(&self) -> String {
        format!("Commercial Quote — {}", self.business_name)
    }

    pub fn email_body(&self) -> String {
        [
            "Commercial Quote Request".to_string(),
            String::new(),
            format!("Business: {}", self.business_name),
            format!("Contact: {}", self.contact_name),
            format!("Email: {}", self.email),
            format!("Phone: {}", or_placeholder(&self.phone, "(not provided)")),
            String::new(),
            format!("Space type: {}", self.space_type),
            format!("Approx. size: {} sq ft", self.sqft_range),
            format!("Frequency: {}", self.frequency),
            format!("Start timing: {}", self.start_timing),
            String::new(),
            format!("Referral: {}", or_placeholder(&self.referral, "(not provided)")),
            String::new(),
            "Notes:".to_string(),
            or_placeholder(&self.notes, "(none)").to_string(),
        ]
        .join("\n")
    }

    pub fn mailto(&self, to: &str) -> String {
        build_mailto(to, &self.subject(), &self.email_body())
    }
}

/// Mail hand-off for a lead form submission
#[derive(Debug, Clone, Serialize)]
pub struct LeadHandoffResponse {
    pub mailto: String,
    pub subject: String,
    pub body: String,
}
