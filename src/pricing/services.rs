//! Estimate engine.
//!
//! `estimate` turns a `QuoteInput` and a `PricingConfig` into a `QuoteResult`.
//! The pipeline order is fixed: frequency discount, then eco multiplier,
//! then promo. Reordering changes the final price.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::calculators::{
    clamp_currency, crew_size, deposit_for_hours, format_currency, heuristic_sqft, person_hours,
    pick_booking_slot, round_half_up, round_to_step, sqft_range, time_display,
};
use super::models::{PricingConfig, QuoteInput, ServiceTier};

/// Entered square footage is capped here to keep the arithmetic in range
pub const MAX_ENTERED_SQFT: Decimal = dec!(1_000_000_000);

const HALF_HOUR: Decimal = dec!(0.5);

/// Outcome of matching the entered promo code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PromoStatus {
    /// Nothing entered
    None,
    Applied { code: String, amount: Decimal },
    Invalid { code: String },
    WrongTier { code: String, required: ServiceTier },
}

impl PromoStatus {
    /// Dollar amount taken off both price bounds
    pub fn discount(&self) -> Decimal {
        match self {
            PromoStatus::Applied { amount, .. } => *amount,
            _ => Decimal::ZERO,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, PromoStatus::Applied { .. })
    }

    pub fn applied_code(&self) -> Option<&str> {
        match self {
            PromoStatus::Applied { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Advisory text shown next to the promo field
    pub fn message(&self) -> Option<String> {
        match self {
            PromoStatus::None => None,
            PromoStatus::Applied { amount, .. } => {
                Some(format!("Code applied: −{}", format_currency(*amount)))
            }
            PromoStatus::Invalid { .. } => Some("Invalid promo code.".to_string()),
            PromoStatus::WrongTier { required, .. } => Some(format!(
                "This code only applies to a {}.",
                required.option_label()
            )),
        }
    }
}

/// Match a promo code against the configured rules
pub fn validate_promo(code: &str, tier: ServiceTier, config: &PricingConfig) -> PromoStatus {
    let code = code.trim().to_uppercase();
    if code.is_empty() {
        return PromoStatus::None;
    }

    match config.promos.get(&code) {
        None => PromoStatus::Invalid { code },
        Some(rule) if !rule.applies_to(tier) => PromoStatus::WrongTier {
            code,
            required: rule.tier.unwrap_or(tier),
        },
        Some(rule) => PromoStatus::Applied {
            code,
            amount: rule.amount.max(Decimal::ZERO),
        },
    }
}

/// Time estimate for the visit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEstimate {
    pub cleaners: u32,
    pub on_site_low: Decimal,
    pub on_site_high: Decimal,
    pub display_text: String,
}

/// High-end line items, all whole dollars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    /// Hourly labor plus flat add-ons
    pub base_labor: Decimal,
    /// Hourly labor only
    pub base_labor_core: Decimal,
    pub addon_flat_total: Decimal,
    pub frequency_discount: Decimal,
    pub eco_upcharge: Decimal,
    pub total_before_promo: Decimal,
    pub promo_discount: Decimal,
}

/// Result of a single estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub heuristic_sqft: Decimal,
    pub entered_sqft: Decimal,
    pub sqft_low: Decimal,
    pub sqft_high: Decimal,
    pub addon_hours_low: Decimal,
    pub addon_hours_high: Decimal,
    /// Person-hours after half-hour rounding
    pub billable_hours_low: Decimal,
    pub billable_hours_high: Decimal,
    pub time: TimeEstimate,
    pub breakdown: PriceBreakdown,
    pub total_before_promo_low: Decimal,
    pub total_before_promo_high: Decimal,
    pub total_after_promo_low: Decimal,
    pub total_after_promo_high: Decimal,
    pub promo: PromoStatus,
    pub booking_deposit: Decimal,
    pub reserved_window_hours: u32,
    pub booking_url: String,
    pub is_large_job: bool,
}

impl QuoteResult {
    pub fn has_sqft_range(&self) -> bool {
        self.sqft_low != self.sqft_high
    }

    pub fn has_hour_range(&self) -> bool {
        self.billable_hours_low != self.billable_hours_high
    }

    pub fn has_price_range(&self) -> bool {
        self.total_after_promo_low != self.total_after_promo_high
    }
}

/// Price a cleaning job.
///
/// Never fails: negative square footage counts as "not provided", and a
/// config without booking slots falls back to `fallback_booking_url`.
pub fn estimate(input: &QuoteInput, config: &PricingConfig) -> QuoteResult {
    let entered_sqft = input.entered_sqft.max(Decimal::ZERO).min(MAX_ENTERED_SQFT);

    // Square footage range
    let heuristic = heuristic_sqft(input.bedrooms, input.bathrooms, &config.rooms_to_sqft);
    let (mut sqft_low, mut sqft_high) = sqft_range(heuristic, entered_sqft);

    // Add-ons: extra area, extra time, flat prices
    let mut addon_hours_low = Decimal::ZERO;
    let mut addon_hours_high = Decimal::ZERO;
    let mut addon_flat = Decimal::ZERO;
    for addon in input.addons.selected(&config.addons) {
        sqft_low += addon.sqft;
        sqft_high += addon.sqft;
        addon_hours_low += addon.hours_low();
        addon_hours_high += addon.hours_high();
        addon_flat += addon.flat_price;
    }

    // Person-hours for one cleaner
    let multiplier = config.tier_multipliers.get(input.tier);
    let person_hours_low = person_hours(
        sqft_low,
        multiplier,
        config.sqft_per_hour,
        addon_hours_low,
        config.min_visit_hours,
    );
    let person_hours_high = person_hours(
        sqft_high,
        multiplier,
        config.sqft_per_hour,
        addon_hours_high,
        config.min_visit_hours,
    );

    // Crew decided once, from the high bound
    let cleaners = crew_size(person_hours_high, config.crew_split_hours);
    let crew = Decimal::from(cleaners);

    let on_site_low = round_to_step(person_hours_low / crew, HALF_HOUR);
    let on_site_high = round_to_step(person_hours_high / crew, HALF_HOUR);

    // Billed time follows the rounded on-site time
    let billable_hours_low = on_site_low * crew;
    let billable_hours_high = on_site_high * crew;

    let is_large_job = billable_hours_high > config.large_job_hours;

    // Labor, then frequency discount, then eco, then promo
    let core_low = billable_hours_low * config.hourly_rate;
    let core_high = billable_hours_high * config.hourly_rate;
    let base_low = core_low + addon_flat;
    let base_high = core_high + addon_flat;

    let discount_rate = config.frequency_discounts.get(input.frequency);
    let frequency_discount_low = base_low * discount_rate;
    let frequency_discount_high = base_high * discount_rate;
    let subtotal_low = base_low - frequency_discount_low;
    let subtotal_high = base_high - frequency_discount_high;

    let eco = if input.eco_products {
        config.eco_multiplier
    } else {
        Decimal::ONE
    };
    let before_promo_low = subtotal_low * eco;
    let before_promo_high = subtotal_high * eco;

    let promo = validate_promo(&input.promo_code, input.tier, config);
    let promo_discount = promo.discount();

    // Reserved window and deposit
    let min_reserved_hours = on_site_high.ceil().to_u32().unwrap_or(u32::MAX);
    let slot = pick_booking_slot(&config.booking_slots, min_reserved_hours);
    let reserved_window_hours = slot.map_or(min_reserved_hours, |s| s.hours);
    let booking_url = slot
        .map(|s| s.url.clone())
        .unwrap_or_else(|| config.fallback_booking_url.clone());
    let booking_deposit = clamp_currency(deposit_for_hours(
        reserved_window_hours,
        &config.deposit_tiers,
        config.deposit_max,
    ));

    QuoteResult {
        heuristic_sqft: round_half_up(heuristic, 0),
        entered_sqft: round_half_up(entered_sqft, 0),
        sqft_low: round_half_up(sqft_low, 0),
        sqft_high: round_half_up(sqft_high, 0),
        addon_hours_low,
        addon_hours_high,
        billable_hours_low,
        billable_hours_high,
        time: TimeEstimate {
            cleaners,
            on_site_low,
            on_site_high,
            display_text: time_display(
                on_site_low,
                on_site_high,
                billable_hours_low,
                billable_hours_high,
            ),
        },
        breakdown: PriceBreakdown {
            base_labor: clamp_currency(base_high),
            base_labor_core: clamp_currency(core_high),
            addon_flat_total: clamp_currency(addon_flat),
            frequency_discount: clamp_currency(frequency_discount_high),
            eco_upcharge: clamp_currency(before_promo_high - subtotal_high),
            total_before_promo: clamp_currency(before_promo_high),
            promo_discount: clamp_currency(promo_discount),
        },
        total_before_promo_low: clamp_currency(before_promo_low),
        total_before_promo_high: clamp_currency(before_promo_high),
        total_after_promo_low: clamp_currency(before_promo_low - promo_discount),
        total_after_promo_high: clamp_currency(before_promo_high - promo_discount),
        promo,
        booking_deposit,
        reserved_window_hours,
        booking_url,
        is_large_job,
    }
}

/// Error returned when a pricing configuration is unusable
#[derive(Debug, Clone)]
pub struct PricingConfigError {
    pub message: String,
    pub errors: Vec<String>,
}

impl std::fmt::Display for PricingConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)?;
        for (i, err) in self.errors.iter().enumerate() {
            if i == 0 {
                write!(f, " (")?;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{}", err)?;
        }
        if !self.errors.is_empty() {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for PricingConfigError {}

/// Check a pricing configuration before the service starts using it
pub fn validate_config(config: &PricingConfig) -> Result<(), PricingConfigError> {
    let mut errors = Vec::new();

    if config.booking_slots.is_empty() {
        errors.push("booking_slots is empty".to_string());
    }
    for slot in &config.booking_slots {
        if slot.url.trim().is_empty() {
            errors.push(format!("booking slot {}h has no url", slot.hours));
        }
    }
    if config.fallback_booking_url.trim().is_empty() {
        errors.push("fallback_booking_url is empty".to_string());
    }

    let discounts = &config.frequency_discounts;
    for (name, rate) in [
        ("one_time", discounts.one_time),
        ("monthly", discounts.monthly),
        ("bi_weekly", discounts.bi_weekly),
        ("weekly", discounts.weekly),
    ] {
        if rate < Decimal::ZERO || rate >= Decimal::ONE {
            errors.push(format!("frequency_discounts.{} must be in [0, 1), got {}", name, rate));
        }
    }

    if config.sqft_per_hour <= Decimal::ZERO {
        errors.push("sqft_per_hour must be positive".to_string());
    }
    if config.hourly_rate <= Decimal::ZERO {
        errors.push("hourly_rate must be positive".to_string());
    }
    if config.eco_multiplier < Decimal::ONE {
        errors.push("eco_multiplier must be at least 1".to_string());
    }

    let mut tiers: Vec<_> = config.deposit_tiers.iter().collect();
    tiers.sort_by_key(|t| t.up_to_hours);
    for pair in tiers.windows(2) {
        if pair[0].up_to_hours == pair[1].up_to_hours {
            errors.push(format!("duplicate deposit tier for {}h", pair[0].up_to_hours));
        }
        if pair[1].amount < pair[0].amount {
            errors.push(format!(
                "deposit for {}h is lower than for {}h",
                pair[1].up_to_hours, pair[0].up_to_hours
            ));
        }
    }
    if let Some(last) = tiers.last() {
        if config.deposit_max < last.amount {
            errors.push("deposit_max is lower than the last deposit tier".to_string());
        }
    }

    for code in config.promos.keys() {
        if code.trim().is_empty() || *code != code.trim().to_uppercase() {
            errors.push(format!("promo code '{}' must be trimmed upper-case", code));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PricingConfigError {
            message: format!("{} invalid pricing setting(s)", errors.len()),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{Addons, Frequency};

    fn quote(input: QuoteInput) -> QuoteResult {
        estimate(&input, &PricingConfig::default())
    }

    fn heuristic_only() -> QuoteInput {
        QuoteInput {
            entered_sqft: Decimal::ZERO,
            ..QuoteInput::default()
        }
    }

    // ==================== reference quote ====================

    #[test]
    fn test_three_bed_two_bath_deep_one_time_eco() {
        let result = quote(heuristic_only());

        assert_eq!(result.heuristic_sqft, dec!(1800));
        assert_eq!(result.sqft_low, dec!(1800));
        assert_eq!(result.sqft_high, dec!(1800));
        assert!(!result.has_sqft_range());

        // 1800 / 290 = 6.2h, rounds to 6h with one cleaner
        assert_eq!(result.time.cleaners, 1);
        assert_eq!(result.time.on_site_high, dec!(6));
        assert_eq!(result.billable_hours_high, dec!(6));
        assert_eq!(result.time.display_text, "~6 hours");

        // 6h * $75 = $450, +15% eco = $517.50
        assert_eq!(result.breakdown.base_labor, dec!(450));
        assert_eq!(result.breakdown.eco_upcharge, dec!(68));
        assert_eq!(result.total_after_promo_low, dec!(518));
        assert_eq!(result.total_after_promo_high, dec!(518));
        assert!(!result.has_price_range());

        assert_eq!(result.reserved_window_hours, 6);
        assert_eq!(result.booking_deposit, dec!(100));
        assert!(result.booking_url.ends_with("approx-6-hour-cleaning"));
        assert!(!result.is_large_job);
    }

    #[test]
    fn test_entering_matching_sqft_gives_same_quote() {
        let entered = quote(QuoteInput::default());
        let blank = quote(heuristic_only());
        assert_eq!(entered.total_after_promo_high, blank.total_after_promo_high);
        assert_eq!(entered.entered_sqft, dec!(1800));
    }

    #[test]
    fn test_entered_sqft_builds_range() {
        let result = quote(QuoteInput {
            entered_sqft: dec!(1200),
            ..QuoteInput::default()
        });
        assert_eq!(result.sqft_low, dec!(1200));
        assert_eq!(result.sqft_high, dec!(1800));
        assert!(result.has_sqft_range());
        // 1200/290 = 4.14 -> 4h
        assert_eq!(result.time.on_site_low, dec!(4));
        assert_eq!(result.time.display_text, "4–6 hours");
        // 4 * 75 * 1.15 = 345
        assert_eq!(result.total_after_promo_low, dec!(345));
        assert_eq!(result.total_after_promo_high, dec!(518));
    }

    #[test]
    fn test_negative_sqft_treated_as_not_provided() {
        let result = quote(QuoteInput {
            entered_sqft: dec!(-500),
            ..QuoteInput::default()
        });
        assert_eq!(result.entered_sqft, dec!(0));
        assert_eq!(result.sqft_low, result.sqft_high);
    }

    // ==================== tiers & frequency ====================

    #[test]
    fn test_standard_tier_is_faster() {
        let result = quote(QuoteInput {
            tier: ServiceTier::Standard,
            ..heuristic_only()
        });
        // 1800 * 0.8 / 290 = 4.97 -> 5h
        assert_eq!(result.time.on_site_high, dec!(5));
        assert_eq!(result.reserved_window_hours, 5);
        assert_eq!(result.booking_deposit, dec!(75));
    }

    #[test]
    fn test_weekly_discount_applies_before_eco() {
        let result = quote(QuoteInput {
            frequency: Frequency::Weekly,
            ..heuristic_only()
        });
        // 450 * 0.82 = 369, * 1.15 = 424.35
        assert_eq!(result.breakdown.frequency_discount, dec!(81));
        assert_eq!(result.total_after_promo_high, dec!(424));
    }

    #[test]
    fn test_no_eco_has_no_upcharge() {
        let result = quote(QuoteInput {
            eco_products: false,
            ..heuristic_only()
        });
        assert_eq!(result.breakdown.eco_upcharge, dec!(0));
        assert_eq!(result.total_after_promo_high, dec!(450));
    }

    // ==================== add-ons ====================

    #[test]
    fn test_flat_addons_bypass_hourly_rate() {
        let result = quote(QuoteInput {
            eco_products: false,
            addons: Addons {
                fridge: true,
                oven: true,
                second_kitchen: false,
            },
            ..heuristic_only()
        });
        assert_eq!(result.breakdown.addon_flat_total, dec!(90));
        // low: 6.2 + 0.5 + 0.33 = 7.04 -> 7h; high: 6.2 + 1.25 + 0.75 = 8.2 -> crew of 2
        assert_eq!(result.time.cleaners, 2);
        assert_eq!(result.time.on_site_low, dec!(3.5));
        assert_eq!(result.time.on_site_high, dec!(4));
        assert_eq!(result.billable_hours_high, dec!(8));
        assert_eq!(result.total_after_promo_low, dec!(615));
        assert_eq!(result.total_after_promo_high, dec!(690));
    }

    #[test]
    fn test_second_kitchen_adds_area_to_both_bounds() {
        let result = quote(QuoteInput {
            addons: Addons {
                second_kitchen: true,
                ..Addons::default()
            },
            ..heuristic_only()
        });
        assert_eq!(result.sqft_low, dec!(2100));
        assert_eq!(result.sqft_high, dec!(2100));
        assert_eq!(result.breakdown.addon_flat_total, dec!(0));
        assert_eq!(result.addon_hours_low, dec!(1));
        assert_eq!(result.addon_hours_high, dec!(1.5));
    }

    #[test]
    fn test_second_kitchen_on_empty_home_sits_above_heuristic() {
        let result = quote(QuoteInput {
            bedrooms: 0,
            bathrooms: 0,
            addons: Addons {
                second_kitchen: true,
                ..Addons::default()
            },
            ..heuristic_only()
        });
        let kitchen = PricingConfig::default().addons.second_kitchen.sqft;
        assert_eq!(result.sqft_low, result.heuristic_sqft + kitchen);
        assert_eq!(result.sqft_high, result.sqft_low);
    }

    // ==================== crew & large jobs ====================

    #[test]
    fn test_crew_split_uses_high_bound_for_both() {
        let result = quote(QuoteInput {
            entered_sqft: dec!(3000),
            ..QuoteInput::default()
        });
        // high: 3000/290 = 10.3 person-hours -> 2 cleaners
        assert_eq!(result.time.cleaners, 2);
        // low: 6.2 / 2 = 3.1 -> 3h on site, 6 billable
        assert_eq!(result.time.on_site_low, dec!(3));
        assert_eq!(result.billable_hours_low, dec!(6));
        assert_eq!(result.time.on_site_high, dec!(5));
        assert_eq!(result.billable_hours_high, dec!(10));
    }

    #[test]
    fn test_large_job_flag() {
        let result = quote(QuoteInput {
            bedrooms: 5,
            bathrooms: 4,
            entered_sqft: dec!(4000),
            tier: ServiceTier::MoveOut,
            ..QuoteInput::default()
        });
        // 4000 * 1.3 / 290 = 17.9 person-hours
        assert_eq!(result.time.cleaners, 2);
        assert_eq!(result.time.on_site_high, dec!(9));
        assert_eq!(result.billable_hours_high, dec!(18));
        assert!(result.is_large_job);
        // nothing reaches 9h, so the longest slot is used
        assert_eq!(result.reserved_window_hours, 8);
        assert_eq!(result.booking_deposit, dec!(125));
    }

    #[test]
    fn test_minimum_visit_for_tiny_home() {
        let result = quote(QuoteInput {
            bedrooms: 0,
            bathrooms: 0,
            entered_sqft: Decimal::ZERO,
            tier: ServiceTier::Standard,
            ..QuoteInput::default()
        });
        assert_eq!(result.time.on_site_high, dec!(2));
        assert_eq!(result.reserved_window_hours, 2);
        assert_eq!(result.booking_deposit, dec!(50));
    }

    // ==================== promos ====================

    #[test]
    fn test_promo_applied_to_deep_clean() {
        let result = quote(QuoteInput {
            promo_code: " goldenwelcome ".to_string(),
            ..heuristic_only()
        });
        assert!(result.promo.is_applied());
        assert_eq!(result.promo.applied_code(), Some("GOLDENWELCOME"));
        assert_eq!(result.promo.message().as_deref(), Some("Code applied: −$50"));
        assert_eq!(result.breakdown.promo_discount, dec!(50));
        assert_eq!(result.total_before_promo_high, dec!(518));
        // 517.50 - 50 = 467.50
        assert_eq!(result.total_after_promo_high, dec!(468));
        // deposit is untouched by promos
        assert_eq!(result.booking_deposit, dec!(100));
    }

    #[test]
    fn test_promo_rejected_for_other_tier() {
        let result = quote(QuoteInput {
            tier: ServiceTier::Standard,
            promo_code: "GOLDENWELCOME".to_string(),
            ..heuristic_only()
        });
        assert_eq!(result.promo.discount(), dec!(0));
        assert_eq!(
            result.promo.message().as_deref(),
            Some("This code only applies to a Deep Clean.")
        );
        assert_eq!(result.total_after_promo_high, result.total_before_promo_high);
    }

    #[test]
    fn test_unknown_promo_has_no_effect() {
        let plain = quote(heuristic_only());
        let result = quote(QuoteInput {
            promo_code: "FREECLEAN".to_string(),
            ..heuristic_only()
        });
        assert_eq!(
            result.promo,
            PromoStatus::Invalid {
                code: "FREECLEAN".to_string()
            }
        );
        assert_eq!(result.promo.message().as_deref(), Some("Invalid promo code."));
        assert_eq!(result.total_after_promo_high, plain.total_after_promo_high);
    }

    #[test]
    fn test_blank_promo_is_silent() {
        let config = PricingConfig::default();
        let status = validate_promo("   ", ServiceTier::Deep, &config);
        assert_eq!(status, PromoStatus::None);
        assert!(status.message().is_none());
    }

    #[test]
    fn test_promo_cannot_push_total_below_zero() {
        let mut config = PricingConfig::default();
        config.promos.get_mut("GOLDENWELCOME").unwrap().amount = dec!(5000);
        let result = estimate(
            &QuoteInput {
                promo_code: "GOLDENWELCOME".to_string(),
                ..heuristic_only()
            },
            &config,
        );
        assert_eq!(result.total_after_promo_low, dec!(0));
        assert_eq!(result.total_after_promo_high, dec!(0));
    }

    // ==================== degenerate configs ====================

    #[test]
    fn test_no_booking_slots_uses_fallback_url() {
        let config = PricingConfig {
            booking_slots: vec![],
            ..PricingConfig::default()
        };
        let result = estimate(&heuristic_only(), &config);
        assert_eq!(result.booking_url, config.fallback_booking_url);
        assert_eq!(result.reserved_window_hours, 6);
    }

    #[test]
    fn test_huge_sqft_is_capped() {
        let result = quote(QuoteInput {
            entered_sqft: dec!(99999999999999999999),
            ..QuoteInput::default()
        });
        assert_eq!(result.sqft_high, MAX_ENTERED_SQFT);
        assert!(result.is_large_job);
    }

    // ==================== validate_config ====================

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PricingConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_config_collects_errors() {
        let mut config = PricingConfig {
            booking_slots: vec![],
            sqft_per_hour: Decimal::ZERO,
            ..PricingConfig::default()
        };
        config.frequency_discounts.weekly = dec!(1.2);
        config.promos.insert(
            "lowercase".to_string(),
            crate::pricing::models::PromoRule {
                amount: dec!(10),
                tier: None,
            },
        );

        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.errors.len(), 4);
        assert!(err.to_string().contains("booking_slots is empty"));
    }

    #[test]
    fn test_validate_config_rejects_decreasing_deposits() {
        let mut config = PricingConfig::default();
        config.deposit_tiers[1].amount = dec!(10);
        let err = validate_config(&config).unwrap_err();
        assert!(err.errors.iter().any(|e| e.contains("lower than")));
    }
}
