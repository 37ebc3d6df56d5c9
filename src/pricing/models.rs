//! Quote input and pricing configuration models.
//!
//! `PricingConfig` is a plain immutable value. The estimator receives it as an
//! argument; nothing here is read from process-wide state.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Selected service level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceTier {
    Standard,
    #[default]
    Deep,
    MoveOut,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 3] = [ServiceTier::Standard, ServiceTier::Deep, ServiceTier::MoveOut];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "standard",
            ServiceTier::Deep => "deep",
            ServiceTier::MoveOut => "move_out",
        }
    }

    /// Parse the wire value (`standard`, `deep`, `move_out`)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(ServiceTier::Standard),
            "deep" => Some(ServiceTier::Deep),
            "move_out" => Some(ServiceTier::MoveOut),
            _ => None,
        }
    }

    /// Marketing name used in summaries and message subjects
    pub fn label(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "Standard Refresh",
            ServiceTier::Deep => "Deep Glow",
            ServiceTier::MoveOut => "Move-In / Move-Out",
        }
    }

    /// Name shown in the tier picker
    pub fn option_label(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "Standard Clean",
            ServiceTier::Deep => "Deep Clean",
            ServiceTier::MoveOut => "Move-In / Move-Out",
        }
    }
}

/// Cleaning frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    OneTime,
    Monthly,
    BiWeekly,
    Weekly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::OneTime,
        Frequency::Monthly,
        Frequency::BiWeekly,
        Frequency::Weekly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one_time",
            Frequency::Monthly => "monthly",
            Frequency::BiWeekly => "bi_weekly",
            Frequency::Weekly => "weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "one_time" => Some(Frequency::OneTime),
            "monthly" => Some(Frequency::Monthly),
            "bi_weekly" => Some(Frequency::BiWeekly),
            "weekly" => Some(Frequency::Weekly),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "One-time",
            Frequency::Monthly => "Monthly",
            Frequency::BiWeekly => "Bi-weekly",
            Frequency::Weekly => "Weekly",
        }
    }
}

/// Optional extras selected on top of the base clean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Addons {
    pub fridge: bool,
    pub oven: bool,
    pub second_kitchen: bool,
}

impl Addons {
    /// Pricing entries for every selected add-on
    pub fn selected<'a>(&self, table: &'a AddonTable) -> impl Iterator<Item = &'a AddonPricing> {
        [
            (self.fridge, &table.fridge),
            (self.oven, &table.oven),
            (self.second_kitchen, &table.second_kitchen),
        ]
        .into_iter()
        .filter_map(|(on, pricing)| on.then_some(pricing))
    }

    /// Compact tracking code, e.g. `FrOv2Kit`, or `none`
    pub fn code(&self) -> String {
        let mut code = String::new();
        if self.fridge {
            code.push_str("Fr");
        }
        if self.oven {
            code.push_str("Ov");
        }
        if self.second_kitchen {
            code.push_str("2Kit");
        }
        if code.is_empty() {
            code.push_str("none");
        }
        code
    }
}

/// Everything the customer can set on the quote form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteInput {
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square footage typed by the customer; zero means "not provided"
    pub entered_sqft: Decimal,
    pub tier: ServiceTier,
    pub frequency: Frequency,
    pub eco_products: bool,
    pub addons: Addons,
    pub promo_code: String,
}

impl Default for QuoteInput {
    fn default() -> Self {
        Self {
            bedrooms: 3,
            bathrooms: 2,
            entered_sqft: dec!(1800),
            tier: ServiceTier::Deep,
            frequency: Frequency::OneTime,
            eco_products: true,
            addons: Addons::default(),
            promo_code: String::new(),
        }
    }
}

/// Flat-dollar promo, optionally restricted to one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoRule {
    pub amount: Decimal,
    #[serde(default)]
    pub tier: Option<ServiceTier>,
}

impl PromoRule {
    pub fn applies_to(&self, tier: ServiceTier) -> bool {
        self.tier.map_or(true, |required| required == tier)
    }
}

/// Appointment length offered by the external scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSlot {
    pub hours: u32,
    pub url: String,
}

/// Deposit charged when the reserved window is at most `up_to_hours`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositTier {
    pub up_to_hours: u32,
    pub amount: Decimal,
}

/// Price and time effect of a single add-on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonPricing {
    /// Charged as-is, outside the hourly rate
    pub flat_price: Decimal,
    pub minutes_low: Decimal,
    pub minutes_high: Decimal,
    /// Added to both square-footage bounds
    pub sqft: Decimal,
}

impl AddonPricing {
    pub fn hours_low(&self) -> Decimal {
        self.minutes_low / dec!(60)
    }

    pub fn hours_high(&self) -> Decimal {
        self.minutes_high / dec!(60)
    }
}

impl Default for AddonPricing {
    fn default() -> Self {
        Self {
            flat_price: Decimal::ZERO,
            minutes_low: Decimal::ZERO,
            minutes_high: Decimal::ZERO,
            sqft: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonTable {
    pub fridge: AddonPricing,
    pub oven: AddonPricing,
    pub second_kitchen: AddonPricing,
}

impl Default for AddonTable {
    fn default() -> Self {
        Self {
            fridge: AddonPricing {
                flat_price: dec!(55),
                minutes_low: dec!(30),
                minutes_high: dec!(75),
                sqft: Decimal::ZERO,
            },
            oven: AddonPricing {
                flat_price: dec!(35),
                minutes_low: dec!(20),
                minutes_high: dec!(45),
                sqft: Decimal::ZERO,
            },
            second_kitchen: AddonPricing {
                flat_price: Decimal::ZERO,
                minutes_low: dec!(60),
                minutes_high: dec!(90),
                sqft: dec!(300),
            },
        }
    }
}

/// Fractional discount per frequency (0.18 = 18% off)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyDiscounts {
    pub one_time: Decimal,
    pub monthly: Decimal,
    pub bi_weekly: Decimal,
    pub weekly: Decimal,
}

impl FrequencyDiscounts {
    pub fn get(&self, frequency: Frequency) -> Decimal {
        match frequency {
            Frequency::OneTime => self.one_time,
            Frequency::Monthly => self.monthly,
            Frequency::BiWeekly => self.bi_weekly,
            Frequency::Weekly => self.weekly,
        }
    }
}

impl Default for FrequencyDiscounts {
    fn default() -> Self {
        Self {
            one_time: Decimal::ZERO,
            monthly: dec!(0.05),
            bi_weekly: dec!(0.12),
            weekly: dec!(0.18),
        }
    }
}

/// Time-per-square-foot scaling; deep is the 1.0 baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierMultipliers {
    pub standard: Decimal,
    pub deep: Decimal,
    pub move_out: Decimal,
}

impl TierMultipliers {
    pub fn get(&self, tier: ServiceTier) -> Decimal {
        match tier {
            ServiceTier::Standard => self.standard,
            ServiceTier::Deep => self.deep,
            ServiceTier::MoveOut => self.move_out,
        }
    }
}

impl Default for TierMultipliers {
    fn default() -> Self {
        Self {
            standard: dec!(0.8),
            deep: dec!(1.0),
            move_out: dec!(1.3),
        }
    }
}

/// Square-footage heuristic from room counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomsToSqft {
    pub base: Decimal,
    pub per_bedroom: Decimal,
    pub per_bathroom: Decimal,
}

impl Default for RoomsToSqft {
    fn default() -> Self {
        Self {
            base: dec!(300),
            per_bedroom: dec!(400),
            per_bathroom: dec!(150),
        }
    }
}

/// All tunable pricing numbers.
///
/// Deserializes with `#[serde(default)]`, so an override file only needs the
/// keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub frequency_discounts: FrequencyDiscounts,
    pub rooms_to_sqft: RoomsToSqft,
    pub booking_slots: Vec<BookingSlot>,
    /// Used when no booking slot can be chosen
    pub fallback_booking_url: String,
    pub hourly_rate: Decimal,
    pub eco_multiplier: Decimal,
    /// Square feet one cleaner covers per hour at the deep baseline
    pub sqft_per_hour: Decimal,
    pub tier_multipliers: TierMultipliers,
    pub addons: AddonTable,
    pub min_visit_hours: Decimal,
    /// Person-hours above which a second cleaner is sent
    pub crew_split_hours: Decimal,
    /// Person-hours above which self-scheduling is disabled
    pub large_job_hours: Decimal,
    pub deposit_tiers: Vec<DepositTier>,
    /// Deposit when the window exceeds every tier
    pub deposit_max: Decimal,
    /// Keyed by upper-case code
    pub promos: BTreeMap<String, PromoRule>,
}

const SCHEDULER_BASE: &str = "https://calendly.com/golden-hour-cleaning-company";

impl Default for PricingConfig {
    fn default() -> Self {
        let booking_slots = (2..=8)
            .map(|hours| BookingSlot {
                hours,
                url: format!("{}/approx-{}-hour-cleaning", SCHEDULER_BASE, hours),
            })
            .collect();

        let mut promos = BTreeMap::new();
        promos.insert(
            "GOLDENWELCOME".to_string(),
            PromoRule {
                amount: dec!(50),
                tier: Some(ServiceTier::Deep),
            },
        );

        Self {
            frequency_discounts: FrequencyDiscounts::default(),
            rooms_to_sqft: RoomsToSqft::default(),
            booking_slots,
            fallback_booking_url: format!("{}/approx-4-hour-cleaning", SCHEDULER_BASE),
            hourly_rate: dec!(75),
            eco_multiplier: dec!(1.15),
            sqft_per_hour: dec!(290),
            tier_multipliers: TierMultipliers::default(),
            addons: AddonTable::default(),
            min_visit_hours: dec!(2),
            crew_split_hours: dec!(8),
            large_job_hours: dec!(16),
            deposit_tiers: vec![
                DepositTier { up_to_hours: 3, amount: dec!(50) },
                DepositTier { up_to_hours: 5, amount: dec!(75) },
                DepositTier { up_to_hours: 6, amount: dec!(100) },
            ],
            deposit_max: dec!(125),
            promos,
        }
    }
}
