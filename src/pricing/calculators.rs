//! Core pricing calculation functions.
//!
//! Pure functions for the estimate pipeline - no I/O, no shared state.
//! Every helper here is total: bad input degrades to a safe value instead of
//! an error.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{BookingSlot, DepositTier, RoomsToSqft};

/// Round to specified decimal places, halves rounding up (away from zero).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use goldenhour_web::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_half_up(dec!(517.5), 0), dec!(518));
/// assert_eq!(round_half_up(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_half_up(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole, non-negative dollars
pub fn clamp_currency(amount: Decimal) -> Decimal {
    round_half_up(amount, 0).max(Decimal::ZERO)
}

/// Round to the nearest multiple of `step` (e.g. half hours).
///
/// A non-positive step leaves the value untouched.
pub fn round_to_step(value: Decimal, step: Decimal) -> Decimal {
    if step <= Decimal::ZERO {
        return value;
    }
    round_half_up(value / step, 0) * step
}

/// Square footage implied by room counts
pub fn heuristic_sqft(bedrooms: u32, bathrooms: u32, rooms: &RoomsToSqft) -> Decimal {
    rooms.base + Decimal::from(bedrooms) * rooms.per_bedroom + Decimal::from(bathrooms) * rooms.per_bathroom
}

/// Low/high square footage from the heuristic and the customer's entry.
///
/// With nothing entered both bounds are the heuristic; otherwise the range
/// spans both values so neither an under- nor over-estimate wins outright.
pub fn sqft_range(heuristic: Decimal, entered: Decimal) -> (Decimal, Decimal) {
    if entered <= Decimal::ZERO {
        (heuristic, heuristic)
    } else {
        (heuristic.min(entered), heuristic.max(entered))
    }
}

/// Labor for one cleaner, never below the minimum visit
pub fn person_hours(
    sqft: Decimal,
    tier_multiplier: Decimal,
    sqft_per_hour: Decimal,
    addon_hours: Decimal,
    min_visit_hours: Decimal,
) -> Decimal {
    let cleaning = (sqft * tier_multiplier)
        .checked_div(sqft_per_hour)
        .unwrap_or(Decimal::ZERO);
    (cleaning + addon_hours).max(min_visit_hours)
}

/// Two cleaners once the high-bound labor passes the split threshold
pub fn crew_size(high_person_hours: Decimal, split_threshold: Decimal) -> u32 {
    if high_person_hours > split_threshold {
        2
    } else {
        1
    }
}

/// Smallest slot at least `min_hours` long, else the longest slot.
pub fn pick_booking_slot(slots: &[BookingSlot], min_hours: u32) -> Option<&BookingSlot> {
    slots
        .iter()
        .filter(|slot| slot.hours >= min_hours)
        .min_by_key(|slot| slot.hours)
        .or_else(|| slots.iter().max_by_key(|slot| slot.hours))
}

/// Deposit for a reserved window; tiers are checked shortest first.
pub fn deposit_for_hours(hours: u32, tiers: &[DepositTier], deposit_max: Decimal) -> Decimal {
    let mut sorted: Vec<&DepositTier> = tiers.iter().collect();
    sorted.sort_by_key(|tier| tier.up_to_hours);

    sorted
        .into_iter()
        .find(|tier| hours <= tier.up_to_hours)
        .map(|tier| tier.amount)
        .unwrap_or(deposit_max)
}

/// Hours with at most one decimal, dropping a trailing `.0` (`6`, `5.5`)
pub fn format_hours(hours: Decimal) -> String {
    let rounded = round_half_up(hours, 1);
    if rounded.fract().is_zero() {
        rounded.trunc().normalize().to_string()
    } else {
        rounded.normalize().to_string()
    }
}

/// Hours with exactly one decimal (`6.0`)
pub fn format_hours_fixed(hours: Decimal) -> String {
    format!("{:.1}", round_half_up(hours, 1))
}

pub fn hours_unit(hours: Decimal) -> &'static str {
    if hours == Decimal::ONE {
        "hour"
    } else {
        "hours"
    }
}

/// Whole number with thousands separators (`1,800`)
pub fn format_count(value: Decimal) -> String {
    let whole = round_half_up(value, 0).normalize();
    let digits = whole.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Dollar display, clamped to whole non-negative dollars (`$1,234`)
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", format_count(clamp_currency(amount)))
}

/// Price or size as a single value, or `low–high` when they differ
pub fn format_range(low: Decimal, high: Decimal, format: impl Fn(Decimal) -> String) -> String {
    if low == high {
        format(high)
    } else {
        format!("{}–{}", format(low), format(high))
    }
}

/// Minimum spread, in hours, before a time range is shown instead of `~N`
pub const TIME_RANGE_THRESHOLD: Decimal = dec!(0.26);

/// On-site time as `~6 hours` or `5.5–6 hours`
pub fn time_display(
    on_site_low: Decimal,
    on_site_high: Decimal,
    billable_low: Decimal,
    billable_high: Decimal,
) -> String {
    let has_range = (on_site_high - on_site_low).abs() >= TIME_RANGE_THRESHOLD
        || (billable_high - billable_low).abs() >= TIME_RANGE_THRESHOLD;

    if has_range {
        format!(
            "{}–{} {}",
            format_hours(on_site_low),
            format_hours(on_site_high),
            hours_unit(on_site_high)
        )
    } else {
        format!("~{} {}", format_hours(on_site_high), hours_unit(on_site_high))
    }
}
