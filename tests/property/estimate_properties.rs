use goldenhour_web::pricing::calculators::deposit_for_hours;
use goldenhour_web::pricing::models::{Addons, Frequency, PricingConfig, QuoteInput, ServiceTier};
use goldenhour_web::pricing::estimate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn quote_input() -> impl Strategy<Value = QuoteInput> {
    (
        0u32..12,
        0u32..10,
        0u32..20_000,
        0usize..3,
        0usize..4,
        any::<bool>(),
        any::<(bool, bool, bool)>(),
        prop::sample::select(vec!["", "goldenwelcome", "GOLDENWELCOME", "SPRING10", " x "]),
    )
        .prop_map(
            |(bedrooms, bathrooms, sqft, tier, frequency, eco, (fridge, oven, second_kitchen), promo)| {
                QuoteInput {
                    bedrooms,
                    bathrooms,
                    entered_sqft: Decimal::from(sqft),
                    tier: ServiceTier::ALL[tier],
                    frequency: Frequency::ALL[frequency],
                    eco_products: eco,
                    addons: Addons {
                        fridge,
                        oven,
                        second_kitchen,
                    },
                    promo_code: promo.to_string(),
                }
            },
        )
}

proptest! {
    #[test]
    fn sqft_bounds_are_ordered(input in quote_input()) {
        let result = estimate(&input, &PricingConfig::default());
        prop_assert!(result.sqft_low <= result.sqft_high);
        prop_assert!(result.billable_hours_low <= result.billable_hours_high);
        prop_assert!(result.time.on_site_low <= result.time.on_site_high);
    }

    #[test]
    fn missing_sqft_collapses_to_heuristic(input in quote_input()) {
        let input = QuoteInput { entered_sqft: Decimal::ZERO, ..input };
        let config = PricingConfig::default();
        let result = estimate(&input, &config);
        let kitchen = if input.addons.second_kitchen {
            config.addons.second_kitchen.sqft
        } else {
            Decimal::ZERO
        };
        prop_assert_eq!(result.sqft_low, result.heuristic_sqft + kitchen);
        prop_assert_eq!(result.sqft_high, result.heuristic_sqft + kitchen);
    }

    #[test]
    fn crew_is_one_or_two(input in quote_input()) {
        let result = estimate(&input, &PricingConfig::default());
        let cleaners = result.time.cleaners;
        prop_assert!(cleaners == 1 || cleaners == 2);
        if cleaners == 2 {
            prop_assert!(result.billable_hours_high >= dec!(8));
        } else {
            prop_assert!(result.billable_hours_high <= dec!(8));
        }
    }

    #[test]
    fn totals_are_whole_and_ordered(input in quote_input()) {
        let result = estimate(&input, &PricingConfig::default());
        for total in [
            result.total_before_promo_low,
            result.total_before_promo_high,
            result.total_after_promo_low,
            result.total_after_promo_high,
        ] {
            prop_assert!(total >= Decimal::ZERO);
            prop_assert!(total.fract().is_zero());
        }
        prop_assert!(result.total_after_promo_low <= result.total_after_promo_high);
        prop_assert!(result.total_after_promo_high <= result.total_before_promo_high);
    }

    #[test]
    fn promo_only_for_matching_tier(input in quote_input()) {
        let result = estimate(&input, &PricingConfig::default());
        if result.breakdown.promo_discount > Decimal::ZERO {
            prop_assert_eq!(input.tier, ServiceTier::Deep);
            prop_assert_eq!(input.promo_code.trim().to_uppercase(), "GOLDENWELCOME");
        }
    }

    #[test]
    fn large_jobs_are_flagged(input in quote_input()) {
        let result = estimate(&input, &PricingConfig::default());
        prop_assert_eq!(result.is_large_job, result.billable_hours_high > dec!(16));
    }

    #[test]
    fn deposit_never_decreases(a in 0u32..24, b in 0u32..24) {
        let config = PricingConfig::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            deposit_for_hours(low, &config.deposit_tiers, config.deposit_max)
                <= deposit_for_hours(high, &config.deposit_tiers, config.deposit_max)
        );
    }
}
