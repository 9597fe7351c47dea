/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs
use proptest::prelude::*;
use wodah_leads_api::roi::{estimate, PaybackPeriod};
use wodah_leads_api::workflow::is_plausible_email;

// Property: the estimator never panics and positive inputs always succeed
proptest! {
    #[test]
    fn positive_inputs_always_estimate(
        bill in 0.01f64..100_000.0,
        size in 0.01f64..1_000.0,
        rate in 0.001f64..10.0
    ) {
        let result = estimate(bill, size, rate);
        prop_assert!(result.is_ok());
    }

    #[test]
    fn non_positive_bill_always_rejected(
        bill in -100_000.0f64..=0.0,
        size in 0.01f64..1_000.0,
        rate in 0.001f64..10.0
    ) {
        prop_assert!(estimate(bill, size, rate).is_err());
    }
}

// Property: savings never exceed what the household currently spends.
// Rounding to the nearest whole unit is monotone, so the rounded savings
// stay at or below the rounded annual spend.
proptest! {
    #[test]
    fn savings_capped_at_annual_spend(
        bill in 0.01f64..100_000.0,
        size in 0.01f64..1_000.0,
        rate in 0.001f64..10.0
    ) {
        let result = estimate(bill, size, rate).unwrap();
        prop_assert!(result.annual_savings <= (bill * 12.0).round());
        prop_assert!(result.annual_savings >= 0.0);
    }

    #[test]
    fn payback_is_positive_or_never(
        bill in 0.01f64..100_000.0,
        size in 0.01f64..1_000.0,
        rate in 0.001f64..10.0
    ) {
        let result = estimate(bill, size, rate).unwrap();
        match result.payback {
            PaybackPeriod::Years(years) => prop_assert!(years > 0.0 && years.is_finite()),
            PaybackPeriod::Never => prop_assert!(result.annual_savings == 0.0),
        }
        prop_assert!(result.total_roi_percent >= 0.0);
    }

    #[test]
    fn estimate_is_deterministic(
        bill in 0.01f64..100_000.0,
        size in 0.01f64..1_000.0,
        rate in 0.001f64..10.0
    ) {
        prop_assert_eq!(estimate(bill, size, rate), estimate(bill, size, rate));
    }
}

// Property: email plausibility check should never panic
proptest! {
    #[test]
    fn email_check_never_panics(email in "\\PC*") {
        let _ = is_plausible_email(&email);
    }

    #[test]
    fn well_formed_emails_are_plausible(
        local in "[a-z]{1,10}",
        domain in "[a-z]{1,10}",
        tld in "[a-z]{2,4}"
    ) {
        // Simple local@domain.tld is always at least 6 chars and passes
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(is_plausible_email(&email));
    }
}
