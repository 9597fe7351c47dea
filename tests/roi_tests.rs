/// Unit tests for the solar ROI estimator
/// Tests the worked examples, the savings cap, input validation, and the
/// never-pays-back sentinel
use wodah_leads_api::roi::{estimate, PaybackPeriod, RoiError, RoiRequest};

#[cfg(test)]
mod estimate_tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        // 5kW system, $150/month bill, $0.12/kWh:
        // effective production = 5 * 1500 * 0.8 = 6000 kWh
        // savings = min(6000 * 0.12, 1800) = 720
        // total cost = 5 * 1000 * 3.0 = 15000
        // payback = 15000 / 720 = 20.83 -> 20.8
        // ROI = (720 * 25 / 15000) * 100 = 120.0
        let result = estimate(150.0, 5.0, 0.12).unwrap();
        assert_eq!(result.annual_savings, 720.0);
        assert_eq!(result.payback, PaybackPeriod::Years(20.8));
        assert_eq!(result.total_roi_percent, 120.0);
    }

    #[test]
    fn test_savings_capped_at_current_spend() {
        // 10kW system against a $50 bill: uncapped savings would be
        // 12000 * 0.20 = 2400, far above the $600 annual spend.
        let result = estimate(50.0, 10.0, 0.20).unwrap();
        assert_eq!(result.annual_savings, 600.0);
        assert_eq!(result.payback, PaybackPeriod::Years(50.0));
        assert_eq!(result.total_roi_percent, 50.0);
    }

    #[test]
    fn test_rounding() {
        // savings = min(6000 * 0.1234, 1206) = 740.4 -> 740
        // payback = 15000 / 740.4 = 20.259... -> 20.3
        let result = estimate(100.5, 5.0, 0.1234).unwrap();
        assert_eq!(result.annual_savings, 740.0);
        assert_eq!(result.payback, PaybackPeriod::Years(20.3));
    }

    #[test]
    fn test_zero_inputs_rejected() {
        assert!(matches!(
            estimate(0.0, 5.0, 0.12),
            Err(RoiError::InvalidInput(_))
        ));
        assert!(matches!(
            estimate(150.0, 0.0, 0.12),
            Err(RoiError::InvalidInput(_))
        ));
        assert!(matches!(
            estimate(150.0, 5.0, 0.0),
            Err(RoiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_and_non_finite_inputs_rejected() {
        assert!(estimate(-150.0, 5.0, 0.12).is_err());
        assert!(estimate(150.0, -5.0, 0.12).is_err());
        assert!(estimate(150.0, 5.0, -0.12).is_err());
        assert!(estimate(f64::NAN, 5.0, 0.12).is_err());
        assert!(estimate(150.0, f64::INFINITY, 0.12).is_err());
    }

    #[test]
    fn test_underflowed_savings_never_pay_back() {
        // Positive inputs whose savings product underflows to zero: the
        // payback is the explicit sentinel, never NaN or infinity.
        let result = estimate(150.0, 1e-180, 1e-200).unwrap();
        assert_eq!(result.annual_savings, 0.0);
        assert_eq!(result.payback, PaybackPeriod::Never);
        assert_eq!(result.total_roi_percent, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let a = estimate(212.5, 7.3, 0.145).unwrap();
        let b = estimate(212.5, 7.3, 0.145).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod request_parsing_tests {
    use super::*;

    fn request(bill: &str, size: &str, rate: &str) -> RoiRequest {
        RoiRequest {
            zip_code: "90210".to_string(),
            monthly_bill: bill.to_string(),
            system_size_kw: size.to_string(),
            electricity_rate: rate.to_string(),
        }
    }

    #[test]
    fn test_string_fields_parse() {
        let result = request("150", "5", "0.12").estimate().unwrap();
        assert_eq!(result.annual_savings, 720.0);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let result = request(" 150 ", "5", " 0.12").estimate().unwrap();
        assert_eq!(result.annual_savings, 720.0);
    }

    #[test]
    fn test_non_numeric_fields_rejected() {
        assert!(request("abc", "5", "0.12").estimate().is_err());
        assert!(request("150", "five", "0.12").estimate().is_err());
        assert!(request("150", "5", "cheap").estimate().is_err());
        assert!(request("", "5", "0.12").estimate().is_err());
    }

    #[test]
    fn test_blank_rate_defaults() {
        let result = request("150", "5", "").estimate().unwrap();
        assert_eq!(result.annual_savings, 720.0);
    }

    #[test]
    fn test_zip_code_is_informational_only() {
        let with_zip = request("150", "5", "0.12").estimate().unwrap();
        let mut no_zip = request("150", "5", "0.12");
        no_zip.zip_code = String::new();
        assert_eq!(with_zip, no_zip.estimate().unwrap());
    }
}
