//! Solar ROI estimation.
//!
//! Pure, deterministic math behind the landing-page calculator widget: given
//! a monthly electricity bill, a system size, and an electricity rate, derive
//! annual savings, payback period, and lifetime ROI. No I/O, no state.
//!
//! The constants below are average-US domain assumptions baked into the
//! product copy. They are deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Installed system cost, currency per watt.
pub const INSTALLED_COST_PER_WATT: f64 = 3.0;
/// Average annual yield, kWh per kW of installed capacity.
pub const ANNUAL_YIELD_KWH_PER_KW: f64 = 1500.0;
/// Fraction of nameplate production actually delivered.
pub const SYSTEM_EFFICIENCY: f64 = 0.8;
/// ROI horizon in years (typical panel lifetime).
pub const ROI_HORIZON_YEARS: f64 = 25.0;
/// Default electricity rate, currency per kWh, used when the form field is
/// left blank.
pub const DEFAULT_ELECTRICITY_RATE: f64 = 0.12;

/// The calculator inputs exactly as the form supplies them: raw strings.
///
/// `zip_code` is informational only (shown back to the user for local
/// incentive context) and is neither validated nor used in the computation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRequest {
    #[serde(default)]
    pub zip_code: String,
    pub monthly_bill: String,
    pub system_size_kw: String,
    #[serde(default)]
    pub electricity_rate: String,
}

impl RoiRequest {
    /// Parses the numeric fields and runs the estimate.
    ///
    /// A blank electricity rate falls back to [`DEFAULT_ELECTRICITY_RATE`];
    /// anything else that fails to parse is an [`RoiError::InvalidInput`].
    pub fn estimate(&self) -> Result<RoiEstimate, RoiError> {
        let monthly_bill = parse_field("monthly bill", &self.monthly_bill)?;
        let system_size_kw = parse_field("system size", &self.system_size_kw)?;
        let electricity_rate = if self.electricity_rate.trim().is_empty() {
            DEFAULT_ELECTRICITY_RATE
        } else {
            parse_field("electricity rate", &self.electricity_rate)?
        };
        estimate(monthly_bill, system_size_kw, electricity_rate)
    }
}

fn parse_field(name: &str, raw: &str) -> Result<f64, RoiError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RoiError::InvalidInput(format!("{} is not a number: {:?}", name, raw)))
}

/// Payback period for the system investment.
///
/// When annual savings evaluate to zero the investment never recoups; that
/// case is a tagged variant rather than a NaN or infinite float so callers
/// render it deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "years")]
pub enum PaybackPeriod {
    Years(f64),
    Never,
}

/// Derived ROI figures, immutable once computed.
///
/// Rounding happens once, here: `annual_savings` to the nearest whole
/// currency unit, `payback` and `total_roi_percent` to one decimal place.
/// All rounding is `f64::round` semantics (nearest, ties away from zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub annual_savings: f64,
    pub payback: PaybackPeriod,
    pub total_roi_percent: f64,
}

/// Input validation failure for the estimator. Local and user-correctable;
/// never crosses the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoiError {
    InvalidInput(String),
}

impl fmt::Display for RoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for RoiError {}

/// Estimates solar savings, payback, and lifetime ROI.
///
/// All three inputs must be finite and strictly positive. Annual savings are
/// capped at the current annual spend (`monthly_bill * 12`): a system cannot
/// save more than the bill it offsets.
pub fn estimate(
    monthly_bill: f64,
    system_size_kw: f64,
    electricity_rate: f64,
) -> Result<RoiEstimate, RoiError> {
    for (name, value) in [
        ("monthly bill", monthly_bill),
        ("system size", system_size_kw),
        ("electricity rate", electricity_rate),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(RoiError::InvalidInput(format!(
                "{} must be a positive number, got {}",
                name, value
            )));
        }
    }

    let total_cost = system_size_kw * 1000.0 * INSTALLED_COST_PER_WATT;
    let annual_production_kwh = system_size_kw * ANNUAL_YIELD_KWH_PER_KW;
    let effective_production_kwh = annual_production_kwh * SYSTEM_EFFICIENCY;
    let current_annual_cost = monthly_bill * 12.0;
    let annual_savings = (effective_production_kwh * electricity_rate).min(current_annual_cost);

    // With extreme rate/size skew the savings product underflows to zero;
    // the system then never pays for itself.
    let payback = if annual_savings > 0.0 {
        PaybackPeriod::Years(round1(total_cost / annual_savings))
    } else {
        PaybackPeriod::Never
    };

    let total_roi_percent = (annual_savings * ROI_HORIZON_YEARS / total_cost) * 100.0;

    Ok(RoiEstimate {
        annual_savings: annual_savings.round(),
        payback,
        total_roi_percent: round1(total_roi_percent),
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
