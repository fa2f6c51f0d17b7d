// 💰 Payment Estimators - Loan amortization + simplified lease
// Pure functions, validated inputs, no I/O

use crate::error::{GalaxyError, Result};
use serde::{Deserialize, Serialize};

/// Money factor used by the showroom lease calculator (~3% APR)
pub const DEFAULT_MONEY_FACTOR: f64 = 0.00125;

// ============================================================================
// INPUT VALIDATION
// ============================================================================

fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GalaxyError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}

fn require_term(term_months: u32) -> Result<f64> {
    if term_months == 0 {
        return Err(GalaxyError::invalid("term_months", "must be greater than zero"));
    }
    Ok(term_months as f64)
}

// ============================================================================
// LOAN
// ============================================================================

/// Loan form state, rebuilt for every calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinanceInputs {
    pub price: f64,
    pub down_payment: f64,
    pub term_months: u32,
    pub annual_rate_percent: f64,
}

impl FinanceInputs {
    pub fn estimate(&self) -> Result<LoanEstimate> {
        estimate_loan(
            self.price,
            self.down_payment,
            self.annual_rate_percent,
            self.term_months,
        )
    }

    /// Principal financed after the down payment
    pub fn principal(&self) -> f64 {
        self.price - self.down_payment
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanEstimate {
    pub monthly_payment: f64,
    pub total_interest: f64,
}

impl LoanEstimate {
    pub fn total_paid(&self, term_months: u32) -> f64 {
        self.monthly_payment * term_months as f64
    }
}

/// Fixed monthly payment on an amortizing loan
///
/// `monthly = P * r / (1 - (1+r)^-n)` with `r = rate/100/12`, the same
/// closed form as `P * r * (1+r)^n / ((1+r)^n - 1)`. The growth term goes
/// through `ln_1p`/`exp_m1` so tiny rates and long terms stay finite.
/// A zero rate is straight division.
pub fn estimate_loan(
    price: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> Result<LoanEstimate> {
    let price = require_finite("price", price)?;
    let down_payment = require_finite("down_payment", down_payment)?;
    let annual_rate_percent = require_finite("annual_rate_percent", annual_rate_percent)?;
    if annual_rate_percent < 0.0 {
        return Err(GalaxyError::invalid("annual_rate_percent", "must not be negative"));
    }
    let n = require_term(term_months)?;
    if i32::try_from(term_months).is_err() {
        return Err(GalaxyError::invalid(
            "term_months",
            format!("{} months is out of range", term_months),
        ));
    }

    let principal = price - down_payment;
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;

    let monthly_payment = if monthly_rate == 0.0 {
        principal / n
    } else {
        // 1 - (1+r)^-n
        let discount = -(-n * monthly_rate.ln_1p()).exp_m1();
        if discount == 0.0 {
            principal / n
        } else {
            principal * monthly_rate / discount
        }
    };
    let total_interest = monthly_payment * n - principal;

    if !(monthly_payment.is_finite() && total_interest.is_finite()) {
        return Err(GalaxyError::invalid(
            "annual_rate_percent",
            "produces a payment that is not a finite number",
        ));
    }

    Ok(LoanEstimate {
        monthly_payment,
        total_interest,
    })
}

// ============================================================================
// LEASE
// ============================================================================

/// Lease form state, rebuilt for every calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseInputs {
    pub price: f64,
    pub down_payment: f64,
    pub term_months: u32,
    pub residual_percent: f64,
    #[serde(default = "default_money_factor")]
    pub money_factor: f64,
}

fn default_money_factor() -> f64 {
    DEFAULT_MONEY_FACTOR
}

impl LeaseInputs {
    pub fn estimate(&self) -> Result<LeaseEstimate> {
        estimate_lease(
            self.price,
            self.down_payment,
            self.term_months,
            self.residual_percent,
            self.money_factor,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseEstimate {
    pub monthly_payment: f64,
    pub residual_amount: f64,
}

/// Monthly lease payment by the depreciation-plus-finance-charge method
///
/// Result is floored at zero: a large down payment never yields a credit.
pub fn estimate_lease(
    price: f64,
    down_payment: f64,
    term_months: u32,
    residual_percent: f64,
    money_factor: f64,
) -> Result<LeaseEstimate> {
    let price = require_finite("price", price)?;
    let down_payment = require_finite("down_payment", down_payment)?;
    let residual_percent = require_finite("residual_percent", residual_percent)?;
    let money_factor = require_finite("money_factor", money_factor)?;
    let n = require_term(term_months)?;

    let residual_amount = price * residual_percent / 100.0;
    let depreciation = (price - residual_amount) / n;
    let finance_charge = (price + residual_amount) * money_factor;
    let monthly = depreciation + finance_charge - down_payment / n;
    if !(monthly.is_finite() && residual_amount.is_finite()) {
        return Err(GalaxyError::invalid("price", "produces a payment that is not a finite number"));
    }

    Ok(LeaseEstimate {
        monthly_payment: monthly.max(0.0),
        residual_amount,
    })
}

/// Money factor equivalent of an APR (APR / 2400)
pub fn money_factor_from_apr(apr_percent: f64) -> f64 {
    apr_percent / 2400.0
}

/// Round a currency amount to cents for display
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_loan_matches_closed_form() {
        let est = estimate_loan(35000.0, 7000.0, 5.5, 60).unwrap();
        assert_eq!(round_cents(est.monthly_payment), 534.83);

        let r: f64 = 5.5 / 100.0 / 12.0;
        let f = (1.0 + r).powf(60.0);
        let expected = 28000.0 * r * f / (f - 1.0);
        assert!(close(est.monthly_payment, expected, 1e-9));
        assert!(close(est.total_interest, expected * 60.0 - 28000.0, 1e-6));
    }

    #[test]
    fn test_zero_rate_is_straight_division() {
        let est = estimate_loan(30000.0, 6000.0, 0.0, 48).unwrap();
        assert_eq!(est.monthly_payment, (30000.0 - 6000.0) / 48.0);
        assert_eq!(est.total_interest, 0.0);
        assert!(!est.monthly_payment.is_nan());
    }

    #[test]
    fn test_loan_rejects_bad_input() {
        let err = estimate_loan(30000.0, 0.0, 5.0, 0).unwrap_err();
        assert_eq!(err.field(), Some("term_months"));

        let err = estimate_loan(f64::NAN, 0.0, 5.0, 60).unwrap_err();
        assert_eq!(err.field(), Some("price"));

        let err = estimate_loan(30000.0, f64::INFINITY, 5.0, 60).unwrap_err();
        assert_eq!(err.field(), Some("down_payment"));

        let err = estimate_loan(30000.0, 0.0, -1.0, 60).unwrap_err();
        assert_eq!(err.field(), Some("annual_rate_percent"));
    }

    #[test]
    fn test_tiny_rate_stays_finite() {
        // 1 + r rounds to 1.0 here
        let est = estimate_loan(35000.0, 7000.0, 1e-15, 60).unwrap();
        assert!(est.monthly_payment.is_finite());
        assert!(close(est.monthly_payment, 28000.0 / 60.0, 1e-6));
        assert!(close(est.total_interest, 0.0, 1e-6));
    }

    #[test]
    fn test_long_term_approaches_interest_only() {
        let est = estimate_loan(35000.0, 7000.0, 5.5, 200_000).unwrap();
        let interest_only = 28000.0 * 5.5 / 100.0 / 12.0;
        assert!(est.monthly_payment.is_finite());
        assert!(est.total_interest.is_finite());
        assert!(close(est.monthly_payment, interest_only, 1e-9));
    }

    #[test]
    fn test_term_beyond_i32_is_invalid() {
        let err = estimate_loan(35000.0, 7000.0, 5.5, 3_000_000_000).unwrap_err();
        assert_eq!(err.field(), Some("term_months"));
        assert!(estimate_loan(35000.0, 7000.0, 5.5, i32::MAX as u32).is_ok());
    }

    #[test]
    fn test_finance_inputs_estimate() {
        let inputs = FinanceInputs {
            price: 35000.0,
            down_payment: 7000.0,
            term_months: 60,
            annual_rate_percent: 5.5,
        };
        assert_eq!(inputs.principal(), 28000.0);
        let est = inputs.estimate().unwrap();
        assert!(close(est.total_paid(60) - inputs.principal(), est.total_interest, 1e-6));
    }

    #[test]
    fn test_lease_reference_values() {
        let est = estimate_lease(35000.0, 3000.0, 36, 55.0, DEFAULT_MONEY_FACTOR).unwrap();
        // depreciation 437.50 + finance 67.8125 - down 83.33
        assert_eq!(round_cents(est.monthly_payment), 421.98);
        assert_eq!(est.residual_amount, 19250.0);

        let no_down = estimate_lease(35000.0, 0.0, 36, 55.0, DEFAULT_MONEY_FACTOR).unwrap();
        assert_eq!(round_cents(no_down.monthly_payment), 505.31);
    }

    #[test]
    fn test_lease_floored_at_zero() {
        let est = estimate_lease(20000.0, 50000.0, 36, 60.0, DEFAULT_MONEY_FACTOR).unwrap();
        assert_eq!(est.monthly_payment, 0.0);

        for down in [0.0, 1000.0, 10000.0, 100000.0] {
            for term in [12, 24, 36, 48] {
                for residual in [0.0, 40.0, 70.0, 100.0] {
                    let est = estimate_lease(30000.0, down, term, residual, DEFAULT_MONEY_FACTOR)
                        .unwrap();
                    assert!(est.monthly_payment >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_lease_zero_term_is_invalid() {
        let err = estimate_lease(35000.0, 3000.0, 0, 55.0, DEFAULT_MONEY_FACTOR).unwrap_err();
        assert_eq!(err.field(), Some("term_months"));
    }

    #[test]
    fn test_lease_overflow_is_invalid() {
        let err = estimate_lease(f64::MAX, 0.0, 36, 55.0, DEFAULT_MONEY_FACTOR).unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }

    #[test]
    fn test_lease_inputs_default_money_factor() {
        let inputs: LeaseInputs = serde_json::from_str(
            r#"{"price":35000,"down_payment":3000,"term_months":36,"residual_percent":55}"#,
        )
        .unwrap();
        assert_eq!(inputs.money_factor, DEFAULT_MONEY_FACTOR);
        assert_eq!(round_cents(inputs.estimate().unwrap().monthly_payment), 421.98);
    }

    #[test]
    fn test_money_factor_from_apr() {
        assert!(close(money_factor_from_apr(3.0), DEFAULT_MONEY_FACTOR, 1e-12));
    }

}
