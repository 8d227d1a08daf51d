use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use super::terms::LoanTerms;
use crate::error::MortgageError;
use crate::types::{round_currency, Money, Percent};
use crate::MortgageResult;

/// Constant monthly installment of a French amortization, in cents.
///
/// `M = P * r(1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly rate. A zero
/// rate degenerates to straight-line repayment `P / n`. Fails with
/// `InvalidArgument` when `principal <= 0`, `annual_rate_percent < 0` or
/// `months == 0`.
pub fn compute_monthly_payment(
    principal: Money,
    annual_rate_percent: Percent,
    months: u32,
) -> MortgageResult<Money> {
    LoanTerms::new(principal, annual_rate_percent, months)?.monthly_payment()
}

impl LoanTerms {
    /// See [`compute_monthly_payment`].
    pub fn monthly_payment(&self) -> MortgageResult<Money> {
        let principal = self.principal();
        let periods = Decimal::from(self.months());
        let rate = self.monthly_rate();

        if rate.is_zero() {
            return Ok(round_currency(principal / periods));
        }

        let growth = (Decimal::ONE + rate)
            .checked_powu(u64::from(self.months()))
            .ok_or_else(|| out_of_range("annual_rate_percent", self))?;
        let denominator = growth - Decimal::ONE;

        // Rates below decimal resolution leave (1 + r)^n == 1.
        if denominator.is_zero() {
            return Ok(round_currency(principal / periods));
        }

        let factor = rate
            .checked_mul(growth)
            .and_then(|numerator| numerator.checked_div(denominator))
            .ok_or_else(|| out_of_range("annual_rate_percent", self))?;
        let payment = principal
            .checked_mul(factor)
            .ok_or_else(|| out_of_range("principal", self))?;

        Ok(round_currency(payment))
    }
}

/// `(1 + r)^n` only leaves decimal range for absurd rates, so growth
/// overflow is blamed on the rate; the final product on the principal.
fn out_of_range(field: &str, terms: &LoanTerms) -> MortgageError {
    MortgageError::invalid_argument(
        field,
        format!(
            "Payment on {} at {}% over {} months exceeds decimal range",
            terms.principal(),
            terms.annual_rate_percent(),
            terms.months()
        ),
    )
}
