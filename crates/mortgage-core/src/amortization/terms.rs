use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::MortgageError;
use crate::types::{Money, Percent, Rate};
use crate::MortgageResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Validated inputs of a single amortization: principal, nominal annual rate
/// and term. Can only be built through [`LoanTerms::new`], so every value in
/// circulation satisfies `principal > 0`, `annual_rate_percent >= 0` and
/// `months >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanTerms {
    principal: Money,
    annual_rate_percent: Percent,
    months: u32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate_percent: Percent, months: u32) -> MortgageResult<Self> {
        if principal <= Decimal::ZERO {
            return Err(MortgageError::invalid_argument(
                "principal",
                "Loan principal must be positive",
            ));
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(MortgageError::invalid_argument(
                "annual_rate_percent",
                "Annual rate must not be negative",
            ));
        }
        if months == 0 {
            return Err(MortgageError::invalid_argument(
                "months",
                "Term must be at least 1 month",
            ));
        }

        Ok(Self {
            principal,
            annual_rate_percent,
            months,
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> Percent {
        self.annual_rate_percent
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// Periodic rate: `annual_rate_percent / 100 / 12`.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / PERCENT / MONTHS_PER_YEAR
    }
}
