//! Turns a borrower-facing mortgage request into canonical [`LoanTerms`].
//!
//! Requests quote the rate either as a fixed annual rate or as an index rate
//! plus a bank spread, and the duration in years and/or months.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::LoanTerms;
use crate::error::MortgageError;
use crate::types::{Money, Percent};
use crate::MortgageResult;

/// Smallest loan amount accepted on a request.
const MIN_LOAN_AMOUNT: Money = dec!(0.01);

/// How the annual rate of a request is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Fixed,
    Variable,
}

/// Mortgage simulation request as submitted by a caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageRequest {
    pub loan_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,
    #[serde(rename = "type")]
    pub rate_type: RateType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_rate: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<Percent>,
}

impl MortgageRequest {
    /// Parse a JSON request. Malformed JSON fails with `Serialization`.
    pub fn from_json(input: &str) -> MortgageResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn fixed(loan_amount: Money, rate: Percent) -> Self {
        Self {
            loan_amount,
            duration_years: None,
            duration_months: None,
            rate_type: RateType::Fixed,
            rate: Some(rate),
            index_rate: None,
            spread: None,
        }
    }

    pub fn variable(loan_amount: Money, index_rate: Percent, spread: Percent) -> Self {
        Self {
            loan_amount,
            duration_years: None,
            duration_months: None,
            rate_type: RateType::Variable,
            rate: None,
            index_rate: Some(index_rate),
            spread: Some(spread),
        }
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.duration_years = Some(years);
        self
    }

    pub fn with_months(mut self, months: u32) -> Self {
        self.duration_months = Some(months);
        self
    }

    pub fn is_variable(&self) -> bool {
        self.rate_type == RateType::Variable
    }

    /// True when both duration fields are set and non-zero.
    pub fn has_conflicting_duration(&self) -> bool {
        matches!(
            (self.duration_years, self.duration_months),
            (Some(y), Some(m)) if y > 0 && m > 0
        )
    }
}

/// Validate a request and resolve it into engine inputs.
pub fn resolve(request: &MortgageRequest) -> MortgageResult<LoanTerms> {
    if request.loan_amount < MIN_LOAN_AMOUNT {
        return Err(MortgageError::validation(
            "loan_amount",
            format!("Loan amount must be at least {MIN_LOAN_AMOUNT}"),
        ));
    }

    let months = resolve_months(request)?;
    let annual_rate = resolve_annual_rate(request)?;

    LoanTerms::new(request.loan_amount, annual_rate, months)
}

/// Total term in months. `duration_months` wins over `duration_years` when
/// both are given; a zero month count counts as absent.
pub fn resolve_months(request: &MortgageRequest) -> MortgageResult<u32> {
    if request.duration_years == Some(0) {
        return Err(MortgageError::validation(
            "duration_years",
            "Duration in years must be at least 1",
        ));
    }

    match (request.duration_months, request.duration_years) {
        (Some(months), _) if months > 0 => Ok(months),
        (_, Some(years)) => years.checked_mul(12).ok_or_else(|| {
            MortgageError::validation("duration_years", "Duration in years is too large")
        }),
        _ => Err(MortgageError::validation(
            "duration",
            "Loan duration must be given in years and/or months",
        )),
    }
}

/// Annual percentage rate: the fixed rate, or index rate plus spread.
pub fn resolve_annual_rate(request: &MortgageRequest) -> MortgageResult<Percent> {
    match request.rate_type {
        RateType::Fixed => required_non_negative("rate", request.rate),
        RateType::Variable => {
            let index_rate = required_non_negative("index_rate", request.index_rate)?;
            let spread = required_non_negative("spread", request.spread)?;
            Ok(index_rate + spread)
        }
    }
}

fn required_non_negative(field: &str, value: Option<Percent>) -> MortgageResult<Percent> {
    let value = value.ok_or_else(|| {
        MortgageError::validation(field, format!("{field} is required for this rate type"))
    })?;
    if value < Decimal::ZERO {
        return Err(MortgageError::validation(field, format!("{field} must not be negative")));
    }
    Ok(value)
}
