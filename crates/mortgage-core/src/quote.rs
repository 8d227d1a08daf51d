//! Mortgage quotes: the calling layer around the amortization engine.
//!
//! Resolves a [`MortgageRequest`], runs the engine and wraps the figures in
//! the standard [`ComputationOutput`] envelope.

use log::{debug, info};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{LoanTerms, ScheduleEntry};
use crate::resolve::{resolve, MortgageRequest};
use crate::types::*;
use crate::MortgageResult;

/// Label of the only repayment method supported.
pub const METHOD: &str = "french_amortization";

const METHODOLOGY: &str = "French Amortization (constant installment)";

pub const FORMULA: &str = "M = P [ i(1 + i)^n ] / [ (1 + i)^n – 1 ]";

/// Monthly payment quote for a resolved request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub monthly_payment: Money,
    pub loan_amount: Money,
    pub duration_months: u32,
    pub annual_rate: Percent,
    pub method: String,
    pub currency: Currency,
}

/// Payment quote echoing the rate components. Both are `null` for
/// fixed-rate requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadQuote {
    #[serde(flatten)]
    pub quote: PaymentQuote,
    pub index_rate: Option<Percent>,
    pub spread: Option<Percent>,
}

/// Payment quote plus the full amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleQuote {
    #[serde(flatten)]
    pub quote: PaymentQuote,
    pub total_interest: Money,
    pub schedule: Vec<ScheduleEntry>,
}

/// One CSV export line: a schedule entry with the loan's headline terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub month: u32,
    pub principal_payment: Money,
    pub interest_payment: Money,
    pub remaining_balance: Money,
    pub loan_amount: Money,
    pub annual_rate: Percent,
    pub index_rate: Option<Percent>,
    pub spread: Option<Percent>,
}

/// Monthly payment for a fixed- or variable-rate request.
pub fn calculate(request: &MortgageRequest) -> MortgageResult<ComputationOutput<PaymentQuote>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let terms = resolve_with_warnings(request, &mut warnings)?;
    let quote = base_quote(&terms, terms.monthly_payment()?);

    Ok(envelope(request, &terms, warnings, start, quote))
}

/// Monthly payment quote that also echoes the index rate and spread of
/// variable-rate requests.
pub fn calculate_with_spread(
    request: &MortgageRequest,
) -> MortgageResult<ComputationOutput<SpreadQuote>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let terms = resolve_with_warnings(request, &mut warnings)?;
    let (index_rate, spread) = spread_fields(request);
    let quote = SpreadQuote {
        quote: base_quote(&terms, terms.monthly_payment()?),
        index_rate,
        spread,
    };

    Ok(envelope(request, &terms, warnings, start, quote))
}

/// Monthly payment, total interest and the month-by-month schedule.
pub fn amortization_schedule(
    request: &MortgageRequest,
) -> MortgageResult<ComputationOutput<ScheduleQuote>> {
    let start = Instant::now();
    let mut warnings = Vec::new();

    let terms = resolve_with_warnings(request, &mut warnings)?;
    let plan = terms.schedule()?;

    let residual = plan.residual_balance();
    if !residual.is_zero() {
        warnings.push(format!(
            "Per-period rounding leaves a final balance of {residual} after month {}",
            terms.months()
        ));
    }

    let quote = ScheduleQuote {
        quote: base_quote(&terms, plan.monthly_payment),
        total_interest: plan.total_interest,
        schedule: plan.schedule,
    };

    Ok(envelope(request, &terms, warnings, start, quote))
}

/// Serialize a quote or export rows for a JSON boundary.
pub fn to_json<T: Serialize>(output: &T) -> MortgageResult<String> {
    Ok(serde_json::to_string(output)?)
}

/// Schedule rows ready for CSV export.
pub fn export_rows(request: &MortgageRequest) -> MortgageResult<Vec<ExportRow>> {
    let terms = resolve(request)?;
    let plan = terms.schedule()?;
    let (index_rate, spread) = spread_fields(request);

    debug!("exporting {} schedule rows", plan.schedule.len());

    Ok(plan
        .schedule
        .into_iter()
        .map(|entry| ExportRow {
            month: entry.month,
            principal_payment: entry.principal_payment,
            interest_payment: entry.interest_payment,
            remaining_balance: entry.remaining_balance,
            loan_amount: terms.principal(),
            annual_rate: terms.annual_rate_percent(),
            index_rate,
            spread,
        })
        .collect())
}

fn resolve_with_warnings(
    request: &MortgageRequest,
    warnings: &mut Vec<String>,
) -> MortgageResult<LoanTerms> {
    if request.has_conflicting_duration() {
        warnings.push("Both duration_years and duration_months given; using duration_months".into());
    }

    let terms = resolve(request)?;
    info!(
        "resolved {:?} request: principal={} annual_rate={}% months={}",
        request.rate_type,
        terms.principal(),
        terms.annual_rate_percent(),
        terms.months()
    );
    Ok(terms)
}

fn base_quote(terms: &LoanTerms, monthly_payment: Money) -> PaymentQuote {
    PaymentQuote {
        monthly_payment,
        loan_amount: terms.principal(),
        duration_months: terms.months(),
        annual_rate: terms.annual_rate_percent(),
        method: METHOD.to_string(),
        currency: Currency::default(),
    }
}

fn spread_fields(request: &MortgageRequest) -> (Option<Percent>, Option<Percent>) {
    if request.is_variable() {
        (request.index_rate, request.spread)
    } else {
        (None, None)
    }
}

fn envelope<T: Serialize>(
    request: &MortgageRequest,
    terms: &LoanTerms,
    warnings: Vec<String>,
    start: Instant,
    result: T,
) -> ComputationOutput<T> {
    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        METHODOLOGY,
        FORMULA,
        &serde_json::json!({
            "rate_type": request.rate_type,
            "principal": terms.principal().to_string(),
            "annual_rate_percent": terms.annual_rate_percent().to_string(),
            "monthly_rate": terms.monthly_rate().round_dp(10).to_string(),
            "months": terms.months(),
            "rounding": "2dp, half away from zero",
            "zero_rate": terms.monthly_rate() == Decimal::ZERO,
        }),
        warnings,
        elapsed,
        result,
    )
}
