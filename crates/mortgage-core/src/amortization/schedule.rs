use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::terms::LoanTerms;
use crate::types::{round_currency, Money, Percent};
use crate::MortgageResult;

/// A single month of the amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: u32,
    pub principal_payment: Money,
    pub interest_payment: Money,
    /// Balance after this month's installment, floored at zero.
    pub remaining_balance: Money,
}

/// Full month-by-month repayment plan of a loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub schedule: Vec<ScheduleEntry>,
    /// Signed balance left after the final installment, before the zero
    /// floor. Per-period rounding leaves a few cents either way.
    #[serde(skip)]
    residual_balance: Money,
}

impl AmortizationSchedule {
    pub fn residual_balance(&self) -> Money {
        self.residual_balance
    }

    pub fn total_principal(&self) -> Money {
        self.schedule.iter().map(|e| e.principal_payment).sum()
    }
}

/// Build the month-by-month schedule for a level-payment loan.
///
/// Interest, principal and balance are each rounded to cents every month and
/// the rounded balance carries into the next month. The final balance is not
/// trued up; only the published `remaining_balance` is floored at zero.
pub fn generate_schedule(
    principal: Money,
    annual_rate_percent: Percent,
    months: u32,
) -> MortgageResult<AmortizationSchedule> {
    LoanTerms::new(principal, annual_rate_percent, months)?.schedule()
}

impl LoanTerms {
    /// See [`generate_schedule`].
    pub fn schedule(&self) -> MortgageResult<AmortizationSchedule> {
        let monthly_payment = self.monthly_payment()?;
        let monthly_rate = self.monthly_rate();

        let mut schedule = Vec::with_capacity(self.months() as usize);
        let mut balance = self.principal();
        let mut total_interest = Decimal::ZERO;

        for month in 1..=self.months() {
            let interest_payment = round_currency(balance * monthly_rate);
            let principal_payment = round_currency(monthly_payment - interest_payment);
            balance = round_currency(balance - principal_payment);
            total_interest += interest_payment;

            schedule.push(ScheduleEntry {
                month,
                principal_payment,
                interest_payment,
                remaining_balance: balance.max(Decimal::ZERO),
            });
        }

        Ok(AmortizationSchedule {
            monthly_payment,
            total_interest: round_currency(total_interest),
            schedule,
            residual_balance: balance,
        })
    }
}
