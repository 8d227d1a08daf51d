//! French (constant-installment) amortization engine.
//!
//! Pure functions over explicit [`LoanTerms`]: the level monthly payment and
//! the month-by-month schedule derived from it. All math in
//! `rust_decimal::Decimal`, rounded to cents only where the method requires.

pub mod payment;
#[cfg(feature = "schedule")]
pub mod schedule;
pub mod terms;

pub use payment::compute_monthly_payment;
#[cfg(feature = "schedule")]
pub use schedule::{generate_schedule, AmortizationSchedule, ScheduleEntry};
pub use terms::LoanTerms;
