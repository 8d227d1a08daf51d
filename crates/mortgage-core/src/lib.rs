pub mod amortization;
pub mod error;
pub mod resolve;
pub mod types;

#[cfg(feature = "quote")]
pub mod quote;

pub use amortization::{compute_monthly_payment, LoanTerms};
#[cfg(feature = "schedule")]
pub use amortization::{generate_schedule, AmortizationSchedule, ScheduleEntry};
pub use error::MortgageError;
pub use resolve::{MortgageRequest, RateType};
pub use types::*;

/// Standard result type for all mortgage operations
pub type MortgageResult<T> = Result<T, MortgageError>;
