pub mod mortgage;
pub mod schedule;
