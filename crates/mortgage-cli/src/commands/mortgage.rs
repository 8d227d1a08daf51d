use clap::{Args, ValueEnum};
use log::debug;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::quote;
use mortgage_core::resolve::{MortgageRequest, RateType};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RateTypeArg {
    Fixed,
    Variable,
}

impl From<RateTypeArg> for RateType {
    fn from(arg: RateTypeArg) -> Self {
        match arg {
            RateTypeArg::Fixed => RateType::Fixed,
            RateTypeArg::Variable => RateType::Variable,
        }
    }
}

/// Loan request arguments shared by every mortgage command
#[derive(Args)]
pub struct MortgageArgs {
    /// Path to JSON request file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Loan duration in years
    #[arg(long)]
    pub duration_years: Option<u32>,

    /// Loan duration in months (takes precedence over years)
    #[arg(long)]
    pub duration_months: Option<u32>,

    /// Rate type
    #[arg(long = "type", value_enum, default_value = "fixed")]
    pub rate_type: RateTypeArg,

    /// Fixed annual rate in percent (e.g. 3.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Reference index rate in percent, for variable loans
    #[arg(long)]
    pub index_rate: Option<Decimal>,

    /// Bank spread over the index in percent, for variable loans
    #[arg(long)]
    pub spread: Option<Decimal>,
}

/// Arguments for a monthly payment quote
#[derive(Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub request: MortgageArgs,
}

/// Build the request from `--input`, piped stdin, or individual flags.
pub fn read_request(args: MortgageArgs) -> Result<MortgageRequest, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        debug!("reading mortgage request from {path}");
        return input::file::read_request(path);
    }
    if let Some(request) = input::stdin::read_request()? {
        debug!("read mortgage request from stdin");
        return Ok(request);
    }

    let loan_amount = args
        .loan_amount
        .ok_or("--loan-amount is required (or provide --input)")?;

    Ok(MortgageRequest {
        loan_amount,
        duration_years: args.duration_years,
        duration_months: args.duration_months,
        rate_type: args.rate_type.into(),
        rate: args.rate,
        index_rate: args.index_rate,
        spread: args.spread,
    })
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = read_request(args.request)?;
    let result = quote::calculate(&request)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_calculate_spread(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = read_request(args.request)?;
    let result = quote::calculate_with_spread(&request)?;
    Ok(serde_json::to_value(result)?)
}
