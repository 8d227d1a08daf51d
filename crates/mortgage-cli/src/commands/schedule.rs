use clap::Args;
use log::info;
use serde_json::Value;
use std::io;

use mortgage_core::quote::{self, ExportRow};

use super::mortgage::{read_request, MortgageArgs};

/// Arguments for the month-by-month amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub request: MortgageArgs,
}

/// Arguments for CSV export of the schedule
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub request: MortgageArgs,

    /// Destination CSV file (defaults to stdout)
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = read_request(args.request)?;
    let result = quote::amortization_schedule(&request)?;
    Ok(serde_json::to_value(result)?)
}

/// Write the schedule as CSV, one row per month.
pub fn run_export(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = read_request(args.request)?;
    let rows = quote::export_rows(&request)?;

    match args.out {
        Some(ref path) => {
            let mut wtr = csv::Writer::from_path(path)
                .map_err(|e| format!("Failed to create '{}': {}", path, e))?;
            write_rows(&mut wtr, &rows)?;
            info!("wrote {} schedule rows to {path}", rows.len());
        }
        None => write_rows(&mut csv::Writer::from_writer(io::stdout().lock()), &rows)?,
    }

    Ok(())
}

fn write_rows<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    rows: &[ExportRow],
) -> Result<(), Box<dyn std::error::Error>> {
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_core::MortgageRequest;
    use rust_decimal_macros::dec;

    fn export_csv(request: &MortgageRequest) -> Vec<String> {
        let rows = quote::export_rows(request).unwrap();
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_rows(&mut wtr, &rows).unwrap();
        let bytes = wtr.into_inner().unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_fixed_loan_export() {
        let lines = export_csv(&MortgageRequest::fixed(dec!(10000), dec!(5.0)).with_years(1));

        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            "month,principal_payment,interest_payment,remaining_balance,\
             loan_amount,annual_rate,index_rate,spread"
        );
        assert_eq!(lines[1], "1,814.40,41.67,9185.60,10000,5.0,,");
        assert!(lines[12].starts_with("12,852.52,3.55,0.05,"));
        assert!(lines[1..].iter().all(|line| line.ends_with(",,")));
    }

    #[test]
    fn test_variable_loan_export_fills_rate_components() {
        let request =
            MortgageRequest::variable(dec!(10000), dec!(3.0), dec!(2.0)).with_months(12);
        let lines = export_csv(&request);

        assert_eq!(lines.len(), 13);
        assert!(lines[1].ends_with(",3.0,2.0"));
    }
}
