use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_core::quote;
use mortgage_core::MortgageRequest;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_request(input_json: &str) -> NapiResult<MortgageRequest> {
    MortgageRequest::from_json(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_mortgage(input_json: String) -> NapiResult<String> {
    let request = parse_request(&input_json)?;
    let output = quote::calculate(&request).map_err(to_napi_error)?;
    quote::to_json(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_with_spread(input_json: String) -> NapiResult<String> {
    let request = parse_request(&input_json)?;
    let output = quote::calculate_with_spread(&request).map_err(to_napi_error)?;
    quote::to_json(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let request = parse_request(&input_json)?;
    let output = quote::amortization_schedule(&request).map_err(to_napi_error)?;
    quote::to_json(&output).map_err(to_napi_error)
}

/// Schedule rows for spreadsheet export, as a JSON array.
#[napi]
pub fn export_schedule(input_json: String) -> NapiResult<String> {
    let request = parse_request(&input_json)?;
    let rows = quote::export_rows(&request).map_err(to_napi_error)?;
    quote::to_json(&rows).map_err(to_napi_error)
}
