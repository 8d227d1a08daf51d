use std::io::{self, Read};

use mortgage_core::MortgageRequest;

/// Read a JSON mortgage request piped on stdin.
/// Returns None when stdin is a TTY or carries nothing.
pub fn read_request() -> Result<Option<MortgageRequest>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let request = MortgageRequest::from_json(trimmed)
        .map_err(|e| format!("Invalid mortgage request on stdin: {}", e))?;
    Ok(Some(request))
}
