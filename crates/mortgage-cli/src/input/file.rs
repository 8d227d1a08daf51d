use std::fs;
use std::path::{Path, PathBuf};

use mortgage_core::MortgageRequest;

/// Read a mortgage request from a JSON file.
pub fn read_request(path: &str) -> Result<MortgageRequest, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let request = MortgageRequest::from_json(&contents)
        .map_err(|e| format!("Invalid mortgage request in '{}': {}", canonical.display(), e))?;
    Ok(request)
}

fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.is_file() {
        return Err(format!("Request file not found: {}", canonical.display()).into());
    }

    Ok(canonical)
}
