use std::path::PathBuf;

use crate::model::StatCode;
use crate::view::types::ClockStyle;

/// # Errors
///
/// Will return `Err` if the value is not an http(s) origin
pub fn check_api_base(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(format!(
            "The api base '{value}' must start with http:// or https://."
        ));
    }
    if trimmed.trim_end_matches('/').ends_with("/api") {
        return Err(format!(
            "The api base '{value}' should be the origin only; /api is added per endpoint."
        ));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// # Errors
///
/// Will return `Err` if the stat is not one the leaders endpoint accepts
pub fn check_stat(value: &str) -> Result<StatCode, String> {
    value.parse()
}

/// # Errors
///
/// Will return `Err` unless the value is 12 or 24
pub fn check_clock(value: &str) -> Result<ClockStyle, String> {
    value.parse()
}

/// # Errors
///
/// Will return `Err` if the parent directory of the output file does not exist
pub fn check_writable_output(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(format!(
            "The output directory '{}' does not exist.",
            parent.display()
        )),
        _ => Ok(path),
    }
}
