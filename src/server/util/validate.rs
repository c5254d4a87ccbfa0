use crate::server::error::Error;

/// Rejects a value longer than its column allows, counting characters.
pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), Error> {
    if value.chars().count() > max {
        return Err(Error::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}

/// Rejects a value that is empty once trimmed.
pub fn required(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::BadRequest(format!("{} is required", field)));
    }

    Ok(())
}
