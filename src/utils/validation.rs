use crate::utils::error::{RegistrarError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_min_length(field_name: &str, value: &str, min_length: usize) -> Result<()> {
    if value.chars().count() < min_length {
        return Err(RegistrarError::InvalidRequest {
            field: field_name.to_string(),
            reason: format!("must be at least {} characters", min_length),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistrarError::InvalidRequest {
            field: field_name.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
