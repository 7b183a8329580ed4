use crate::core::engine::RegisterRequest;
use crate::domain::model::PeriodRequest;
use crate::utils::error::Result;
use crate::utils::validation::{validate_min_length, validate_non_empty_string, Validate};
use clap::Parser;

/// Minimum domain-name length, enforced here at the request boundary so the
/// engine never sees a short name.
const MIN_DOMAIN_NAME_LENGTH: usize = 10;

#[derive(Parser, Debug, Clone)]
#[command(name = "registrar", about = "Mock domain-registrar demo")]
pub struct CliConfig {
    /// Domain name to register (at least 10 characters)
    #[arg(long)]
    pub name: String,

    /// Identity-verification provider handling the contact id
    #[arg(long, default_value = "providerxyz")]
    pub provider: String,

    /// Contact id issued by the chosen provider
    #[arg(long)]
    pub contact_id: String,

    /// Billing reference of the registering customer
    #[arg(long, default_value_t = 1)]
    pub customer_id: u64,

    /// Registration period value
    #[arg(long, default_value_t = 1)]
    pub value: i64,

    /// Registration period unit: year, month or day
    #[arg(long, default_value = "year")]
    pub unit: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_register_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            provider: self.provider.clone(),
            reg: PeriodRequest {
                value: self.value,
                unit: self.unit.clone(),
            },
            contact_id: self.contact_id.clone(),
            customer_id: self.customer_id,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_min_length("name", &self.name, MIN_DOMAIN_NAME_LENGTH)?;
        validate_non_empty_string("provider", &self.provider)?;
        validate_non_empty_string("contact_id", &self.contact_id)?;
        validate_non_empty_string("unit", &self.unit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(name: &str) -> CliConfig {
        CliConfig {
            name: name.to_string(),
            provider: "providerxyz".to_string(),
            contact_id: "contact1234".to_string(),
            customer_id: 1,
            value: 1,
            unit: "year".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_short_name_rejected_before_engine() {
        assert!(config("short.com").validate().is_err());
        assert!(config("somenamevalue").validate().is_ok());
    }

    #[test]
    fn test_blank_contact_rejected() {
        let mut cfg = config("somenamevalue");
        cfg.contact_id = "  ".to_string();
        assert!(cfg.validate().is_err());
    }
}
