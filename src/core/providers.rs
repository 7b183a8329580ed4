use crate::domain::ports::ContactValidator;
use crate::utils::error::{RegistrarError, Result};
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

/// Validates a contact id against a provider-specific format rule.
///
/// Stands in for a real provider integration; each provider publishes the
/// shape of the contact ids it issues, so format matching is the whole
/// verification story in this mock.
pub struct FormatContactValidator {
    pattern: Regex,
}

impl FormatContactValidator {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            RegistrarError::internal(format!("bad contact-id pattern '{}': {}", pattern, e))
        })?;
        Ok(Self { pattern })
    }
}

#[async_trait]
impl ContactValidator for FormatContactValidator {
    async fn validate(&self, contact_id: &str) -> Result<bool> {
        Ok(self.pattern.is_match(contact_id))
    }
}

/// The currently supported verification providers and the contact-id format
/// each one issues. Adding a provider means adding a row here (or calling
/// [`ProviderRegistry::register`]), never touching dispatch code.
const DEFAULT_PROVIDERS: &[(&str, &str)] = &[
    ("providerabc", r"^ABC-[0-9]{6}$"),
    ("providerdef", r"^[0-9]{8}$"),
    ("providerghi", r"^GHI[a-z0-9]{5,10}$"),
    ("providerjkl", r"^[A-Z]{2}[0-9]{4}[A-Z]{2}$"),
    ("providermno", r"^[0-9a-f]{12}$"),
    ("providerpqr", r"^pqr-[a-z]{4,8}-[0-9]{3}$"),
    ("providerstu", r"^[A-Za-z0-9]{16}$"),
    ("providervwx", r"^vwx:[0-9]{5}:[a-z]{3}$"),
    ("providerxyz", r"^[a-z0-9]{4,16}$"),
    ("provideralpha", r"^A-[0-9]{7}$"),
    ("providerbeta", r"^B[0-9]{6}B$"),
    ("providergamma", r"^[a-z]{3}\.[a-z]{3}\.[0-9]{4}$"),
    ("providerdelta", r"^D{2}[0-9]{10}$"),
    ("providersigma", r"^[0-9]{4}-[0-9]{4}-[0-9]{4}$"),
    ("provideromega", r"^om[0-9a-z]{8}$"),
];

/// Maps a provider identifier to its verification capability.
///
/// Dispatch is by identifier lookup, never by conditional branching, and it
/// fails closed: an identifier with no registered capability can never
/// validate anything.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn ContactValidator>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registry pre-loaded with the supported provider roster.
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        for (id, pattern) in DEFAULT_PROVIDERS {
            registry.register(*id, Arc::new(FormatContactValidator::new(pattern)?));
        }
        Ok(registry)
    }

    pub fn register(&mut self, id: impl Into<String>, validator: Arc<dyn ContactValidator>) {
        self.providers.insert(id.into(), validator);
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.providers.contains_key(id)
    }

    /// The capability registered under `id`, if any. The engine dispatches
    /// through this so validation always routes to the provider actually
    /// named in the request.
    pub fn resolve(&self, id: &str) -> Option<Arc<dyn ContactValidator>> {
        self.providers.get(id).cloned()
    }

    /// Convenience dispatch that fails closed on unknown providers.
    pub async fn validate(&self, id: &str, contact_id: &str) -> Result<bool> {
        let validator = self
            .resolve(id)
            .ok_or_else(|| RegistrarError::UnknownProvider {
                provider: id.to_string(),
            })?;
        validator.validate(contact_id).await
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let registry = ProviderRegistry::with_defaults().unwrap();
        assert_eq!(registry.len(), 15);
        assert!(registry.is_known("providerxyz"));
        assert!(registry.is_known("providerpqr"));
        assert!(!registry.is_known("invalidprovider"));
    }

    #[test]
    fn test_unknown_provider_fails_closed() {
        let registry = ProviderRegistry::with_defaults().unwrap();
        let result = tokio_test::block_on(registry.validate("invalidprovider", "contact1234"));
        assert!(matches!(
            result,
            Err(RegistrarError::UnknownProvider { .. })
        ));
    }

    #[test]
    fn test_dispatch_routes_to_requested_provider() {
        // Disjoint formats: a contact valid for one provider must be
        // rejected when dispatched to the other.
        let registry = ProviderRegistry::with_defaults().unwrap();

        let abc_contact = "ABC-123456";
        assert!(tokio_test::block_on(registry.validate("providerabc", abc_contact)).unwrap());
        assert!(!tokio_test::block_on(registry.validate("providerdef", abc_contact)).unwrap());

        let def_contact = "12345678";
        assert!(tokio_test::block_on(registry.validate("providerdef", def_contact)).unwrap());
        assert!(!tokio_test::block_on(registry.validate("providerabc", def_contact)).unwrap());
    }

    #[test]
    fn test_format_validation_per_provider() {
        let registry = ProviderRegistry::with_defaults().unwrap();
        assert!(tokio_test::block_on(registry.validate("providerxyz", "contact1234")).unwrap());
        assert!(!tokio_test::block_on(registry.validate("providerxyz", "NOT VALID")).unwrap());
        assert!(
            tokio_test::block_on(registry.validate("providersigma", "1111-2222-3333")).unwrap()
        );
    }

    #[test]
    fn test_custom_registration_extends_roster() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.is_empty());

        let validator = FormatContactValidator::new(r"^custom-[0-9]+$").unwrap();
        registry.register("providercustom", Arc::new(validator));

        assert!(registry.is_known("providercustom"));
        assert!(tokio_test::block_on(registry.validate("providercustom", "custom-42")).unwrap());
    }
}
