use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Contact-verification capability exposed by one identity provider.
///
/// A real integration would call out to the provider's API; the engine
/// bounds every call with a timeout and treats errors as rejection, never
/// as success.
#[async_trait]
pub trait ContactValidator: Send + Sync {
    async fn validate(&self, contact_id: &str) -> Result<bool>;
}

/// Injected time source so expiration arithmetic is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
