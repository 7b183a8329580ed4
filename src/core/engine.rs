use crate::core::calendar::expiration_after;
use crate::core::providers::ProviderRegistry;
use crate::core::store::DomainStore;
use crate::domain::model::{DomainReceipt, DomainRecord, PeriodRequest};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{RegistrarError, Result};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_VALIDATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything register needs; the schema layer has already checked field
/// presence and the name-length rule before this is built.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub provider: String,
    pub reg: PeriodRequest,
    pub contact_id: String,
    pub customer_id: u64,
}

/// Orchestrates registration, renewal, inspection and deletion over one
/// domain store. Per name the lifecycle is Absent -> Active -> Absent, with
/// renew looping Active -> Active; every operation is a single transaction
/// against the store.
pub struct RegistrationEngine {
    store: DomainStore,
    providers: ProviderRegistry,
    clock: Arc<dyn Clock>,
    validation_timeout: Duration,
}

impl RegistrationEngine {
    pub fn new(store: DomainStore, providers: ProviderRegistry) -> Self {
        Self::with_clock(store, providers, Arc::new(SystemClock))
    }

    /// Engine with an injected time source, for tests that need to pin `now`.
    pub fn with_clock(
        store: DomainStore,
        providers: ProviderRegistry,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            providers,
            clock,
            validation_timeout: DEFAULT_VALIDATION_TIMEOUT,
        }
    }

    pub fn with_validation_timeout(mut self, timeout: Duration) -> Self {
        self.validation_timeout = timeout;
        self
    }

    /// Registers a new domain. The provider must be known and must accept
    /// the contact id before the period is even parsed; nothing touches the
    /// store until every check has passed.
    pub async fn register(&self, request: RegisterRequest) -> Result<DomainReceipt> {
        let validator =
            self.providers
                .resolve(&request.provider)
                .ok_or_else(|| RegistrarError::UnknownProvider {
                    provider: request.provider.clone(),
                })?;

        // A hung or failing provider call is a rejection, never a pass.
        let verdict =
            tokio::time::timeout(self.validation_timeout, validator.validate(&request.contact_id))
                .await;
        match verdict {
            Ok(Ok(true)) => {}
            Ok(Ok(false)) => {
                return Err(RegistrarError::ProviderValidationFailed {
                    provider: request.provider,
                });
            }
            Ok(Err(e)) => {
                tracing::warn!("provider '{}' validation errored: {}", request.provider, e);
                return Err(RegistrarError::ProviderValidationFailed {
                    provider: request.provider,
                });
            }
            Err(_) => {
                tracing::warn!(
                    "provider '{}' validation timed out after {:?}",
                    request.provider,
                    self.validation_timeout
                );
                return Err(RegistrarError::ProviderValidationFailed {
                    provider: request.provider,
                });
            }
        }

        let period = request.reg.parse()?;
        let expire_date = expiration_after(period, self.clock.now());

        let record = DomainRecord {
            name: request.name,
            expire_date,
            customer_id: request.customer_id,
        };
        let receipt = DomainReceipt::from(&record);
        self.store.insert(record)?;

        tracing::info!(
            "registered '{}' until {} via {}",
            receipt.name,
            receipt.expire_date,
            request.provider
        );
        Ok(receipt)
    }

    /// Renews an existing domain. The new expiration is computed from the
    /// current instant, not stacked on the old expiration date.
    pub async fn renew(&self, name: &str, reg: &PeriodRequest) -> Result<DomainReceipt> {
        let period = reg.parse()?;
        let expire_date = expiration_after(period, self.clock.now());
        let record = self.store.update_expiration(name, expire_date)?;

        tracing::info!("renewed '{}' until {}", record.name, record.expire_date);
        Ok(DomainReceipt::from(&record))
    }

    pub async fn inspect(&self, name: &str) -> Result<DomainReceipt> {
        let record = self.store.find_by_name(name)?;
        Ok(DomainReceipt::from(&record))
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        self.store.remove(name)?;
        tracing::info!("deleted '{}'", name);
        Ok(())
    }
}
