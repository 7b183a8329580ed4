pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::engine::{RegisterRequest, RegistrationEngine};
pub use crate::core::providers::{FormatContactValidator, ProviderRegistry};
pub use crate::core::store::DomainStore;
pub use domain::model::{DomainReceipt, DomainRecord, PeriodRequest, RegistrationPeriod};
pub use domain::ports::{Clock, ContactValidator, SystemClock};
pub use utils::error::{RegistrarError, Result};
