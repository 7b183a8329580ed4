pub mod calendar;
pub mod engine;
pub mod providers;
pub mod store;

pub use crate::domain::model::{DomainReceipt, DomainRecord, PeriodRequest, RegistrationPeriod};
pub use crate::domain::ports::{Clock, ContactValidator, SystemClock};
pub use crate::utils::error::Result;
