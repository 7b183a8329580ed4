use crate::utils::error::{RegistrarError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest accepted period value, regardless of unit. Keeps the calendar
/// arithmetic well inside chrono's representable range.
pub const MAX_PERIOD_VALUE: i64 = 10_000;

/// One stored domain registration. `customer_id` is the billing reference,
/// set once at registration and never included in read responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    pub name: String,
    pub expire_date: DateTime<Utc>,
    pub customer_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    Year,
    Month,
    Day,
}

impl FromStr for PeriodUnit {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "year" => Ok(PeriodUnit::Year),
            "month" => Ok(PeriodUnit::Month),
            "day" => Ok(PeriodUnit::Day),
            _ => Err(()),
        }
    }
}

/// A validated registration period: positive value, recognized unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPeriod {
    pub value: u32,
    pub unit: PeriodUnit,
}

/// Wire shape of the `reg` object as the schema layer hands it over.
/// Parsing into a [`RegistrationPeriod`] is where invalid periods are caught.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    pub value: i64,
    pub unit: String,
}

impl PeriodRequest {
    pub fn parse(&self) -> Result<RegistrationPeriod> {
        let unit = PeriodUnit::from_str(&self.unit).map_err(|_| self.invalid())?;
        if self.value < 1 || self.value > MAX_PERIOD_VALUE {
            return Err(self.invalid());
        }
        Ok(RegistrationPeriod {
            value: self.value as u32,
            unit,
        })
    }

    fn invalid(&self) -> RegistrarError {
        RegistrarError::InvalidPeriod {
            value: self.value,
            unit: self.unit.clone(),
        }
    }
}

/// Response shape shared by register, renew and inspect. Deliberately does
/// not carry the customer id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DomainReceipt {
    pub name: String,
    pub expire_date: DateTime<Utc>,
}

impl From<&DomainRecord> for DomainReceipt {
    fn from(record: &DomainRecord) -> Self {
        DomainReceipt {
            name: record.name.clone(),
            expire_date: record.expire_date,
        }
    }
}
