use crate::domain::model::DomainRecord;
use crate::utils::error::{RegistrarError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory domain-record store, keyed by exact domain name.
///
/// Process-lifetime only; durability is an explicit non-goal. A single lock
/// serializes every read-modify-write sequence, so operations on the same
/// name can never interleave into a half-written state. Constructed
/// explicitly and handed to the engine, never a module-level singleton, so
/// tests get isolated stores.
pub struct DomainStore {
    records: Mutex<HashMap<String, DomainRecord>>,
}

impl DomainStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Adds a record, re-checking uniqueness under the lock. Callers must
    /// not assume a prior lookup still holds.
    pub fn insert(&self, record: DomainRecord) -> Result<()> {
        let mut records = self.lock()?;
        if records.contains_key(&record.name) {
            return Err(RegistrarError::DuplicateName { name: record.name });
        }
        records.insert(record.name.clone(), record);
        Ok(())
    }

    /// Exact-match lookup; no case folding or trimming is applied.
    pub fn find_by_name(&self, name: &str) -> Result<DomainRecord> {
        let records = self.lock()?;
        records
            .get(name)
            .cloned()
            .ok_or_else(|| RegistrarError::NotFound {
                name: name.to_string(),
            })
    }

    /// Replaces the expiration date in place, preserving the customer id.
    pub fn update_expiration(
        &self,
        name: &str,
        new_expire_date: DateTime<Utc>,
    ) -> Result<DomainRecord> {
        let mut records = self.lock()?;
        let record = records
            .get_mut(name)
            .ok_or_else(|| RegistrarError::NotFound {
                name: name.to_string(),
            })?;
        record.expire_date = new_expire_date;
        Ok(record.clone())
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        let mut records = self.lock()?;
        records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RegistrarError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, DomainRecord>>> {
        self.records
            .lock()
            .map_err(|_| RegistrarError::internal("domain store lock poisoned"))
    }
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}
