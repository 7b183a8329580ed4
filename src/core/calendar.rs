use crate::domain::model::{PeriodUnit, RegistrationPeriod};
use chrono::{DateTime, Days, Months, Utc};

/// Computes the absolute expiration instant for a registration period.
///
/// Pure and total over validated periods: the caller guarantees the value is
/// positive and in range, so there is no error path. Month and year addition
/// clamp the day-of-month to the last valid day of the target month
/// (Jan 31 + 1 month lands on Feb 28/29, Feb 29 + 1 year lands on Feb 28);
/// day addition is exact. `now` is injected, never read from a global clock.
pub fn expiration_after(period: RegistrationPeriod, now: DateTime<Utc>) -> DateTime<Utc> {
    let result = match period.unit {
        PeriodUnit::Year => now.checked_add_months(Months::new(period.value.saturating_mul(12))),
        PeriodUnit::Month => now.checked_add_months(Months::new(period.value)),
        PeriodUnit::Day => now.checked_add_days(Days::new(u64::from(period.value))),
    };
    // Unreachable with the value cap in place; saturate rather than panic.
    result.unwrap_or(DateTime::<Utc>::MAX_UTC)
}
