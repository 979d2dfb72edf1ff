use chrono::{DateTime, Local, NaiveDate, Utc};
use spendlens_domain::PeriodKey;

/// Display format used for the informational `createdAt` stamp.
pub const CREATED_AT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the calendar month budgets and resets apply to.
    fn current_period(&self) -> PeriodKey {
        PeriodKey::of(self.today())
    }

    /// Local, display-formatted creation stamp for new expenses.
    fn created_stamp(&self) -> String {
        self.now()
            .with_timezone(&Local)
            .format(CREATED_AT_FORMAT)
            .to_string()
    }
}

/// Wall-clock implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to noon UTC on the given date.
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self(DateTime::from_naive_utc_and_offset(noon, Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
