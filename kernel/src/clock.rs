use time::{Date, OffsetDateTime};

/// Source of "today" for due-date computation and overdue checks.
/// Injected so tests can run against a fixed calendar date.
pub trait Clock: 'static + Sync + Send {
    fn today(&self) -> Date;
}

pub trait DependOnClock: 'static + Sync + Send {
    type Clock: Clock;
    fn clock(&self) -> &Self::Clock;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

pub struct FixedClock(Date);

impl FixedClock {
    pub fn new(today: impl Into<Date>) -> Self {
        Self(today.into())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use crate::clock::{Clock, FixedClock};

    #[test]
    fn fixed_clock_returns_the_injected_date() {
        let clock = FixedClock::new(date!(2024 - 01 - 15));
        assert_eq!(clock.today(), date!(2024 - 01 - 15));
        assert_eq!(clock.today(), clock.today());
    }
}
