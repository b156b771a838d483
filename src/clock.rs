//! UTC clock abstraction.
//!
//! The duration-until-sunset computation depends on "now"; routing that
//! read through a trait lets tests pin the current instant instead of
//! racing the wall clock.

use chrono::{DateTime, Utc};

/// Trait for abstracting the current-instant capability.
pub trait Clock: Send + Sync {
    /// Get the current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Real implementation that reads the system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
