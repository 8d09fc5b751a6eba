//! # Ticket Ledger Testing
//!
//! Testing utilities for the ticket ledger contracts.
//!
//! This crate provides:
//! - A fixed clock and an in-memory vault
//! - Ready-made parties and records
//! - A Given-When-Then harness for transactions
//! - proptest strategies for records
//!
//! ## Example
//!
//! ```
//! use ticket_ledger_testing::TransactionTest;
//! use ticket_ledger_testing::fixtures::{agency, upcoming_event};
//! use ticket_ledger_contracts::EventCommand;
//!
//! TransactionTest::new()
//!     .given_outputs([upcoming_event(3)])
//!     .when_command(EventCommand::Create)
//!     .signed_by(&agency())
//!     .then_accepts()
//!     .run();
//! ```

pub mod fixtures;
pub mod properties;
pub mod vault;

/// Mock collaborators for deterministic tests.
pub mod mocks {
    use chrono::{DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making schedule checks reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use ticket_ledger_testing::mocks::FixedClock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }

        /// The fixed time
        #[must_use]
        pub const fn now(&self) -> DateTime<Utc> {
            self.time
        }

        /// A clock `by` later than this one
        #[must_use]
        pub fn advanced(&self, by: chrono::Duration) -> Self {
            Self::new(self.time + by)
        }
    }

    /// 2025-01-01 00:00:00 UTC
    #[must_use]
    pub fn test_time() -> DateTime<Utc> {
        DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default()
    }

    /// Create a default fixed clock for tests at [`test_time`]
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(test_time())
    }
}

/// Install a test-writer `fmt` subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock, test_time};
pub use transaction_test::{TransactionTest, Verdict, assertions};
pub use vault::InMemoryVault;
