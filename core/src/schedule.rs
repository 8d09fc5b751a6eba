//! Time-triggered follow-up activities declared by records.
//!
//! A record may announce the next action it expects and when. Acting on it is the job of
//! an external scheduler, which proposes a new transaction at the given time; that
//! transaction goes through the verifier like any other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An action a record expects to be proposed at a given time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledActivity<A> {
    /// What should be proposed
    pub action: A,
    /// When it becomes due
    pub scheduled_at: DateTime<Utc>,
}

impl<A> ScheduledActivity<A> {
    /// Creates a new `ScheduledActivity`
    #[must_use]
    pub const fn new(action: A, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            action,
            scheduled_at,
        }
    }

    /// Returns `true` once `now` has reached the scheduled time
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.scheduled_at
    }
}

/// A record that can declare its next scheduled activity.
pub trait Schedulable {
    /// Actions this record may schedule
    type Action;

    /// The next activity, if the record's current status calls for one
    fn next_scheduled_activity(&self) -> Option<ScheduledActivity<Self::Action>>;
}
