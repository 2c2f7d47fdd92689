use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::shared::clock::Clock;

/// A clock tests can move by hand.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn shared(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock lock") = now;
    }

    pub fn now_value(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now_value()
    }
}
