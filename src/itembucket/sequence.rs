//! Identifier sequence for items.
//!
//! A single counter handing out strictly increasing ids. The counter sits
//! behind a mutex so `next()` only needs `&self`; the read-increment-write
//! happens under one lock.
//!
//! On disk the sequence is `{"Id": <last issued>}`.

use crate::error::IbError;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct Sequence {
    last: Mutex<i64>,
}

#[derive(Serialize, Deserialize)]
struct SequenceRepr {
    #[serde(rename = "Id", default)]
    id: i64,
}

impl Sequence {
    pub fn new(last: i64) -> Self {
        Self {
            last: Mutex::new(last),
        }
    }

    /// Issue the next id. Fails once the counter has reached `i64::MAX`.
    pub fn next(&self) -> crate::error::Result<i64> {
        let mut last = self.lock();
        let next = last.checked_add(1).ok_or(IbError::SequenceExhausted(*last))?;
        *last = next;
        Ok(next)
    }

    /// The last id handed out (0 when nothing has been issued).
    pub fn current(&self) -> i64 {
        *self.lock()
    }

    /// Raise the counter to `floor` if it is below it. Returns true when it moved.
    pub fn ensure_at_least(&self, floor: i64) -> bool {
        let mut last = self.lock();
        if *last < floor {
            *last = floor;
            true
        } else {
            false
        }
    }

    /// Set the counter outright. Only id compaction rewinds the sequence.
    pub(crate) fn reset_to(&self, last: i64) {
        *self.lock() = last;
    }

    fn lock(&self) -> MutexGuard<'_, i64> {
        // An i64 cannot be left half-written, so a poisoned lock is still usable.
        self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clone for Sequence {
    fn clone(&self) -> Self {
        Sequence::new(self.current())
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.current() == other.current()
    }
}

impl Serialize for Sequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SequenceRepr { id: self.current() }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = SequenceRepr::deserialize(deserializer)?;
        Ok(Sequence::new(repr.id))
    }
}
