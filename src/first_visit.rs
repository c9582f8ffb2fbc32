//! One-time display of the "Today's Special" dialog.
//!
//! The gate never owns a timer. `content_settled` hands back the delay and the
//! caller schedules `display_due`, so the transitions can be driven directly.

use std::time::Duration;

use log::{info, warn};

use crate::config::SPECIAL_DISPLAY_DELAY;
use crate::storage::KeyValueStore;

pub const SPECIAL_SEEN_KEY: &str = "special_seen";
const SPECIAL_SEEN_VALUE: &str = "1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Nothing decided yet, or no special to show.
    Unseen,
    /// Flag absent, display scheduled.
    PendingDisplay,
    /// Dialog open.
    Shown,
    /// Flag persisted, dialog closed.
    Acknowledged,
}

/// How the visitor closed the dialog. Both paths persist the flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Close,
    Add,
}

pub struct FirstVisitGate<S> {
    store: S,
    state: GateState,
    settled: bool,
    delay: Duration,
}

impl<S: KeyValueStore> FirstVisitGate<S> {
    pub fn new(store: S) -> Self {
        Self::with_delay(store, SPECIAL_DISPLAY_DELAY)
    }

    pub fn with_delay(store: S, delay: Duration) -> Self {
        Self {
            store,
            state: GateState::Unseen,
            settled: false,
            delay,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == GateState::Shown
    }

    /// Called when the content batch has settled. Returns the delay after which
    /// `display_due` should run, or `None` when nothing is to be shown.
    pub fn content_settled(&mut self, special_available: bool) -> Option<Duration> {
        if std::mem::replace(&mut self.settled, true) || self.state != GateState::Unseen {
            return None;
        }
        if !special_available {
            return None;
        }
        if self.store.has(SPECIAL_SEEN_KEY) {
            info!("Special already acknowledged on this client");
            self.state = GateState::Acknowledged;
            return None;
        }
        self.state = GateState::PendingDisplay;
        Some(self.delay)
    }

    /// Timer callback. Returns true when the dialog should open now.
    pub fn display_due(&mut self) -> bool {
        if self.state != GateState::PendingDisplay {
            return false;
        }
        self.state = GateState::Shown;
        true
    }

    /// Explicit reopen from elsewhere in the page. Does not look at the flag.
    pub fn reopen(&mut self) {
        self.state = GateState::Shown;
    }

    /// Closes the dialog and persists the flag. Returns false if it was not open.
    pub fn dismiss(&mut self, how: Dismissal) -> bool {
        if self.state != GateState::Shown {
            return false;
        }
        info!("Special dialog dismissed via {:?}", how);
        if let Err(e) = self.store.set(SPECIAL_SEEN_KEY, SPECIAL_SEEN_VALUE) {
            warn!("Could not persist {}: {}", SPECIAL_SEEN_KEY, e);
        }
        self.state = GateState::Acknowledged;
        true
    }
}
