//! Transient notices with auto-dismiss.
//!
//! At most one notice is pending at a time. Posting a new one preempts the
//! old (the previous one-shot timer is cancelled by replacement). Time is
//! always injected by the caller, so expiry is deterministic under test —
//! the board never samples the clock itself.

use crate::commands::CmdMessage;
use std::time::{Duration, Instant};

/// How long a notice stays visible once posted.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Single-slot holder for the currently pending notice.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    slot: Option<(CmdMessage, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a notice, replacing any pending one and restarting the dismiss
    /// deadline.
    pub fn post(&mut self, message: CmdMessage, now: Instant) {
        self.slot = Some((message, now + NOTICE_TTL));
    }

    /// The pending notice, if its deadline has not passed.
    pub fn current(&self, now: Instant) -> Option<&CmdMessage> {
        match &self.slot {
            Some((message, deadline)) if now < *deadline => Some(message),
            _ => None,
        }
    }

    /// Drops the pending notice once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.slot {
            if now >= *deadline {
                self.slot = None;
            }
        }
    }
}
