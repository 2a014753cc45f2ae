use serde::{Deserialize, Serialize};

use super::user::UserIdentity;

/// Process-wide authentication snapshot.
///
/// `ready` latches from `false` to `true` on the first identity-change
/// notification and never reverts; consumers must not render
/// identity-dependent UI while it is `false` (the initial asynchronous
/// check has not resolved yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionState {
    pub current: Option<UserIdentity>,
    pub ready: bool,
}

impl SessionState {
    /// Apply an identity-change notification: replace `current` and
    /// latch `ready`. Idempotent with respect to the latch.
    pub fn apply(&mut self, change: Option<UserIdentity>) {
        self.current = change;
        self.ready = true;
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
