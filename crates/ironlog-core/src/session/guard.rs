//! In-flight marker for the network-bound transitions.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::error::{Result, SessionError};

/// Holds the busy flag for the lifetime of a `start` or `finish` call.
///
/// The flag is released on drop, so a future that is cancelled mid-request
/// does not leave the context busy forever.
pub(super) struct InFlight {
    flag: Arc<AtomicBool>,
}

impl InFlight {
    /// Claims the flag, failing with `SessionError::Busy` if already held.
    pub(super) fn acquire(flag: &Arc<AtomicBool>) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SessionError::Busy)?;
        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
