//! Per-action reentrancy guard.

use std::sync::atomic::{AtomicBool, Ordering};

use fl_core::{ActionKind, LabelActionError};

/// Busy flag for one action kind. At most one guard exists at a time.
#[derive(Debug)]
pub struct InFlight {
    kind: ActionKind,
    busy: AtomicBool,
}

impl InFlight {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            busy: AtomicBool::new(false),
        }
    }

    /// Claims the flag, or fails with `ActionInProgress` while another run holds it.
    pub fn try_begin(&self) -> Result<InFlightGuard<'_>, LabelActionError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard { flag: self })
            .map_err(|_| LabelActionError::ActionInProgress(self.kind))
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the flag on drop, including on early returns and panics.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a InFlight,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_fails_until_guard_drops() {
        let flag = InFlight::new(ActionKind::Print);

        let guard = flag.try_begin().unwrap();
        assert!(flag.is_busy());
        assert_eq!(
            flag.try_begin().unwrap_err(),
            LabelActionError::ActionInProgress(ActionKind::Print)
        );

        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_begin().is_ok());
    }
}
