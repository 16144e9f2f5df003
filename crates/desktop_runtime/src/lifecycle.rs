//! Scoped timers and listener bookkeeping for mounted windows.
//!
//! A window owns a [`DisposalToken`] for its whole mount. Every timer callback is guarded by the
//! token, and every global gesture listener is held by a [`ListenerLease`] drawn from the runtime's
//! [`ListenerLedger`], so the ledger reads zero whenever no gesture is in flight.

use std::{cell::Cell, rc::Rc, time::Duration};

#[derive(Debug, Clone, Default)]
/// Liveness flag shared by a mounted component and the callbacks it schedules.
pub struct DisposalToken {
    disposed: Rc<Cell<bool>>,
}

impl DisposalToken {
    /// Creates a live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the owner is still mounted.
    pub fn is_live(&self) -> bool {
        !self.disposed.get()
    }

    /// Marks the owner as unmounted. Idempotent.
    pub fn dispose(&self) {
        self.disposed.set(true);
    }

    /// Wraps `callback` so it does nothing once the token is disposed.
    pub fn guard(&self, callback: impl FnOnce() + 'static) -> impl FnOnce() + 'static {
        let token = self.clone();
        move || {
            if token.is_live() {
                callback();
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Counter of live gesture-listener leases.
pub struct ListenerLedger {
    live: Rc<Cell<usize>>,
}

impl ListenerLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of outstanding leases.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Opens a lease that stays counted until dropped.
    pub fn lease(&self) -> ListenerLease {
        self.live.set(self.live.get() + 1);
        ListenerLease {
            live: self.live.clone(),
            releases: Vec::new(),
        }
    }
}

/// Outstanding listener registration.
///
/// Dropping the lease runs every registered release hook and decrements the ledger.
pub struct ListenerLease {
    live: Rc<Cell<usize>>,
    releases: Vec<Box<dyn FnOnce()>>,
}

impl ListenerLease {
    /// Registers a hook that detaches one listener.
    pub fn on_release(&mut self, release: impl FnOnce() + 'static) {
        self.releases.push(Box::new(release));
    }
}

impl std::fmt::Debug for ListenerLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerLease")
            .field("releases", &self.releases.len())
            .finish()
    }
}

impl Drop for ListenerLease {
    fn drop(&mut self) {
        for release in self.releases.drain(..) {
            release();
        }
        self.live.set(self.live.get().saturating_sub(1));
    }
}

/// Browser timeout whose callback is guarded by a [`DisposalToken`].
///
/// Dropping or cancelling clears the underlying handle.
pub struct ScopedTimeout {
    #[cfg(target_arch = "wasm32")]
    handle: Option<leptos::leptos_dom::helpers::TimeoutHandle>,
}

impl ScopedTimeout {
    /// Schedules `callback` after `delay` unless `token` is disposed first.
    pub fn schedule(
        token: &DisposalToken,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Self {
        let guarded = token.guard(callback);

        #[cfg(target_arch = "wasm32")]
        {
            let handle = match leptos::set_timeout_with_handle(guarded, delay) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    leptos::logging::warn!("window timer could not be scheduled: {err:?}");
                    None
                }
            };
            Self { handle }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (guarded, delay);
            Self {}
        }
    }

    /// Clears the pending timeout.
    pub fn cancel(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

impl Drop for ScopedTimeout {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn guarded_callbacks_skip_after_disposal() {
        let token = DisposalToken::new();
        let calls = Rc::new(Cell::new(0));

        let before = {
            let calls = calls.clone();
            token.guard(move || calls.set(calls.get() + 1))
        };
        let after = {
            let calls = calls.clone();
            token.guard(move || calls.set(calls.get() + 1))
        };

        before();
        token.dispose();
        token.dispose();
        after();

        assert_eq!(calls.get(), 1);
        assert!(!token.is_live());
    }

    #[test]
    fn dropping_lease_runs_release_hooks_and_balances_ledger() {
        let ledger = ListenerLedger::new();
        let released = Rc::new(RefCell::new(Vec::new()));

        let mut lease = ledger.lease();
        for name in ["mousemove", "mouseup"] {
            let released = released.clone();
            lease.on_release(move || released.borrow_mut().push(name));
        }
        let second = ledger.lease();
        assert_eq!(ledger.live(), 2);

        drop(lease);
        assert_eq!(*released.borrow(), vec!["mousemove", "mouseup"]);
        assert_eq!(ledger.live(), 1);
        drop(second);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn native_timeouts_never_fire_and_cancel_cleanly() {
        let token = DisposalToken::new();
        let fired = Rc::new(Cell::new(false));
        let timeout = {
            let fired = fired.clone();
            ScopedTimeout::schedule(&token, Duration::from_millis(300), move || fired.set(true))
        };
        timeout.cancel();
        token.dispose();
        assert!(!fired.get());
    }
}
