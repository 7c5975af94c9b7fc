//! Run a closure when the enclosing scope is left.

/// Calls the wrapped closure exactly once when dropped, including while
/// unwinding from a panic.
#[must_use = "the closure runs immediately if the guard is not bound"]
pub struct ScopeGuard<F: FnOnce()> {
    on_exit: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    pub fn new(on_exit: F) -> Self {
        Self {
            on_exit: Some(on_exit),
        }
    }

    /// Disarms the guard; the closure will not run.
    pub fn dismiss(mut self) {
        self.on_exit = None;
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(on_exit) = self.on_exit.take() {
            on_exit();
        }
    }
}

pub fn on_scope<F: FnOnce()>(on_exit: F) -> ScopeGuard<F> {
    ScopeGuard::new(on_exit)
}
