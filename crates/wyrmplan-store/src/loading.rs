//! Shared loading flag
//!
//! One boolean observed by the UI shell while a whole load batch runs. The
//! flag is set through an RAII guard so every exit path of the batch,
//! including early returns and caught errors, clears it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to the shared loading state
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag {
    flag: Arc<AtomicBool>,
}

impl LoadingFlag {
    /// Create a cleared flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a batch is currently running
    pub fn is_loading(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Set the flag for the lifetime of the returned guard
    pub fn start(&self) -> LoadGuard {
        self.flag.store(true, Ordering::Relaxed);
        LoadGuard {
            flag: Arc::clone(&self.flag),
        }
    }
}

/// Clears the loading flag on drop
#[derive(Debug)]
pub struct LoadGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_clears_on_drop() {
        let loading = LoadingFlag::new();
        assert!(!loading.is_loading());
        {
            let _guard = loading.start();
            assert!(loading.is_loading());
        }
        assert!(!loading.is_loading());
    }

    #[test]
    fn test_guard_clears_on_early_exit() {
        let loading = LoadingFlag::new();
        let run = |fail: bool| -> Result<(), &'static str> {
            let _guard = loading.start();
            if fail {
                return Err("boom");
            }
            Ok(())
        };
        assert!(run(true).is_err());
        assert!(!loading.is_loading());
    }
}
