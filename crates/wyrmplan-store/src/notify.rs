//! User-facing notification seam
//!
//! Stores never render anything themselves; when an operation fails in a way
//! the user must see, they report it through this trait and the UI shell
//! decides how to surface it.

use tracing::error;

/// Sink for user-visible notifications
pub trait Notifier: Send + Sync {
    /// Surface an error message to the user
    fn error(&self, message: &str);
}

/// Notifier that forwards messages to the log
///
/// The default when no UI shell is attached (tests, CLI runs).
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        error!(target: "wyrmplan", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Collects messages for assertions.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub errors: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_recording_notifier_collects() {
        let notifier = RecordingNotifier::default();
        notifier.error("boom");
        assert_eq!(notifier.errors.lock().unwrap().as_slice(), ["boom"]);
    }
}
