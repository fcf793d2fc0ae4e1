//! Host startup signal backed by a tokio watch channel.
//!
//! The host flips the signal once it is fully started. Anything that must
//! only run after that point awaits [`StartupSignal::wait_started`].

use std::sync::Arc;

use tokio::sync::watch;

/// One-shot "host fully started" flag.
///
/// Cloning is cheap; every clone observes the same flag.
#[derive(Clone)]
pub struct StartupSignal {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for StartupSignal {
    fn default() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }
}

impl StartupSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the host as fully started and wake every waiter.
    pub fn notify_started(&self) {
        self.sender.send_replace(true);
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        *self.sender.borrow()
    }

    /// Wait until the host is fully started.
    ///
    /// Returns immediately if it already is.
    pub async fn wait_started(&self) {
        let mut receiver = self.sender.subscribe();
        let _ = receiver.wait_for(|started| *started).await;
    }
}
