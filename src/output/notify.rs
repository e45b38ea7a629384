//! Completion notifications.

use std::time::Duration;

use async_trait::async_trait;

use crate::output::console::print_success;

/// Title of every notification.
pub const NOTIFICATION_TITLE: &str = "Reddit Downloader";

/// How long a desktop notification should stay visible.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub text: String,
    pub timeout: Duration,
}

impl Notification {
    /// Summary sent once a bulk run has gone through every post.
    pub fn finished(posts: usize) -> Self {
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            text: format!("Finished downloading {} Posts!", posts),
            timeout: NOTIFICATION_TIMEOUT,
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification);
}

/// Prints notifications as a success line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, notification: &Notification) {
        print_success(&format!("{}: {}", notification.title, notification.text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_text() {
        let n = Notification::finished(3);
        assert_eq!(n.title, "Reddit Downloader");
        assert_eq!(n.text, "Finished downloading 3 Posts!");
        assert_eq!(n.timeout, Duration::from_secs(5));
    }
}
