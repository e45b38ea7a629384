//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Completion notifications
//! - Statistics reporting

pub mod console;
pub mod notify;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use notify::{ConsoleNotifier, Notification, Notifier};
pub use progress::{create_download_bar, create_item_bar};
pub use stats::{print_run_stats, print_summary};
