//! Console output utilities.

use console::style;

use crate::config::{Config, DownloadMode};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Reddit Downloader                                 ║
║     Media from your saved posts                       ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(config: &Config) {
    println!();
    println!("{}", style("Configuration:").bold());
    match config.options.download_mode {
        DownloadMode::Saved => println!("  User: u/{}", config.account.username),
        DownloadMode::Single => println!(
            "  Post: {}",
            config.options.single_post.as_deref().unwrap_or("-")
        ),
    }
    println!("  Mode: {}", config.options.download_mode);
    println!("  Directory: {}", config.download_directory().display());

    let policy = config.folder_policy();
    if policy.create_source_folder {
        if policy.only_filtered {
            println!(
                "  Subreddit folders: only for {}",
                config.options.source_filter.trim()
            );
        } else {
            println!("  Subreddit folders: yes");
        }
    }

    if config.imgur_client_id().is_none() {
        println!(
            "  Imgur: {}",
            style("no client ID, albums will be skipped").yellow()
        );
    }
    println!();
}
