//! Statistics reporting.

use console::style;

use crate::download::RunStats;

/// Print statistics for a run.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Statistics:").bold());
    println!("  Posts found:       {}", stats.posts_found);
    println!("  Posts processed:   {}", stats.posts_processed);
    println!("  Posts unsupported: {}", stats.posts_unsupported);
    if stats.posts_failed > 0 {
        println!("  Posts failed:      {}", style(stats.posts_failed).red());
    }
    println!("  Files downloaded:  {}", stats.files_downloaded);
    println!("  Files skipped:     {} (already present)", stats.files_skipped);
    if stats.files_failed > 0 {
        println!("  Files failed:      {}", style(stats.files_failed).red());
    }
    println!(
        "  Total:             {} of {} submitted",
        stats.files_downloaded,
        stats.files_submitted()
    );
    println!("{}", style("═".repeat(50)).dim());
}

/// Print a summary line for quick viewing.
pub fn print_summary(stats: &RunStats) {
    println!(
        "Downloaded: {} files from {} posts ({} skipped, {} failed)",
        style(stats.files_downloaded).green(),
        style(stats.posts_processed).green(),
        style(stats.files_skipped).yellow(),
        style(stats.files_failed + stats.posts_failed).red()
    );
}
