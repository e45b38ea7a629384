//! Reddit Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_downloader::{
    api::{ImgurApi, RedditApi},
    cli::Args,
    config::{parse_post_permalink, validate_config, Config, DownloadMode},
    crawl::{JsonFileStore, RunContext},
    download::{download_single_post, DownloadOrchestrator, HttpDownloader, OrchestratorOptions},
    error::{exit_codes, Error, Result},
    fs::RandomNames,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_summary, print_warning, ConsoleNotifier,
    },
    resolve::{ResolveContext, ResolverRegistry, Vocabulary},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    let reset_checkpoint = args.reset_checkpoint;
    args.merge_into_config(&mut config);

    validate_config(&config)?;
    print_config_summary(&config);

    let reddit = RedditApi::new(&config.account)?;
    let imgur = ImgurApi::new(&config.account.user_agent)?;
    let downloader = HttpDownloader::new(&config.account.user_agent, config.options.show_progress)?;
    let notifier = ConsoleNotifier;

    let orchestrator = DownloadOrchestrator {
        registry: ResolverRegistry::default(),
        resolve: ResolveContext {
            posts: &reddit,
            imgur: &imgur,
            imgur_client_id: config.imgur_client_id(),
            vocabulary: Vocabulary::bundled(),
        },
        downloader: &downloader,
        notifier: &notifier,
        options: OrchestratorOptions::from_config(&config),
    };

    let stats = match config.options.download_mode {
        DownloadMode::Saved => {
            let store = JsonFileStore::new(config.checkpoint_file());
            let mut ctx = if reset_checkpoint {
                print_info("Ignoring stored checkpoint");
                RunContext::fresh(&store)
            } else {
                RunContext::load(&store)?
            };

            match ctx.stop_at() {
                Some(id) => print_info(&format!("Resuming after {}", id)),
                None => print_info("No checkpoint, crawling all saved posts"),
            }

            print_info(&format!(
                "Collecting saved posts of u/{}...",
                config.account.username
            ));
            orchestrator
                .run(&reddit, reddit.origin(), &mut ctx, &mut RandomNames)
                .await?
        }
        DownloadMode::Single => {
            let post = config
                .options
                .single_post
                .as_deref()
                .ok_or_else(|| Error::Config("Post permalink required for single mode".into()))?;
            let permalink = parse_post_permalink(post)?;

            let stats =
                download_single_post(&orchestrator, &permalink, reddit.origin(), &mut RandomNames)
                    .await?;
            if stats.posts_unsupported > 0 {
                print_warning("The post's link is not a supported media link");
            }
            stats
        }
    };

    print_run_stats(&stats);
    print_summary(&stats);

    Ok(())
}
