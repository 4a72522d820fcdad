use clap::Parser;
use movie_count::utils::logger;
use movie_count::{CliConfig, CountEngine, LocalStorage, MovieCounter};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose, config.log_level.as_deref());
    tracing::debug!("Resolved config: {:?}", config);

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.base_path.clone());
    let engine = CountEngine::new(MovieCounter::new(storage, config));

    match engine.run() {
        Ok(result) => println!("{}", result),
        Err(e) => {
            tracing::error!("❌ Count failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
