mod digest;
mod ingest;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "headline-cli")]
#[command(about = "News headline ingestion and digest command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Fetch headlines from NewsAPI and upsert them into the article store
    Ingest {
        /// Fetch, normalize and dedupe, but skip the database write
        #[arg(long)]
        dry_run: bool,
    },
    /// Compose a digest of recently published articles
    Digest {
        /// Window size in days
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=30))]
        days: i64,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Upsert the built-in sample articles
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("headline-cli ready; run with --help for commands");
        return Ok(());
    };

    let config = headline_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Dry-run ingestion never touches the database.
    if let Commands::Ingest { dry_run: true } = command {
        return ingest::run_ingest_dry(&config).await;
    }

    let pool_config = headline_db::PoolConfig::from_app_config(&config);
    let pool = headline_db::connect_pool(&config.database_url, pool_config).await?;

    match command {
        Commands::Db { command } => match command {
            DbCommands::Ping => {
                headline_db::health_check(&pool).await?;
                let stored = headline_db::count_articles(&pool).await?;
                println!("database ok ({stored} article(s) stored)");
            }
            DbCommands::Migrate => {
                let applied = headline_db::run_migrations(&pool).await?;
                println!("applied {applied} migration(s)");
            }
            DbCommands::Seed => {
                let written = headline_db::seed_sample_articles(&pool).await?;
                println!("seeded {written} sample article(s)");
            }
        },
        Commands::Ingest { .. } => ingest::run_ingest(&config, &pool).await?,
        Commands::Digest { days } => digest::run_digest(&config, &pool, days).await?,
    }

    Ok(())
}
