use clap::Parser;
use tracing::{error, info};

use promote_admins::{database, run, Cli, Config, PgUserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Logs go to stderr; stdout carries only the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promote_admins=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    info!("Configuration loaded");

    let db_pool = database::new_pool(&config.database_url).await?;
    info!("Database connection pool created");

    let report = run(&cli, &config, PgUserStore::new(db_pool)).await?;
    println!("{report}");

    if !report.is_success() {
        error!(failed = report.failure_count(), "Some users could not be promoted");
        if cli.fail_on_error {
            anyhow::bail!("{} user(s) could not be promoted", report.failure_count());
        }
    }

    Ok(())
}
