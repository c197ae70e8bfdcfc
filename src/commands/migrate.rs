//! `migrate` command.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Run the requested migration action against the configured database.
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Schema changes stay explicit here; only `serve` migrates on startup.
    let db = Database::open(&config).await?;

    match args.action {
        MigrateAction::Up => db.migrate_up().await?,
        MigrateAction::Down => db.migrate_down().await?,
        MigrateAction::Fresh => {
            tracing::warn!("dropping all tables before re-running migrations");
            db.migrate_fresh().await?;
        }
        MigrateAction::Status => {
            for line in db.migration_report().await? {
                println!("{}", line);
            }
            return Ok(());
        }
    }

    tracing::info!("migration run finished");
    Ok(())
}
