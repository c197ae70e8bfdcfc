//! Database access.
//!
//! Thin handle over a SeaORM connection plus the migration entry points
//! the CLI drives. Only `serve` migrates on startup; the `migrate`
//! command opens the database without touching the schema.

use std::collections::HashSet;
use std::sync::Arc;

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Handle to the backing database.
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open a connection and bring the schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Migrator::up(&connection, None).await?;
        tracing::info!("database schema is up to date");
        Ok(Self {
            connection: Arc::new(connection),
        })
    }

    /// Open a connection without running migrations.
    pub async fn open(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self {
            connection: Arc::new(connection),
        })
    }

    /// Get a clone of the underlying connection handle.
    pub fn get_connection(&self) -> Arc<DatabaseConnection> {
        self.connection.clone()
    }

    /// Apply pending migrations.
    pub async fn migrate_up(&self) -> Result<(), DbErr> {
        Migrator::up(self.connection.as_ref(), None).await
    }

    /// Undo the most recent migration.
    pub async fn migrate_down(&self) -> Result<(), DbErr> {
        Migrator::down(self.connection.as_ref(), Some(1)).await
    }

    /// Drop everything and reapply the full migration set.
    pub async fn migrate_fresh(&self) -> Result<(), DbErr> {
        Migrator::fresh(self.connection.as_ref()).await
    }

    /// One rendered status line per known migration.
    pub async fn migration_report(&self) -> Result<Vec<String>, DbErr> {
        use sea_orm::EntityTrait;
        use sea_orm_migration::seaql_migrations;

        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .all(self.connection.as_ref())
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        let report = Migrator::migrations()
            .iter()
            .map(|migration| {
                let name = migration.name();
                let state = if applied.contains(name) {
                    "applied"
                } else {
                    "pending"
                };
                format!("{}: {}", name, state)
            })
            .collect();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn report_marks_unapplied_migrations_pending() {
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<sea_orm_migration::seaql_migrations::Model>::new()])
            .into_connection();
        let db = Database {
            connection: Arc::new(connection),
        };

        let report = db.migration_report().await.unwrap();

        assert_eq!(
            report,
            vec!["m20240101_000001_create_users_table: pending".to_string()]
        );
    }
}
