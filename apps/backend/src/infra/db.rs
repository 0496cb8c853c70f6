use sea_orm::{Database, DatabaseConnection};

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile and owner.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;
    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date. Single entrypoint used by main
/// and DB-backed tests.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    migration::migrate(&conn, migration::MigrationCommand::Up).await?;
    Ok(conn)
}
