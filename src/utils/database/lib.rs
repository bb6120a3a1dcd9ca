use sqlx::{
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::{fmt, str::FromStr};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: SqlitePool,
}

#[derive(Debug)]
pub enum Error {
    Connect(sqlx::Error),
    Migrate(MigrateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(err) => write!(f, "failed to connect: {err}"),
            Self::Migrate(err) => write!(f, "failed to run migrations: {err}"),
        }
    }
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, Error> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|err| {
            tracing::error!("Invalid database url {}: {}", database_url, err);
            Error::Connect(err)
        })?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
        .map_err(|err| {
            tracing::error!("Error connecting to database {}: {}", database_url, err);
            Error::Connect(err)
        })?;

    Ok(DatabaseConnection { pool })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("{}", err);
        Error::Migrate(err)
    })
}

pub async fn close(db_conn: &DatabaseConnection) {
    db_conn.pool.close().await;
    tracing::debug!("Database pool closed");
}

/// Single-connection in-memory database with the schema applied. SQLite
/// gives every `:memory:` connection its own database, so the pool is capped
/// at one connection to keep all queries on the same data.
#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    let db_conn = connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database should open");
    migrate(&db_conn).await.expect("migrations should apply");
    db_conn
}
