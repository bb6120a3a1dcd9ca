pub use crate::utils::database;
use async_trait::async_trait;
use std::env;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
    pub base_path: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
    pub base_path: String,
}

#[derive(Clone)]
pub struct SeedConfig {
    pub csv_path: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub seed: SeedConfig,
}

#[derive(Debug)]
pub enum StartupError {
    InvalidConfig(String),
    Database(database::Error),
    Seed(database::seed::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
            Self::Database(err) => write!(f, "database error: {err}"),
            Self::Seed(err) => write!(f, "failed to seed the database: {err}"),
        }
    }
}

impl From<database::Error> for StartupError {
    fn from(err: database::Error) -> Self {
        Self::Database(err)
    }
}

impl From<database::seed::Error> for StartupError {
    fn from(err: database::seed::Error) -> Self {
        Self::Seed(err)
    }
}

/// Strips trailing slashes and guarantees a leading one, so `"theater/"`
/// and `"/theater"` mount the same way. An empty prefix stays empty.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    match trimmed.is_empty() {
        true => String::new(),
        false => format!("/{trimmed}"),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, StartupError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:movies.db?mode=rwc".to_string());
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<u32>()
            .map_err(|_| {
                StartupError::InvalidConfig("DATABASE_MAX_CONNECTIONS must be a number".into())
            })?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .map_err(|_| StartupError::InvalidConfig("Invalid PORT number".into()))?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let base_path = env::var("APP_BASE_PATH").unwrap_or_else(|_| "/theater".to_string());
        let csv_path = env::var("MOVIES_CSV_PATH").ok().filter(|path| !path.is_empty());

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
                base_path: normalize_base_path(&base_path),
            },
            seed: SeedConfig { csv_path },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, StartupError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, StartupError> {
        let db_conn =
            database::connect(self.database.url.as_str(), self.database.max_connections).await?;
        database::migrate(&db_conn).await?;

        if let Some(csv_path) = self.seed.csv_path.as_deref() {
            let seeder = database::seed::CsvSeeder::new(csv_path);

            if seeder.is_populated(&db_conn.pool).await? {
                tracing::info!("Database is already populated. Skipping seeding.");
            } else {
                let inserted = seeder.seed(&db_conn.pool).await?;
                tracing::info!("Database seeding completed: {} movies inserted", inserted);
            }
        }

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
                base_path: self.app.base_path,
            },
            db_conn,
        })
    }
}
