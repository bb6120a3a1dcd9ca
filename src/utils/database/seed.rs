use crate::modules::movie::repository::{self, CreateMoviePayload};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use std::{collections::HashSet, fmt, path::PathBuf};

const RELEASE_DATE_FORMAT: &str = "%m/%d/%Y";
const MISSING_TEXT: &str = "Unknown";

#[derive(Debug)]
pub enum Error {
    Read(std::io::Error),
    Parse(csv::Error),
    Transaction(sqlx::Error),
    Insert,
    Count,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "could not read csv file: {err}"),
            Self::Parse(err) => write!(f, "malformed csv record: {err}"),
            Self::Transaction(err) => write!(f, "transaction failed: {err}"),
            Self::Insert => write!(f, "could not insert movie"),
            Self::Count => write!(f, "could not count existing movies"),
        }
    }
}

/// One row of the catalog export, column names as they appear in the file.
#[derive(Deserialize, Debug)]
struct MovieRecord {
    names: String,
    date_x: String,
    score: f64,
    genre: Option<String>,
    overview: String,
    crew: Option<String>,
    orig_title: String,
    status: String,
    orig_lang: String,
    budget_x: f64,
    revenue: f64,
    country: String,
}

pub struct CsvSeeder {
    csv_path: PathBuf,
}

impl CsvSeeder {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }

    pub async fn is_populated(&self, pool: &SqlitePool) -> Result<bool, Error> {
        repository::count(pool)
            .await
            .map(|total| total > 0)
            .map_err(|_| Error::Count)
    }

    /// Inserts every usable row of the csv file in a single transaction and
    /// returns how many movies were written. Nothing is kept on failure.
    pub async fn seed(&self, pool: &SqlitePool) -> Result<usize, Error> {
        let raw = tokio::fs::read(&self.csv_path).await.map_err(|err| {
            tracing::error!("Failed to read {}: {}", self.csv_path.display(), err);
            Error::Read(err)
        })?;

        tracing::info!("Preprocessing csv file {}", self.csv_path.display());
        let movies = preprocess(parse(&raw)?);

        let mut tx = pool.begin().await.map_err(|err| {
            tracing::error!("Failed to start database transaction: {}", err);
            Error::Transaction(err)
        })?;

        let total = movies.len();
        for (index, movie) in movies.into_iter().enumerate() {
            repository::create(&mut *tx, movie)
                .await
                .map_err(|_| Error::Insert)?;

            if (index + 1) % 1000 == 0 {
                tracing::debug!("Seeded {}/{} movies", index + 1, total);
            }
        }

        tx.commit().await.map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            Error::Transaction(err)
        })?;

        Ok(total)
    }
}

fn parse(raw: &[u8]) -> Result<Vec<MovieRecord>, Error> {
    csv::Reader::from_reader(raw)
        .deserialize::<MovieRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            tracing::error!("Failed to parse csv file: {}", err);
            Error::Parse(err)
        })
}

fn preprocess(records: Vec<MovieRecord>) -> Vec<CreateMoviePayload> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .filter(|record| seen.insert((record.names.clone(), record.date_x.clone())))
        .filter_map(|record| {
            let date = match NaiveDate::parse_from_str(record.date_x.trim(), RELEASE_DATE_FORMAT) {
                Ok(date) => date,
                Err(_) => {
                    tracing::warn!(
                        "Skipping {:?}: unparseable release date {:?}",
                        record.names,
                        record.date_x
                    );
                    return None;
                }
            };

            Some(CreateMoviePayload {
                name: record.names,
                date,
                score: record.score,
                genre: record
                    .genre
                    .map(|genre| genre.replace('\u{a0}', ""))
                    .unwrap_or_else(|| MISSING_TEXT.to_string()),
                overview: record.overview,
                crew: record.crew.unwrap_or_else(|| MISSING_TEXT.to_string()),
                orig_title: record.orig_title,
                status: record.status,
                orig_lang: record.orig_lang,
                budget: record.budget_x,
                revenue: record.revenue,
                country: record.country,
            })
        })
        .collect()
}
