use chrono::{DateTime, Local};
use directories::ProjectDirs;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

const HIGH_SCORE_ID: &str = "high_score";

/// The single persisted best-score slot.
#[derive(Debug, Clone, PartialEq)]
pub struct HighScoreRecord {
    pub score: i64,
    pub timestamp: DateTime<Local>,
}

/// Best-score persistence contract.
///
/// Storage is best-effort: a missing or unreadable record reads as 0, and
/// failed writes report `false` without disturbing gameplay.
pub trait HighScoreStore {
    /// Best score recorded so far, 0 when none is stored.
    fn high_score(&self) -> i64;

    /// Overwrite the record when `score` is strictly greater than the
    /// stored one. Returns whether the record was updated.
    fn set_if_greater(&mut self, score: i64) -> bool;
}

/// Sqlite-backed store holding one row keyed by a fixed id.
#[derive(Debug)]
pub struct SqliteHighScoreStore {
    conn: Connection,
}

impl SqliteHighScoreStore {
    /// Open (or create) the database under the app state directory.
    pub fn new() -> rusqlite::Result<Self> {
        let db_path =
            Self::default_db_path().unwrap_or_else(|| PathBuf::from("chalkspell_scores.db"));
        Self::with_path(db_path)
    }

    /// Database location under `$HOME/.local/state/chalkspell`, with a
    /// platform-specific fallback when HOME is unset.
    fn default_db_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("chalkspell");
            Some(state_dir.join("scores.db"))
        } else {
            ProjectDirs::from("", "", "chalkspell")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("scores.db"))
        }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
                    Some(format!("Failed to create directory: {}", e)),
                )
            })?;
        }

        let conn = Connection::open(path)?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS game_scores (
                id TEXT PRIMARY KEY,
                score INTEGER NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
            [],
        )?;

        Ok(Self { conn })
    }

    /// The stored record with its timestamp, if any.
    pub fn record(&self) -> Option<HighScoreRecord> {
        self.conn
            .query_row(
                "SELECT score, timestamp FROM game_scores WHERE id = ?1",
                [HIGH_SCORE_ID],
                |row| {
                    let score: i64 = row.get(0)?;
                    let timestamp: String = row.get(1)?;
                    Ok((score, timestamp))
                },
            )
            .ok()
            .and_then(|(score, timestamp)| {
                let timestamp = DateTime::parse_from_rfc3339(&timestamp)
                    .ok()?
                    .with_timezone(&Local);
                Some(HighScoreRecord { score, timestamp })
            })
    }
}

impl HighScoreStore for SqliteHighScoreStore {
    fn high_score(&self) -> i64 {
        self.conn
            .query_row(
                "SELECT score FROM game_scores WHERE id = ?1",
                [HIGH_SCORE_ID],
                |row| row.get(0),
            )
            .unwrap_or(0)
    }

    fn set_if_greater(&mut self, score: i64) -> bool {
        if score <= self.high_score() {
            return false;
        }

        self.conn
            .execute(
                "INSERT OR REPLACE INTO game_scores (id, score, timestamp) VALUES (?1, ?2, ?3)",
                params![HIGH_SCORE_ID, score, Local::now().to_rfc3339()],
            )
            .is_ok()
    }
}

/// In-memory store for tests and as a fallback when sqlite is unavailable.
#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    record: Option<HighScoreRecord>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: i64) -> Self {
        Self {
            record: Some(HighScoreRecord {
                score,
                timestamp: Local::now(),
            }),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn high_score(&self) -> i64 {
        self.record.as_ref().map_or(0, |r| r.score)
    }

    fn set_if_greater(&mut self, score: i64) -> bool {
        if score <= self.high_score() {
            return false;
        }
        self.record = Some(HighScoreRecord {
            score,
            timestamp: Local::now(),
        });
        true
    }
}
