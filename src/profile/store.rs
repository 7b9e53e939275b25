use super::{UserProfile, WorkoutRecord};
use crate::{Error, Result};
use libsql::{Builder, Database};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub const PROFILE_KEY: &str = "userProfile";
pub const HISTORY_KEY: &str = "workoutHistory";

/// Key-value store for the profile record and the workout-history list,
/// both JSON-serialized under fixed keys. Writes are last-write-wins; there
/// is no conflict resolution beyond the single-row upsert.
pub struct ProfileStore {
    db: Option<Database>,
    // In-memory fallback storage
    fallback: Arc<Mutex<HashMap<String, String>>>,
}

impl ProfileStore {
    pub async fn new(db_path: &str) -> Result<Self> {
        let mut store = Self {
            db: None,
            fallback: Arc::new(Mutex::new(HashMap::new())),
        };

        // Try to initialize database
        match store.init_database(db_path).await {
            Ok(()) => {
                info!("Database initialized successfully: {}", db_path);
            }
            Err(e) => {
                warn!(
                    "Database initialization failed, using in-memory fallback: {}",
                    e
                );
            }
        }

        Ok(store)
    }

    async fn init_database(&mut self, db_path: &str) -> Result<()> {
        let db = Builder::new_local(db_path).build().await?;

        // Create table if it doesn't exist
        let conn = db.connect()?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME NOT NULL
            )
            "#,
            (),
        )
        .await?;

        self.db = Some(db);
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        // Try database first
        if let Some(ref db) = self.db {
            match self.get_from_db(db, key).await {
                Ok(value) => {
                    debug!("Read key from database: {}", key);
                    return Ok(value);
                }
                Err(e) => {
                    warn!("Failed to read from database, using fallback: {}", e);
                }
            }
        }

        // Fallback to in-memory storage
        self.get_from_fallback(key)
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        // Try database first
        if let Some(ref db) = self.db {
            match self.set_in_db(db, key, value).await {
                Ok(()) => {
                    debug!("Wrote key to database: {}", key);
                    return Ok(());
                }
                Err(e) => {
                    warn!("Failed to write to database, using fallback: {}", e);
                }
            }
        }

        // Fallback to in-memory storage
        self.set_in_fallback(key, value)
    }

    async fn get_from_db(&self, db: &Database, key: &str) -> Result<Option<String>> {
        let conn = db.connect()?;
        let mut rows = conn
            .query("SELECT value FROM entries WHERE key = ?", [key])
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    async fn set_in_db(&self, db: &Database, key: &str, value: &str) -> Result<()> {
        let conn = db.connect()?;
        conn.execute(
            r#"
            INSERT INTO entries (key, value, updated_at) VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            (key, value, chrono::Utc::now().to_rfc3339()),
        )
        .await?;
        Ok(())
    }

    fn get_from_fallback(&self, key: &str) -> Result<Option<String>> {
        let fallback = self
            .fallback
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;
        Ok(fallback.get(key).cloned())
    }

    fn set_in_fallback(&self, key: &str, value: &str) -> Result<()> {
        let mut fallback = self
            .fallback
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;
        fallback.insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub async fn load_profile(&self) -> Result<Option<UserProfile>> {
        match self.get(PROFILE_KEY).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.set(PROFILE_KEY, &raw).await
    }

    /// An absent history key reads as an empty list.
    pub async fn load_history(&self) -> Result<Vec<WorkoutRecord>> {
        match self.get(HISTORY_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn append_history(&self, record: WorkoutRecord) -> Result<()> {
        let mut history = self.load_history().await?;
        history.push(record);
        let raw = serde_json::to_string(&history)?;
        self.set(HISTORY_KEY, &raw).await
    }
}
