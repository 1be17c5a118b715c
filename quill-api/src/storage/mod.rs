mod documents;
mod folders;
mod settings;
mod templates;

pub use documents::DocumentFilter;

use anyhow::anyhow;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

refinery::embed_migrations!("migrations");

pub type DbConnection = Arc<Mutex<Connection>>;

/// SQLite-backed store for documents, folders, templates and settings.
pub struct Database {
    pub(crate) connection: DbConnection,
}

impl Database {
    pub fn open(db_path: &Path) -> anyhow::Result<Self> {
        // Ensure directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    pub fn in_memory() -> anyhow::Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> anyhow::Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        migrations::runner().run(&mut conn)?;

        Ok(Database {
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Remove every document, folder, custom template and saved setting.
    pub fn clear_all(&self) -> anyhow::Result<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        for table in ["documents", "folders", "templates", "settings"] {
            tx.execute(&format!("DELETE FROM {table}"), [])?;
        }
        tx.commit()?;
        Ok(())
    }

    pub(crate) fn lock(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| anyhow!("Database lock poisoned: {}", e))
    }
}
