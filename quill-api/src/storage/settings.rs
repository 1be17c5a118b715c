use super::Database;
use quill_types::UserSettings;
use rusqlite::{params, OptionalExtension};

impl Database {
    /// Stored settings, or the defaults when none were saved yet.
    pub fn load_settings(&self) -> anyhow::Result<UserSettings> {
        let conn = self.lock()?;
        let data: Option<String> = conn
            .query_row("SELECT data FROM settings WHERE id = 1", [], |row| row.get(0))
            .optional()?;

        match data {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(UserSettings::default()),
        }
    }

    pub fn save_settings(&self, settings: &UserSettings) -> anyhow::Result<()> {
        let data = serde_json::to_string(settings)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO settings (id, data, updated_at) VALUES (1, ?1, ?2)
             ON CONFLICT(id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
            params![data, chrono::Utc::now()],
        )?;
        Ok(())
    }
}
