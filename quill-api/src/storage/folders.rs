use super::Database;
use quill_types::Folder;
use rusqlite::params;

impl Database {
    /// Folders ordered by name, each with the number of documents it holds.
    pub fn list_folders(&self) -> anyhow::Result<Vec<Folder>> {
        let conn = self.lock()?;
        let folders = conn
            .prepare(
                "SELECT f.id, f.name, f.created_at, COUNT(d.id)
                 FROM folders f
                 LEFT JOIN documents d ON d.folder_id = f.id
                 GROUP BY f.id
                 ORDER BY f.name COLLATE NOCASE, f.created_at",
            )?
            .query_map([], |row| {
                Ok(Folder {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: row.get(2)?,
                    document_count: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(folders)
    }

    pub fn insert_folder(&self, folder: &Folder) -> anyhow::Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO folders (id, name, created_at) VALUES (?1, ?2, ?3)",
            params![folder.id, folder.name, folder.created_at],
        )?;
        Ok(())
    }

    /// Delete a folder and detach its documents. Returns whether it existed.
    pub fn delete_folder(&self, id: &str) -> anyhow::Result<bool> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "UPDATE documents SET folder_id = NULL WHERE folder_id = ?1",
            params![id],
        )?;
        let deleted = tx.execute("DELETE FROM folders WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    pub fn count_folders(&self) -> anyhow::Result<u32> {
        let conn = self.lock()?;
        let count: u32 = conn.query_row("SELECT COUNT(*) FROM folders", [], |row| row.get(0))?;
        Ok(count)
    }
}
