use super::Database;
use quill_types::Template;
use rusqlite::{params, OptionalExtension, Row};

fn template_from_row(row: &Row<'_>) -> rusqlite::Result<Template> {
    Ok(Template {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        content: row.get(4)?,
        builtin: false,
        created_at: Some(row.get(5)?),
    })
}

impl Database {
    /// Saved (non built-in) templates ordered by name.
    pub fn list_custom_templates(&self) -> anyhow::Result<Vec<Template>> {
        let conn = self.lock()?;
        let templates = conn
            .prepare(
                "SELECT id, name, description, category, content, created_at
                 FROM templates ORDER BY name COLLATE NOCASE",
            )?
            .query_map([], template_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(templates)
    }

    pub fn get_custom_template(&self, id: &str) -> anyhow::Result<Option<Template>> {
        let conn = self.lock()?;
        let template = conn
            .query_row(
                "SELECT id, name, description, category, content, created_at
                 FROM templates WHERE id = ?1",
                params![id],
                template_from_row,
            )
            .optional()?;
        Ok(template)
    }

    pub fn insert_template(&self, template: &Template) -> anyhow::Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO templates (id, name, description, category, content, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                template.id,
                template.name,
                template.description,
                template.category,
                template.content,
                template.created_at.unwrap_or_else(chrono::Utc::now),
            ],
        )?;
        Ok(())
    }

    pub fn delete_template(&self, id: &str) -> anyhow::Result<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM templates WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}
