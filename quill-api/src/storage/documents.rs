use super::Database;
use quill_types::{Document, UpdateDocumentRequest};
use rusqlite::{params, OptionalExtension, Row};

/// Filters for listing documents. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    /// Case-insensitive substring of title or content
    pub query: Option<String>,
    pub folder_id: Option<String>,
    pub limit: Option<u32>,
}

const DOCUMENT_COLUMNS: &str =
    "id, title, content, folder_id, user_id, template_id, created_at, updated_at";

fn document_from_row(row: &Row<'_>) -> rusqlite::Result<Document> {
    Ok(Document {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        folder_id: row.get(3)?,
        user_id: row.get(4)?,
        template_id: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

impl Database {
    /// Most recently updated first. The query is matched in Rust so case
    /// folding covers non-ASCII text; `limit` applies after matching.
    pub fn list_documents(&self, filter: &DocumentFilter) -> anyhow::Result<Vec<Document>> {
        let conn = self.lock()?;

        let sql = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents
             WHERE (?1 IS NULL OR folder_id = ?1)
             ORDER BY updated_at DESC, created_at DESC"
        );

        let documents = conn
            .prepare(&sql)?
            .query_map(params![filter.folder_id], document_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let query = filter.query.as_deref().filter(|q| !q.is_empty());
        let limit = filter.limit.map_or(usize::MAX, |l| l as usize);

        Ok(documents
            .into_iter()
            .filter(|d| query.map_or(true, |q| d.matches_query(q)))
            .take(limit)
            .collect())
    }

    pub fn get_document(&self, id: &str) -> anyhow::Result<Option<Document>> {
        let conn = self.lock()?;
        let document = conn
            .query_row(
                &format!("SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = ?1"),
                params![id],
                document_from_row,
            )
            .optional()?;
        Ok(document)
    }

    pub fn insert_document(&self, document: &Document) -> anyhow::Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO documents
                (id, title, content, folder_id, user_id, template_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                document.id,
                document.title,
                document.content,
                document.folder_id,
                document.user_id,
                document.template_id,
                document.created_at,
                document.updated_at,
            ],
        )?;
        Ok(())
    }

    /// Merge a partial update. Returns `None` when the document does not exist.
    pub fn update_document(
        &self,
        id: &str,
        update: UpdateDocumentRequest,
    ) -> anyhow::Result<Option<Document>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let Some(mut document) = tx
            .query_row(
                &format!("SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = ?1"),
                params![id],
                document_from_row,
            )
            .optional()?
        else {
            return Ok(None);
        };
        document.apply(update);

        tx.execute(
            "UPDATE documents SET title = ?1, content = ?2, folder_id = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                document.title,
                document.content,
                document.folder_id,
                document.updated_at,
                document.id,
            ],
        )?;
        tx.commit()?;

        Ok(Some(document))
    }

    /// Returns whether a document was deleted.
    pub fn delete_document(&self, id: &str) -> anyhow::Result<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM documents WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    pub fn count_documents(&self) -> anyhow::Result<u32> {
        let conn = self.lock()?;
        let count: u32 = conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn doc(title: &str, content: &str, folder: Option<&str>) -> Document {
        Document::new(
            Some(title.to_string()),
            Some(content.to_string()),
            folder.map(str::to_string),
        )
    }

    #[test]
    fn test_insert_and_get() {
        let db = Database::in_memory().unwrap();
        let document = doc("Plan", "<p>Q3</p>", None);
        db.insert_document(&document).unwrap();

        let loaded = db.get_document(&document.id).unwrap().unwrap();
        assert_eq!(loaded, document);
        assert!(db.get_document("missing").unwrap().is_none());
    }

    #[test]
    fn test_list_orders_by_updated_desc() {
        let db = Database::in_memory().unwrap();
        let mut older = doc("Older", "", None);
        older.updated_at = Utc::now() - Duration::hours(1);
        let newer = doc("Newer", "", None);
        db.insert_document(&older).unwrap();
        db.insert_document(&newer).unwrap();

        let titles: Vec<_> = db
            .list_documents(&DocumentFilter::default())
            .unwrap()
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }

    #[test]
    fn test_search_matches_title_or_content() {
        let db = Database::in_memory().unwrap();
        db.insert_document(&doc("Quarterly report", "numbers", None))
            .unwrap();
        db.insert_document(&doc("Shopping", "buy REPORT binders", None))
            .unwrap();
        db.insert_document(&doc("Poem", "roses", None)).unwrap();

        let filter = DocumentFilter {
            query: Some("report".into()),
            ..Default::default()
        };
        assert_eq!(db.list_documents(&filter).unwrap().len(), 2);
    }

    #[test]
    fn test_search_wildcards_are_literal() {
        let db = Database::in_memory().unwrap();
        db.insert_document(&doc("100% done", "", None)).unwrap();
        db.insert_document(&doc("1000 words", "", None)).unwrap();

        let filter = DocumentFilter {
            query: Some("100%".into()),
            ..Default::default()
        };
        let found = db.list_documents(&filter).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "100% done");
    }

    #[test]
    fn test_folder_filter_and_limit() {
        let db = Database::in_memory().unwrap();
        for i in 0..3 {
            db.insert_document(&doc(&format!("In {}", i), "", Some("f1")))
                .unwrap();
        }
        db.insert_document(&doc("Loose", "", None)).unwrap();

        let in_folder = DocumentFilter {
            folder_id: Some("f1".into()),
            ..Default::default()
        };
        assert_eq!(db.list_documents(&in_folder).unwrap().len(), 3);

        let limited = DocumentFilter {
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(db.list_documents(&limited).unwrap().len(), 2);
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let db = Database::in_memory().unwrap();
        db.insert_document(&doc("École notes", "", None)).unwrap();
        db.insert_document(&doc("Über plan", "", None)).unwrap();
        db.insert_document(&doc("Ecole plain", "", None)).unwrap();

        for (query, expected) in [("école", "École notes"), ("über", "Über plan")] {
            let filter = DocumentFilter {
                query: Some(query.into()),
                ..Default::default()
            };
            let found = db.list_documents(&filter).unwrap();
            assert_eq!(found.len(), 1, "query {query}");
            assert_eq!(found[0].title, expected);
        }
    }

    #[test]
    fn test_limit_applies_after_search() {
        let db = Database::in_memory().unwrap();
        for i in 0..3 {
            let mut other = doc(&format!("Other {}", i), "", None);
            other.updated_at = Utc::now() + Duration::hours(1);
            db.insert_document(&other).unwrap();
        }
        db.insert_document(&doc("Report A", "", None)).unwrap();
        db.insert_document(&doc("Report B", "", None)).unwrap();

        let filter = DocumentFilter {
            query: Some("report".into()),
            limit: Some(2),
            ..Default::default()
        };
        let found = db.list_documents(&filter).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|d| d.title.starts_with("Report")));
    }

    #[test]
    fn test_update_and_delete() {
        let db = Database::in_memory().unwrap();
        let document = doc("Draft", "", None);
        db.insert_document(&document).unwrap();

        let updated = db
            .update_document(
                &document.id,
                UpdateDocumentRequest {
                    title: Some("Final".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Final");
        let stored = db.get_document(&document.id).unwrap().unwrap();
        assert_eq!(stored, updated);
        assert_eq!(stored.created_at, document.created_at);

        assert!(db
            .update_document("missing", UpdateDocumentRequest::default())
            .unwrap()
            .is_none());

        assert!(db.delete_document(&document.id).unwrap());
        assert!(!db.delete_document(&document.id).unwrap());
        assert_eq!(db.count_documents().unwrap(), 0);
    }
}
