use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// ============ Documents & Folders ============

/// A stored document. `content` is the editor's HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub folder_id: Option<String>,
    pub user_id: String,
    pub template_id: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub const DEFAULT_TITLE: &'static str = "Untitled Document";
    pub const ANONYMOUS_USER: &'static str = "anonymous";

    pub fn new(title: Option<String>, content: Option<String>, folder_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| Self::DEFAULT_TITLE.to_string()),
            content: content.unwrap_or_default(),
            folder_id: folder_id.filter(|f| !f.is_empty()),
            user_id: Self::ANONYMOUS_USER.to_string(),
            template_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and bump `updated_at`.
    pub fn apply(&mut self, update: UpdateDocumentRequest) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(folder_id) = update.folder_id {
            self.folder_id = folder_id.filter(|f| !f.is_empty());
        }
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match on title or content.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<String>,
}

/// Partial document update. An explicit `"folderId": null` moves the
/// document out of its folder, an absent `folderId` leaves it untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(type = "string | null")]
    pub folder_id: Option<Option<String>>,
}

fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    /// Documents currently filed in this folder
    #[serde(default)]
    pub document_count: u32,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
            document_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreateFolderRequest {
    pub name: Option<String>,
}
