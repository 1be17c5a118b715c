use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A document template. Built-in templates ship with the service and have
/// no creation time; saved templates are stored alongside documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub content: String,
    pub builtin: bool,
    #[ts(type = "string | null")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Template {
    pub const DEFAULT_CATEGORY: &'static str = "Custom";

    /// Case-insensitive match on name or description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// `all` (or an empty category) matches every template.
    pub fn matches_category(&self, category: &str) -> bool {
        category.is_empty() || category == "all" || self.category == category
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreateTemplateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str, description: &str, category: &str) -> Template {
        Template {
            id: "t".into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            content: String::new(),
            builtin: false,
            created_at: None,
        }
    }

    #[test]
    fn test_matches_query_on_name_or_description() {
        let t = template("Blog Post", "Engaging posts", "Content");
        assert!(t.matches_query("blog"));
        assert!(t.matches_query("ENGAGING"));
        assert!(t.matches_query(""));
        assert!(!t.matches_query("invoice"));
    }

    #[test]
    fn test_matches_category() {
        let t = template("Email", "", "Communication");
        assert!(t.matches_category("all"));
        assert!(t.matches_category(""));
        assert!(t.matches_category("Communication"));
        assert!(!t.matches_category("communication"));
    }
}
