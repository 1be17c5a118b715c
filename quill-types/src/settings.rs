use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-user preferences. There is a single user per service instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub theme: String,
    pub notifications: bool,
    /// Model alias used when a completion request names none
    pub ai_model: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            theme: "light".to_string(),
            notifications: true,
            ai_model: "llama3".to_string(),
        }
    }
}

impl UserSettings {
    pub fn apply(&mut self, update: UpdateSettingsRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(notifications) = update.notifications {
            self.notifications = notifications;
        }
        if let Some(ai_model) = update.ai_model.filter(|m| !m.is_empty()) {
            self.ai_model = ai_model;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub theme: Option<String>,
    pub notifications: Option<bool>,
    pub ai_model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: UserSettings = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(settings.name, "Ada");
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.ai_model, "llama3");
        assert!(settings.notifications);
    }

    #[test]
    fn test_apply_ignores_empty_model() {
        let mut settings = UserSettings::default();
        settings.apply(UpdateSettingsRequest {
            theme: Some("dark".into()),
            ai_model: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.ai_model, "llama3");
    }
}
