use ts_rs::TS;

/// Every exported type, in the order the generated file lists them.
pub const ALL_TYPES: &[&str] = &[
    "Document",
    "CreateDocumentRequest",
    "UpdateDocumentRequest",
    "Folder",
    "CreateFolderRequest",
    "Template",
    "CreateTemplateRequest",
    "UserSettings",
    "UpdateSettingsRequest",
    "CompleteRequest",
    "SuggestRequest",
    "SuggestResponse",
    "GenerateRequest",
    "GenerateResponse",
    "ModelAlias",
    "ProviderInfo",
    "ProvidersResponse",
    "ErrorResponse",
    "HealthResponse",
    "StatsResponse",
    "ExportResponse",
    "UserInfo",
    "CurrentUserResponse",
    "MessageResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "Document" => Document::export_to_string()?,
        "CreateDocumentRequest" => CreateDocumentRequest::export_to_string()?,
        "UpdateDocumentRequest" => UpdateDocumentRequest::export_to_string()?,
        "Folder" => Folder::export_to_string()?,
        "CreateFolderRequest" => CreateFolderRequest::export_to_string()?,

        "Template" => Template::export_to_string()?,
        "CreateTemplateRequest" => CreateTemplateRequest::export_to_string()?,

        "UserSettings" => UserSettings::export_to_string()?,
        "UpdateSettingsRequest" => UpdateSettingsRequest::export_to_string()?,

        "CompleteRequest" => CompleteRequest::export_to_string()?,
        "SuggestRequest" => SuggestRequest::export_to_string()?,
        "SuggestResponse" => SuggestResponse::export_to_string()?,
        "GenerateRequest" => GenerateRequest::export_to_string()?,
        "GenerateResponse" => GenerateResponse::export_to_string()?,
        "ModelAlias" => ModelAlias::export_to_string()?,
        "ProviderInfo" => ProviderInfo::export_to_string()?,
        "ProvidersResponse" => ProvidersResponse::export_to_string()?,

        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,
        "StatsResponse" => StatsResponse::export_to_string()?,
        "ExportResponse" => ExportResponse::export_to_string()?,
        "UserInfo" => UserInfo::export_to_string()?,
        "CurrentUserResponse" => CurrentUserResponse::export_to_string()?,
        "MessageResponse" => MessageResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in quill-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}
