use quill_types::GenerateRequest;

pub const SUGGEST_MAX_TOKENS: u32 = 500;
pub const SUGGEST_TEMPERATURE: f32 = 0.5;

/// Prompt asking for three short suggestions on a piece of text.
pub fn suggest_prompt(text: &str, context: Option<&str>) -> String {
    let body = format!(
        "Given this text: \"{text}\"\n\nProvide 3 brief suggestions to improve or continue this text. \
         Format as a JSON array of objects with 'text' and 'type' properties."
    );
    match context.map(str::trim).filter(|c| !c.is_empty()) {
        Some(context) => format!("Context: {context}\n\n{body}"),
        None => body,
    }
}

/// Content kinds accepted by the generate endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateKind {
    Blog,
    Email,
    Summary,
    Improve,
}

impl GenerateKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "blog" => Some(Self::Blog),
            "email" => Some(Self::Email),
            "summary" => Some(Self::Summary),
            "improve" => Some(Self::Improve),
            _ => None,
        }
    }

    pub fn prompt(self, request: &GenerateRequest) -> String {
        let topic = request.topic.as_deref().unwrap_or("Unknown topic");
        let text = request.text.as_deref().unwrap_or_default();

        match self {
            Self::Blog => format!(
                "Write a blog post about: {topic}\n\
                 Include an engaging title, introduction, main points, and conclusion."
            ),
            Self::Email => format!(
                "Write a professional email about: {topic}\nRecipient: {}\nTone: {}",
                request.recipient.as_deref().unwrap_or("Unknown"),
                request.tone.as_deref().unwrap_or("Professional"),
            ),
            Self::Summary => format!("Summarize this text in 3-5 bullet points:\n{text}"),
            Self::Improve => format!("Improve this text for clarity and grammar:\n{text}"),
        }
    }
}
