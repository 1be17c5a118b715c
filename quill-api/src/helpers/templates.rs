use quill_types::Template;

const BUILTIN: &[(&str, &str, &str, &str, &str)] = &[
    (
        "1",
        "Blog Post",
        "A structured template for writing engaging blog posts",
        "Content",
        "<h1>Blog Post Title</h1><p>Introduction paragraph that hooks the reader...</p><h2>Main Point 1</h2><p>Content about your first main point...</p><h2>Main Point 2</h2><p>Content about your second main point...</p><h2>Conclusion</h2><p>Wrap up your key takeaways...</p>",
    ),
    (
        "2",
        "Business Proposal",
        "Professional template for business proposals",
        "Business",
        "<h1>Business Proposal</h1><h2>Executive Summary</h2><p>Brief overview of your proposal...</p><h2>Problem Statement</h2><p>Describe the problem you are addressing...</p><h2>Solution</h2><p>Present your proposed solution...</p><h2>Benefits</h2><p>Highlight key benefits and ROI...</p><h2>Next Steps</h2><p>Call to action...</p>",
    ),
    (
        "3",
        "Email",
        "Professional email template for various scenarios",
        "Communication",
        "<p>Subject: [Email Subject]</p><p>Dear [Name],</p><p>[Opening paragraph - purpose of email]</p><p>[Main content]</p><p>[Closing paragraph]</p><p>Best regards,<br/>[Your Name]</p>",
    ),
    (
        "4",
        "Creative Writing",
        "Unstructured space for creative writing",
        "Creative",
        "<p>Start writing your story here...</p><p/><p>Chapter 1</p><p/><p>It was a dark and stormy night...</p>",
    ),
    (
        "5",
        "Article",
        "Long-form article template with SEO optimization",
        "Content",
        "<h1>Article Title</h1><p class=\"lead\">Compelling introduction...</p><h2>Key Takeaway #1</h2><p>Supporting content...</p><h2>Key Takeaway #2</h2><p>Supporting content...</p><h2>Expert Quotes</h2><p>Include relevant expert opinions...</p><h2>Conclusion</h2><p>Summary and final thoughts...</p>",
    ),
    (
        "6",
        "AI Prompt",
        "Template for crafting effective AI prompts",
        "AI",
        "<h1>AI Prompt Template</h1><h2>Context</h2><p>Provide background information...</p><h2>Task</h2><p>Clear description of what you want...</p><h2>Constraints</h2><p>Any limitations or requirements...</p><h2>Example Output</h2><p>Show the desired format...</p>",
    ),
];

/// Templates shipped with the service, in display order.
pub fn builtin_templates() -> Vec<Template> {
    BUILTIN
        .iter()
        .map(|(id, name, description, category, content)| Template {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            content: content.to_string(),
            builtin: true,
            created_at: None,
        })
        .collect()
}

pub fn find_builtin(id: &str) -> Option<Template> {
    builtin_templates().into_iter().find(|t| t.id == id)
}
