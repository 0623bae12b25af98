use anyhow::{Result, bail};

/// Marker replaced by the rendered article
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Substitute `article` for every `{{content}}` marker in `template`.
pub fn inject(template: &str, article: &str) -> Result<String> {
    if !template.contains(CONTENT_PLACEHOLDER) {
        bail!("template has no {} placeholder", CONTENT_PLACEHOLDER);
    }
    Ok(template.replace(CONTENT_PLACEHOLDER, article))
}
