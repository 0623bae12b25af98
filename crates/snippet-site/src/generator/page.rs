//! Page descriptions (`content/pages/<project>/*.json`).
//!
//! ```json
//! {
//!   "title": "Hello World",
//!   "slug": "hello-world",
//!   "template": "article.html",
//!   "styles": ["code"],
//!   "scripts": ["copy"],
//!   "sections": [
//!     { "subsections": [
//!       { "intro": [
//!         { "type": "text", "content": "The classic first program." },
//!         { "type": "code", "file": "hello-world/hello.cpp", "language": "c++" }
//!       ] }
//!     ] }
//!   ]
//! }
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub title: String,
    /// Output file and directory name
    pub slug: String,
    /// Template file name inside the templates directory
    pub template: String,
    /// Stylesheet names, without the `.css` extension
    #[serde(default)]
    pub styles: Vec<String>,
    /// Script names, without the `.js` extension
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Each subsection maps names to block lists; names only group blocks
    /// for authors and are not rendered. Key order is preserved.
    #[serde(default)]
    pub subsections: Vec<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text {
        content: String,
    },
    Code {
        file: String,
        #[serde(default = "default_language")]
        language: String,
    },
    /// Unrecognised block types render as nothing
    #[serde(other)]
    Unsupported,
}

fn default_language() -> String {
    "c++".to_string()
}

impl Page {
    pub fn parse(json: &str) -> Result<Self> {
        let page: Page = serde_json::from_str(json)?;
        page.validate()?;
        Ok(page)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read page file: {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("Invalid page file: {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        plain_name("slug", &self.slug)?;
        if self.template.trim().is_empty() {
            bail!("template must not be empty");
        }
        // Asset names become file names under `output/<slug>/`
        for style in &self.styles {
            plain_name("style", style)?;
        }
        for script in &self.scripts {
            plain_name("script", script)?;
        }
        Ok(())
    }

    /// All blocks in document order: sections, then subsections, then each
    /// named block list in the order it was written.
    pub fn blocks(&self) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();
        for section in &self.sections {
            for subsection in &section.subsections {
                for (name, items) in subsection {
                    let items: Vec<Block> = serde_json::from_value(items.clone())
                        .with_context(|| format!("Invalid blocks in subsection {:?}", name))?;
                    blocks.extend(items);
                }
            }
        }
        Ok(blocks)
    }
}

fn plain_name(what: &str, name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        bail!("{} {:?} must be a plain file name", what, name);
    }
    Ok(())
}

/// Locate the source file of a code block.
///
/// Only the last directory component of `file` is kept, so
/// `"hello-world/hello.cpp"` and `"../code/hello-world/hello.cpp"` both
/// resolve to `code_dir/hello-world/hello.cpp`. A bare file name is looked
/// up in the directory named after the page's project.
pub fn resolve_code_path(code_dir: &Path, project: &str, file: &str) -> Result<PathBuf> {
    let path = Path::new(file);
    let name = path
        .file_name()
        .with_context(|| format!("Code block file {:?} has no file name", file))?;
    let parent = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|p| p.to_str())
        .unwrap_or(project);

    Ok(code_dir.join(parent).join(name))
}
