//! Static page generation.
//!
//! A project is a directory of page descriptions. Each page is rendered to
//! an article, injected into its template and written next to the page
//! description, then published to `output/<slug>/` together with the
//! stylesheets and scripts it names. Pages that load the `copy` script also
//! need the browser bundle, which is published once to `output/pkg/`.

pub mod config;
pub mod page;
mod template;

pub use config::{FileConfig, SiteConfig};
pub use page::{Block, Page, resolve_code_path};
pub use template::{CONTENT_PLACEHOLDER, inject};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use highlight::{Language, Token};
use leptos::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::clipboard::CopyFeedback;
use crate::components::CodeBlock;
use crate::pages::{Article, ArticleBlock};

/// Written to the output directory after every build
pub const MANIFEST_FILE: &str = "manifest.json";
/// Theme script that loads the copy handler from the browser bundle
pub const COPY_SCRIPT: &str = "copy";
/// Output subdirectory the `copy` script imports the bundle from
pub const BUNDLE_DIR: &str = "pkg";
/// Bundle module imported by the `copy` script
pub const BUNDLE_ENTRY: &str = "snippet_site.js";

/// Where a page ended up.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltPage {
    pub slug: String,
    pub title: String,
    /// Rendered page next to its description
    pub html_path: PathBuf,
    /// `output/<slug>/` with `css/`, `scripts/` and `html/`
    pub output_dir: PathBuf,
    pub scripts: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: DateTime<Utc>,
    project: &'a str,
    pages: &'a [BuiltPage],
}

/// Build every page description (`*.json`) in `pages/<project>/`.
pub fn build_project(config: &SiteConfig, project: &str) -> Result<Vec<BuiltPage>> {
    let project_dir = config.pages_dir.join(project);
    if !project_dir.is_dir() {
        bail!("Bad path supplied: {} is not a directory", project_dir.display());
    }

    let files = page_files(&project_dir)?;
    if files.is_empty() {
        bail!("No page files to parse in {}", project_dir.display());
    }

    let mut built = Vec::with_capacity(files.len());
    for file in &files {
        let page = build_page(config, project, file).with_context(|| format!("Failed to build {}", file.display()))?;
        info!("Generated {}", page.html_path.display());
        built.push(page);
    }

    let needs_bundle = built.iter().any(|page| page.scripts.iter().any(|s| s == COPY_SCRIPT));
    publish_bundle(config, needs_bundle)?;

    write_manifest(config, project, &built)?;
    Ok(built)
}

/// Copy the browser bundle to `output/pkg/`.
///
/// A missing bundle is only an error when some page loads the `copy`
/// script, since its buttons would do nothing without it.
fn publish_bundle(config: &SiteConfig, required: bool) -> Result<()> {
    let entry = config.pkg_dir.join(BUNDLE_ENTRY);
    if !entry.is_file() {
        if required {
            bail!(
                "Pages load the {:?} script but the browser bundle {} is missing; \
                 build it with `wasm-pack build crates/snippet-site --target web` and the `hydrate` feature",
                COPY_SCRIPT,
                entry.display()
            );
        }
        debug!("No browser bundle at {}; skipping", config.pkg_dir.display());
        return Ok(());
    }

    let to = config.output_dir.join(BUNDLE_DIR);
    copy_dir(&config.pkg_dir, &to).with_context(|| format!("Failed to publish browser bundle to {}", to.display()))?;
    info!("Published browser bundle to {}", to.display());
    Ok(())
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to).with_context(|| format!("Failed to create {}", to.display()))?;
    for entry in fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            copy_asset(from, to, &entry.file_name().to_string_lossy())?;
        }
    }
    Ok(())
}

/// Page descriptions in `dir`, sorted by file name.
fn page_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Render one page description and publish it.
pub fn build_page(config: &SiteConfig, project: &str, page_path: &Path) -> Result<BuiltPage> {
    let page = Page::load(page_path)?;
    let page_dir = page_path.parent().unwrap_or(Path::new("."));

    let article = render_article(config, project, &page)?;

    let template_path = config.templates_dir.join(&page.template);
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template: {}", template_path.display()))?;
    let html = inject(&template, &article).with_context(|| format!("Bad template: {}", template_path.display()))?;

    let file_name = format!("{}.html", page.slug);
    let html_path = page_dir.join(&file_name);
    fs::write(&html_path, &html).with_context(|| format!("Failed to write {}", html_path.display()))?;

    let output_dir = config.output_dir.join(&page.slug);
    let css_dir = output_dir.join("css");
    let scripts_dir = output_dir.join("scripts");
    let html_dir = output_dir.join("html");
    for dir in [&output_dir, &css_dir, &scripts_dir, &html_dir] {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    for style in &page.styles {
        copy_asset(&config.theme_dir.join("css"), &css_dir, &format!("{}.css", style))?;
    }
    for script in &page.scripts {
        copy_asset(&config.theme_dir.join("js"), &scripts_dir, &format!("{}.js", script))?;
    }
    copy_asset(page_dir, &html_dir, &file_name)?;

    Ok(BuiltPage {
        slug: page.slug,
        title: page.title,
        html_path,
        output_dir,
        scripts: page.scripts,
    })
}

fn copy_asset(from_dir: &Path, to_dir: &Path, name: &str) -> Result<()> {
    let from = from_dir.join(name);
    let to = to_dir.join(name);
    debug!("Copying {} to {}", from.display(), to.display());
    fs::copy(&from, &to).with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}

/// Render the `<article>` for `page`, reading and highlighting every code
/// block's source file. Code blocks get ids `snippet-1`, `snippet-2`, ...
pub fn render_article(config: &SiteConfig, project: &str, page: &Page) -> Result<String> {
    let mut blocks = Vec::new();
    let mut snippets = 0;

    for block in page.blocks()? {
        match block {
            Block::Text { content } => blocks.push(ArticleBlock::Text(content)),
            Block::Code { file, language } => {
                let path = resolve_code_path(&config.code_dir, project, &file)?;
                let source = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read code file: {}", path.display()))?;

                snippets += 1;
                blocks.push(ArticleBlock::Code {
                    file_name: file,
                    tokens: highlight::tokenize(Language::from_tag(&language), &source),
                    language,
                    content_id: format!("snippet-{}", snippets),
                });
            }
            Block::Unsupported => warn!("Skipping unsupported block in page {:?}", page.slug),
        }
    }

    let title = page.title.clone();
    let feedback = config.copy_feedback;
    Ok(view! { <Article title=title blocks=blocks feedback=feedback /> }.to_html())
}

/// Read and tokenize a source file. `language` defaults to a guess from the
/// file extension.
pub fn tokenize_file(path: &Path, language: Option<&str>) -> Result<(Language, Vec<Token>)> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read source file: {}", path.display()))?;
    let language = language.map(Language::from_tag).unwrap_or_else(|| Language::from_path(path));
    Ok((language, highlight::tokenize(language, &source)))
}

/// Render a single source file as a standalone code block.
pub fn render_snippet(path: &Path, language: Option<&str>, feedback: CopyFeedback) -> Result<String> {
    let (language, tokens) = tokenize_file(path, language)?;

    let file_name = path.display().to_string();
    Ok(view! {
        <CodeBlock
            file_name=file_name
            language=language.tag()
            content_id="snippet-1"
            tokens=tokens
            feedback=feedback
        />
    }
    .to_html())
}

fn write_manifest(config: &SiteConfig, project: &str, pages: &[BuiltPage]) -> Result<()> {
    let manifest = Manifest {
        generated_at: Utc::now(),
        project,
        pages,
    };
    let path = config.output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
