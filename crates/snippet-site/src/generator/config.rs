//! Site configuration (`site.toml`).
//!
//! Every key is optional; paths are relative to the project root.
//!
//! ```toml
//! [paths]
//! code = "content/code"
//! templates = "content/templates"
//! pages = "content/pages"
//! output = "content/output"
//! theme = "theme"
//! pkg = "pkg"          # wasm-pack output, published as output/pkg
//!
//! [copy]
//! feedback = "alert"   # or "label"
//!
//! [server]
//! addr = "127.0.0.1:3000"
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::clipboard::CopyFeedback;

/// Config file looked up in the project root when none is given
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub copy: CopySection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSection {
    pub code: PathBuf,
    pub templates: PathBuf,
    pub pages: PathBuf,
    pub output: PathBuf,
    pub theme: PathBuf,
    pub pkg: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            code: PathBuf::from("content/code"),
            templates: PathBuf::from("content/templates"),
            pages: PathBuf::from("content/pages"),
            output: PathBuf::from("content/output"),
            theme: PathBuf::from("theme"),
            pkg: PathBuf::from("pkg"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopySection {
    pub feedback: CopyFeedback,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub addr: SocketAddr,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

// ── Runtime config ────────────────────────────────────────────────────────────

/// Resolved configuration with absolute-or-root-relative paths.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Project root every relative path is resolved against
    pub root: PathBuf,
    /// Source files referenced by code blocks
    pub code_dir: PathBuf,
    /// Page templates containing the `{{content}}` placeholder
    pub templates_dir: PathBuf,
    /// One subdirectory of page descriptions per project
    pub pages_dir: PathBuf,
    /// Generated sites, one subdirectory per page slug
    pub output_dir: PathBuf,
    /// Stylesheets (`css/`) and scripts (`js/`) copied into the output
    pub theme_dir: PathBuf,
    /// Browser bundle (`wasm-pack build --target web` output) loaded by the
    /// `copy` script
    pub pkg_dir: PathBuf,
    pub copy_feedback: CopyFeedback,
    pub server_addr: SocketAddr,
}

impl SiteConfig {
    pub fn from_file(root: &Path, file: FileConfig) -> Self {
        let resolve = |p: &Path| if p.is_absolute() { p.to_path_buf() } else { root.join(p) };

        Self {
            root: root.to_path_buf(),
            code_dir: resolve(&file.paths.code),
            templates_dir: resolve(&file.paths.templates),
            pages_dir: resolve(&file.paths.pages),
            output_dir: resolve(&file.paths.output),
            theme_dir: resolve(&file.paths.theme),
            pkg_dir: resolve(&file.paths.pkg),
            copy_feedback: file.copy.feedback,
            server_addr: file.server.addr,
        }
    }

    /// Load the config for `root`.
    ///
    /// An explicit `config` path must exist. Without one, `root/site.toml` is
    /// used when present and defaults otherwise.
    pub fn load(root: &Path, config: Option<&Path>) -> Result<Self> {
        if !root.is_dir() {
            bail!("Project root is not a directory: {}", root.display());
        }

        let file = match config {
            Some(path) => FileConfig::load(path)?,
            None => {
                let default_path = root.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    FileConfig::load(&default_path)?
                } else {
                    FileConfig::default()
                }
            }
        };

        Ok(Self::from_file(root, file))
    }
}
