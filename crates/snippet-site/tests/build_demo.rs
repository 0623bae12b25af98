//! Build the demo site in a scratch copy and check what lands on disk.

use snippet_site::generator::{self, BUNDLE_DIR, BUNDLE_ENTRY, MANIFEST_FILE, SiteConfig};
use std::fs;
use std::path::Path;

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

/// Scratch copy of `demo/` with a stand-in for the wasm-pack output.
fn demo_site() -> (tempfile::TempDir, SiteConfig) {
    let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demo");
    let dir = tempfile::tempdir().unwrap();
    copy_dir(&demo, dir.path());
    let config = SiteConfig::load(dir.path(), None).unwrap();

    fs::create_dir_all(&config.pkg_dir).unwrap();
    fs::write(config.pkg_dir.join(BUNDLE_ENTRY), "export function hydrate() {}\n").unwrap();
    fs::write(config.pkg_dir.join("snippet_site_bg.wasm"), b"\0asm\x01\0\0\0").unwrap();
    (dir, config)
}

/// Text a browser would copy from the code element: tags dropped,
/// entities decoded.
fn copied_text(html: &str) -> String {
    let start = html.find(r#"class="code-content">"#).unwrap() + r#"class="code-content">"#.len();
    let end = html[start..].find("</code>").unwrap() + start;

    let mut text = String::new();
    let mut in_tag = false;
    for c in html[start..end].chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[test]
fn demo_project_builds() {
    let (_dir, config) = demo_site();

    let pages = generator::build_project(&config, "hello-world").unwrap();
    assert_eq!(pages.len(), 1);
    let page = &pages[0];
    assert_eq!(page.slug, "hello-world");

    // Rendered next to the page description
    let html = fs::read_to_string(&page.html_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains(generator::CONTENT_PLACEHOLDER));
    assert!(html.contains("<h3>Hello, World!</h3>"));
    assert!(html.contains(r##"data-clipboard-target="#snippet-1""##));

    // Published with its assets
    let out = config.output_dir.join("hello-world");
    assert!(out.join("css/code.css").is_file());
    assert!(out.join("scripts/copy.js").is_file());
    assert_eq!(fs::read_to_string(out.join("html/hello-world.html")).unwrap(), html);

    // copy.js imports /pkg/snippet_site.js from the output root
    let copy_js = fs::read_to_string(out.join("scripts/copy.js")).unwrap();
    assert!(copy_js.contains(&format!("/{}/{}", BUNDLE_DIR, BUNDLE_ENTRY)));
    assert!(config.output_dir.join(BUNDLE_DIR).join(BUNDLE_ENTRY).is_file());
    assert!(config.output_dir.join(BUNDLE_DIR).join("snippet_site_bg.wasm").is_file());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.output_dir.join(MANIFEST_FILE)).unwrap()).unwrap();
    assert_eq!(manifest["project"], "hello-world");
    assert_eq!(manifest["pages"][0]["slug"], "hello-world");
    assert!(manifest["generated_at"].is_string());
}

#[test]
fn copy_target_holds_exactly_the_source() {
    let (_dir, config) = demo_site();

    let pages = generator::build_project(&config, "hello-world").unwrap();
    let html = fs::read_to_string(&pages[0].html_path).unwrap();

    let source = fs::read_to_string(config.code_dir.join("hello-world/hello.cpp")).unwrap();
    assert_eq!(copied_text(&html), source);
}

#[test]
fn missing_asset_fails_the_build() {
    let (_dir, config) = demo_site();
    fs::remove_file(config.theme_dir.join("css/code.css")).unwrap();

    let err = generator::build_project(&config, "hello-world").unwrap_err();
    assert!(format!("{:#}", err).contains("code.css"));
}

#[test]
fn missing_bundle_fails_the_build() {
    let (_dir, config) = demo_site();
    fs::remove_dir_all(&config.pkg_dir).unwrap();

    let err = generator::build_project(&config, "hello-world").unwrap_err();
    assert!(format!("{:#}", err).contains("browser bundle"));
}

#[test]
fn template_without_placeholder_fails_the_build() {
    let (_dir, config) = demo_site();
    fs::write(config.templates_dir.join("article.html"), "<html></html>").unwrap();

    let err = generator::build_project(&config, "hello-world").unwrap_err();
    assert!(format!("{:#}", err).contains("placeholder"));
}
