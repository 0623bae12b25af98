use std::path::Path;

/// Languages with a dedicated lexer. Everything else renders as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cpp,
    Plain,
}

impl Language {
    /// Resolve a `language` tag from a page description (`"c++"`, `"cpp"`, ...).
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "c++" | "cpp" | "cxx" | "cc" | "h" | "hpp" => Language::Cpp,
            _ => Language::Plain,
        }
    }

    /// Guess the language from a file extension.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_tag)
            .unwrap_or(Language::Plain)
    }

    /// Value written to the `data-type` attribute of rendered blocks.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Cpp => "c++",
            Language::Plain => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve_case_insensitively() {
        assert_eq!(Language::from_tag("C++"), Language::Cpp);
        assert_eq!(Language::from_tag(" cpp "), Language::Cpp);
        assert_eq!(Language::from_tag("javascript"), Language::Plain);
    }

    #[test]
    fn paths_resolve_by_extension() {
        assert_eq!(Language::from_path(Path::new("hello-world/hello.cpp")), Language::Cpp);
        assert_eq!(Language::from_path(Path::new("include/core.h")), Language::Cpp);
        assert_eq!(Language::from_path(Path::new("scripts.js")), Language::Plain);
        assert_eq!(Language::from_path(Path::new("Makefile")), Language::Plain);
    }
}
