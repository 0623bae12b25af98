use serde::Serialize;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Whitespace,
    Newline,
    Comment,
    PreprocessorDirective,
    HeaderName,
    String,
    Number,
    Operator,
    Punctuator,
    Keyword,
    Identifier,
    /// Identifier starting with an uppercase letter (types, macros)
    SpecialIdentifier,
    CharLiteral,
    Unknown,
}

impl TokenKind {
    /// CSS class used when rendering, or `None` for text emitted as-is.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword => Some("standard-keyword"),
            TokenKind::Identifier => Some("standard-identifier"),
            TokenKind::SpecialIdentifier => Some("special-identifier"),
            TokenKind::Number => Some("number"),
            TokenKind::String => Some("string-literal"),
            TokenKind::Comment => Some("comment"),
            TokenKind::Operator => Some("operator"),
            TokenKind::Punctuator => Some("punctuator"),
            TokenKind::PreprocessorDirective => Some("preprocessor-directive"),
            TokenKind::HeaderName => Some("header-name"),
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::CharLiteral | TokenKind::Unknown => None,
        }
    }
}

/// A slice of source text with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
