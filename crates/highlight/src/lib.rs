//! Syntax highlighting for code snippets.
//!
//! Source text is split into [`Token`]s whose texts concatenate back to the
//! input exactly, so renderers can wrap each token without losing any
//! whitespace or formatting.

mod cpp;
mod cursor;
mod language;
mod token;

pub use cpp::CppLexer;
pub use language::Language;
pub use token::{Token, TokenKind};

/// Tokenize `source` with the lexer for `language`.
pub fn tokenize(language: Language, source: &str) -> Vec<Token> {
    match language {
        Language::Cpp => CppLexer::new(source).lex(),
        Language::Plain if source.is_empty() => Vec::new(),
        Language::Plain => vec![Token::new(TokenKind::Unknown, source)],
    }
}
