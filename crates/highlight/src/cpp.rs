//! C++ lexer.
//!
//! A small state machine: `Normal` inspects the next character (without
//! consuming it) and hands off to a scanning state, which consumes one token
//! and returns to `Normal`. Operators and punctuators are scanned directly
//! from `Normal`.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "int", "char", "float", "double", "void", "bool", "auto", "if", "else", "for", "while", "do", "return", "break",
    "continue", "class", "struct", "enum", "union", "public", "private", "protected", "virtual", "override", "const",
    "constexpr", "static", "inline", "template", "typename", "switch", "case", "default", "try", "catch", "throw",
    "namespace", "using", "new", "delete", "true", "false", "nullptr", "this", "sizeof",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Identifier,
    Number,
    String,
    CharLiteral,
    LineComment,
    BlockComment,
    Preprocessor,
    Whitespace,
}

pub struct CppLexer<'a> {
    cursor: Cursor<'a>,
    state: State,
    tokens: Vec<Token>,
}

impl<'a> CppLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Normal,
            tokens: Vec::new(),
        }
    }

    /// Run the lexer to the end of the source.
    pub fn lex(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            match self.state {
                State::Normal => self.normal(),
                State::Identifier => self.identifier(),
                State::Number => self.number(),
                State::String => self.quoted('"', TokenKind::String),
                State::CharLiteral => self.quoted('\'', TokenKind::CharLiteral),
                State::LineComment => self.line_comment(),
                State::BlockComment => self.block_comment(),
                State::Preprocessor => self.preprocessor(),
                State::Whitespace => self.whitespace(),
            }
        }
        self.tokens
    }

    fn emit(&mut self, kind: TokenKind, start: usize) {
        let text = self.cursor.since(start);
        if !text.is_empty() {
            self.tokens.push(Token::new(kind, text));
        }
    }

    fn normal(&mut self) {
        let Some(c) = self.cursor.peek() else {
            return;
        };

        self.state = match c {
            ' ' | '\t' | '\r' => State::Whitespace,
            '\n' => {
                let start = self.cursor.pos();
                self.cursor.advance();
                self.emit(TokenKind::Newline, start);
                return;
            }
            c if c.is_ascii_alphabetic() || c == '_' => State::Identifier,
            c if c.is_ascii_digit() => State::Number,
            '#' => State::Preprocessor,
            '/' if self.cursor.peek_next() == Some('/') => State::LineComment,
            '/' if self.cursor.peek_next() == Some('*') => State::BlockComment,
            '\'' => State::CharLiteral,
            '"' => State::String,
            _ => {
                self.operator();
                return;
            }
        };
    }

    fn operator(&mut self) {
        let start = self.cursor.pos();
        let Some(c) = self.cursor.advance() else {
            return;
        };

        let kind = match c {
            '<' => {
                if !self.cursor.eat('<') {
                    self.cursor.eat('=');
                }
                TokenKind::Operator
            }
            '>' => {
                if !self.cursor.eat('>') {
                    self.cursor.eat('=');
                }
                TokenKind::Operator
            }
            '=' | '!' => {
                self.cursor.eat('=');
                TokenKind::Operator
            }
            '&' | '|' | '+' => {
                self.cursor.eat(c);
                TokenKind::Operator
            }
            '-' => {
                if !self.cursor.eat('-') {
                    self.cursor.eat('>');
                }
                TokenKind::Operator
            }
            '*' | '%' | '/' | '.' => TokenKind::Operator,
            ':' if self.cursor.eat(':') => TokenKind::Operator,
            ':' | ';' | ',' | '(' | ')' | '{' | '}' | '[' | ']' => TokenKind::Punctuator,
            _ => TokenKind::Unknown,
        };

        self.emit(kind, start);
    }

    fn identifier(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let text = self.cursor.since(start);
        let kind = if KEYWORDS.contains(&text) {
            TokenKind::Keyword
        } else if text.starts_with(|c: char| c.is_ascii_uppercase()) {
            TokenKind::SpecialIdentifier
        } else {
            TokenKind::Identifier
        };

        self.emit(kind, start);
        self.state = State::Normal;
    }

    fn number(&mut self) {
        let start = self.cursor.pos();
        // Covers hex (0x1F), floats (3.14) and suffixes (10u, 2.0f)
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '.');
        self.emit(TokenKind::Number, start);
        self.state = State::Normal;
    }

    /// String or character literal. Stops at the closing quote, or before an
    /// unescaped newline when the literal is unterminated.
    fn quoted(&mut self, quote: char, kind: TokenKind) {
        let start = self.cursor.pos();
        self.cursor.advance();

        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
            if c == '\\' {
                self.cursor.advance();
            } else if c == quote {
                break;
            }
        }

        self.emit(kind, start);
        self.state = State::Normal;
    }

    fn line_comment(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c != '\n');
        self.emit(TokenKind::Comment, start);
        self.state = State::Normal;
    }

    fn block_comment(&mut self) {
        let start = self.cursor.pos();
        // "/*"
        self.cursor.advance();
        self.cursor.advance();

        while let Some(c) = self.cursor.advance() {
            if c == '*' && self.cursor.eat('/') {
                break;
            }
        }

        self.emit(TokenKind::Comment, start);
        self.state = State::Normal;
    }

    fn preprocessor(&mut self) {
        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(|c| c == ' ' || c == '\t');
        self.cursor.eat_while(|c| c.is_ascii_alphabetic());

        if self.cursor.since(start).ends_with("include") {
            self.emit(TokenKind::PreprocessorDirective, start);
            self.include_target();
        } else {
            self.directive_rest();
            self.emit(TokenKind::PreprocessorDirective, start);
        }

        self.state = State::Normal;
    }

    /// `<header>` or `"header"` following an `#include`.
    fn include_target(&mut self) {
        let ws = self.cursor.pos();
        self.cursor.eat_while(|c| c == ' ' || c == '\t');
        self.emit(TokenKind::Whitespace, ws);

        let close = match self.cursor.peek() {
            Some('<') => '>',
            Some('"') => '"',
            _ => return,
        };

        let start = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != close && c != '\n');
        self.cursor.eat(close);
        self.emit(TokenKind::HeaderName, start);
    }

    /// Rest of a directive line, following `\` line continuations.
    fn directive_rest(&mut self) {
        loop {
            self.cursor.eat_while(|c| c != '\n' && c != '\\');
            if !self.cursor.eat('\\') {
                break;
            }
            self.cursor.eat('\r');
            self.cursor.eat('\n');
        }
    }

    fn whitespace(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c == ' ' || c == '\t' || c == '\r');
        self.emit(TokenKind::Whitespace, start);
        self.state = State::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lex(src: &str) -> Vec<Token> {
        CppLexer::new(src).lex()
    }

    /// Tokens other than whitespace/newlines, as (kind, text) pairs
    fn significant(src: &str) -> Vec<(TokenKind, String)> {
        lex(src)
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Newline))
            .map(|t| (t.kind, t.text))
            .collect()
    }

    fn pairs(expected: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
        expected.iter().map(|(k, t)| (*k, t.to_string())).collect()
    }

    const HELLO: &str = r#"#include <iostream>

using std::cout;

/*
	void sayHello();
*/
void sayHello() {
	cout << "Hello, World!" << endl;
};

int main( int argc, char ** argv )
{
	// This is a comment
	sayHello();

	return 0;
}
"#;

    #[test]
    fn tokens_reassemble_source_exactly() {
        let rebuilt: String = lex(HELLO).into_iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, HELLO);
    }

    #[test]
    fn include_splits_directive_and_header() {
        assert_eq!(
            lex("#include <iostream>\n"),
            vec![
                Token::new(TokenKind::PreprocessorDirective, "#include"),
                Token::new(TokenKind::Whitespace, " "),
                Token::new(TokenKind::HeaderName, "<iostream>"),
                Token::new(TokenKind::Newline, "\n"),
            ]
        );
        assert_eq!(
            significant("#include \"core.h\""),
            pairs(&[(TokenKind::PreprocessorDirective, "#include"), (TokenKind::HeaderName, "\"core.h\"")])
        );
    }

    #[test]
    fn other_directives_run_to_end_of_line() {
        assert_eq!(
            significant("#pragma once\nint x;"),
            pairs(&[
                (TokenKind::PreprocessorDirective, "#pragma once"),
                (TokenKind::Keyword, "int"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Punctuator, ";"),
            ])
        );
    }

    #[test]
    fn directive_follows_line_continuations() {
        let tokens = lex("#define TWICE(x) \\\n  ((x) * 2)\nint");
        assert_eq!(tokens[0], Token::new(TokenKind::PreprocessorDirective, "#define TWICE(x) \\\n  ((x) * 2)"));
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Keyword));
    }

    #[test]
    fn identifiers_are_classified() {
        assert_eq!(
            significant("return Lexer lexer_2"),
            pairs(&[
                (TokenKind::Keyword, "return"),
                (TokenKind::SpecialIdentifier, "Lexer"),
                (TokenKind::Identifier, "lexer_2"),
            ])
        );
    }

    #[test]
    fn compound_operators_are_single_tokens() {
        assert_eq!(
            significant("a << b <= c -> d :: e != f && g || h ++ -- >>="),
            pairs(&[
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "<<"),
                (TokenKind::Identifier, "b"),
                (TokenKind::Operator, "<="),
                (TokenKind::Identifier, "c"),
                (TokenKind::Operator, "->"),
                (TokenKind::Identifier, "d"),
                (TokenKind::Operator, "::"),
                (TokenKind::Identifier, "e"),
                (TokenKind::Operator, "!="),
                (TokenKind::Identifier, "f"),
                (TokenKind::Operator, "&&"),
                (TokenKind::Identifier, "g"),
                (TokenKind::Operator, "||"),
                (TokenKind::Identifier, "h"),
                (TokenKind::Operator, "++"),
                (TokenKind::Operator, "--"),
                (TokenKind::Operator, ">>"),
                (TokenKind::Operator, "="),
            ])
        );
    }

    #[test]
    fn single_colon_is_punctuation_and_stray_chars_are_unknown() {
        assert_eq!(
            significant("case 1: @"),
            pairs(&[
                (TokenKind::Keyword, "case"),
                (TokenKind::Number, "1"),
                (TokenKind::Punctuator, ":"),
                (TokenKind::Unknown, "@"),
            ])
        );
    }

    #[test]
    fn numbers_include_fractions_and_suffixes() {
        assert_eq!(
            significant("3.14f 0x1F 10u"),
            pairs(&[(TokenKind::Number, "3.14f"), (TokenKind::Number, "0x1F"), (TokenKind::Number, "10u")])
        );
    }

    #[test]
    fn string_escapes_do_not_end_the_literal() {
        assert_eq!(
            significant(r#"s = "say \"hi\"\\";"#),
            pairs(&[
                (TokenKind::Identifier, "s"),
                (TokenKind::Operator, "="),
                (TokenKind::String, r#""say \"hi\"\\""#),
                (TokenKind::Punctuator, ";"),
            ])
        );
        assert_eq!(significant(r"'\''"), pairs(&[(TokenKind::CharLiteral, r"'\''")]));
    }

    #[test]
    fn unterminated_string_stops_at_newline() {
        assert_eq!(
            lex("\"oops\nx"),
            vec![
                Token::new(TokenKind::String, "\"oops"),
                Token::new(TokenKind::Newline, "\n"),
                Token::new(TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn comments_are_single_tokens() {
        assert_eq!(
            significant("x / y // half\n/* a\n * b */ z"),
            pairs(&[
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, "/"),
                (TokenKind::Identifier, "y"),
                (TokenKind::Comment, "// half"),
                (TokenKind::Comment, "/* a\n * b */"),
                (TokenKind::Identifier, "z"),
            ])
        );
    }

    #[test]
    fn unterminated_block_comment_runs_to_eof() {
        assert_eq!(lex("/* never closed"), vec![Token::new(TokenKind::Comment, "/* never closed")]);
    }

    #[test]
    fn crlf_line_endings_survive() {
        let src = "int a;\r\nint b;\r\n";
        let rebuilt: String = lex(src).into_iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, src);
    }
}
