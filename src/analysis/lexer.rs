use crate::models::Diagnostic;
use std::fmt;

/// A line/column position in a property set source file (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Identifiers and keywords. AADL keywords are not reserved words for our
    /// purposes; the parser matches them case-insensitively by spelling.
    Ident(String),
    Number(String),
    Str(String),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    /// `=>`
    Arrow,
    Star,
    /// Any other punctuation (`+`, `-`, `.`, `..`, ...). Only ever consumed
    /// while skipping declarations the generator does not care about.
    Punct(char),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(s) => write!(f, "'{}'", s),
            TokenKind::Number(s) => write!(f, "'{}'", s),
            TokenKind::Str(_) => write!(f, "string literal"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Arrow => write!(f, "'=>'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Punct(c) => write!(f, "'{}'", c),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    /// True if this token is the given AADL keyword or identifier,
    /// compared case-insensitively (AADL is a case-insensitive language).
    pub fn is_word(&self, word: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(s) if s.eq_ignore_ascii_case(word))
    }
}

/// Tokenize AADL property set source text. `--` starts a comment running to
/// the end of the line. Lexical problems are reported as error diagnostics
/// and the offending character is skipped.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1usize;
    let mut column = 1usize;

    macro_rules! bump {
        () => {{
            let c = chars.next();
            if c == Some('\n') {
                line += 1;
                column = 1;
            } else if c.is_some() {
                column += 1;
            }
            c
        }};
    }

    while let Some(&c) = chars.peek() {
        let position = Position { line, column };
        match c {
            ' ' | '\t' | '\r' | '\n' => {
                bump!();
            }
            'a'..='z' | 'A'..='Z' => {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        word.push(c);
                        bump!();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(word),
                    position,
                });
            }
            '0'..='9' => {
                let mut number = String::new();
                while let Some(&c) = chars.peek() {
                    // Good enough for integers, reals and exponents in
                    // declarations we skip over anyway.
                    if c.is_ascii_alphanumeric() || c == '.' || c == '#' {
                        number.push(c);
                        bump!();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Number(number),
                    position,
                });
            }
            '"' => {
                bump!();
                let mut value = String::new();
                let mut terminated = false;
                while let Some(&c) = chars.peek() {
                    if c == '"' {
                        bump!();
                        terminated = true;
                        break;
                    }
                    if c == '\n' {
                        break;
                    }
                    value.push(c);
                    bump!();
                }
                if !terminated {
                    diagnostics.push(Diagnostic::error(
                        "unterminated string literal",
                        position.line,
                        position.column,
                    ));
                }
                tokens.push(Token {
                    kind: TokenKind::Str(value),
                    position,
                });
            }
            '-' => {
                bump!();
                if chars.peek() == Some(&'-') {
                    // comment to end of line
                    while let Some(&c) = chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        bump!();
                    }
                } else {
                    tokens.push(Token {
                        kind: TokenKind::Punct('-'),
                        position,
                    });
                }
            }
            '=' => {
                bump!();
                if chars.peek() == Some(&'>') {
                    bump!();
                    tokens.push(Token {
                        kind: TokenKind::Arrow,
                        position,
                    });
                } else {
                    tokens.push(Token {
                        kind: TokenKind::Punct('='),
                        position,
                    });
                }
            }
            '(' | ')' | ',' | ':' | ';' | '*' => {
                bump!();
                let kind = match c {
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ',' => TokenKind::Comma,
                    ':' => TokenKind::Colon,
                    ';' => TokenKind::Semicolon,
                    _ => TokenKind::Star,
                };
                tokens.push(Token { kind, position });
            }
            '+' | '.' | '[' | ']' | '{' | '}' | '<' | '>' => {
                bump!();
                tokens.push(Token {
                    kind: TokenKind::Punct(c),
                    position,
                });
            }
            _ => {
                bump!();
                diagnostics.push(Diagnostic::error(
                    format!("unexpected character '{}'", c),
                    position.line,
                    position.column,
                ));
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        position: Position { line, column },
    });
    (tokens, diagnostics)
}
