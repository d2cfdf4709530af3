use crate::analysis::lexer::{tokenize, Position, Token, TokenKind};
use crate::models::{Diagnostic, EnumerationType, PropertySet, PropertyTypeDecl, UnitsType};

/// Result of parsing one property set source file.
///
/// `type_positions` holds the source position of each entry in
/// `property_set.types`, in the same order, for later semantic diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedUnit {
    pub property_set: Option<PropertySet>,
    pub type_positions: Vec<Position>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedUnit {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }
}

/// Parse an AADL property set:
///
/// ```text
/// property set <Name> is
///     <name> : type enumeration ( <literal> {, <literal>} );
///     <name> : type units ( <unit> {, <unit> => <unit> * <factor>} );
///     ... (other declarations are skipped)
/// end <Name>;
/// ```
///
/// Only enumeration and units type declarations are modeled in full; every
/// other declaration form is skipped to its terminating `;`. Parse errors
/// become error-severity diagnostics and parsing recovers at the next `;`.
pub fn parse(source: &str) -> ParsedUnit {
    let (tokens, diagnostics) = tokenize(source);
    Parser {
        tokens,
        pos: 0,
        diagnostics,
    }
    .parse_property_set()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    fn parse_property_set(mut self) -> ParsedUnit {
        if !(self.eat_word("property") && self.eat_word("set")) {
            self.error_here("expected 'property set'");
            return self.into_unit(None, Vec::new());
        }
        let name = match self.eat_ident() {
            Some(name) => name,
            None => {
                self.error_here("expected property set name");
                return self.into_unit(None, Vec::new());
            }
        };
        if !self.eat_word("is") {
            self.error_here("expected 'is'");
        }

        let mut types = Vec::new();
        let mut positions = Vec::new();
        loop {
            if self.peek().is_word("end") || self.peek().kind == TokenKind::Eof {
                break;
            }
            if let Some((decl, position)) = self.parse_declaration() {
                types.push(decl);
                positions.push(position);
            }
        }

        if !self.eat_word("end") {
            self.error_here("expected 'end'");
        } else {
            match self.eat_ident() {
                Some(end_name) if !end_name.eq_ignore_ascii_case(&name) => {
                    self.diagnostics.push(Diagnostic::error(
                        format!(
                            "property set '{}' is closed as '{}'",
                            name, end_name
                        ),
                        self.previous_position().line,
                        self.previous_position().column,
                    ));
                }
                Some(_) => {}
                None => self.error_here("expected property set name after 'end'"),
            }
            if !self.eat(&TokenKind::Semicolon) {
                self.error_here("expected ';'");
            }
        }
        if self.peek().kind != TokenKind::Eof {
            self.error_here("unexpected text after 'end'");
        }

        self.into_unit(Some(PropertySet { name, types }), positions)
    }

    /// One `<name> : ...;` declaration. Returns a declaration only for
    /// property *type* declarations; property definitions and constants are
    /// consumed and dropped.
    fn parse_declaration(&mut self) -> Option<(PropertyTypeDecl, Position)> {
        let position = self.peek().position;
        let name = match self.eat_ident() {
            Some(name) => name,
            None => {
                self.error_here("expected declaration name");
                self.recover_to_semicolon();
                return None;
            }
        };
        if !self.eat(&TokenKind::Colon) {
            self.error_here("expected ':'");
            self.recover_to_semicolon();
            return None;
        }

        if self.eat_word("type") {
            if self.eat_word("enumeration") {
                let literals = self.parse_name_list()?;
                Some((
                    PropertyTypeDecl::Enumeration(EnumerationType { name, literals }),
                    position,
                ))
            } else if self.eat_word("units") {
                let units = self.parse_units_list()?;
                Some((
                    PropertyTypeDecl::Units(UnitsType { name, units }),
                    position,
                ))
            } else {
                // some other property type kind (aadlinteger, record, ...)
                self.recover_to_semicolon();
                Some((PropertyTypeDecl::Other { name }, position))
            }
        } else {
            // property definition or constant, irrelevant to generation
            self.recover_to_semicolon();
            None
        }
    }

    /// `( ident {, ident} ) ;`
    fn parse_name_list(&mut self) -> Option<Vec<String>> {
        if !self.eat(&TokenKind::LParen) {
            self.error_here("expected '('");
            self.recover_to_semicolon();
            return None;
        }
        let mut names = Vec::new();
        if self.peek().kind != TokenKind::RParen {
            loop {
                match self.eat_ident() {
                    Some(name) => names.push(name),
                    None => {
                        self.error_here("expected enumeration literal name");
                        self.recover_to_semicolon();
                        return None;
                    }
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        if !self.eat(&TokenKind::RParen) {
            self.error_here("expected ')'");
            self.recover_to_semicolon();
            return None;
        }
        if !self.eat(&TokenKind::Semicolon) {
            self.error_here("expected ';'");
            self.recover_to_semicolon();
            return None;
        }
        Some(names)
    }

    /// `( unit {, unit => base * factor} ) ;` — only the unit names are kept.
    fn parse_units_list(&mut self) -> Option<Vec<String>> {
        if !self.eat(&TokenKind::LParen) {
            self.error_here("expected '('");
            self.recover_to_semicolon();
            return None;
        }
        let mut units = Vec::new();
        if self.peek().kind != TokenKind::RParen {
            loop {
                match self.eat_ident() {
                    Some(unit) => units.push(unit),
                    None => {
                        self.error_here("expected unit name");
                        self.recover_to_semicolon();
                        return None;
                    }
                }
                if self.eat(&TokenKind::Arrow) {
                    if self.eat_ident().is_none() {
                        self.error_here("expected base unit name after '=>'");
                        self.recover_to_semicolon();
                        return None;
                    }
                    if !self.eat(&TokenKind::Star) {
                        self.error_here("expected '*'");
                        self.recover_to_semicolon();
                        return None;
                    }
                    if !matches!(self.peek().kind, TokenKind::Number(_)) {
                        self.error_here("expected conversion factor");
                        self.recover_to_semicolon();
                        return None;
                    }
                    self.advance();
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        if !self.eat(&TokenKind::RParen) {
            self.error_here("expected ')'");
            self.recover_to_semicolon();
            return None;
        }
        if !self.eat(&TokenKind::Semicolon) {
            self.error_here("expected ';'");
            self.recover_to_semicolon();
            return None;
        }
        Some(units)
    }

    /// Consume up to and including the next `;` at parenthesis depth zero.
    /// Stops short of `end` so one bad declaration cannot swallow the
    /// property set's closing.
    fn recover_to_semicolon(&mut self) {
        let mut depth = 0usize;
        loop {
            if self.peek().kind == TokenKind::Eof {
                return;
            }
            if depth == 0 && self.peek().is_word("end") {
                return;
            }
            let kind = self.peek().kind.clone();
            match kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    return;
                }
                _ => {}
            }
            self.advance();
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn previous_position(&self) -> Position {
        self.tokens[self.pos.saturating_sub(1)].position
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if self.peek().is_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_ident(&mut self) -> Option<String> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            Some(name)
        } else {
            None
        }
    }

    fn error_here(&mut self, expected: &str) {
        let token = self.peek().clone();
        self.diagnostics.push(Diagnostic::error(
            format!("{}, found {}", expected, token.kind),
            token.position.line,
            token.position.column,
        ));
    }

    fn into_unit(
        self,
        property_set: Option<PropertySet>,
        type_positions: Vec<Position>,
    ) -> ParsedUnit {
        ParsedUnit {
            property_set,
            type_positions,
            diagnostics: self.diagnostics,
        }
    }
}
