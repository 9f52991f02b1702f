//! A minimal hand-written parser for a small subset of the source
//! language's textual surface: a module header, a flat list of `import`
//! lines, top-level `name arg* = expr` declarations, and
//! expressions limited to literals, identifiers, parenthesized
//! expressions, a single-binding `let ... = ... in ...`, and
//! left-to-right application. It exists solely so this crate's own
//! integration tests can drive `lint`/`apply_fixes` against literal
//! source text; it is not a stand-in for the real external parser.

use lint_core::{
    Declaration, DeclarationKind, Exposing, Expression, ExpressionKind, File, FunctionDeclaration,
    FunctionImplementation, Import, LetBinding, LetFunction, ModuleDefinition, ModuleFlavor,
    Position, Range, SourceParser,
};

pub struct TestParser;

impl SourceParser for TestParser {
    type Error = ParseError;

    fn parse(&self, source: &str) -> Result<File, Self::Error> {
        Lexer::new(source).tokenize().and_then(|tokens| Parser::new(tokens).parse_file())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Module,
    Exposing,
    Import,
    As,
    Let,
    In,
    Name(Vec<String>),
    Int(i64),
    Float(f64),
    Str(String),
    Char(char),
    LParen,
    RParen,
    Comma,
    DotDot,
    Equals,
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    row: usize,
    column: usize,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            row: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn here(&self) -> Position {
        Position::new(self.row, self.column)
    }

    fn tokenize(mut self) -> Result<Vec<(Token, Position, Position)>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            let start = self.here();
            let Some(c) = self.peek() else { break };

            if c == '(' {
                self.advance();
                if self.peek() == Some(')') {
                    self.advance();
                    tokens.push((Token::Name(vec!["()".to_owned()]), start, self.here()));
                } else {
                    tokens.push((Token::LParen, start, self.here()));
                }
                continue;
            }
            if c == ')' {
                self.advance();
                tokens.push((Token::RParen, start, self.here()));
                continue;
            }
            if c == ',' {
                self.advance();
                tokens.push((Token::Comma, start, self.here()));
                continue;
            }
            if c == '=' {
                self.advance();
                tokens.push((Token::Equals, start, self.here()));
                continue;
            }
            if c == '.' && self.chars.get(self.pos + 1) == Some(&'.') {
                self.advance();
                self.advance();
                tokens.push((Token::DotDot, start, self.here()));
                continue;
            }
            if c == '"' {
                self.advance();
                let mut text = String::new();
                loop {
                    match self.advance() {
                        Some('"') => break,
                        Some('\\') => {
                            if let Some(escaped) = self.advance() {
                                text.push(escaped);
                            }
                        }
                        Some(other) => text.push(other),
                        None => return Err(ParseError("unterminated string literal".to_owned())),
                    }
                }
                tokens.push((Token::Str(text), start, self.here()));
                continue;
            }
            if c == '\'' {
                self.advance();
                let ch = self.advance().ok_or_else(|| ParseError("unterminated char literal".to_owned()))?;
                if self.advance() != Some('\'') {
                    return Err(ParseError("unterminated char literal".to_owned()));
                }
                tokens.push((Token::Char(ch), start, self.here()));
                continue;
            }
            if c.is_ascii_digit() {
                let mut text = String::new();
                let mut is_float = false;
                while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    text.push(self.advance().unwrap());
                }
                if self.peek() == Some('.') && matches!(self.chars.get(self.pos + 1), Some(c) if c.is_ascii_digit()) {
                    is_float = true;
                    text.push(self.advance().unwrap());
                    while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                        text.push(self.advance().unwrap());
                    }
                }
                if is_float {
                    let value: f64 = text.parse().map_err(|_| ParseError(format!("bad float literal {text:?}")))?;
                    tokens.push((Token::Float(value), start, self.here()));
                } else {
                    let value: i64 = text.parse().map_err(|_| ParseError(format!("bad int literal {text:?}")))?;
                    tokens.push((Token::Int(value), start, self.here()));
                }
                continue;
            }
            if c.is_alphabetic() || c == '_' {
                let mut segments: Vec<String> = vec![];
                let mut current = String::new();
                loop {
                    while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
                        current.push(self.advance().unwrap());
                    }
                    if self.peek() == Some('.')
                        && matches!(self.chars.get(self.pos + 1), Some(c) if c.is_alphabetic() || *c == '_')
                    {
                        segments.push(std::mem::take(&mut current));
                        self.advance();
                        continue;
                    }
                    segments.push(current);
                    break;
                }
                let end = self.here();
                let token = match segments.as_slice() {
                    [single] if single == "module" => Token::Module,
                    [single] if single == "exposing" => Token::Exposing,
                    [single] if single == "import" => Token::Import,
                    [single] if single == "as" => Token::As,
                    [single] if single == "let" => Token::Let,
                    [single] if single == "in" => Token::In,
                    _ => Token::Name(segments),
                };
                tokens.push((token, start, end));
                continue;
            }

            return Err(ParseError(format!("unexpected character {c:?} at {start:?}")));
        }
        Ok(tokens)
    }
}

struct Parser {
    tokens: Vec<(Token, Position, Position)>,
    index: usize,
}

impl Parser {
    fn new(tokens: Vec<(Token, Position, Position)>) -> Self {
        Self { tokens, index: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(t, _, _)| t)
    }

    fn peek_start(&self) -> Option<Position> {
        self.tokens.get(self.index).map(|(_, s, _)| *s)
    }

    fn previous_end(&self) -> Position {
        self.tokens[self.index - 1].2
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.index).map(|(t, _, _)| t.clone());
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        match self.advance() {
            Some(ref t) if t == expected => Ok(()),
            other => Err(ParseError(format!("expected {expected:?}, got {other:?}"))),
        }
    }

    fn expect_name(&mut self) -> Result<Vec<String>, ParseError> {
        match self.advance() {
            Some(Token::Name(segments)) => Ok(segments),
            other => Err(ParseError(format!("expected a name, got {other:?}"))),
        }
    }

    fn parse_file(&mut self) -> Result<File, ParseError> {
        let module_start = self.peek_start().ok_or_else(|| ParseError("empty source".to_owned()))?;
        self.expect(&Token::Module)?;
        let name = self.expect_name()?;
        self.expect(&Token::Exposing)?;
        self.expect(&Token::LParen)?;
        let exposing = self.parse_exposing_list()?;
        self.expect(&Token::RParen)?;
        let module_end = self.previous_end();

        let module_definition = ModuleDefinition {
            range: Range::new(module_start, module_end),
            flavor: ModuleFlavor::Normal,
            name,
            exposing,
        };

        let mut imports = Vec::new();
        while self.peek() == Some(&Token::Import) {
            imports.push(self.parse_import()?);
        }

        let mut declarations = Vec::new();
        while self.peek().is_some() {
            declarations.push(self.parse_declaration()?);
        }

        Ok(File {
            module_definition,
            imports,
            declarations,
        })
    }

    fn parse_exposing_list(&mut self) -> Result<Exposing, ParseError> {
        if self.peek() == Some(&Token::DotDot) {
            self.advance();
            return Ok(Exposing::All);
        }
        let mut names = Vec::new();
        loop {
            let segments = self.expect_name()?;
            names.push(segments.join("."));
            if self.peek() == Some(&Token::Comma) {
                self.advance();
                continue;
            }
            break;
        }
        Ok(Exposing::Explicit(names))
    }

    fn parse_import(&mut self) -> Result<Import, ParseError> {
        let start = self.peek_start().unwrap();
        self.expect(&Token::Import)?;
        let module_name = self.expect_name()?;
        let alias = if self.peek() == Some(&Token::As) {
            self.advance();
            Some(self.expect_name()?.join("."))
        } else {
            None
        };
        let exposing = if self.peek() == Some(&Token::Exposing) {
            self.advance();
            self.expect(&Token::LParen)?;
            let list = self.parse_exposing_list()?;
            self.expect(&Token::RParen)?;
            Some(list)
        } else {
            None
        };
        let end = self.previous_end();
        Ok(Import {
            range: Range::new(start, end),
            module_name,
            alias,
            exposing,
        })
    }

    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let start = self.peek_start().unwrap();
        let name = match self.expect_name()?.as_slice() {
            [single] => single.clone(),
            other => return Err(ParseError(format!("expected an unqualified name, got {other:?}"))),
        };
        let mut arguments = Vec::new();
        while let Some(Token::Name(segments)) = self.peek() {
            if segments.len() == 1 {
                arguments.push(segments[0].clone());
                self.advance();
            } else {
                break;
            }
        }
        self.expect(&Token::Equals)?;
        let body = self.parse_expression()?;
        let end = self.previous_end();

        Ok(Declaration {
            range: Range::new(start, end),
            kind: DeclarationKind::Function(FunctionDeclaration {
                name,
                implementation: FunctionImplementation {
                    range: Range::new(start, end),
                    arguments,
                    body,
                },
            }),
        })
    }

    /// Left-to-right application of one or more atoms; a single atom
    /// parses as itself, not as a one-element `Application`.
    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        if self.peek() == Some(&Token::Let) {
            return self.parse_let();
        }

        let start = self.peek_start().ok_or_else(|| ParseError("expected an expression".to_owned()))?;
        let mut operands = vec![self.parse_atom()?];
        while self.starts_atom() {
            operands.push(self.parse_atom()?);
        }
        let end = self.previous_end();

        if operands.len() == 1 {
            Ok(operands.pop().unwrap())
        } else {
            Ok(Expression::new(Range::new(start, end), ExpressionKind::Application(operands)))
        }
    }

    fn starts_atom(&self) -> bool {
        matches!(
            self.peek(),
            Some(Token::Name(_) | Token::Int(_) | Token::Float(_) | Token::Str(_) | Token::Char(_) | Token::LParen)
        )
    }

    fn parse_let(&mut self) -> Result<Expression, ParseError> {
        let start = self.peek_start().unwrap();
        self.expect(&Token::Let)?;
        let binding_start = self.peek_start().unwrap();
        let binding_name = match self.expect_name()?.as_slice() {
            [single] => single.clone(),
            other => return Err(ParseError(format!("expected an unqualified name, got {other:?}"))),
        };
        self.expect(&Token::Equals)?;
        let binding_body = self.parse_expression()?;
        let binding_end = self.previous_end();
        self.expect(&Token::In)?;
        let body = self.parse_expression()?;
        let end = self.previous_end();

        Ok(Expression::new(
            Range::new(start, end),
            ExpressionKind::Let {
                bindings: vec![LetBinding::Function(LetFunction {
                    range: Range::new(binding_start, binding_end),
                    name: binding_name,
                    arguments: vec![],
                    body: binding_body,
                })],
                body,
            },
        ))
    }

    fn parse_atom(&mut self) -> Result<Expression, ParseError> {
        let start = self.peek_start().ok_or_else(|| ParseError("expected an expression".to_owned()))?;
        match self.advance() {
            Some(Token::Int(value)) => Ok(Expression::new(Range::new(start, self.previous_end()), ExpressionKind::Integer(value))),
            Some(Token::Float(value)) => Ok(Expression::new(Range::new(start, self.previous_end()), ExpressionKind::Float(value))),
            Some(Token::Str(text)) => Ok(Expression::new(Range::new(start, self.previous_end()), ExpressionKind::StringLiteral(text))),
            Some(Token::Char(c)) => Ok(Expression::new(Range::new(start, self.previous_end()), ExpressionKind::Character(c))),
            Some(Token::Name(segments)) if segments == ["()"] => {
                Ok(Expression::new(Range::new(start, self.previous_end()), ExpressionKind::Unit))
            }
            Some(Token::Name(mut segments)) => {
                let name = segments.pop().unwrap();
                Ok(Expression::new(
                    Range::new(start, self.previous_end()),
                    ExpressionKind::FunctionOrValue(segments, name),
                ))
            }
            Some(Token::LParen) => {
                let inner = self.parse_expression()?;
                self.expect(&Token::RParen)?;
                Ok(Expression::new(
                    Range::new(start, self.previous_end()),
                    ExpressionKind::Parenthesized(inner),
                ))
            }
            other => Err(ParseError(format!("expected an expression, got {other:?}"))),
        }
    }
}
