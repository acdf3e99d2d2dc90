use log::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{lookup_reserved, NumericLiteral, Token, TokenKind};

pub(crate) const EOF_CHAR: char = '\0';

/// Hand-written scanner over a padded copy of the source.
///
/// The source is stored with one space before and after it so the cursor can
/// always look one character ahead. Every routine moves the cursor through
/// [`Lexer::advance`] only, and positions handed out are relative to the
/// unpadded text.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    position: isize,
    current: char,
    lookahead: char,
    line: usize,
    column: isize,
}

impl Lexer {
    pub fn new(source: &str) -> Result<Lexer, Error> {
        if source.chars().all(is_whitespace) {
            return Err(Error::new(ErrorImpl::EmptyInput, Position::null()));
        }

        let mut padded = Vec::with_capacity(source.len() + 2);
        padded.push(' ');
        padded.extend(source.chars());
        padded.push(' ');

        let mut lexer = Lexer {
            source: padded,
            position: -1,
            current: EOF_CHAR,
            lookahead: EOF_CHAR,
            line: 1,
            column: -1,
        };

        // Step onto the leading pad so the first real character lands on column 1.
        lexer.advance();

        debug!("created lexer over {} characters", lexer.source.len() - 2);

        Ok(lexer)
    }

    /// Current cursor position in the unpadded text.
    pub fn cursor_position(&self) -> Position {
        Position::new(self.line, self.column.max(0) as usize)
    }

    pub fn current_char(&self) -> char {
        self.current
    }

    pub fn peek(&self) -> char {
        self.lookahead
    }

    fn char_at(&self, index: isize) -> char {
        if index < 0 {
            return EOF_CHAR;
        }

        self.source.get(index as usize).copied().unwrap_or(EOF_CHAR)
    }

    fn advance(&mut self) {
        let next = self.position + 1;

        if next as usize >= self.source.len() {
            self.position = self.source.len() as isize;
            self.current = EOF_CHAR;
            self.lookahead = EOF_CHAR;
            return;
        }

        self.position = next;
        self.current = self.source[next as usize];
        self.lookahead = self.char_at(next + 1);

        if self.current == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// True once the cursor sits on the trailing pad or beyond it.
    fn at_source_end(&self) -> bool {
        self.position as usize >= self.source.len() - 1
    }

    fn next_is_source_end(&self) -> bool {
        self.position + 1 >= self.source.len() as isize - 1
    }

    fn slice(&self, from: isize, to: isize) -> String {
        self.source[from as usize..to as usize].iter().collect()
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            self.advance();
            self.skip_whitespace();

            let start = self.cursor_position();
            let c = self.current;

            let token = match c {
                EOF_CHAR if !self.at_source_end() => {
                    warn!("NUL character in source at {}", start);
                    MK_TOKEN!(TokenKind::Error, c, start)
                }
                EOF_CHAR => MK_TOKEN!(TokenKind::EOF, "", start),
                ';' => MK_TOKEN!(TokenKind::Semicolon, c, start),
                '(' => MK_TOKEN!(TokenKind::LParen, c, start),
                ')' => MK_TOKEN!(TokenKind::RParen, c, start),
                '{' => MK_TOKEN!(TokenKind::LCurly, c, start),
                '}' => MK_TOKEN!(TokenKind::RCurly, c, start),
                '[' => MK_TOKEN!(TokenKind::LSquare, c, start),
                ']' => MK_TOKEN!(TokenKind::RSquare, c, start),
                '#' => MK_TOKEN!(TokenKind::Hash, c, start),
                '*' => MK_TOKEN!(TokenKind::Star, c, start),
                '?' => MK_TOKEN!(TokenKind::Question, c, start),
                '^' => MK_TOKEN!(TokenKind::Xor, c, start),
                ':' => MK_TOKEN!(TokenKind::Colon, c, start),
                ',' => MK_TOKEN!(TokenKind::Comma, c, start),
                '%' => MK_TOKEN!(TokenKind::Modulo, c, start),
                '.' => MK_TOKEN!(TokenKind::Dot, c, start),
                '"' | '\'' => self.make_string(start)?,
                '=' => match self.peek() {
                    '=' => self.make_operator("==", TokenKind::Equality, start),
                    '>' => self.make_operator("=>", TokenKind::Arrow, start),
                    _ => MK_TOKEN!(TokenKind::Assign, c, start),
                },
                '<' => match (self.peek(), self.char_at(self.position + 2)) {
                    ('=', _) => self.make_operator("<=", TokenKind::LessOrEqual, start),
                    ('<', '<') => self.make_operator("<<<", TokenKind::LShiftAssign, start),
                    ('<', _) => self.make_operator("<<", TokenKind::LShift, start),
                    _ => MK_TOKEN!(TokenKind::LessThan, c, start),
                },
                '>' => match (self.peek(), self.char_at(self.position + 2)) {
                    ('=', _) => self.make_operator(">=", TokenKind::GreaterOrEqual, start),
                    ('>', '>') => self.make_operator(">>>", TokenKind::RShiftAssign, start),
                    ('>', _) => self.make_operator(">>", TokenKind::RShift, start),
                    _ => MK_TOKEN!(TokenKind::GreaterThan, c, start),
                },
                '&' => match self.peek() {
                    '&' => self.make_operator("&&", TokenKind::LogicalAnd, start),
                    _ => MK_TOKEN!(TokenKind::Ampersand, c, start),
                },
                '|' => match self.peek() {
                    '|' => self.make_operator("||", TokenKind::LogicalOr, start),
                    _ => MK_TOKEN!(TokenKind::Pipe, c, start),
                },
                '+' => match self.peek() {
                    '+' => self.make_operator("++", TokenKind::Increment, start),
                    '=' => self.make_operator("+=", TokenKind::PlusAssign, start),
                    _ => MK_TOKEN!(TokenKind::Plus, c, start),
                },
                '-' => match self.peek() {
                    '-' => self.make_operator("--", TokenKind::Decrement, start),
                    '=' => self.make_operator("-=", TokenKind::MinusAssign, start),
                    _ => MK_TOKEN!(TokenKind::Minus, c, start),
                },
                '!' => match self.peek() {
                    '=' => self.make_operator("!=", TokenKind::Neq, start),
                    _ => MK_TOKEN!(TokenKind::Not, c, start),
                },
                '/' => match (self.peek(), self.char_at(self.position + 2)) {
                    ('/', '/') => self.make_doc_comment(start),
                    ('/', _) => {
                        self.skip_line_comment();
                        continue;
                    }
                    ('*', _) => {
                        self.skip_block_comment(start)?;
                        continue;
                    }
                    _ => MK_TOKEN!(TokenKind::FSlash, c, start),
                },
                c if c.is_ascii_alphabetic() || c == '_' => self.make_identifier(start),
                c if c.is_ascii_digit() => self.make_number(start)?,
                _ => {
                    warn!("unrecognized character {:?} at {}", c, start);
                    MK_TOKEN!(TokenKind::Error, c, start)
                }
            };

            trace!("{}", token);
            return Ok(token);
        }
    }

    fn skip_whitespace(&mut self) {
        while is_whitespace(self.current) {
            self.advance();
        }
    }

    /// Leaves the cursor on the terminating newline, which the next advance consumes.
    fn skip_line_comment(&mut self) {
        while !self.at_source_end() && self.current != '\n' {
            self.advance();
        }
        trace!("skipped line comment ending on line {}", self.line);
    }

    /// Leaves the cursor on the closing `/` of the first `*/`.
    fn skip_block_comment(&mut self, start: Position) -> Result<(), Error> {
        // Step over the opening `*` so `/*/` does not close itself.
        self.advance();

        loop {
            self.advance();

            if self.at_source_end() {
                return Err(Error::new(ErrorImpl::UnterminatedComment, start));
            }

            if self.current == '*' && self.peek() == '/' {
                self.advance();
                trace!("skipped block comment starting at {}", start);
                return Ok(());
            }
        }
    }

    fn make_operator(&mut self, lexeme: &str, kind: TokenKind, start: Position) -> Token {
        for _ in 1..lexeme.len() {
            self.advance();
        }

        MK_TOKEN!(kind, lexeme, start)
    }

    fn make_doc_comment(&mut self, start: Position) -> Token {
        let start_index = self.position;

        while self.peek() != '\n' && !self.next_is_source_end() {
            self.advance();
        }

        let mut lexeme = self.slice(start_index, self.position + 1);
        if lexeme.ends_with('\r') {
            lexeme.pop();
        }

        MK_TOKEN!(TokenKind::DocComment, lexeme, start)
    }

    fn make_identifier(&mut self, start: Position) -> Token {
        let start_index = self.position;

        while (self.current.is_ascii_alphanumeric() || self.current == '_')
            && is_identifier_continue(self.peek())
        {
            self.advance();
        }

        let lexeme = self.slice(start_index, self.position + 1);
        let kind = lookup_reserved(&lexeme).unwrap_or(TokenKind::Ident);

        MK_TOKEN!(kind, lexeme, start)
    }

    fn make_number(&mut self, start: Position) -> Result<Token, Error> {
        let start_index = self.position;

        while is_number_continue(self.peek()) {
            self.advance();
        }

        let literal = self.slice(start_index, self.position + 1);
        let decimal_points = literal.matches('.').count();

        if decimal_points > 1 {
            return Err(Error::new(
                ErrorImpl::InvalidNumberFormat { literal },
                start,
            ));
        }

        let digits: String = literal.chars().filter(|c| *c != '_').collect();
        let parse_error = || {
            Error::new(
                ErrorImpl::NumberParseError {
                    literal: literal.clone(),
                },
                start,
            )
        };

        let value = if decimal_points == 1 {
            let value = digits.parse::<f64>().map_err(|_| parse_error())?;
            if !value.is_finite() {
                return Err(parse_error());
            }
            NumericLiteral::Float(value)
        } else {
            NumericLiteral::Int(digits.parse::<i64>().map_err(|_| parse_error())?)
        };

        let mut token = MK_TOKEN!(TokenKind::NumLiteral, literal.clone(), start);
        token.literal = Some(value);

        Ok(token)
    }

    /// Leaves the cursor on the closing quote.
    fn make_string(&mut self, start: Position) -> Result<Token, Error> {
        let quote = self.current;
        self.advance();

        let start_index = self.position;

        while self.current != quote {
            if self.at_source_end() {
                return Err(Error::new(ErrorImpl::UnterminatedString { quote }, start));
            }
            self.advance();
        }

        let lexeme = self.slice(start_index, self.position);

        Ok(MK_TOKEN!(TokenKind::StringLiteral, lexeme, start))
    }
}

/// ASCII whitespace plus vertical tab, which `is_ascii_whitespace` leaves out.
fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '?'
}

fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || c == '_' || c == '.'
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

/// Lexes a whole source text, ending with an `EOF` token.
///
/// Unrecognized characters are turned into an `UnrecognizedCharacter` error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source)?;
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;

        match token.kind {
            TokenKind::Error => {
                let character = token.lexeme.chars().next().unwrap_or(EOF_CHAR);
                return Err(Error::new(
                    ErrorImpl::UnrecognizedCharacter { character },
                    token.position(),
                ));
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
