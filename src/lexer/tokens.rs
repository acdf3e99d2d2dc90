use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Position;

lazy_static! {
    /// Every word the lexer treats as reserved, lowercase.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = [
        "and", "or", "xor", "not", "task", "struct", "int", "byte", "short", "long", "float",
        "string", "bool", "object", "char", "class", "if", "else", "while", "return", "do",
        "input", "output", "runtime", "parameter_meta", "command", "then", "array", "file",
        "true", "false", "boolean", "workflow", "call", "import", "as", "map", "in", "scatter",
        "pair", "default", "var", "const", "switch", "case", "break", "continue", "throw",
        "catch", "finally", "try", "using", "namespace", "static", "virtual", "readonly", "new",
        "public", "private", "protected", "internal", "override", "abstract", "sealed", "async",
        "await", "get", "set", "this", "void",
    ]
    .into_iter()
    .collect();

    /// Reserved words that name a type rather than a keyword.
    pub static ref TYPE_WORDS: HashSet<&'static str> = [
        "int", "float", "string", "bool", "char", "struct", "task", "class", "array", "file",
        "input", "output", "boolean", "workflow", "byte", "short", "long", "object", "map",
        "pair",
    ]
    .into_iter()
    .collect();

    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::BoolLiteral);
        map.insert("false", TokenKind::BoolLiteral);
        map.insert("as", TokenKind::As);
        map.insert("default", TokenKind::Default);
        map.insert("xor", TokenKind::Xor);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("do", TokenKind::Do);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map.insert("call", TokenKind::Call);
        map.insert("import", TokenKind::Import);
        map.insert("in", TokenKind::In);
        map.insert("scatter", TokenKind::Scatter);
        map.insert("const", TokenKind::Const);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("throw", TokenKind::Throw);
        map.insert("catch", TokenKind::Catch);
        map.insert("finally", TokenKind::Finally);
        map.insert("try", TokenKind::Try);
        map.insert("var", TokenKind::Var);
        map.insert("using", TokenKind::Using);
        map.insert("namespace", TokenKind::Namespace);
        map.insert("static", TokenKind::Static);
        map.insert("virtual", TokenKind::Virtual);
        map.insert("readonly", TokenKind::Readonly);
        map.insert("new", TokenKind::New);
        map.insert("public", TokenKind::Public);
        map.insert("private", TokenKind::Private);
        map.insert("protected", TokenKind::Protected);
        map.insert("internal", TokenKind::Internal);
        map.insert("override", TokenKind::Override);
        map.insert("abstract", TokenKind::Abstract);
        map.insert("sealed", TokenKind::Sealed);
        map.insert("async", TokenKind::Async);
        map.insert("await", TokenKind::Await);
        map.insert("get", TokenKind::Get);
        map.insert("set", TokenKind::Set);
        map.insert("this", TokenKind::This);
        map.insert("void", TokenKind::Void);
        map
    };
}

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word.to_ascii_lowercase().as_str())
}

pub fn is_type_word(word: &str) -> bool {
    TYPE_WORDS.contains(word.to_ascii_lowercase().as_str())
}

/// Resolves an identifier lexeme to the kind it should be reported as.
///
/// Matching is case-insensitive. Returns `None` for words that are not
/// reserved. Reserved words without a dedicated kind (`and`, `runtime`, ...)
/// resolve to `Ident`. Type words win over keywords, so `class` and `struct`
/// are reported as `Type`.
pub fn lookup_reserved(word: &str) -> Option<TokenKind> {
    let lower = word.to_ascii_lowercase();
    let lower = lower.as_str();

    if !RESERVED_WORDS.contains(lower) {
        return None;
    }

    if TYPE_WORDS.contains(lower) {
        return Some(TokenKind::Type);
    }

    Some(KEYWORD_LOOKUP.get(lower).copied().unwrap_or(TokenKind::Ident))
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,

    Semicolon,
    LParen,
    RParen,
    LCurly,
    RCurly,
    LSquare,
    RSquare,
    Hash,
    Colon,
    Comma,
    Dot,
    Question,

    Type,
    Ident,
    DocComment,

    StringLiteral,
    NumLiteral,
    BoolLiteral,

    Assign,   // =
    Equality, // ==
    Arrow,    // =>

    LessThan,
    LessOrEqual,
    LShift,       // <<
    LShiftAssign, // <<<
    GreaterThan,
    GreaterOrEqual,
    RShift,       // >>
    RShiftAssign, // >>>

    Ampersand,
    LogicalAnd,
    Pipe,
    LogicalOr,
    Xor,

    Plus,
    Increment,
    PlusAssign,
    Minus,
    Decrement,
    MinusAssign,
    Star,
    FSlash,
    Modulo,

    Not, // !
    Neq, // !=

    // Reserved
    If,
    Do,
    While,
    Return,
    Else,
    Call,
    Import,
    As,
    In,
    Scatter,
    Default,
    Switch,
    Case,
    Break,
    Continue,
    Throw,
    Catch,
    Finally,
    Try,
    Var,
    Const,
    Using,
    Namespace,
    Static,
    Void,
    Virtual,
    Readonly,
    Override,
    New,
    Public,
    Private,
    Protected,
    Internal,
    Abstract,
    Sealed,
    Async,
    Await,
    Get,
    Set,
    This,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Value carried by a `NumLiteral` token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLiteral {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub literal: Option<NumericLiteral>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token(kind={}, lexeme={:?}, line={}, column={}",
            self.kind, self.lexeme, self.line, self.column
        )?;

        match self.literal {
            Some(NumericLiteral::Int(value)) => write!(f, ", int_val={})", value),
            Some(NumericLiteral::Float(value)) => write!(f, ", float_val={})", value),
            None => write!(f, ")"),
        }
    }
}

impl Token {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn int_value(&self) -> Option<i64> {
        match self.literal {
            Some(NumericLiteral::Int(value)) => Some(value),
            _ => None,
        }
    }

    pub fn float_value(&self) -> Option<f64> {
        match self.literal {
            Some(NumericLiteral::Float(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
