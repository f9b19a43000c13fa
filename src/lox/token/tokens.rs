//! Data types representing tokens available in the Lox language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::lox::types::{Identifier, LoxLiteral, Span};
use crate::lox::util::map;

/// Keywords in the Lox language.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Keyword {
    // Constants
    /// `"nil"`
    Nil,
    /// `"false"`
    False,
    /// `"true"`
    True,

    // Logical Operators
    /// `"and"`
    And,
    /// `"or"`
    Or,

    // Control flow
    /// `"if"`
    If,
    /// `"else"`
    Else,
    /// `"for"`
    For,
    /// `"while"`
    While,
    /// `"return"`
    Return,

    // Declarations
    /// `"class"`
    Class,
    /// `"fun"`
    Fun,
    /// `"var"`
    Var,

    // Others
    /// `"print"`
    Print,
    /// `"super"`
    Super,
    /// `"this"`
    This,
}

impl Keyword {
    /// Extract the raw representation as it occurs in the source code.
    #[must_use]
    pub fn to_raw(self) -> &'static str {
        match self {
            Keyword::Nil => "nil",
            Keyword::False => "false",
            Keyword::True => "true",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Return => "return",
            Keyword::Class => "class",
            Keyword::Fun => "fun",
            Keyword::Var => "var",
            Keyword::Print => "print",
            Keyword::Super => "super",
            Keyword::This => "this",
        }
    }
}

/// Lookup table for keywords to distinguish them from identifiers.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    map! {
        "nil"    => Keyword::Nil,
        "false"  => Keyword::False,
        "true"   => Keyword::True,

        "and"    => Keyword::And,
        "or"     => Keyword::Or,

        "if"     => Keyword::If,
        "else"   => Keyword::Else,
        "for"    => Keyword::For,
        "while"  => Keyword::While,
        "return" => Keyword::Return,

        "class"  => Keyword::Class,
        "fun"    => Keyword::Fun,
        "var"    => Keyword::Var,

        "print"  => Keyword::Print,
        "super"  => Keyword::Super,
        "this"   => Keyword::This,
    }
});

/// An enum covering all possible variations a token can take on.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Grouping
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,
    /// `"{"`
    LeftBrace,
    /// `"}"`
    RightBrace,

    // Arith Operators
    /// `"+"`
    Plus,
    /// `"-"`
    Minus,
    /// `"/"`
    Slash,
    /// `"*"`
    Star,

    // Boolean Operators
    /// `"=="`
    DoubleEquals,
    /// `"!="`
    NotEquals,
    /// `">"`
    GreaterThan,
    /// `">="`
    GreaterThanEqual,
    /// `"<"`
    LessThan,
    /// `"<="`
    LessThanEqual,
    /// `"!"`
    Not,

    // Special Operators
    /// `","`
    Comma,
    /// `"."`
    Dot,
    /// `";"`
    Semi,
    /// `"="`
    Assign,

    // Literals
    /// A literal in the source code.
    Literal(LoxLiteral),

    // Identifiers and Keywords
    /// A custom identifier
    Identifier(Identifier),
    /// A specific keyword
    Keyword(Keyword),

    /// End of Input, either end of line in REPL mode, or End of File in normal mode.
    EndOfInput,
}

impl TokenType {
    /// The parsed literal value carried by this token type, if any.
    /// Pure punctuation, keywords and identifiers carry none.
    #[must_use]
    pub fn literal(&self) -> Option<&LoxLiteral> {
        if let TokenType::Literal(ref literal) = *self {
            Some(literal)
        } else {
            None
        }
    }
}

/// A token as produced by the lexer: its type, the verbatim lexeme it
/// was recognized from, and the span it takes up in source code.
///
/// The lexeme is always the exact substring of the source that this token
/// spans. It is non-empty for every token except [`TokenType::EndOfInput`],
/// whose lexeme is the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Type of this token.
    pub token_type: TokenType,
    /// The exact source text this token was recognized from.
    pub lexeme: String,
    /// Span the token takes up in source code.
    pub span: Span,
}

impl Token {
    /// The line on which this token's lexeme began, 1-based.
    #[must_use]
    pub fn line(&self) -> usize {
        self.span.start.line
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "<{} @ {}>", self.lexeme, self.span)
    }
}
