//! Encapsulates all behaviour necessary to properly lex Lox code.
//!
//! Note: Lexing is also commonly categorized as tokenizing. The term "lexing"
//! is used for the module in accordance with the Crafting Interpreters book,
//! yet the function (represented by the Scanner class in the book) is simply
//! named [tokenize].
//!
//! Lexing never aborts: unrecognized input is reported through the error list
//! of the returned [`LexOutput`] while scanning continues with the next
//! character, so a parser downstream always receives a complete stream that
//! ends in exactly one [`TokenType::EndOfInput`] token.
#![allow(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::lox::token::tokens::{Token, TokenType, KEYWORDS};
use crate::lox::types::{Identifier, Location, LoxLiteral, Span};

/// Errors that can happen during lexing.
#[derive(Debug, Clone, PartialEq)]
pub enum LexingError {
    /// Unknown symbol in the source code
    UnknownSymbol(char, Span),
    /// A string was started but not terminated until the end of input/file
    UnterminatedString(Span),
    /// A comment was started but not terminated until the end of input/file
    UnterminatedComment(Span),
}

impl LexingError {
    /// The span of source code this error points at.
    #[must_use]
    pub fn span(&self) -> Span {
        match *self {
            LexingError::UnknownSymbol(_, span)
            | LexingError::UnterminatedString(span)
            | LexingError::UnterminatedComment(span) => span,
        }
    }

    /// The line on which the offending input was read, 1-based.
    #[must_use]
    pub fn line(&self) -> usize {
        self.span().start.line
    }
}

impl Display for LexingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let message = match *self {
            LexingError::UnknownSymbol(_, _) => "Unexpected character.",
            LexingError::UnterminatedString(_) => "Unterminated string.",
            LexingError::UnterminatedComment(_) => "Unterminated comment.",
        };
        write!(f, "[line {}] Error: {message}", self.line())
    }
}

/// Everything one pass of the lexer produces: the token stream, and all
/// errors that were reported along the way.
///
/// The two are deliberately side by side instead of an `Err` variant
/// swallowing the tokens - a bad character drops only itself from the
/// stream, and the rest of the source is still fully tokenized.
#[derive(Debug, PartialEq)]
pub struct LexOutput {
    /// The scanned tokens, in source order, ending in
    /// exactly one [`TokenType::EndOfInput`] token.
    pub tokens: Vec<Token>,
    /// All errors reported while scanning, in source order.
    pub errors: Vec<LexingError>,
}

/// Tokenizes the given source code of Lox into a [`LexOutput`] holding both
/// the complete token stream and any [`LexingErrors`](LexingError) that
/// occurred. This function is total: it never fails, and the returned stream
/// is always terminated by a single end-of-input token, making it safe to
/// hand to a parser even when errors were reported.
#[must_use]
pub fn tokenize<S: AsRef<str>>(source: S) -> LexOutput {
    Scanner::new(source.as_ref()).run()
}

/// The scanning state threaded through one pass over one source buffer.
///
/// `start` and `current` are byte offsets into the source. `start` points at
/// the first character of the lexeme currently being recognized, `current` at
/// the next unread character, with `start <= current <= source.len()` at all
/// times. Each scanned token's lexeme is the verbatim slice
/// `source[start..current]` at the moment the token is emitted.
///
/// One Scanner services exactly one [run](Scanner::run); it is never reused,
/// so no state leaks between scans of different buffers.
struct Scanner<'src> {
    /// The source buffer, immutable for the lifetime of the scan.
    source: &'src str,
    /// Byte offset of the first character of the current lexeme.
    start: usize,
    /// Byte offset of the next unread character.
    current: usize,
    /// Line `current` is on, 1-based. Bumped once per `'\n'` consumed.
    line: usize,
    /// Column `current` is on, 0-based. Reset by every `'\n'` consumed.
    col: usize,
    /// Location of `start`, captured when the current lexeme began.
    start_loc: Location,
    /// The accumulated output stream.
    tokens: Vec<Token>,
    /// All errors reported so far.
    errors: Vec<LexingError>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the very beginning of the source.
    fn new(source: &'src str) -> Self {
        let start_loc = Location { line: 1, col: 0 };
        Scanner {
            source,
            start: 0,
            current: 0,
            line: 1,
            col: 0,
            start_loc,
            tokens: vec![],
            errors: vec![],
        }
    }

    /// Scans the entire buffer, lexeme by lexeme, then appends the
    /// end-of-input token. Consumes the scanner: its cursors are
    /// meaningless once the buffer is exhausted.
    fn run(mut self) -> LexOutput {
        while !self.is_at_end() {
            // We are at the beginning of the next lexeme.
            self.start = self.current;
            self.start_loc = self.location();
            self.scan_token();
        }

        self.start = self.current;
        self.start_loc = self.location();
        self.push_token(TokenType::EndOfInput);
        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Recognizes one lexeme, emitting at most one token.
    ///
    /// Whitespace and comments emit nothing and unknown characters are
    /// reported instead, but every call consumes at least one character,
    /// so the scan as a whole always makes progress.
    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            // Only reachable if called at the end of input, which run() never does.
            return;
        };
        match c {
            // Grouping
            '(' => self.push_token(TokenType::LeftParen),
            ')' => self.push_token(TokenType::RightParen),
            '{' => self.push_token(TokenType::LeftBrace),
            '}' => self.push_token(TokenType::RightBrace),

            // Operators that are always a single character
            '+' => self.push_token(TokenType::Plus),
            '-' => self.push_token(TokenType::Minus),
            '*' => self.push_token(TokenType::Star),
            ',' => self.push_token(TokenType::Comma),
            '.' => self.push_token(TokenType::Dot),
            ';' => self.push_token(TokenType::Semi),

            // Operators that may extend by one '=' character. The lookahead
            // is consumed on a match and left alone otherwise; once consumed
            // it is part of this lexeme for good, there is no backtracking.
            '!' => {
                let token_type = if self.advance_matches('=') {
                    TokenType::NotEquals
                } else {
                    TokenType::Not
                };
                self.push_token(token_type);
            }
            '=' => {
                let token_type = if self.advance_matches('=') {
                    TokenType::DoubleEquals
                } else {
                    TokenType::Assign
                };
                self.push_token(token_type);
            }
            '<' => {
                let token_type = if self.advance_matches('=') {
                    TokenType::LessThanEqual
                } else {
                    TokenType::LessThan
                };
                self.push_token(token_type);
            }
            '>' => {
                let token_type = if self.advance_matches('=') {
                    TokenType::GreaterThanEqual
                } else {
                    TokenType::GreaterThan
                };
                self.push_token(token_type);
            }

            // Slash doubles as the start of both comment forms.
            '/' => {
                if self.advance_matches('/') {
                    // A line comment runs up to, but not including, the
                    // newline, which the next lexeme consumes as whitespace.
                    while self.advance_if(|c| c != '\n').is_some() {}
                } else if self.advance_matches('*') {
                    self.block_comment();
                } else {
                    self.push_token(TokenType::Slash);
                }
            }

            // Whitespace produces no token. advance() already bumped the
            // line counter for '\n'.
            ' ' | '\t' | '\r' | '\n' => {}

            // Literals, identifiers, keywords
            '"' => self.string(),
            c if is_digit(c) => self.number(),
            c if is_alpha(c) => self.identifier(),

            // ERROR
            _ => self.report(LexingError::UnknownSymbol(c, self.span())),
        }
    }

    /// Consumes a block comment whose `/*` has already been consumed.
    /// Block comments nest, so a depth is tracked instead of simply
    /// looking for the first `*/`.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "nesting is at least 1 on decrement, and an overflowing increment needs a 2^64-deep comment first."
    )]
    fn block_comment(&mut self) {
        let mut nesting = 1usize;
        while nesting > 0 {
            match self.advance() {
                None => {
                    self.report(LexingError::UnterminatedComment(self.span()));
                    return;
                }
                Some('/') if self.advance_matches('*') => nesting += 1,
                Some('*') if self.advance_matches('/') => nesting -= 1,
                Some(_) => {}
            }
        }
    }

    /// Consumes a string literal whose opening quote has already been
    /// consumed. Strings know no escape sequences and may span multiple
    /// lines; the literal value is the lexeme without its quotes.
    #[expect(
        clippy::string_slice,
        reason = "start/current always sit on character boundaries, and the quotes are one byte each."
    )]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "the lexeme contains both quotes here, so its length is at least 2."
    )]
    fn string(&mut self) {
        while self.advance_if(|c| c != '"').is_some() {}

        if self.advance_matches('"') {
            let raw = self.lexeme();
            let value = raw[1..raw.len() - 1].to_owned();
            self.push_token(TokenType::Literal(LoxLiteral::String {
                value,
                raw: raw.to_owned(),
            }));
        } else {
            self.report(LexingError::UnterminatedString(self.span()));
        }
    }

    /// Consumes a number literal whose first digit has already been consumed.
    /// A fractional part is only consumed when the dot is followed by another
    /// digit, so `123.` lexes as a number and then a dot.
    fn number(&mut self) {
        while self.advance_if(is_digit).is_some() {}

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            let _: bool = self.advance_matches('.');
            while self.advance_if(is_digit).is_some() {}
        }

        let raw = self.lexeme().to_owned();
        let value =
            f64::from_str(&raw).expect("only digits and at most one interior dot were consumed");
        self.push_token(TokenType::Literal(LoxLiteral::Number { value, raw }));
    }

    /// Consumes an identifier whose first character has already been
    /// consumed, then decides via the keyword table whether it actually
    /// is a keyword.
    fn identifier(&mut self) {
        while self.advance_if(is_alpha_num).is_some() {}

        match KEYWORDS.get(self.lexeme()) {
            Some(keyword) => self.push_token(TokenType::Keyword(*keyword)),
            None => self.push_token(TokenType::Identifier(Identifier(self.lexeme().to_owned()))),
        }
    }

    /// Have all characters of the source been consumed?
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// The position `current` is at.
    fn location(&self) -> Location {
        Location {
            line: self.line,
            col: self.col,
        }
    }

    /// The span from the start of the current lexeme up to `current`.
    fn span(&self) -> Span {
        Span::from(self.start_loc, self.location())
    }

    /// The still unread remainder of the source.
    #[expect(
        clippy::string_slice,
        reason = "current only ever moves by the width of the character that was just read."
    )]
    fn rest(&self) -> &'src str {
        &self.source[self.current..]
    }

    /// The verbatim source text of the lexeme recognized so far.
    #[expect(
        clippy::string_slice,
        reason = "start and current both sit on character boundaries."
    )]
    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    /// Looks at the next unread character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Looks at the character one beyond the next without consuming anything.
    fn peek_next(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Reads and consumes one character, updating line and column.
    /// Returns [None] at the end of input, consuming nothing.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "if these ever overflow, you got bigger problems (also usize overflows safely)."
    )]
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Consumes the next character only if it satisfies the predicate.
    fn advance_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => self.advance(),
            _ => None,
        }
    }

    /// The conditional advance() of the book: consumes the next character
    /// if and only if it is exactly the expected one.
    fn advance_matches(&mut self, expected: char) -> bool {
        self.advance_if(|c| c == expected).is_some()
    }

    /// Appends a token of the given type, spanning the current lexeme.
    fn push_token(&mut self, token_type: TokenType) {
        self.tokens.push(Token {
            token_type,
            lexeme: self.lexeme().to_owned(),
            span: self.span(),
        });
    }

    /// Records an error; scanning continues with the next character.
    fn report(&mut self, error: LexingError) {
        self.errors.push(error);
    }
}

/// Is the character an ASCII digit?
#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Is the character in the ASCII alphabet?
#[inline]
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || (c == '_')
}

/// Is the character an alphanumeric ASCII character?
#[inline]
fn is_alpha_num(c: char) -> bool {
    c.is_ascii_alphanumeric() || (c == '_')
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{tokenize, LexOutput, LexingError};
    use crate::lox::token::tokens::Keyword::*;
    use crate::lox::token::tokens::TokenType::{self, *};
    use crate::lox::types::LoxLiteral::{Number, String as StringLit};
    use crate::lox::types::{Identifier, Location, Span};

    fn token_types(source: impl AsRef<str>) -> Vec<TokenType> {
        let LexOutput { tokens, errors } = tokenize(source);
        assert_eq!(errors, vec![], "expected a clean scan");
        tokens.into_iter().map(|token| token.token_type).collect()
    }

    fn string_literal(value: &str, raw: &str) -> TokenType {
        Literal(StringLit {
            value: value.to_owned(),
            raw: raw.to_owned(),
        })
    }

    fn number_literal(value: f64, raw: &str) -> TokenType {
        Literal(Number {
            value,
            raw: raw.to_owned(),
        })
    }

    #[test]
    fn empty_input_yields_only_end_of_input() {
        let LexOutput { tokens, errors } = tokenize("");
        assert_eq!(errors, vec![]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, EndOfInput);
        assert_eq!(tokens[0].lexeme, "");
        assert_eq!(tokens[0].line(), 1);
    }

    #[test]
    fn punctuation_run() {
        let source = "(){},.;*";
        let LexOutput { tokens, errors } = tokenize(source);
        assert_eq!(errors, vec![]);
        assert_eq!(
            tokens
                .iter()
                .map(|token| token.token_type.clone())
                .collect::<Vec<_>>(),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Semi, Star, EndOfInput
            ]
        );
        let lexemes = tokens
            .iter()
            .map(|token| token.lexeme.as_str())
            .collect::<Vec<_>>();
        assert_eq!(lexemes, vec!["(", ")", "{", "}", ",", ".", ";", "*", ""]);
    }

    #[test]
    fn two_char_operators_are_greedy() {
        assert_eq!(token_types("!="), vec![NotEquals, EndOfInput]);
        assert_eq!(token_types("=="), vec![DoubleEquals, EndOfInput]);
        assert_eq!(token_types("<="), vec![LessThanEqual, EndOfInput]);
        assert_eq!(token_types(">="), vec![GreaterThanEqual, EndOfInput]);
    }

    #[test]
    fn wide_operator_then_narrow_remainder() {
        // Maximal munch: the first two '=' pair up, the third stands alone.
        assert_eq!(token_types("==="), vec![DoubleEquals, Assign, EndOfInput]);
        assert_eq!(token_types("!=="), vec![NotEquals, Assign, EndOfInput]);
    }

    #[test]
    fn narrow_fallback_on_lookahead_mismatch() {
        assert_eq!(token_types("!*"), vec![Not, Star, EndOfInput]);
        assert_eq!(token_types("<"), vec![LessThan, EndOfInput]);
        assert_eq!(token_types(">"), vec![GreaterThan, EndOfInput]);
        assert_eq!(token_types("="), vec![Assign, EndOfInput]);
    }

    #[test]
    fn unknown_character_does_not_suppress_earlier_token() {
        let LexOutput { tokens, errors } = tokenize("!@");
        assert_eq!(
            tokens
                .into_iter()
                .map(|token| token.token_type)
                .collect::<Vec<_>>(),
            vec![Not, EndOfInput]
        );
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexingError::UnknownSymbol('@', _)));
        assert_eq!(errors[0].line(), 1);
    }

    #[test]
    fn unknown_characters_are_not_fatal() {
        let LexOutput { tokens, errors } = tokenize("(@)");
        assert_eq!(
            tokens
                .into_iter()
                .map(|token| token.token_type)
                .collect::<Vec<_>>(),
            vec![LeftParen, RightParen, EndOfInput]
        );
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexingError::UnknownSymbol('@', _)));
    }

    #[test]
    fn whitespace_produces_no_tokens() {
        assert_eq!(token_types(" \t\r\n"), vec![EndOfInput]);
        assert_eq!(token_types("( )"), vec![LeftParen, RightParen, EndOfInput]);
    }

    #[test]
    fn newlines_bump_the_line_counter() {
        let LexOutput { tokens, errors } = tokenize("(\n)\n");
        assert_eq!(errors, vec![]);
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].line(), 2);
        assert_eq!(tokens[2].token_type, EndOfInput);
        assert_eq!(tokens[2].line(), 3);
    }

    #[test]
    fn simple_tokenizations() {
        assert_eq!(
            token_types("var foo = 20"),
            vec![
                Keyword(Var),
                TokenType::Identifier(Identifier("foo".to_owned())),
                Assign,
                number_literal(20.0, "20"),
                EndOfInput,
            ]
        );
    }

    #[test]
    fn keywords_and_identifiers_are_distinguished() {
        assert_eq!(
            token_types("class classy and android"),
            vec![
                Keyword(Class),
                TokenType::Identifier(Identifier("classy".to_owned())),
                Keyword(And),
                TokenType::Identifier(Identifier("android".to_owned())),
                EndOfInput,
            ]
        );
    }

    #[test]
    fn fractional_numbers() {
        assert_eq!(
            token_types("12.5"),
            vec![number_literal(12.5, "12.5"), EndOfInput]
        );
        // The dot is only part of the number if a digit follows it.
        assert_eq!(
            token_types("123."),
            vec![number_literal(123.0, "123"), Dot, EndOfInput]
        );
        assert_eq!(
            token_types("123.abs"),
            vec![
                number_literal(123.0, "123"),
                Dot,
                TokenType::Identifier(Identifier("abs".to_owned())),
                EndOfInput,
            ]
        );
    }

    #[test]
    fn string_literals_keep_their_raw_form() {
        assert_eq!(
            token_types("\"foo\""),
            vec![string_literal("foo", "\"foo\""), EndOfInput]
        );
    }

    #[test]
    fn strings_may_span_lines() {
        let LexOutput { tokens, errors } = tokenize("\"a\nb\")");
        assert_eq!(errors, vec![]);
        assert_eq!(tokens[0].token_type, string_literal("a\nb", "\"a\nb\""));
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].token_type, RightParen);
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn unterminated_string_is_reported() {
        let LexOutput { tokens, errors } = tokenize("\"abc");
        assert_eq!(
            tokens
                .into_iter()
                .map(|token| token.token_type)
                .collect::<Vec<_>>(),
            vec![EndOfInput]
        );
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexingError::UnterminatedString(_)));
    }

    #[test]
    fn line_comments_run_to_end_of_line() {
        assert_eq!(token_types("// nothing here"), vec![EndOfInput]);
        let LexOutput { tokens, errors } = tokenize("// nothing here\n+");
        assert_eq!(errors, vec![]);
        assert_eq!(tokens[0].token_type, Plus);
        assert_eq!(tokens[0].line(), 2);
    }

    #[test]
    fn block_comments_nest() {
        assert_eq!(
            token_types("/* a /* b */ still a comment */+"),
            vec![Plus, EndOfInput]
        );
    }

    #[test]
    fn unterminated_block_comment_is_reported() {
        let LexOutput { tokens, errors } = tokenize("/* never closed");
        assert_eq!(
            tokens
                .into_iter()
                .map(|token| token.token_type)
                .collect::<Vec<_>>(),
            vec![EndOfInput]
        );
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LexingError::UnterminatedComment(_)));
    }

    #[test]
    fn lone_slash_is_a_token() {
        assert_eq!(token_types("/"), vec![Slash, EndOfInput]);
        assert_eq!(
            token_types("1/2"),
            vec![
                number_literal(1.0, "1"),
                Slash,
                number_literal(2.0, "2"),
                EndOfInput,
            ]
        );
    }

    #[test]
    fn lexemes_are_verbatim_source_slices() {
        let source = "var x = (1.5 >= y) != \"z\";";
        let LexOutput { tokens, errors } = tokenize(source);
        assert_eq!(errors, vec![]);
        let (end, rest) = tokens.split_last().expect("stream is never empty");
        assert_eq!(end.token_type, EndOfInput);
        assert_eq!(end.lexeme, "");
        for token in rest {
            assert!(!token.lexeme.is_empty(), "empty lexeme for {token:?}");
            assert!(
                source.contains(&token.lexeme),
                "lexeme {:?} is not a source substring",
                token.lexeme
            );
        }
    }

    #[test]
    fn spans_track_columns_and_newlines() {
        /// Shorthand for a span between two line/col pairs.
        fn span(start: (usize, usize), end: (usize, usize)) -> Span {
            Span::from(
                Location {
                    line: start.0,
                    col: start.1,
                },
                Location {
                    line: end.0,
                    col: end.1,
                },
            )
        }

        let LexOutput { tokens, errors } = tokenize("ab <=\n-");
        assert_eq!(errors, vec![]);
        // Columns are 0-based; a span ends one past its last character.
        assert_eq!(tokens[0].span, span((1, 0), (1, 2))); // ab
        assert_eq!(tokens[1].span, span((1, 3), (1, 5))); // <=
        // A newline restarts the column counter.
        assert_eq!(tokens[2].span, span((2, 0), (2, 1))); // -
        assert_eq!(tokens[3].token_type, EndOfInput);
        assert_eq!(tokens[3].span, span((2, 1), (2, 1)));
    }

    #[test]
    fn error_messages_carry_their_line() {
        let LexOutput { tokens: _, errors } = tokenize("(\n@");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "[line 2] Error: Unexpected character."
        );
    }
}
